// dmglayout/src/invocation.rs
use crate::defines::Defines;
use regex::Regex;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;
use std::sync::LazyLock;

pub const DEFAULT_BUILDER: &str = "dmgbuild";

static SHELL_SAFE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_@%+=:,./-]+$").expect("shell-safe pattern is valid")
});

/// A call to the external image builder:
/// `dmgbuild -s <settings> [-D key=value]... <volume name> <output>`.
#[derive(Clone, Debug)]
pub struct BuilderInvocation {
    pub program: PathBuf,
    pub settings_path: PathBuf,
    pub volume_name: String,
    pub output: PathBuf,
    pub defines: Defines,
}

impl BuilderInvocation {
    pub fn new(
        settings_path: impl Into<PathBuf>,
        volume_name: impl Into<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: PathBuf::from(DEFAULT_BUILDER),
            settings_path: settings_path.into(),
            volume_name: volume_name.into(),
            output: output.into(),
            defines: Defines::new(),
        }
    }

    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_defines(mut self, defines: Defines) -> Self {
        self.defines = defines;
        self
    }

    /// Arguments after the program name.
    pub fn args(&self) -> Vec<OsString> {
        let mut args = vec![OsString::from("-s"), self.settings_path.clone().into()];
        args.extend(self.defines.to_args().into_iter().map(OsString::from));
        args.push(self.volume_name.clone().into());
        args.push(self.output.clone().into());
        args
    }

    /// The command, ready to spawn. Nothing is run here.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.args());
        command
    }

    /// The command line quoted for a POSIX shell.
    pub fn display(&self) -> String {
        std::iter::once(self.program.clone().into_os_string())
            .chain(self.args())
            .map(|arg| shell_quote(&arg.to_string_lossy()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn shell_quote(arg: &str) -> String {
    if SHELL_SAFE_RE.is_match(arg) {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
