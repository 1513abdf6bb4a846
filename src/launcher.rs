// dmglayout/src/launcher.rs
//! Bundle launcher: placed as the `.app`'s main executable, it hands off to
//! the real program kept under `Contents/Libraries`.

use crate::error::{Error, Result};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Target relative to the launcher's own directory (`Contents/MacOS`).
pub const DEFAULT_TARGET: &str = "../Libraries/main";

/// Joins the launcher's directory with `relative`. The result is not
/// normalized; the OS resolves `..` when it opens the file.
pub fn resolve_target(launcher_path: &Path, relative: &Path) -> PathBuf {
    let dir = match launcher_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    dir.join(relative)
}

/// Replaces the current process with the program at `relative`, resolved
/// against the running executable. argv[0] becomes the target path; `args`
/// are forwarded unchanged.
///
/// Only returns on failure.
pub fn launch<I>(relative: &Path, args: I) -> Result<()>
where
    I: IntoIterator<Item = OsString>,
{
    let launcher = env::current_exe()?;
    let target = resolve_target(&launcher, relative);
    tracing::debug!("Launching {}", target.display());

    let mut command = Command::new(&target);
    command.args(args);
    exec(command, &target)
}

#[cfg(unix)]
fn exec(mut command: Command, target: &Path) -> Result<()> {
    use std::os::unix::process::CommandExt;

    command.arg0(target);
    let source = command.exec();
    Err(Error::Launch {
        path: target.to_path_buf(),
        source,
    })
}

#[cfg(not(unix))]
fn exec(mut command: Command, target: &Path) -> Result<()> {
    let status = command.status().map_err(|source| Error::Launch {
        path: target.to_path_buf(),
        source,
    })?;
    std::process::exit(status.code().unwrap_or(1));
}
