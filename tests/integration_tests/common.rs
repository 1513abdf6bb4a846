use std::{
    io::{self, Error},
    path::Path,
    process::Command,
};

/// Runs the `dmglayout` binary built for this test run.
pub fn run_dmglayout(cwd: &Path, args: &[&str]) -> io::Result<(String, String)> {
    let output = Command::new(env!("CARGO_BIN_EXE_dmglayout"))
        .current_dir(cwd)
        .args(args)
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    if output.status.success() {
        Ok((stdout, stderr))
    } else {
        Err(Error::other(format!(
            "dmglayout {:?} failed with exit code {:?}\nStdout: {}\nStderr: {}",
            args,
            output.status.code(),
            stdout,
            stderr
        )))
    }
}

/// Pulls the right-hand side of `key = ...` out of a generated settings module.
pub fn python_value<'a>(py: &'a str, key: &str) -> Option<&'a str> {
    let prefix = format!("{} = ", key);
    py.lines().find_map(|line| line.strip_prefix(prefix.as_str()))
}
