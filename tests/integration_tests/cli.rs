use std::{fs, io, process::Command};

use dmglayout::Settings;
use tempfile::tempdir;

use crate::integration_tests::common::{python_value, run_dmglayout};

#[test]
fn test_cli_writes_default_settings() -> io::Result<()> {
    let temp_dir = tempdir()?;

    let (stdout, _) = run_dmglayout(temp_dir.path(), &["My App", "MyApp.dmg"])?;

    let py = fs::read_to_string(temp_dir.path().join("dmg_settings.py"))?;
    assert_eq!(
        python_value(&py, "application"),
        Some("defines.get('app', 'MyApp.app')")
    );
    assert_eq!(python_value(&py, "format"), Some("defines.get('format', 'UDBZ')"));
    assert_eq!(python_value(&py, "label_pos"), Some("'bottom'"));
    assert_eq!(python_value(&py, "size"), None);

    assert_eq!(
        stdout.trim_end(),
        "dmgbuild -s dmg_settings.py 'My App' MyApp.dmg"
    );
    Ok(())
}

#[test]
fn test_cli_applies_defines() -> io::Result<()> {
    let temp_dir = tempdir()?;

    let (stdout, stderr) = run_dmglayout(
        temp_dir.path(),
        &[
            "-D",
            "app=/tmp/Foo.app",
            "-D",
            "format=UDRO",
            "-D",
            "colour=blue",
            "Foo",
            "Foo.dmg",
        ],
    )?;

    let py = fs::read_to_string(temp_dir.path().join("dmg_settings.py"))?;
    assert_eq!(
        python_value(&py, "application"),
        Some("defines.get('app', '/tmp/Foo.app')")
    );
    assert_eq!(
        python_value(&py, "format"),
        Some("defines.get('format', 'UDRO')")
    );

    assert!(stdout.contains("-D app=/tmp/Foo.app -D colour=blue -D format=UDRO"));
    assert!(stderr.contains("colour"), "unused define not reported:\n{}", stderr);
    Ok(())
}

#[test]
fn test_cli_json_settings_print_no_builder_call() -> io::Result<()> {
    let temp_dir = tempdir()?;

    let (stdout, stderr) = run_dmglayout(
        temp_dir.path(),
        &["-D", "app=/tmp/Foo.app", "-s", "foo.json", "Foo", "Foo.dmg"],
    )?;

    let json = fs::read_to_string(temp_dir.path().join("foo.json"))?;
    let settings = Settings::from_json(&json).map_err(io::Error::other)?;
    assert_eq!(settings.appname, "Foo.app");

    assert!(stdout.trim().is_empty(), "unexpected builder call:\n{}", stdout);
    assert!(stderr.contains("dmgbuild cannot read"), "missing warning:\n{}", stderr);
    Ok(())
}

#[test]
fn test_cli_rejects_malformed_define() -> io::Result<()> {
    let temp_dir = tempdir()?;

    let output = Command::new(env!("CARGO_BIN_EXE_dmglayout"))
        .current_dir(temp_dir.path())
        .args(["-D", "not a define", "Vol", "out.dmg"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("dmg_settings.py").exists());
    Ok(())
}
