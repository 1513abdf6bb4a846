// tests/integration.rs
use std::{fs, io};

use dmglayout::{Defines, Settings, SettingsFormat, prepare_image};
use tempfile::tempdir;

mod integration_tests;

#[test]
fn test_prepare_image() -> dmglayout::Result<()> {
    let temp_dir = tempdir()?;
    let settings_path = temp_dir.path().join("dmg_settings.py");
    let output = temp_dir.path().join("Foo.dmg");

    let defines = Defines::parse(["app=/tmp/Foo.app", "format=UDRO"])?;
    let invocation = prepare_image(
        &defines,
        &settings_path,
        SettingsFormat::Python,
        "Foo Installer",
        &output,
    )?
    .expect("Python settings are readable by the builder");

    assert!(settings_path.exists());
    let py = fs::read_to_string(&settings_path)?;
    assert!(py.contains("application = defines.get('app', '/tmp/Foo.app')\n"));
    assert!(py.contains("format = defines.get('format', 'UDRO')\n"));
    assert!(py.contains("files = [application]\n"));

    let args: Vec<_> = invocation
        .args()
        .into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    assert_eq!(args[0], "-s");
    assert_eq!(args[1], settings_path.to_string_lossy());
    assert_eq!(args[args.len() - 2], "Foo Installer");
    assert_eq!(args[args.len() - 1], output.to_string_lossy());

    Ok(())
}

#[test]
fn test_prepare_image_json_round_trip() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let settings_path = temp_dir.path().join("settings.json");

    let defines: Defines = [("app", "build/Release/Tool.app")].into_iter().collect();
    let invocation = prepare_image(
        &defines,
        &settings_path,
        SettingsFormat::Json,
        "Tool",
        &temp_dir.path().join("Tool.dmg"),
    )
    .map_err(io::Error::other)?;
    assert!(invocation.is_none(), "JSON settings must not yield a dmgbuild call");

    let json = fs::read_to_string(&settings_path)?;
    let parsed = Settings::from_json(&json).map_err(io::Error::other)?;
    assert_eq!(parsed, Settings::resolve(&defines));
    assert_eq!(parsed.appname, "Tool.app");

    Ok(())
}
