use std::{fs, io};

use dmglayout::{
    ArrangeBy, Point, Settings, SettingsBuilder, SettingsFormat, Size, ViewMode,
    write_settings_file,
};
use tempfile::tempdir;

use crate::integration_tests::common::python_value;

fn custom_layout() -> dmglayout::Result<Settings> {
    SettingsBuilder::new("dist/Editor.app")
        .add_file("docs/Read Me.rtf")?
        .icon_location("Read Me.rtf", Point::new(300, 280))
        .window_rect(Point::new(100, 100), Size::new(640, 480))
        .background("assets/background.tiff")
        .default_view(ViewMode::IconView)
        .arrange_by(Some(ArrangeBy::Name))
        .text_size(14)
        .icon_size(128)
        .build()
}

#[test]
fn test_python_settings_file() -> dmglayout::Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("dmg_settings.py");
    let settings = custom_layout()?;

    write_settings_file(&settings, &path, SettingsFormat::Python)?;

    let py = fs::read_to_string(&path)?;
    assert_eq!(
        python_value(&py, "files"),
        Some("[application, 'docs/Read Me.rtf']")
    );
    assert_eq!(
        python_value(&py, "window_rect"),
        Some("((100, 100), (640, 480))")
    );
    assert_eq!(python_value(&py, "background"), Some("'assets/background.tiff'"));
    assert_eq!(python_value(&py, "arrange_by"), Some("'name'"));
    assert_eq!(python_value(&py, "icon_size"), Some("128"));
    Ok(())
}

#[test]
fn test_json_settings_file_round_trip() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("layout.json");
    let settings = custom_layout().map_err(io::Error::other)?;

    write_settings_file(&settings, &path, SettingsFormat::from_path(&path))
        .map_err(io::Error::other)?;

    let parsed = Settings::from_json(&fs::read_to_string(&path)?).map_err(io::Error::other)?;
    assert_eq!(parsed, settings);
    Ok(())
}
