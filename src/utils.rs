// dmglayout/src/utils.rs

use crate::error::{Error, Result};
use std::{
    io::Write,
    path::{Component, Path},
};
use tempfile::NamedTempFile;

/// Returns the name shown for `path` in the Finder window: its final
/// component. Paths without a final component (`/`, `..`) are returned as
/// written.
///
/// Unlike Python's `os.path.basename`, a trailing separator is ignored:
/// `Foo.app/` gives `Foo.app`, not an empty string. dmgbuild strips the
/// slash when copying the file, so this is the name that lands in the
/// volume root. Generated settings modules derive `appname` the same way.
pub fn display_name(path: &Path) -> String {
    match path.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        _ => path.to_string_lossy().into_owned(),
    }
}

/// Borrows `path` as UTF-8, which both settings formats require.
pub fn path_to_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| Error::NonUtf8Path(path.to_path_buf()))
}

/// Writes `contents` to `dest` through a temporary file in the same
/// directory, so a reader never sees a half-written settings file.
pub fn write_atomic(dest: &Path, contents: &[u8]) -> Result<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.flush()?;
    tmp.persist(dest).map_err(|e| Error::Io(e.error))?;
    tracing::debug!("Wrote {} bytes to {}", contents.len(), dest.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("MyApp.app")), "MyApp.app");
        assert_eq!(display_name(Path::new("/tmp/Foo.app")), "Foo.app");
        assert_eq!(display_name(Path::new("/tmp/Foo.app/")), "Foo.app");
        assert_eq!(display_name(Path::new("build/Release/My App.app")), "My App.app");
        assert_eq!(display_name(Path::new("/")), "/");
        assert_eq!(display_name(Path::new("..")), "..");
    }

    #[test]
    fn test_write_atomic_replaces_contents() -> Result<()> {
        let dir = tempdir()?;
        let dest = dir.path().join("settings.py");
        fs::write(&dest, b"stale")?;

        write_atomic(&dest, b"format = 'UDBZ'\n")?;

        assert_eq!(fs::read_to_string(&dest)?, "format = 'UDBZ'\n");
        // Only the destination remains; the temporary file was renamed over it.
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }
}
