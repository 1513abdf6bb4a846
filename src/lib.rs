//! Layout settings for macOS installer disk images.
//!
//! The image itself is made by `dmgbuild`; this crate resolves the settings
//! it reads (application, format, icon layout, window geometry) from
//! built-in defaults and `-D key=value` overrides, and writes them out.
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt};

mod builder;
mod defines;
mod error;
mod invocation;
pub mod launcher;
pub mod settings;
mod utils;

pub use crate::builder::SettingsBuilder;
pub use crate::defines::Defines;
pub use crate::error::{Error, Result};
pub use crate::invocation::{BuilderInvocation, DEFAULT_BUILDER};
pub use crate::settings::{
    ArrangeBy, ImageFormat, LabelPosition, Point, RECOGNIZED_DEFINES, RECOGNIZED_KEYS, Settings,
    SettingsFormat, Size, ViewMode, WindowRect, write_settings_file,
};
pub use crate::utils::display_name;

/// Installs the `tracing` subscriber used by the binaries, logging to
/// stderr. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// High-level function to resolve settings from `defines`, write them to
/// `settings_path` in `format`, and return the builder call that produces
/// `output`.
///
/// JSON settings are written but yield no builder call, since dmgbuild
/// cannot build from them.
pub fn prepare_image(
    defines: &Defines,
    settings_path: &Path,
    format: SettingsFormat,
    volume_name: &str,
    output: &Path,
) -> Result<Option<BuilderInvocation>> {
    tracing::info!("prepare_image: resolving settings for {:?}", volume_name);

    let settings = Settings::resolve(defines);
    for orphan in settings.validate()? {
        tracing::warn!("icon location {:?} names no file or symlink", orphan);
    }
    for unused in defines.unused(RECOGNIZED_DEFINES) {
        tracing::warn!("define {:?} is not read by the settings", unused);
    }
    if !settings.format.is_known() {
        tracing::warn!("format {} is not a known hdiutil format code", settings.format);
    }

    write_settings_file(&settings, settings_path, format)?;

    if !format.is_builder_readable() {
        tracing::warn!(
            "{} holds {:?} settings, which dmgbuild cannot read; write a Python settings file to build the image",
            settings_path.display(),
            format
        );
        return Ok(None);
    }

    let invocation =
        BuilderInvocation::new(settings_path, volume_name, output).with_defines(defines.clone());
    tracing::info!("prepare_image: settings ready for {}", invocation.program.display());
    Ok(Some(invocation))
}
