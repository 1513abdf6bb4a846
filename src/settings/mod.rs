// dmglayout/src/settings/mod.rs
pub mod layout;
pub mod render;
pub mod types;

pub use self::layout::{
    DEFAULT_APPLICATION, DEFAULT_FORMAT, RECOGNIZED_DEFINES, RECOGNIZED_KEYS, Settings,
};
pub use self::render::{SettingsFormat, write_settings_file};
pub use self::types::{ArrangeBy, ImageFormat, LabelPosition, Point, Size, ViewMode, WindowRect};
