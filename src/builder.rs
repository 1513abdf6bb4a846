// src/builder.rs
use crate::defines::Defines;
use crate::error::{Error, Result};
use crate::settings::{
    ArrangeBy, ImageFormat, LabelPosition, Point, Settings, Size, ViewMode, WindowRect,
};
use crate::utils::display_name;
use std::path::PathBuf;

/// Assembles a [`Settings`] record for layouts beyond the default
/// application + `Applications` link.
///
/// Starts from the resolved defaults for the given application, so the
/// application is already in the file list and has an icon location.
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    pub fn new(application: impl Into<PathBuf>) -> Self {
        let application = application.into();
        let defines: Defines = [("app", application.to_string_lossy().into_owned())]
            .into_iter()
            .collect();
        let mut settings = Settings::resolve(&defines);
        // Keep the caller's path as given, even if it is not UTF-8.
        settings.files = vec![application.clone()];
        settings.application = application;
        Self { settings }
    }

    /// Starts from settings that were already resolved, e.g. from defines.
    pub fn from_settings(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn format(mut self, format: impl Into<ImageFormat>) -> Self {
        self.settings.format = format.into();
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.settings.size = Some(size.into());
        self
    }

    /// Adds a file to the volume root. Fails if an entry with the same name
    /// is already there.
    pub fn add_file(mut self, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let name = display_name(&path);
        if self.settings.root_entries().contains(&name) {
            return Err(Error::DuplicateEntry(name));
        }
        self.settings.files.push(path);
        Ok(self)
    }

    /// Adds a symbolic link `name -> target` to the volume root.
    pub fn add_symlink(mut self, name: impl Into<String>, target: impl Into<PathBuf>) -> Result<Self> {
        let name = name.into();
        if self.settings.root_entries().contains(&name) {
            return Err(Error::DuplicateEntry(name));
        }
        self.settings.symlinks.insert(name, target.into());
        Ok(self)
    }

    pub fn icon_location(mut self, name: impl Into<String>, at: Point) -> Self {
        self.settings.icon_locations.insert(name.into(), at);
        self
    }

    pub fn window_rect(mut self, origin: Point, size: Size) -> Self {
        self.settings.window_rect = WindowRect::new(origin, size);
        self
    }

    pub fn background(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings.background = Some(path.into());
        self
    }

    pub fn icon(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings.icon = Some(path.into());
        self
    }

    pub fn badge_icon(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings.badge_icon = Some(path.into());
        self
    }

    pub fn show_status_bar(mut self, show: bool) -> Self {
        self.settings.show_status_bar = show;
        self
    }

    pub fn show_tab_view(mut self, show: bool) -> Self {
        self.settings.show_tab_view = show;
        self
    }

    pub fn show_toolbar(mut self, show: bool) -> Self {
        self.settings.show_toolbar = show;
        self
    }

    pub fn show_pathbar(mut self, show: bool) -> Self {
        self.settings.show_pathbar = show;
        self
    }

    /// Shows the sidebar, optionally at a fixed width.
    pub fn show_sidebar(mut self, show: bool, width: Option<u32>) -> Self {
        self.settings.show_sidebar = show;
        self.settings.sidebar_width = width;
        self
    }

    pub fn show_icon_preview(mut self, show: bool) -> Self {
        self.settings.show_icon_preview = show;
        self
    }

    pub fn default_view(mut self, view: ViewMode) -> Self {
        self.settings.default_view = view;
        self
    }

    pub fn arrange_by(mut self, arrange_by: Option<ArrangeBy>) -> Self {
        self.settings.arrange_by = arrange_by;
        self
    }

    pub fn grid(mut self, offset: Point, spacing: u32) -> Self {
        self.settings.grid_offset = offset;
        self.settings.grid_spacing = spacing;
        self
    }

    pub fn scroll_position(mut self, position: Point) -> Self {
        self.settings.scroll_position = position;
        self
    }

    pub fn label_pos(mut self, pos: LabelPosition) -> Self {
        self.settings.label_pos = pos;
        self
    }

    pub fn text_size(mut self, size: u32) -> Self {
        self.settings.text_size = size;
        self
    }

    pub fn icon_size(mut self, size: u32) -> Self {
        self.settings.icon_size = size;
        self
    }

    /// Finishes the record. Icon locations that name nothing in the volume
    /// root are logged, not rejected.
    pub fn build(self) -> Result<Settings> {
        for orphan in self.settings.validate()? {
            tracing::warn!("icon location {:?} names no file or symlink", orphan);
        }
        Ok(self.settings)
    }
}
