// dmglayout/src/settings/layout.rs
use crate::defines::Defines;
use crate::error::{Error, Result};
use crate::settings::types::{
    ArrangeBy, ImageFormat, LabelPosition, Point, Size, ViewMode, WindowRect,
};
use crate::utils::display_name;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Bundle packaged when no `app` define is given.
pub const DEFAULT_APPLICATION: &str = "MyApp.app";
/// Format code used when no `format` define is given.
pub const DEFAULT_FORMAT: &str = "UDBZ";

/// Define keys read during resolution.
pub const RECOGNIZED_DEFINES: &[&str] = &["app", "format", "size"];

/// Every settings key the image builder reads from this record, in
/// rendering order.
pub const RECOGNIZED_KEYS: &[&str] = &[
    "application",
    "appname",
    "format",
    "size",
    "files",
    "symlinks",
    "icon_locations",
    "background",
    "show_status_bar",
    "show_tab_view",
    "show_toolbar",
    "show_pathbar",
    "show_sidebar",
    "sidebar_width",
    "default_view",
    "window_rect",
    "icon",
    "badge_icon",
    "show_icon_preview",
    "arrange_by",
    "grid_offset",
    "grid_spacing",
    "scroll_position",
    "label_pos",
    "text_size",
    "icon_size",
];

const APPLICATIONS_LINK: &str = "Applications";
const APPLICATIONS_TARGET: &str = "/Applications";
const APP_ICON_LOCATION: Point = Point::new(161, 150);
const APPLICATIONS_ICON_LOCATION: Point = Point::new(432, 150);
const WINDOW_RECT: WindowRect = WindowRect::new(Point::new(200, 120), Size::new(600, 360));

/// Layout of the installer image: what goes into the volume root and how
/// the Finder window presents it when the image is mounted.
///
/// Built once by [`Settings::resolve`] (or [`crate::SettingsBuilder`]) and
/// then handed to the image builder unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Bundle to package.
    pub application: PathBuf,
    /// Label shown for the bundle; the final component of `application`.
    pub appname: String,
    pub format: ImageFormat,
    /// Minimum volume size, e.g. `300M`. The builder sizes the volume
    /// itself when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Items copied into the volume root.
    pub files: Vec<PathBuf>,
    /// Links created in the volume root, name to target.
    pub symlinks: BTreeMap<String, PathBuf>,
    /// Icon position per item name in the volume root.
    pub icon_locations: BTreeMap<String, Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<PathBuf>,

    pub show_status_bar: bool,
    pub show_tab_view: bool,
    pub show_toolbar: bool,
    pub show_pathbar: bool,
    pub show_sidebar: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_width: Option<u32>,
    pub default_view: ViewMode,
    pub window_rect: WindowRect,

    /// Volume icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<PathBuf>,
    /// Icon composited onto the standard disk image icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_icon: Option<PathBuf>,

    pub show_icon_preview: bool,

    #[serde(default)]
    pub arrange_by: Option<ArrangeBy>,
    pub grid_offset: Point,
    pub grid_spacing: u32,
    pub scroll_position: Point,
    pub label_pos: LabelPosition,
    pub text_size: u32,
    pub icon_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(&Defines::new())
    }
}

impl Settings {
    /// Builds the settings from the built-in defaults, replacing
    /// `application`, `format` and `size` with the `app`, `format` and
    /// `size` defines when present. Never fails.
    pub fn resolve(defines: &Defines) -> Self {
        let application = PathBuf::from(defines.resolve("app", DEFAULT_APPLICATION));
        let appname = display_name(&application);
        let format = ImageFormat::from(defines.resolve("format", DEFAULT_FORMAT));
        let size = defines.get("size").map(str::to_string);

        tracing::debug!(
            "Resolved application {} ({}), format {}",
            application.display(),
            appname,
            format
        );

        let symlinks = BTreeMap::from([(
            APPLICATIONS_LINK.to_string(),
            PathBuf::from(APPLICATIONS_TARGET),
        )]);
        let icon_locations = BTreeMap::from([
            (appname.clone(), APP_ICON_LOCATION),
            (APPLICATIONS_LINK.to_string(), APPLICATIONS_ICON_LOCATION),
        ]);

        Self {
            files: vec![application.clone()],
            application,
            appname,
            format,
            size,
            symlinks,
            icon_locations,
            background: None,
            show_status_bar: false,
            show_tab_view: false,
            show_toolbar: false,
            show_pathbar: false,
            show_sidebar: false,
            sidebar_width: None,
            default_view: ViewMode::IconView,
            window_rect: WINDOW_RECT,
            icon: None,
            badge_icon: None,
            show_icon_preview: false,
            arrange_by: None,
            grid_offset: Point::new(0, 0),
            grid_spacing: 100,
            scroll_position: Point::new(0, 0),
            label_pos: LabelPosition::Bottom,
            text_size: 16,
            icon_size: 180,
        }
    }

    /// Names that appear in the volume root: file basenames, then symlink
    /// names.
    pub fn root_entries(&self) -> BTreeSet<String> {
        self.files
            .iter()
            .map(|f| display_name(f))
            .chain(self.symlinks.keys().cloned())
            .collect()
    }

    /// Checks the record before it is handed over.
    ///
    /// An empty file list is an error. Icon locations naming nothing in the
    /// volume root are returned rather than rejected; the image builder
    /// decides what to do with them.
    pub fn validate(&self) -> Result<Vec<&str>> {
        if self.files.is_empty() {
            return Err(Error::EmptyFileList);
        }
        let entries = self.root_entries();
        Ok(self
            .icon_locations
            .keys()
            .map(String::as_str)
            .filter(|name| !entries.contains(*name))
            .collect())
    }
}
