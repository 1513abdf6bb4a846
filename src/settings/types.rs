// dmglayout/src/settings/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A position in Finder window coordinates. Serialized as `[x, y]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Window extent in points. Serialized as `[width, height]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl From<Size> for (u32, u32) {
    fn from(s: Size) -> Self {
        (s.width, s.height)
    }
}

/// Finder window placement on mount: `((x, y), (width, height))`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(Point, Size)", into = "(Point, Size)")]
pub struct WindowRect {
    pub origin: Point,
    pub size: Size,
}

impl WindowRect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }
}

impl From<(Point, Size)> for WindowRect {
    fn from((origin, size): (Point, Size)) -> Self {
        Self { origin, size }
    }
}

impl From<WindowRect> for (Point, Size) {
    fn from(r: WindowRect) -> Self {
        (r.origin, r.size)
    }
}

/// Image format code handed to `hdiutil create -format`.
///
/// Codes the builder does not know are carried through unchanged in
/// `Other`; the builder reports them when it creates the image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageFormat {
    /// Read/write.
    Udrw,
    /// Read-only.
    Udro,
    /// ADC compressed.
    Udco,
    /// zlib compressed.
    Udzo,
    /// bzip2 compressed.
    Udbz,
    /// LZFSE compressed.
    Ulfo,
    /// LZMA compressed.
    Ulmo,
    /// Entire device.
    Ufbi,
    /// DVD/CD master.
    Udto,
    /// Sparse image.
    Udsp,
    /// Sparse bundle.
    Udsb,
    Other(String),
}

impl ImageFormat {
    pub fn as_str(&self) -> &str {
        match self {
            ImageFormat::Udrw => "UDRW",
            ImageFormat::Udro => "UDRO",
            ImageFormat::Udco => "UDCO",
            ImageFormat::Udzo => "UDZO",
            ImageFormat::Udbz => "UDBZ",
            ImageFormat::Ulfo => "ULFO",
            ImageFormat::Ulmo => "ULMO",
            ImageFormat::Ufbi => "UFBI",
            ImageFormat::Udto => "UDTO",
            ImageFormat::Udsp => "UDSP",
            ImageFormat::Udsb => "UDSB",
            ImageFormat::Other(code) => code,
        }
    }

    /// Whether this is one of the codes `hdiutil` documents.
    pub fn is_known(&self) -> bool {
        !matches!(self, ImageFormat::Other(_))
    }
}

impl From<&str> for ImageFormat {
    fn from(code: &str) -> Self {
        match code {
            "UDRW" => ImageFormat::Udrw,
            "UDRO" => ImageFormat::Udro,
            "UDCO" => ImageFormat::Udco,
            "UDZO" => ImageFormat::Udzo,
            "UDBZ" => ImageFormat::Udbz,
            "ULFO" => ImageFormat::Ulfo,
            "ULMO" => ImageFormat::Ulmo,
            "UFBI" => ImageFormat::Ufbi,
            "UDTO" => ImageFormat::Udto,
            "UDSP" => ImageFormat::Udsp,
            "UDSB" => ImageFormat::Udsb,
            other => ImageFormat::Other(other.to_string()),
        }
    }
}

impl From<String> for ImageFormat {
    fn from(code: String) -> Self {
        ImageFormat::from(code.as_str())
    }
}

impl From<ImageFormat> for String {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declares a closed string enum with its wire names, `as_str`, `Display`
/// and `FromStr`.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal,)+ }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(format!(
                        concat!("unknown ", stringify!($name), " {:?}"),
                        other
                    )),
                }
            }
        }
    };
}

string_enum! {
    /// Initial Finder view style.
    pub enum ViewMode {
        IconView => "icon-view",
        ListView => "list-view",
        ColumnView => "column-view",
        Coverflow => "coverflow",
    }
}

string_enum! {
    /// Sort key for icon arrangement. `None` in the settings leaves icons
    /// where `icon_locations` puts them.
    pub enum ArrangeBy {
        Name => "name",
        DateModified => "date-modified",
        DateCreated => "date-created",
        DateAdded => "date-added",
        DateLastOpened => "date-last-opened",
        Size => "size",
        Kind => "kind",
        Label => "label",
    }
}

string_enum! {
    /// Where icon labels sit relative to the icon.
    pub enum LabelPosition {
        Bottom => "bottom",
        Right => "right",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_codes() {
        assert_eq!(ImageFormat::from("UDBZ"), ImageFormat::Udbz);
        assert_eq!(ImageFormat::from("UDRO").to_string(), "UDRO");
        let odd = ImageFormat::from("udzo");
        assert_eq!(odd, ImageFormat::Other("udzo".to_string()));
        assert!(!odd.is_known());
        assert_eq!(String::from(odd), "udzo");
    }

    #[test]
    fn test_geometry_serializes_as_tuples() -> serde_json::Result<()> {
        let rect = WindowRect::new(Point::new(200, 120), Size::new(600, 360));
        assert_eq!(serde_json::to_string(&rect)?, "[[200,120],[600,360]]");
        let back: WindowRect = serde_json::from_str("[[200,120],[600,360]]")?;
        assert_eq!(back, rect);
        assert_eq!(serde_json::to_string(&Point::new(-5, 0))?, "[-5,0]");
        Ok(())
    }

    #[test]
    fn test_string_enums() -> serde_json::Result<()> {
        assert_eq!("icon-view".parse::<ViewMode>(), Ok(ViewMode::IconView));
        assert!("icons".parse::<ViewMode>().is_err());
        assert_eq!(serde_json::to_string(&ArrangeBy::DateLastOpened)?, "\"date-last-opened\"");
        assert_eq!(serde_json::from_str::<LabelPosition>("\"right\"")?, LabelPosition::Right);
        for mode in ViewMode::ALL {
            assert_eq!(mode.as_str().parse::<ViewMode>(), Ok(*mode));
        }
        Ok(())
    }
}
