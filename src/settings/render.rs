// dmglayout/src/settings/render.rs
// Settings file output: dmgbuild Python modules and JSON.
use crate::error::Result;
use crate::settings::layout::Settings;
use crate::settings::types::{Point, WindowRect};
use crate::utils::{display_name, path_to_str, write_atomic};
use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

/// On-disk form of a settings file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsFormat {
    /// A Python module of `name = literal` assignments, read by `dmgbuild -s`.
    Python,
    /// A JSON object keyed by the same names. An interchange form for
    /// tools; dmgbuild's own `.json` loader expects a different schema.
    Json,
}

impl SettingsFormat {
    /// Whether `dmgbuild -s` can build an image from a file in this format.
    pub fn is_builder_readable(self) -> bool {
        matches!(self, SettingsFormat::Python)
    }

    /// `.json` files get JSON, anything else a Python module.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SettingsFormat::Json,
            _ => SettingsFormat::Python,
        }
    }
}

impl FromStr for SettingsFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "python" | "py" => Ok(SettingsFormat::Python),
            "json" => Ok(SettingsFormat::Json),
            other => Err(format!("unknown settings format {:?}", other)),
        }
    }
}

fn py_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn py_path(path: &Path) -> Result<String> {
    Ok(py_str(path_to_str(path)?))
}

fn py_bool(b: bool) -> String {
    let literal = if b { "True" } else { "False" };
    literal.to_string()
}

fn py_point(p: Point) -> String {
    format!("({}, {})", p.x, p.y)
}

fn py_rect(r: WindowRect) -> String {
    format!(
        "(({}, {}), ({}, {}))",
        r.origin.x, r.origin.y, r.size.width, r.size.height
    )
}

/// `defines.get(key, fallback)`: the builder's `-D key=value` wins over the
/// value resolved here.
fn py_define(key: &str, fallback: &str) -> String {
    format!("defines.get({}, {})", py_str(key), py_str(fallback))
}

fn py_list(items: impl Iterator<Item = Result<String>>) -> Result<String> {
    let items = items.collect::<Result<Vec<_>>>()?;
    Ok(format!("[{}]", items.join(", ")))
}

fn py_dict<V>(
    entries: impl Iterator<Item = (String, V)>,
    value: impl Fn(V) -> Result<String>,
) -> Result<String> {
    let mut parts = Vec::new();
    for (k, v) in entries {
        parts.push(format!("{}: {}", k, value(v)?));
    }
    Ok(format!("{{{}}}", parts.join(", ")))
}

impl Settings {
    /// Key/expression pairs in rendering order. Absent optional keys are left
    /// out so the builder applies its own defaults.
    ///
    /// `application`, `format` and `size` read the builder's defines with
    /// the resolved value as fallback, and `appname` is derived from
    /// `application` when it is run. The application entry in `files` and
    /// its icon location refer to those names, so `dmgbuild -D app=...`
    /// repackages a different bundle with the same layout.
    pub fn python_assignments(&self) -> Result<Vec<(&'static str, String)>> {
        let derived_appname = self.appname == display_name(&self.application);
        let appname = if derived_appname {
            "os.path.basename(application.rstrip('/')) or application".to_string()
        } else {
            py_str(&self.appname)
        };

        let mut out = vec![
            ("application", py_define("app", path_to_str(&self.application)?)),
            ("appname", appname),
            ("format", py_define("format", self.format.as_str())),
        ];
        if let Some(size) = &self.size {
            out.push(("size", py_define("size", size)));
        }
        out.push((
            "files",
            py_list(self.files.iter().map(|f| {
                if *f == self.application {
                    Ok("application".to_string())
                } else {
                    py_path(f)
                }
            }))?,
        ));
        out.push((
            "symlinks",
            py_dict(
                self.symlinks.iter().map(|(k, v)| (py_str(k), v)),
                |target| py_path(target),
            )?,
        ));
        out.push((
            "icon_locations",
            py_dict(
                self.icon_locations.iter().map(|(k, v)| {
                    let key = if derived_appname && *k == self.appname {
                        "appname".to_string()
                    } else {
                        py_str(k)
                    };
                    (key, *v)
                }),
                |p| Ok(py_point(p)),
            )?,
        ));
        if let Some(background) = &self.background {
            out.push(("background", py_path(background)?));
        }
        out.push(("show_status_bar", py_bool(self.show_status_bar)));
        out.push(("show_tab_view", py_bool(self.show_tab_view)));
        out.push(("show_toolbar", py_bool(self.show_toolbar)));
        out.push(("show_pathbar", py_bool(self.show_pathbar)));
        out.push(("show_sidebar", py_bool(self.show_sidebar)));
        if let Some(width) = self.sidebar_width {
            out.push(("sidebar_width", width.to_string()));
        }
        out.push(("default_view", py_str(self.default_view.as_str())));
        out.push(("window_rect", py_rect(self.window_rect)));
        if let Some(icon) = &self.icon {
            out.push(("icon", py_path(icon)?));
        }
        if let Some(badge) = &self.badge_icon {
            out.push(("badge_icon", py_path(badge)?));
        }
        out.push(("show_icon_preview", py_bool(self.show_icon_preview)));
        out.push((
            "arrange_by",
            self.arrange_by
                .map(|a| py_str(a.as_str()))
                .unwrap_or_else(|| "None".to_string()),
        ));
        out.push(("grid_offset", py_point(self.grid_offset)));
        out.push(("grid_spacing", self.grid_spacing.to_string()));
        out.push(("scroll_position", py_point(self.scroll_position)));
        out.push(("label_pos", py_str(self.label_pos.as_str())));
        out.push(("text_size", self.text_size.to_string()));
        out.push(("icon_size", self.icon_size.to_string()));
        Ok(out)
    }

    /// Renders a settings module for `dmgbuild -s`. The module reads the
    /// `defines` dictionary dmgbuild provides while it runs.
    pub fn to_python(&self) -> Result<String> {
        let mut out = String::from(
            "# dmgbuild settings generated by dmglayout.\n\
             #\n\
             #    dmgbuild -s <this file> \"Volume Name\" Output.dmg\n\
             #    dmgbuild -s <this file> -D app=/path/to/My.app \"Volume Name\" Output.dmg\n\n\
             import os\n\n",
        );
        for (key, literal) in self.python_assignments()? {
            let _ = writeln!(out, "{} = {}", key, literal);
        }
        Ok(out)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn render(&self, format: SettingsFormat) -> Result<String> {
        match format {
            SettingsFormat::Python => self.to_python(),
            SettingsFormat::Json => self.to_json(),
        }
    }
}

/// Renders `settings` and writes it to `path`, replacing any existing file.
pub fn write_settings_file(settings: &Settings, path: &Path, format: SettingsFormat) -> Result<()> {
    let contents = settings.render(format)?;
    write_atomic(path, contents.as_bytes())?;
    tracing::info!("Wrote {:?} settings to {}", format, path.display());
    Ok(())
}
