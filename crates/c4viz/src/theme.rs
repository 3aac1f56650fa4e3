//! Colors, sizes and wrapping parameters used by the builders.
//!
//! Every field has a default, so a theme file only needs the values it changes:
//!
//! ```toml
//! [colors]
//! internal = "darkgreen"
//!
//! [text]
//! placeholder = " ..."
//! ```

use std::fs;
use std::path::Path;

use c4viz_error::{Error, ErrorKind, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub colors: ColorTheme,
    pub sizes: SizeTheme,
    pub text: TextTheme,
}

/// Fill and font colors, as Graphviz color names or `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorTheme {
    /// Fill of internal systems and people.
    pub internal: String,
    /// Fill of external systems and people.
    pub external: String,
    /// Fill of containers and databases.
    pub container: String,
    pub font: String,
    pub relationship: String,
    pub boundary_background: String,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            internal: "dodgerblue4".to_string(),
            external: "gray60".to_string(),
            container: "dodgerblue3".to_string(),
            font: "white".to_string(),
            relationship: "gray60".to_string(),
            boundary_background: "white".to_string(),
        }
    }
}

/// Box dimensions in inches, boundary margin in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizeTheme {
    pub width: f64,
    pub height: f64,
    /// Used by systems and people that have no description.
    pub collapsed_width: f64,
    pub collapsed_height: f64,
    pub boundary_margin: u32,
}

impl Default for SizeTheme {
    fn default() -> Self {
        Self {
            width: 2.6,
            height: 1.6,
            collapsed_width: 2.0,
            collapsed_height: 1.0,
            boundary_margin: 16,
        }
    }
}

/// How descriptions are wrapped into labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextTheme {
    /// Columns per line inside node boxes.
    pub node_width: usize,
    /// Columns per line on edges.
    pub edge_width: usize,
    /// Node bodies are always padded to this many lines.
    pub max_lines: usize,
    /// Appended to the last kept line when a description is cut short.
    pub placeholder: String,
}

impl Default for TextTheme {
    fn default() -> Self {
        Self {
            node_width: 40,
            edge_width: 24,
            max_lines: 3,
            placeholder: " [...]".to_string(),
        }
    }
}

impl Theme {
    /// Parse a theme from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let theme: Theme = toml::from_str(text).map_err(|err| {
            Error::new(ErrorKind::DeserializationFailed, err.message().to_string())
                .with_operation("theme::from_toml_str")
                .set_source(err)
        })?;
        theme.validate()?;
        Ok(theme)
    }

    /// Read and parse a theme file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|err| Error::io_at(path.display().to_string(), err))?;
        Self::from_toml_str(&text).map_err(|err| {
            err.with_operation("theme::from_path")
                .with_context("path", path.display().to_string())
        })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| {
            Error::new(ErrorKind::SerializationFailed, err.to_string())
                .with_operation("theme::to_toml_string")
                .set_source(err)
        })
    }

    /// Reject values that would make labels or boxes degenerate.
    pub fn validate(&self) -> Result<()> {
        let invalid = |field: &str, why: &str| {
            Error::config_invalid(format!("{field} {why}"))
                .with_operation("theme::validate")
                .with_context("field", field.to_string())
        };

        if self.text.node_width == 0 {
            return Err(invalid("text.node_width", "must be at least 1"));
        }
        if self.text.edge_width == 0 {
            return Err(invalid("text.edge_width", "must be at least 1"));
        }
        if self.text.max_lines == 0 {
            return Err(invalid("text.max_lines", "must be at least 1"));
        }
        for (field, value) in [
            ("sizes.width", self.sizes.width),
            ("sizes.height", self.sizes.height),
            ("sizes.collapsed_width", self.sizes.collapsed_width),
            ("sizes.collapsed_height", self.sizes.collapsed_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, "must be a positive number"));
            }
        }
        Ok(())
    }
}
