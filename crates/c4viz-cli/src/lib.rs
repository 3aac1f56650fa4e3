//! c4viz command-line interface.
//!
pub mod options;
pub mod output;

use std::path::Path;

use c4viz::{Attrs, Diagram, Element, Result, Theme};
use tracing::debug;

pub use options::{ElementOptions, ThemeOptions};

/// Load the theme at `path`, or the built-in defaults.
pub fn load_theme(path: Option<&Path>) -> Result<Theme> {
    match path {
        Some(path) => {
            let theme = Theme::from_path(path)?;
            debug!(path = %path.display(), "theme loaded");
            Ok(theme)
        }
        None => Ok(Theme::default()),
    }
}

/// Render a single element as a one-node DOT digraph.
pub fn run_element(opts: &ElementOptions) -> Result<String> {
    let theme = load_theme(opts.theme.as_deref())?;
    let overrides: Attrs = opts.attrs.iter().cloned().collect();

    let node = Element::new(opts.kind, opts.name.as_str())
        .technology(opts.technology.as_str())
        .description(opts.description.as_str())
        .external(opts.external)
        .attrs(&overrides)
        .build_with(&theme);

    let mut diagram = Diagram::new(opts.name.as_str()).direction(opts.direction);
    diagram.add_node(node);
    Ok(diagram.render())
}

/// Print the default theme, or validate a theme file and print it normalized.
pub fn run_theme(opts: &ThemeOptions) -> Result<String> {
    let theme = load_theme(opts.check.as_deref())?;
    theme.to_toml_string()
}
