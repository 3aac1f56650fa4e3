//! Command-line options for the c4viz subcommands.

use std::path::PathBuf;

use c4viz::{Direction, ElementKind};
use clap::Args;

/// Options for `c4viz element`.
#[derive(Args, Debug, Clone)]
pub struct ElementOptions {
    /// Element kind: person, system, container or database
    #[arg(long, value_name = "KIND")]
    pub kind: ElementKind,

    /// Element name shown as the bold title
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Technology tag (containers and databases)
    #[arg(long, value_name = "TECH", default_value = "")]
    pub technology: String,

    /// Free-text description wrapped into the box
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub description: String,

    /// Mark a system or person as external
    #[arg(long, default_value_t = false)]
    pub external: bool,

    /// Attribute override, applied after the computed style (repeatable)
    #[arg(
        long = "attr",
        value_name = "KEY=VALUE",
        value_parser = parse_attr,
        action = clap::ArgAction::Append
    )]
    pub attrs: Vec<(String, String)>,

    /// Layout direction: TB, BT, LR or RL
    #[arg(long, value_name = "DIR", default_value = "LR", value_parser = parse_direction)]
    pub direction: Direction,

    /// Theme file (TOML) to use instead of the defaults
    #[arg(long, value_name = "FILE")]
    pub theme: Option<PathBuf>,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ElementOptions {
    pub fn new(kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            technology: String::new(),
            description: String::new(),
            external: false,
            attrs: Vec::new(),
            direction: Direction::default(),
            theme: None,
            output: None,
        }
    }
}

/// Options for `c4viz theme`.
#[derive(Args, Debug, Clone, Default)]
pub struct ThemeOptions {
    /// Load and validate this theme file instead of printing the defaults
    #[arg(long, value_name = "FILE")]
    pub check: Option<PathBuf>,
}

/// Parse a `key=value` attribute override.
pub fn parse_attr(input: &str) -> Result<(String, String), String> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{input}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("attribute name is empty in '{input}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

pub fn parse_direction(input: &str) -> Result<Direction, String> {
    match input.to_ascii_uppercase().as_str() {
        "TB" => Ok(Direction::TopBottom),
        "BT" => Ok(Direction::BottomTop),
        "LR" => Ok(Direction::LeftRight),
        "RL" => Ok(Direction::RightLeft),
        _ => Err(format!("unknown direction '{input}', use TB, BT, LR or RL")),
    }
}
