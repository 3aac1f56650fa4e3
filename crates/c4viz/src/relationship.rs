//! Dashed edges between C4 elements.

use c4viz_dot::{Attrs, Edge};
use tracing::debug;

use crate::label::format_edge_label;
use crate::theme::Theme;

/// An edge with an optional wrapped description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relationship {
    label: String,
    overrides: Attrs,
}

impl Relationship {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            overrides: Attrs::new(),
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.set(key, value);
        self
    }

    pub fn attrs(mut self, overrides: &Attrs) -> Self {
        self.overrides.merge(overrides);
        self
    }

    /// Edge attributes. `label` is only present for a non-empty description
    /// (or when an override sets it).
    pub fn attributes(&self, theme: &Theme) -> Attrs {
        let mut attrs = Attrs::from([
            ("style", "dashed"),
            ("color", theme.colors.relationship.as_str()),
        ]);
        if !self.label.is_empty() {
            attrs.set_html("label", format_edge_label(&self.label, &theme.text));
        }
        attrs.merge(&self.overrides);
        attrs
    }

    pub fn build(self) -> Edge {
        self.build_with(&Theme::default())
    }

    pub fn build_with(self, theme: &Theme) -> Edge {
        let edge = Edge::new(self.attributes(theme));
        debug!(
            labelled = edge.label().is_some(),
            overrides = self.overrides.len(),
            "built relationship"
        );
        edge
    }
}

pub fn relationship(label: impl Into<String>) -> Relationship {
    Relationship::new(label)
}
