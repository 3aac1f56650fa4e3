//! System boundaries drawn as dashed clusters.

use c4viz_dot::{Attrs, Cluster};
use tracing::debug;

use crate::label::escape_markup;
use crate::theme::Theme;

/// A named region grouping the elements of one system.
///
/// Unlike elements, the title is plain escaped text with no category line.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemBoundary {
    name: String,
    overrides: Attrs,
}

impl SystemBoundary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
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

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Graph attributes for the cluster, overrides last.
    pub fn attributes(&self, theme: &Theme) -> Attrs {
        let mut attrs = Attrs::from([
            ("label", escape_markup(&self.name).into_owned()),
            ("bgcolor", theme.colors.boundary_background.clone()),
            ("margin", theme.sizes.boundary_margin.to_string()),
            ("style", "dashed".to_string()),
        ]);
        attrs.merge(&self.overrides);
        attrs
    }

    pub fn build(self) -> Cluster {
        self.build_with(&Theme::default())
    }

    pub fn build_with(self, theme: &Theme) -> Cluster {
        let cluster = Cluster::new(self.name.as_str(), self.attributes(theme));
        debug!(name = %self.name, id = cluster.id(), "built system boundary");
        cluster
    }
}

pub fn system_boundary(name: impl Into<String>) -> SystemBoundary {
    SystemBoundary::new(name)
}
