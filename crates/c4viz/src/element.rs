//! Person, System, Container and Database nodes.

use c4viz_dot::{Attrs, Node};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::label::format_node_label;
use crate::theme::{ColorTheme, Theme};

/// The four C4 element kinds drawn as nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ElementKind {
    Person,
    System,
    Container,
    Database,
}

/// How one [`ElementKind`] is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementPolicy {
    pub shape: &'static str,
    pub style: &'static str,
    /// Emit `labelloc=c`.
    pub center_label: bool,
    /// `Kind: technology` category keys.
    pub uses_technology: bool,
    /// `External Kind` category keys and the external fill.
    pub has_external: bool,
    /// Shrink to the collapsed size when there is no description.
    pub collapses: bool,
}

impl ElementKind {
    pub fn policy(self) -> ElementPolicy {
        match self {
            Self::Person => ElementPolicy {
                shape: "rect",
                style: "rounded,filled",
                center_label: true,
                uses_technology: false,
                has_external: true,
                collapses: true,
            },
            Self::System => ElementPolicy {
                shape: "rect",
                style: "filled",
                center_label: true,
                uses_technology: false,
                has_external: true,
                collapses: true,
            },
            Self::Container => ElementPolicy {
                shape: "rect",
                style: "filled",
                center_label: true,
                uses_technology: true,
                has_external: false,
                collapses: false,
            },
            Self::Database => ElementPolicy {
                shape: "cylinder",
                style: "filled",
                center_label: false,
                uses_technology: true,
                has_external: false,
                collapses: false,
            },
        }
    }

    /// The bracketed tag shown under the element name.
    pub fn category_key(self, technology: &str, external: bool) -> String {
        let policy = self.policy();
        if policy.uses_technology && !technology.is_empty() {
            format!("{self}: {technology}")
        } else if policy.has_external && external {
            format!("External {self}")
        } else {
            self.to_string()
        }
    }

    pub fn fill_color(self, external: bool, colors: &ColorTheme) -> &str {
        let policy = self.policy();
        if !policy.has_external {
            &colors.container
        } else if external {
            &colors.external
        } else {
            &colors.internal
        }
    }
}

/// A C4 element waiting to be turned into a [`Node`].
///
/// Attributes given through [`Element::attr`] are applied last and always win
/// over the computed ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: ElementKind,
    name: String,
    technology: String,
    description: String,
    external: bool,
    overrides: Attrs,
}

impl Element {
    pub fn new(kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            technology: String::new(),
            description: String::new(),
            external: false,
            overrides: Attrs::new(),
        }
    }

    /// Only shown for containers and databases.
    pub fn technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = technology.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Only meaningful for systems and people.
    pub fn external(mut self, external: bool) -> Self {
        self.external = external;
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.set(key, value);
        self
    }

    pub fn attrs(mut self, overrides: &Attrs) -> Self {
        self.overrides.merge(overrides);
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> String {
        self.kind.category_key(&self.technology, self.external)
    }

    /// Computed attributes with the caller's overrides merged on top.
    pub fn attributes(&self, theme: &Theme) -> Attrs {
        let policy = self.kind.policy();
        let sizes = &theme.sizes;
        let (width, height) = if policy.collapses && self.description.is_empty() {
            (sizes.collapsed_width, sizes.collapsed_height)
        } else {
            (sizes.width, sizes.height)
        };

        let mut attrs = Attrs::new().with_html(
            "label",
            format_node_label(&self.name, &self.key(), &self.description, &theme.text),
        );
        if policy.center_label {
            attrs.set("labelloc", "c");
        }
        attrs
            .set("shape", policy.shape)
            .set("width", width.to_string())
            .set("height", height.to_string())
            .set("fixedsize", "true")
            .set("style", policy.style)
            .set("fillcolor", self.kind.fill_color(self.external, &theme.colors))
            .set("fontcolor", theme.colors.font.as_str())
            .merge(&self.overrides);
        attrs
    }

    pub fn build(self) -> Node {
        self.build_with(&Theme::default())
    }

    pub fn build_with(self, theme: &Theme) -> Node {
        let node = Node::new(self.attributes(theme));
        debug!(
            kind = %self.kind,
            name = %self.name,
            id = %node.id(),
            overrides = self.overrides.len(),
            "built element"
        );
        node
    }
}

pub fn person(name: impl Into<String>) -> Element {
    Element::new(ElementKind::Person, name)
}

pub fn system(name: impl Into<String>) -> Element {
    Element::new(ElementKind::System, name)
}

pub fn container(name: impl Into<String>) -> Element {
    Element::new(ElementKind::Container, name)
}

pub fn database(name: impl Into<String>) -> Element {
    Element::new(ElementKind::Database, name)
}
