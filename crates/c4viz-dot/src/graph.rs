//! Node, edge and cluster values.

use std::fmt;

use uuid::Uuid;

use crate::Attrs;
use crate::dot::sanitize_id;

/// DOT identifier of a node added to a diagram.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    fn fresh() -> Self {
        Self(format!("n_{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single box in the diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    attrs: Attrs,
}

impl Node {
    /// Create a node with a fresh unique identifier.
    pub fn new(attrs: Attrs) -> Self {
        Self {
            id: NodeId::fresh(),
            attrs,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    pub fn label(&self) -> Option<&str> {
        self.attr("label")
    }
}

/// A connector between two nodes. Endpoints are chosen when it is added to a
/// [`crate::Diagram`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Edge {
    attrs: Attrs,
}

impl Edge {
    pub fn new(attrs: Attrs) -> Self {
        Self { attrs }
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    pub fn label(&self) -> Option<&str> {
        self.attr("label")
    }
}

/// A named grouping region rendered as a `subgraph cluster_*`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    id: String,
    name: String,
    attrs: Attrs,
    nodes: Vec<Node>,
    clusters: Vec<Cluster>,
}

impl Cluster {
    /// Create a cluster titled `name`. `graph_attrs` are layered over the
    /// cluster defaults, including the `label`.
    pub fn new(name: impl Into<String>, graph_attrs: Attrs) -> Self {
        let name = name.into();
        let id = format!(
            "cluster_{}_{}",
            sanitize_id(&name),
            Uuid::new_v4().simple()
        );
        let mut attrs = Attrs::from([
            ("label", name.as_str()),
            ("labeljust", "l"),
            ("pencolor", "#AEB6BF"),
            ("fontname", "Sans-Serif"),
            ("fontsize", "12"),
        ]);
        attrs.merge(&graph_attrs);
        Self {
            id,
            name,
            attrs,
            nodes: Vec::new(),
            clusters: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    /// Move `node` into this cluster and return its id for later connections.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id().clone();
        self.nodes.push(node);
        id
    }

    /// Nest `cluster` inside this one.
    pub fn add_cluster(&mut self, cluster: Cluster) -> &mut Self {
        self.clusters.push(cluster);
        self
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_are_unique_and_valid_dot_ids() {
        let a = Node::new(Attrs::new());
        let b = Node::new(Attrs::new());
        assert_ne!(a.id(), b.id());
        assert!(a.id().as_str().starts_with("n_"));
        assert!(
            a.id()
                .as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        );
    }

    #[test]
    fn cluster_attrs_override_defaults() {
        let cluster = Cluster::new(
            "Banking",
            Attrs::from([("label", "Internet Banking"), ("style", "dashed")]),
        );
        assert_eq!(cluster.name(), "Banking");
        assert_eq!(cluster.attr("label"), Some("Internet Banking"));
        assert_eq!(cluster.attr("style"), Some("dashed"));
        assert_eq!(cluster.attr("labeljust"), Some("l"));
        assert!(cluster.id().starts_with("cluster_Banking_"));
    }

    #[test]
    fn cluster_collects_children() {
        let mut outer = Cluster::new("outer", Attrs::new());
        let node = Node::new(Attrs::from([("label", "x")]));
        let id = outer.add_node(node);
        outer.add_cluster(Cluster::new("inner", Attrs::new()));

        assert_eq!(outer.nodes()[0].id(), &id);
        assert_eq!(outer.clusters()[0].name(), "inner");
    }
}
