//! An owned diagram that renders to DOT.

use std::path::Path;

use c4viz_error::{Error, Result};
use tracing::{debug, info};

use crate::dot::DotBuilder;
use crate::{Attrs, Cluster, Edge, Node, NodeId};

/// Layout direction, mapped to the Graphviz `rankdir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    TopBottom,
    BottomTop,
    #[default]
    LeftRight,
    RightLeft,
}

impl Direction {
    pub fn as_rankdir(&self) -> &'static str {
        match self {
            Self::TopBottom => "TB",
            Self::BottomTop => "BT",
            Self::LeftRight => "LR",
            Self::RightLeft => "RL",
        }
    }
}

/// A diagram under construction.
///
/// Nodes and clusters are moved in; edges refer to nodes by [`NodeId`].
/// Nothing is global: two diagrams can be built side by side.
#[derive(Debug, Clone)]
pub struct Diagram {
    name: String,
    graph_attrs: Attrs,
    node_attrs: Attrs,
    edge_attrs: Attrs,
    nodes: Vec<Node>,
    clusters: Vec<Cluster>,
    edges: Vec<(NodeId, NodeId, Edge)>,
}

impl Diagram {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let graph_attrs = Attrs::from([
            ("label", name.as_str()),
            ("rankdir", Direction::default().as_rankdir()),
            ("pad", "2.0"),
            ("splines", "ortho"),
            ("nodesep", "0.60"),
            ("ranksep", "0.75"),
            ("fontname", "Sans-Serif"),
            ("fontsize", "15"),
            ("fontcolor", "#2D3436"),
        ]);
        let node_attrs = Attrs::from([
            ("shape", "box"),
            ("style", "rounded"),
            ("fixedsize", "true"),
            ("width", "1.4"),
            ("height", "1.4"),
            ("labelloc", "b"),
            ("imagescale", "true"),
            ("fontname", "Sans-Serif"),
            ("fontsize", "13"),
            ("fontcolor", "#2D3436"),
        ]);
        let edge_attrs = Attrs::from([("color", "#7B8894")]);
        Self {
            name,
            graph_attrs,
            node_attrs,
            edge_attrs,
            nodes: Vec::new(),
            clusters: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.graph_attrs.set("rankdir", direction.as_rankdir());
        self
    }

    /// Override graph-level attributes.
    pub fn graph_attrs(mut self, attrs: &Attrs) -> Self {
        self.graph_attrs.merge(attrs);
        self
    }

    /// Override the default attributes applied to every node.
    pub fn node_attrs(mut self, attrs: &Attrs) -> Self {
        self.node_attrs.merge(attrs);
        self
    }

    /// Override the default attributes applied to every edge.
    pub fn edge_attrs(mut self, attrs: &Attrs) -> Self {
        self.edge_attrs.merge(attrs);
        self
    }

    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id().clone();
        self.nodes.push(node);
        id
    }

    pub fn add_cluster(&mut self, cluster: Cluster) -> &mut Self {
        self.clusters.push(cluster);
        self
    }

    /// Connect `from` to `to` with `edge`.
    pub fn connect(&mut self, from: &NodeId, to: &NodeId, edge: Edge) -> &mut Self {
        self.edges.push((from.clone(), to.clone(), edge));
        self
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Render the diagram as DOT text.
    pub fn render(&self) -> String {
        let mut dot = DotBuilder::new(&self.name);
        dot.attrs(&self.graph_attrs);
        dot.defaults("node", &self.node_attrs);
        dot.defaults("edge", &self.edge_attrs);
        dot.blank();

        for node in &self.nodes {
            dot.node(node.id().as_str(), node.attrs());
        }
        for cluster in &self.clusters {
            render_cluster(&mut dot, cluster);
        }
        for (from, to, edge) in &self.edges {
            dot.edge(from.as_str(), to.as_str(), edge.attrs());
        }

        debug!(
            diagram = %self.name,
            nodes = self.nodes.len(),
            clusters = self.clusters.len(),
            edges = self.edges.len(),
            "rendered diagram"
        );
        dot.build()
    }

    /// Render the diagram and write it to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.render()).map_err(|err| {
            Error::io_at(path.display().to_string(), err).with_operation("diagram::write_to")
        })?;
        info!(path = %path.display(), "diagram written");
        Ok(())
    }
}

fn render_cluster(dot: &mut DotBuilder, cluster: &Cluster) {
    dot.start_cluster(cluster.id(), cluster.attrs());
    for node in cluster.nodes() {
        dot.node(node.id().as_str(), node.attrs());
    }
    for child in cluster.clusters() {
        render_cluster(dot, child);
    }
    dot.end_cluster();
}
