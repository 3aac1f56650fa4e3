//! DOT format utilities and the text writer.

use std::fmt::Write;

use crate::{AttrValue, Attrs};

/// Sanitize a string to be a valid DOT identifier.
/// Replaces any non-alphanumeric character with underscore.
pub fn sanitize_id(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Escape special characters for quoted DOT strings.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Format an attribute value for DOT output.
///
/// HTML-like values are emitted bare; text is always quoted, even when it
/// happens to look like markup.
pub fn format_value(value: &AttrValue) -> String {
    match value {
        AttrValue::Html(html) => html.clone(),
        AttrValue::Text(text) => format!("\"{}\"", escape_label(text)),
    }
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

fn write_attr_list(output: &mut String, attrs: &Attrs) {
    for (i, (key, value)) in attrs.entries().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        let _ = write!(output, "{}={}", key, format_value(value));
    }
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Create a new directed graph with the given name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph \"{}\" {{", escape_label(name));
        Self { output, indent: 1 }
    }

    /// Add every attribute in `attrs` as a graph attribute.
    pub fn attrs(&mut self, attrs: &Attrs) -> &mut Self {
        for (key, value) in attrs.entries() {
            write_indent(&mut self.output, self.indent);
            let _ = writeln!(self.output, "{}={};", key, format_value(value));
        }
        self
    }

    /// Add a default statement such as `node [...]` or `edge [...]`.
    pub fn defaults(&mut self, target: &str, attrs: &Attrs) -> &mut Self {
        if attrs.is_empty() {
            return self;
        }
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{target} [");
        write_attr_list(&mut self.output, attrs);
        self.output.push_str("];\n");
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add a node with attributes.
    pub fn node(&mut self, id: &str, attrs: &Attrs) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        self.output.push_str(id);
        if !attrs.is_empty() {
            self.output.push_str(" [");
            write_attr_list(&mut self.output, attrs);
            self.output.push(']');
        }
        self.output.push_str(";\n");
        self
    }

    /// Add an edge with attributes.
    pub fn edge(&mut self, from: &str, to: &str, attrs: &Attrs) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{from} -> {to}");
        if !attrs.is_empty() {
            self.output.push_str(" [");
            write_attr_list(&mut self.output, attrs);
            self.output.push(']');
        }
        self.output.push_str(";\n");
        self
    }

    /// Start a subgraph cluster. `id` must already carry the `cluster_` prefix.
    pub fn start_cluster(&mut self, id: &str, attrs: &Attrs) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "subgraph {id} {{");
        self.indent += 1;
        self.attrs(attrs)
    }

    /// End the current subgraph cluster.
    pub fn end_cluster(&mut self) -> &mut Self {
        self.indent = self.indent.saturating_sub(1);
        write_indent(&mut self.output, self.indent);
        self.output.push_str("}\n");
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}
