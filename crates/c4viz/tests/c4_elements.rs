use c4viz::label::{description_lines, format_node_label};
use c4viz::{
    Diagram, Direction, Element, ElementKind, TextTheme, container, database, person,
    relationship, system, system_boundary,
};
use pretty_assertions::assert_eq;

fn body_of(label: &str) -> Vec<String> {
    let start = label
        .find("<font point-size=\"10\">")
        .expect("label has a body")
        + "<font point-size=\"10\">".len();
    let end = label.rfind("</font>").expect("body is closed");
    label[start..end].split("<br/>").map(str::to_string).collect()
}

#[test]
fn database_with_technology() {
    let db = database("Orders DB").technology("Postgres");
    assert_eq!(db.key(), "Database: Postgres");

    let node = db.build();
    assert_eq!(node.attr("shape"), Some("cylinder"));
    assert_eq!(node.attr("width"), Some("2.6"));
    assert_eq!(node.attr("height"), Some("1.6"));
    assert_eq!(node.attr("fixedsize"), Some("true"));
    assert!(node.label().unwrap().contains("[Database: Postgres]"));
}

#[test]
fn external_system_without_description_collapses() {
    let billing = system("Billing").external(true);
    assert_eq!(billing.key(), "External System");

    let node = billing.build();
    assert_eq!(node.attr("width"), Some("2"));
    assert_eq!(node.attr("height"), Some("1"));
    assert_eq!(node.attr("fillcolor"), Some("gray60"));
}

#[test]
fn person_with_description_keeps_full_size() {
    let node = person("Customer")
        .description("A customer of the bank")
        .build();
    assert_eq!(node.attr("width"), Some("2.6"));
    assert_eq!(node.attr("fillcolor"), Some("dodgerblue4"));
    assert!(node.label().unwrap().contains("[Person]"));
}

#[test]
fn container_fill_override() {
    let node = container("API").attr("fillcolor", "red").build();
    assert_eq!(node.attr("fillcolor"), Some("red"));
}

#[test]
fn external_flag_does_not_apply_to_containers() {
    let node = Element::new(ElementKind::Container, "Cache")
        .external(true)
        .build();
    assert_eq!(node.attr("fillcolor"), Some("dodgerblue3"));
    assert!(node.label().unwrap().contains("[Container]"));
}

#[test]
fn node_body_is_always_three_lines() {
    let long = "lorem ipsum dolor sit amet ".repeat(20);
    let inputs = [
        "",
        "Short",
        "Provides all of the Internet banking functionality to customers via their web browser.",
        long.as_str(),
    ];
    for input in inputs {
        let label = format_node_label("X", "System", input, &TextTheme::default());
        if input.is_empty() {
            assert!(!label.contains("point-size=\"10\""));
            assert_eq!(description_lines(input, &TextTheme::default()).len(), 3);
        } else {
            assert_eq!(body_of(&label).len(), 3, "{input:?}");
        }
    }
}

#[test]
fn short_description_then_two_blank_lines() {
    let node = system("Mainframe")
        .description("Stores core banking data")
        .build();
    assert_eq!(
        body_of(node.label().unwrap()),
        vec!["Stores core banking data", "", ""]
    );
}

#[test]
fn long_description_is_cut_with_placeholder() {
    let node = container("Web App")
        .description(
            "Delivers the static content and the Internet banking single page application \
             to customers, and also handles authentication, rate limiting and auditing.",
        )
        .build();
    let body = body_of(node.label().unwrap());
    assert_eq!(body.len(), 3);
    assert!(body[2].ends_with(" [...]"), "{body:?}");
    assert!(!node.label().unwrap().contains("auditing"));
}

#[test]
fn user_text_is_escaped_everywhere() {
    let node = container("<script>")
        .technology("C & \"C++\"")
        .description("Uses 'quotes' & <tags>")
        .build();
    let label = node.label().unwrap();
    assert!(label.contains("&lt;script&gt;"));
    assert!(label.contains("[Container: C &amp; &quot;C++&quot;]"));
    assert!(label.contains("Uses &#x27;quotes&#x27; &amp; &lt;tags&gt;"));
    assert!(!label.contains("<script>"));
    assert!(!label.contains("<tags>"));
}

#[test]
fn relationship_labels() {
    assert_eq!(relationship("").build().label(), None);

    let edge = relationship("Sends invoice data nightly via batch job").build();
    let label = edge.label().unwrap();
    let body = label
        .strip_prefix("<<font point-size=\"10\">")
        .and_then(|s| s.strip_suffix("</font>>"))
        .unwrap();
    let lines: Vec<&str> = body.split("<br/>").collect();
    assert!(lines.len() <= 3);
    assert!(lines.iter().all(|l| l.chars().count() <= 24));
}

#[test]
fn full_context_diagram_renders() {
    let mut diagram = Diagram::new("Internet Banking System").direction(Direction::TopBottom);

    let customer = diagram.add_node(
        person("Personal Banking Customer")
            .description("A customer of the bank, with personal bank accounts.")
            .build(),
    );

    let mut boundary = system_boundary("Internet Banking").build();
    let webapp = boundary.add_node(
        container("Web Application")
            .technology("Java and Spring MVC")
            .description("Delivers the static content and the Internet banking single page application.")
            .build(),
    );
    let db = boundary.add_node(
        database("Database")
            .technology("Oracle Database Schema")
            .description("Stores user registration information, hashed authentication credentials, access logs, etc.")
            .build(),
    );
    diagram.add_cluster(boundary);

    let email = diagram.add_node(
        system("E-mail System")
            .description("The internal Microsoft Exchange e-mail system.")
            .external(true)
            .build(),
    );

    diagram
        .connect(
            &customer,
            &webapp,
            relationship("Visits bigbank.com/ib using [HTTPS]").build(),
        )
        .connect(&webapp, &db, relationship("Reads from and writes to").build())
        .connect(&email, &customer, relationship("Sends e-mails to").build());

    let dot = diagram.render();
    assert!(dot.starts_with("digraph \"Internet Banking System\" {"));
    assert!(dot.contains("rankdir=\"TB\";"));
    assert!(dot.contains("label=\"Internet Banking\";"));
    assert!(dot.contains("style=\"dashed\";"));
    assert!(dot.contains("[External System]"));
    assert!(dot.contains(&format!("{customer} -> {webapp} [")));
    assert!(dot.contains(&format!("{email} -> {customer} [")));
    assert_eq!(dot.matches(" -> ").count(), 3);
    assert_eq!(diagram.edge_count(), 3);
}

#[test]
fn only_generated_labels_are_html() {
    let mut diagram = Diagram::new("<legacy>");
    let api = diagram.add_node(container("API").build());
    let db = diagram.add_node(database("DB").build());
    diagram.connect(&api, &db, relationship("Reads").build());

    let dot = diagram.render();
    assert!(dot.contains("  label=\"<legacy>\";\n"));
    assert!(dot.contains(&format!("{api} [label=<<font point-size=\"12\"><b>API</b>")));
    assert!(dot.contains("[label=<<font point-size=\"10\">Reads</font>>"));
}
