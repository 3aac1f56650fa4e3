//! HTML-like label text for C4 nodes and edges.
//!
//! Node labels have a fixed shape: a bold title, an optional `[category]`
//! line, and a body that is always exactly `max_lines` lines tall. The fixed
//! height is what lets every box of one size render identically no matter how
//! long its description is.

use std::borrow::Cow;

use textwrap::core::display_width;
use textwrap::word_splitters::split_words;
use textwrap::{WordSeparator, WordSplitter};
use tracing::trace;

use crate::theme::TextTheme;

const TITLE_POINT_SIZE: u32 = 12;
const KEY_POINT_SIZE: u32 = 9;
const BODY_POINT_SIZE: u32 = 10;
const EDGE_POINT_SIZE: u32 = 10;

/// Escape text for embedding in a Graphviz HTML-like label.
pub fn escape_markup(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Greedily wrap `text` to `width` columns, keeping at most `max_lines`.
///
/// All whitespace, newlines included, counts as a plain space. Lines break on
/// spaces and after hyphens only. A word wider than `width` is cut, and its
/// first piece fills whatever room is left on the current line. When lines are
/// dropped the last kept line ends with `placeholder`, shortened word by word
/// until it fits. Blank input yields no lines. The result is not escaped.
pub fn wrap_lines(text: &str, width: usize, max_lines: usize, placeholder: &str) -> Vec<String> {
    let normalized: String = text
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    let normalized = normalized.trim();
    if normalized.is_empty() || max_lines == 0 {
        return Vec::new();
    }

    let mut lines = fill_lines(normalized, width.max(1));

    if lines.len() > max_lines {
        trace!(
            dropped = lines.len() - max_lines,
            width, "truncating wrapped text"
        );
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = with_placeholder(last, width, placeholder);
        }
    }
    lines
}

/// First-fit line filling over space-separated words split after hyphens.
fn fill_lines(text: &str, width: usize) -> Vec<String> {
    let splitter = WordSplitter::HyphenSplitter;
    let words = split_words(WordSeparator::AsciiSpace.find_words(text), &splitter);

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut used = 0;
    let mut gap = "";

    for word in words {
        let mut rest = word.word;
        while !rest.is_empty() {
            let sep = if line.is_empty() { "" } else { gap };
            let needed = used + display_width(sep) + display_width(rest);
            if needed <= width {
                line.push_str(sep);
                line.push_str(rest);
                used = needed;
                break;
            }

            if display_width(rest) > width {
                let room = width.saturating_sub(used + display_width(sep));
                let (mut head, mut tail) = split_at_width(rest, room);
                if head.is_empty() && line.is_empty() {
                    // a single character wider than the whole line
                    let first = rest.chars().next().map_or(0, char::len_utf8);
                    (head, tail) = rest.split_at(first);
                }
                if !head.is_empty() {
                    line.push_str(sep);
                    line.push_str(head);
                }
                rest = tail;
            }
            lines.push(std::mem::take(&mut line));
            used = 0;
        }
        gap = word.whitespace;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn split_at_width(text: &str, max: usize) -> (&str, &str) {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = display_width(&text[idx..idx + ch.len_utf8()]);
        if used + w > max {
            return text.split_at(idx);
        }
        used += w;
    }
    (text, "")
}

fn with_placeholder(line: &str, width: usize, placeholder: &str) -> String {
    let room = width.saturating_sub(display_width(placeholder));
    let mut kept = line.trim_end();
    while !kept.is_empty() {
        if display_width(kept) <= room {
            return format!("{kept}{placeholder}");
        }
        kept = match kept.rfind(' ') {
            Some(idx) => kept[..idx].trim_end(),
            None => "",
        };
    }
    placeholder.trim_start().to_string()
}

/// The escaped body lines of a node label, padded to exactly `max_lines`.
pub fn description_lines(description: &str, text: &TextTheme) -> Vec<String> {
    let mut lines: Vec<String> = wrap_lines(
        description,
        text.node_width,
        text.max_lines,
        &text.placeholder,
    )
    .iter()
    .map(|line| escape_markup(line).into_owned())
    .collect();
    lines.resize(text.max_lines, String::new());
    lines
}

/// Wrap a description into the fixed-height node body, joined by `<br/>`.
pub fn format_description(description: &str, text: &TextTheme) -> String {
    description_lines(description, text).join("<br/>")
}

/// Build the full node label. Empty `key` or `description` are left out.
pub fn format_node_label(name: &str, key: &str, description: &str, text: &TextTheme) -> String {
    let mut label = format!(
        "<<font point-size=\"{TITLE_POINT_SIZE}\"><b>{}</b></font><br/>",
        escape_markup(name)
    );
    if !key.is_empty() {
        label.push_str(&format!(
            "<font point-size=\"{KEY_POINT_SIZE}\">[{}]<br/></font>",
            escape_markup(key)
        ));
    }
    if !description.is_empty() {
        label.push_str(&format!(
            "<br/><font point-size=\"{BODY_POINT_SIZE}\">{}</font>",
            format_description(description, text)
        ));
    }
    label.push('>');
    label
}

/// Build an edge label, or an empty string when there is no description.
pub fn format_edge_label(description: &str, text: &TextTheme) -> String {
    if description.is_empty() {
        return String::new();
    }
    let body = wrap_lines(
        description,
        text.edge_width,
        text.max_lines,
        &text.placeholder,
    )
    .iter()
    .map(|line| escape_markup(line))
    .collect::<Vec<_>>()
    .join("<br/>");
    format!("<<font point-size=\"{EDGE_POINT_SIZE}\">{body}</font>>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text() -> TextTheme {
        TextTheme::default()
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape_markup(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
        assert!(matches!(escape_markup("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn short_description_is_padded_to_three_lines() {
        assert_eq!(
            description_lines("Handles payments", &text()),
            vec!["Handles payments", "", ""]
        );
        assert_eq!(
            format_description("Handles payments", &text()),
            "Handles payments<br/><br/>"
        );
    }

    #[test]
    fn empty_description_is_three_blank_lines() {
        assert_eq!(description_lines("", &text()), vec!["", "", ""]);
        assert_eq!(description_lines(" \t\n", &text()), vec!["", "", ""]);
    }

    #[test]
    fn newlines_are_treated_as_spaces() {
        assert_eq!(
            wrap_lines("one\ntwo\tthree", 40, 3, " [...]"),
            vec!["one two three"]
        );
    }

    #[test]
    fn wraps_at_forty_columns() {
        let lines = wrap_lines(
            "Allows customers to view information about their bank accounts, and make payments.",
            40,
            3,
            " [...]",
        );
        assert_eq!(
            lines,
            vec![
                "Allows customers to view information",
                "about their bank accounts, and make",
                "payments.",
            ]
        );
    }

    #[test]
    fn overflow_ends_with_placeholder() {
        let description = "word ".repeat(40);
        let lines = description_lines(&description, &text());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "word word word word word word word word");
        assert!(lines[2].ends_with(" [...]"));
        assert!(lines.iter().all(|l| display_width(l) <= 40));
    }

    #[test]
    fn placeholder_drops_words_until_it_fits() {
        let line = with_placeholder("aaaa bbbb cccc", 14, " [...]");
        assert_eq!(line, "aaaa [...]");
        assert_eq!(with_placeholder("abcdefghij", 8, " [...]"), "[...]");
    }

    #[test]
    fn long_words_are_broken() {
        let lines = wrap_lines(&"x".repeat(50), 24, 3, " [...]");
        assert_eq!(lines, vec!["x".repeat(24), "x".repeat(24), "xx".to_string()]);
    }

    #[test]
    fn long_word_fills_rest_of_line() {
        let lines = wrap_lines(&format!("a {}", "b".repeat(50)), 40, 3, " [...]");
        assert_eq!(lines, vec![format!("a {}", "b".repeat(38)), "b".repeat(12)]);
    }

    #[test]
    fn urls_are_not_split_at_slashes() {
        let lines = wrap_lines(
            "Calls https://billing.example.com/api/v2/invoices nightly",
            24,
            3,
            " [...]",
        );
        assert_eq!(
            lines,
            vec![
                "Calls https://billing.ex",
                "ample.com/api/v2/invoice",
                "s nightly",
            ]
        );
    }

    #[test]
    fn hyphenated_words_break_after_hyphen() {
        assert_eq!(
            wrap_lines("a well-known", 8, 3, " [...]"),
            vec!["a well-", "known"]
        );
    }

    #[test]
    fn placeholder_keeps_inner_spacing() {
        assert_eq!(
            with_placeholder("aa  bb  cccccccc", 14, " [...]"),
            "aa  bb [...]"
        );
        assert_eq!(wrap_lines("a  b", 40, 3, " [...]"), vec!["a  b"]);
    }

    #[test]
    fn padding_is_idempotent() {
        let once = description_lines("short", &text());
        let again = description_lines(&once.join(" "), &text());
        assert_eq!(once, again);
    }

    #[test]
    fn body_lines_are_escaped_separately() {
        let lines = description_lines("Reads <config> & writes \"state\"", &text());
        assert_eq!(lines[0], "Reads &lt;config&gt; &amp; writes &quot;state&quot;");
    }

    #[test]
    fn node_label_layout() {
        assert_eq!(
            format_node_label("API", "Container: Rust", "Serves JSON", &text()),
            "<<font point-size=\"12\"><b>API</b></font><br/>\
             <font point-size=\"9\">[Container: Rust]<br/></font>\
             <br/><font point-size=\"10\">Serves JSON<br/><br/></font>>"
        );
    }

    #[test]
    fn node_label_omits_empty_parts() {
        assert_eq!(
            format_node_label("Bob & Alice", "", "", &text()),
            "<<font point-size=\"12\"><b>Bob &amp; Alice</b></font><br/>>"
        );
    }

    #[test]
    fn edge_label_empty_for_empty_description() {
        assert_eq!(format_edge_label("", &text()), "");
    }

    #[test]
    fn edge_label_wraps_at_twenty_four_columns() {
        assert_eq!(
            format_edge_label("Sends invoice data nightly via batch job", &text()),
            "<<font point-size=\"10\">Sends invoice data<br/>nightly via batch job</font>>"
        );
    }

    #[test]
    fn edge_label_truncates_after_three_lines() {
        let label = format_edge_label(
            "Reads and writes customer records, balances, statements and audit trails",
            &text(),
        );
        let body = label
            .trim_start_matches("<<font point-size=\"10\">")
            .trim_end_matches("</font>>");
        let lines: Vec<&str> = body.split("<br/>").collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with(" [...]"));
        assert!(lines.iter().all(|l| l.chars().count() <= 24));
    }
}
