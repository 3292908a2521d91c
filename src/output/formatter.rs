use pulldown_cmark::{html, CowStr, Event, Parser};

use crate::report::Report;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a report as a Markdown document
///
/// Format:
/// ```text
/// ## Report from:2024-03-08 to:2024-03-15
///
/// - Currently working on:
///     - repo1
///         - [Fix bug](https://example/pr/1)
/// ```
pub fn format_markdown(report: &Report) -> String {
    let mut out = format!(
        "## Report from:{} to:{}\n",
        report.window.since.format(DATE_FORMAT),
        report.window.until.format(DATE_FORMAT)
    );

    for section in &report.sections {
        out.push_str(&format!("\n- {}\n", section.category.label()));
        for entry in &section.repos {
            out.push_str(&format!("    - {}\n", entry.repo.name()));
            for link in &entry.links {
                out.push_str(&format!("        - {}\n", link));
            }
        }
    }

    out
}

/// Convert a Markdown document to HTML.
///
/// Raw HTML in the input (e.g. inside a PR title) is escaped rather than
/// passed through.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(CowStr::from(raw.into_string())),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Format a report as the HTML page served over HTTP
pub fn format_html(report: &Report) -> String {
    markdown_to_html(&format_markdown(report))
}

/// Format a report as indented plain text for the terminal
pub fn format_plain(report: &Report) -> String {
    let mut out = String::new();

    for section in &report.sections {
        // Trailing space after the label is part of the format
        out.push_str(&format!("- {} \n", section.category.label()));
        for entry in &section.repos {
            out.push_str(&format!("  - {}\n", entry.repo.name()));
            for link in &entry.links {
                out.push_str(&format!("    - {}\n", link));
            }
        }
    }

    out
}
