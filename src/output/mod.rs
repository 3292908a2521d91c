pub mod formatter;

pub use formatter::{format_html, format_markdown, format_plain, markdown_to_html};
