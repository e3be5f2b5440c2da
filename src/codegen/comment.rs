//! Generated-header comments for Java artifacts

use chrono::Local;

/// Class-level javadoc with the configured author and a generation date.
pub fn class_comment(description: &str, author: &str) -> String {
    format!(
        "/**\n * {description}\n *\n * @author {author}\n * @since {date}\n */\n",
        date = Local::now().format("%Y/%m/%d")
    )
}

/// Single-line field comment; empty when the column has no comment.
pub fn field_comment(comment: Option<&str>) -> String {
    match comment {
        Some(text) if !text.is_empty() => format!("\t// {text}\n"),
        _ => String::new(),
    }
}
