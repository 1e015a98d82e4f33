//! Feedback message templates.
//!
//! Failure messages are the display text of [`TextBuddyError`](crate::error::TextBuddyError);
//! this module holds the success and empty-state messages.

pub fn welcome(file: &str) -> String {
    format!("Welcome to TextBuddy. {} is ready for use", file)
}

pub fn file_empty(file: &str) -> String {
    format!("{} is empty", file)
}

pub fn added(file: &str, text: &str) -> String {
    format!("added to {}: \"{}\"", file, text)
}

pub fn deleted(file: &str, line: &str) -> String {
    format!("deleted from {}: \"{}\"", file, line)
}

pub fn cleared(file: &str) -> String {
    format!("all content deleted from {}", file)
}

pub fn sorted(file: &str) -> String {
    format!("all lines in file {} have been sorted", file)
}

pub fn search_found(token: &str, file: &str, matches: &[String]) -> String {
    format!(
        "{} line(s) were found with token \"{}\" in file {}\n{}",
        matches.len(),
        token,
        file,
        numbered(matches)
    )
}

pub fn search_not_found(token: &str, file: &str) -> String {
    format!("no line was found with token \"{}\" in file {}", token, file)
}

/// Prefix each line with its 1-based number, one per row.
pub fn numbered(lines: &[String]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}
