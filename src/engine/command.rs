//! Command-line parsing into typed commands.

use crate::error::{Result, TextBuddyError};

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every line with its 1-based number
    Display,
    /// Append the raw text after the command word
    Add(String),
    /// Delete the line at a 1-based position
    Delete(i64),
    /// Remove all lines
    Clear,
    /// Sort lines case-insensitively
    Sort,
    /// List lines containing a token, ignoring case
    Search(String),
    /// End the session
    Exit,
}

impl Command {
    /// Parse a raw command line.
    ///
    /// The command word is everything before the first space and is matched
    /// case-insensitively. The parameter is everything after that space,
    /// kept verbatim. Verbs that take no parameter ignore one if given.
    pub fn parse(command_line: &str) -> Result<Self> {
        let (word, parameter) = split_command_line(command_line);
        let verb = word.to_lowercase();

        match verb.as_str() {
            "display" => Ok(Command::Display),
            "add" => {
                let text = required_parameter(&verb, parameter, "missing text to add")?;
                Ok(Command::Add(text.to_string()))
            }
            "delete" => {
                let raw = required_parameter(&verb, parameter, "missing line number")?;
                let line = raw.trim().parse::<i64>().map_err(|_| TextBuddyError::InvalidParameter {
                    command: verb.clone(),
                    reason: format!("\"{}\" is not a valid line number", raw),
                })?;
                Ok(Command::Delete(line))
            }
            "clear" => Ok(Command::Clear),
            "sort" => Ok(Command::Sort),
            "search" => {
                let token = required_parameter(&verb, parameter, "missing search token")?;
                Ok(Command::Search(token.to_string()))
            }
            "exit" => Ok(Command::Exit),
            _ => Err(TextBuddyError::UnrecognizedCommand(verb)),
        }
    }

    /// The command word this command is invoked by.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Display => "display",
            Command::Add(_) => "add",
            Command::Delete(_) => "delete",
            Command::Clear => "clear",
            Command::Sort => "sort",
            Command::Search(_) => "search",
            Command::Exit => "exit",
        }
    }

    /// Check if this command changes the stored lines
    pub fn is_mutating(&self) -> bool {
        matches!(self, Command::Add(_) | Command::Delete(_) | Command::Clear | Command::Sort)
    }
}

/// Split a command line at the first space into word and parameter.
pub fn split_command_line(command_line: &str) -> (&str, Option<&str>) {
    match command_line.split_once(' ') {
        Some((word, parameter)) => (word, Some(parameter)),
        None => (command_line, None),
    }
}

fn required_parameter<'a>(verb: &str, parameter: Option<&'a str>, reason: &str) -> Result<&'a str> {
    parameter.ok_or_else(|| TextBuddyError::InvalidParameter {
        command: verb.to_string(),
        reason: reason.to_string(),
    })
}
