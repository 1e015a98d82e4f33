//! Command engine for TextBuddy.
//!
//! Turns a raw command line into a [`Command`], runs it against the
//! [`LineStore`](crate::store::LineStore) and formats the feedback string.
//!
//! | Command | Parameter | Effect |
//! |---------|-----------|--------|
//! | `display` | - | list lines numbered from 1 |
//! | `add` | text | append text as the last line |
//! | `delete` | line number | remove that line |
//! | `clear` | - | remove all lines |
//! | `sort` | - | sort lines ignoring case |
//! | `search` | token | list lines containing token, ignoring case |
//! | `exit` | - | end the session |

mod command;
mod executor;
pub mod feedback;

pub use command::{Command, split_command_line};
pub use executor::{CommandEngine, EngineOptions};
