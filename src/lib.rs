//! TextBuddy - a line-oriented text storage utility
//!
//! TextBuddy keeps a single text file as an ordered list of lines and lets
//! the user add, delete, list, clear, sort and search them from an
//! interactive prompt. The file is rewritten after every change.

pub mod engine;
pub mod error;
pub mod session;
pub mod store;

pub use engine::{Command, CommandEngine, EngineOptions};
pub use error::{Result, TextBuddyError};
pub use session::Session;
pub use store::LineStore;
