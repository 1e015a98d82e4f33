//! Storage layer for TextBuddy.
//!
//! A single plain-text file holds the stored lines, one per text line, each
//! terminated by `\n`. The file is re-read at the start of every operation and
//! rewritten after every mutation, so it is always the source of truth.
//!
//! # Example
//!
//! ```ignore
//! use textbuddy::store::LineStore;
//!
//! let store = LineStore::open("mytextfile.txt")?;
//! store.append("little brown fox")?;
//! store.append("jumped over the moon")?;
//!
//! let removed = store.delete_at(2)?;
//! assert_eq!(removed, "jumped over the moon");
//! assert_eq!(store.load()?, vec!["little brown fox"]);
//! ```

mod line_store;

pub use line_store::LineStore;
