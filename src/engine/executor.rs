//! CommandEngine: dispatches parsed commands to the line store.

use log::{debug, info, warn};

use super::command::Command;
use super::feedback;
use crate::error::Result;
use crate::store::LineStore;

/// Tunable engine behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Trim leading and trailing whitespace from `add` text before storing it
    pub trim_added_lines: bool,
}

/// Executes commands against a single line store and produces feedback.
#[derive(Debug)]
pub struct CommandEngine {
    store: LineStore,
    options: EngineOptions,
}

impl CommandEngine {
    /// Create an engine with default options.
    pub fn new(store: LineStore) -> Self {
        Self::with_options(store, EngineOptions::default())
    }

    pub fn with_options(store: LineStore, options: EngineOptions) -> Self {
        Self { store, options }
    }

    pub fn store(&self) -> &LineStore {
        &self.store
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Parse and run one raw command line.
    ///
    /// Returns the feedback to show, or `None` when the command ends the
    /// session. Failures are reported as feedback and never end the session.
    pub fn execute(&self, command_line: &str) -> Option<String> {
        match Command::parse(command_line).and_then(|command| self.run(&command)) {
            Ok(feedback) => feedback,
            Err(e) => {
                warn!("Command {:?} failed: {}", command_line, e);
                Some(e.to_string())
            }
        }
    }

    /// Run a parsed command.
    pub fn run(&self, command: &Command) -> Result<Option<String>> {
        debug!("Dispatching {} command", command.name());
        let file = self.store.name();

        let message = match command {
            Command::Display => {
                let lines = self.store.load()?;
                if lines.is_empty() {
                    feedback::file_empty(file)
                } else {
                    feedback::numbered(&lines)
                }
            }
            Command::Add(text) => {
                let text = if self.options.trim_added_lines { text.trim() } else { text.as_str() };
                self.store.append(text)?;
                feedback::added(file, text)
            }
            Command::Delete(line) => {
                let removed = self.store.delete_at(*line)?;
                feedback::deleted(file, &removed)
            }
            Command::Clear => {
                self.store.clear()?;
                feedback::cleared(file)
            }
            Command::Sort => {
                self.store.sort()?;
                feedback::sorted(file)
            }
            Command::Search(token) => {
                let matches = self.store.search(token)?;
                if matches.is_empty() {
                    feedback::search_not_found(token, file)
                } else {
                    feedback::search_found(token, file, &matches)
                }
            }
            Command::Exit => return Ok(None),
        };

        if command.is_mutating() {
            info!("Applied {} command to {}", command.name(), file);
        }
        Ok(Some(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TextBuddyError;
    use tempfile::TempDir;

    fn create_test_engine() -> (CommandEngine, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = LineStore::open(temp_dir.path().join("mytestfile.txt")).unwrap();
        (CommandEngine::new(store), temp_dir)
    }

    fn exec(engine: &CommandEngine, command_line: &str) -> String {
        engine
            .execute(command_line)
            .unwrap_or_else(|| panic!("Expected feedback for {:?}", command_line))
    }

    #[test]
    fn test_display_empty() {
        let (engine, _temp) = create_test_engine();
        assert_eq!(exec(&engine, "display"), "mytestfile.txt is empty");
    }

    #[test]
    fn test_add_then_display() {
        let (engine, _temp) = create_test_engine();
        assert_eq!(
            exec(&engine, "add little brown fox"),
            "added to mytestfile.txt: \"little brown fox\""
        );
        assert_eq!(
            exec(&engine, "add jumped over the moon"),
            "added to mytestfile.txt: \"jumped over the moon\""
        );
        assert_eq!(exec(&engine, "display"), "1. little brown fox\n2. jumped over the moon");
    }

    #[test]
    fn test_add_keeps_whitespace_by_default() {
        let (engine, _temp) = create_test_engine();
        assert_eq!(exec(&engine, "add  padded "), "added to mytestfile.txt: \" padded \"");
        assert_eq!(engine.store().load().unwrap(), vec![" padded "]);
    }

    #[test]
    fn test_add_round_trips_carriage_return() {
        let (engine, _temp) = create_test_engine();
        assert_eq!(exec(&engine, "add x\r"), "added to mytestfile.txt: \"x\r\"");
        assert_eq!(engine.store().load().unwrap(), vec!["x\r"]);
    }

    #[test]
    fn test_add_to_non_utf8_file() {
        let (engine, _temp) = create_test_engine();
        std::fs::write(engine.store().path(), b"caf\xe9\n").unwrap();

        assert_eq!(exec(&engine, "add new"), "added to mytestfile.txt: \"new\"");
        assert_eq!(exec(&engine, "display"), "1. caf\u{FFFD}\n2. new");
    }

    #[test]
    fn test_add_trims_when_enabled() {
        let temp = TempDir::new().unwrap();
        let store = LineStore::open(temp.path().join("trim.txt")).unwrap();
        let engine = CommandEngine::with_options(
            store,
            EngineOptions {
                trim_added_lines: true,
            },
        );

        assert_eq!(exec(&engine, "add   padded  "), "added to trim.txt: \"padded\"");
        assert_eq!(engine.store().load().unwrap(), vec!["padded"]);
        assert!(engine.options().trim_added_lines);
    }

    #[test]
    fn test_delete_renumbers() {
        let (engine, _temp) = create_test_engine();
        exec(&engine, "add one");
        exec(&engine, "add two");
        exec(&engine, "add three");

        assert_eq!(exec(&engine, "delete 2"), "deleted from mytestfile.txt: \"two\"");
        assert_eq!(exec(&engine, "display"), "1. one\n2. three");
    }

    #[test]
    fn test_delete_out_of_range() {
        let (engine, _temp) = create_test_engine();
        exec(&engine, "add one");

        assert_eq!(
            exec(&engine, "delete 2"),
            "failed to delete from mytestfile.txt, line 2 cannot be found"
        );
        assert_eq!(
            exec(&engine, "delete 0"),
            "failed to delete from mytestfile.txt, line 0 cannot be found"
        );
        assert_eq!(exec(&engine, "display"), "1. one");
    }

    #[test]
    fn test_delete_non_numeric_does_not_mutate() {
        let (engine, _temp) = create_test_engine();
        exec(&engine, "add one");

        assert_eq!(
            exec(&engine, "delete first"),
            "invalid parameter for command \"delete\": \"first\" is not a valid line number"
        );
        assert_eq!(exec(&engine, "display"), "1. one");
    }

    #[test]
    fn test_clear() {
        let (engine, _temp) = create_test_engine();
        exec(&engine, "add one");
        exec(&engine, "add two");

        assert_eq!(exec(&engine, "clear"), "all content deleted from mytestfile.txt");
        assert_eq!(exec(&engine, "display"), "mytestfile.txt is empty");
    }

    #[test]
    fn test_sort() {
        let (engine, _temp) = create_test_engine();
        exec(&engine, "add banana");
        exec(&engine, "add Apple");
        exec(&engine, "add cherry");

        assert_eq!(exec(&engine, "sort"), "all lines in file mytestfile.txt have been sorted");
        assert_eq!(exec(&engine, "display"), "1. Apple\n2. banana\n3. cherry");
    }

    #[test]
    fn test_sort_empty() {
        let (engine, _temp) = create_test_engine();
        assert_eq!(
            exec(&engine, "sort"),
            "failed to sort lines in file mytestfile.txt, file is empty"
        );
    }

    #[test]
    fn test_search_found() {
        let (engine, _temp) = create_test_engine();
        exec(&engine, "add Hello World!");
        exec(&engine, "add Goodbye");
        exec(&engine, "add tell me");

        assert_eq!(
            exec(&engine, "search ell"),
            "2 line(s) were found with token \"ell\" in file mytestfile.txt\n1. Hello World!\n2. tell me"
        );
    }

    #[test]
    fn test_search_not_found() {
        let (engine, _temp) = create_test_engine();
        exec(&engine, "add Hello World!");

        assert_eq!(
            exec(&engine, "search bye"),
            "no line was found with token \"bye\" in file mytestfile.txt"
        );
    }

    #[test]
    fn test_unrecognized_command() {
        let (engine, _temp) = create_test_engine();
        assert_eq!(
            exec(&engine, "Undo"),
            "command \"undo\" is not recognized, please enter a valid command"
        );
    }

    #[test]
    fn test_exit_has_no_feedback() {
        let (engine, _temp) = create_test_engine();
        assert_eq!(engine.execute("exit"), None);
        assert_eq!(engine.run(&Command::Exit).unwrap(), None);
    }

    #[test]
    fn test_run_propagates_typed_errors() {
        let (engine, _temp) = create_test_engine();
        assert!(matches!(
            engine.run(&Command::Delete(1)),
            Err(TextBuddyError::NotFound { line: 1, .. })
        ));
        assert!(matches!(engine.run(&Command::Sort), Err(TextBuddyError::EmptyFile { .. })));
    }

    #[test]
    fn test_io_failure_is_reported_as_feedback() {
        let (engine, temp) = create_test_engine();
        // A directory in place of the backing file makes every read fail
        std::fs::remove_file(engine.store().path()).unwrap();
        std::fs::create_dir(temp.path().join("mytestfile.txt")).unwrap();

        let feedback = exec(&engine, "display");
        assert!(feedback.starts_with("exception encountered: "), "{}", feedback);
    }
}
