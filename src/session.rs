//! Interactive read-execute-print loop.

use std::io::{BufRead, Write};

use log::info;

use crate::engine::{CommandEngine, feedback};
use crate::error::Result;

/// Prompt printed before each command by default.
pub const DEFAULT_PROMPT: &str = "command: ";

/// One interactive session over a command engine.
pub struct Session<'a> {
    engine: &'a CommandEngine,
    prompt: String,
}

impl<'a> Session<'a> {
    pub fn new(engine: &'a CommandEngine) -> Self {
        Self {
            engine,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Use a custom prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Print the welcome message naming `file`.
    pub fn welcome<W: Write>(&self, file: &str, output: &mut W) -> Result<()> {
        writeln!(output, "{}", feedback::welcome(file))?;
        Ok(())
    }

    /// Read and execute commands until `exit` or end of input.
    ///
    /// Returns the number of commands executed, `exit` included.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, output: &mut W) -> Result<usize> {
        let mut executed = 0;
        let mut buf = Vec::new();

        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                info!("End of input, ending session");
                writeln!(output)?;
                break;
            }

            executed += 1;
            // Undecodable bytes become U+FFFD instead of ending the session
            let line = String::from_utf8_lossy(&buf);
            match self.engine.execute(strip_line_ending(&line)) {
                Some(message) => writeln!(output, "{}", message)?,
                None => {
                    info!("Exit requested, ending session");
                    break;
                }
            }
        }

        Ok(executed)
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
