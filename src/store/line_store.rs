//! LineStore implementation backed by a newline-delimited text file.

use crate::error::{Result, TextBuddyError};
use log::{debug, info};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// LineStore owns the backing file of a session and exposes its lines.
#[derive(Debug, Clone)]
pub struct LineStore {
    /// Path to the backing text file
    path: PathBuf,

    /// Final path component, used in feedback messages
    name: String,
}

impl LineStore {
    /// Open the store at `path`, creating an empty file if none exists.
    ///
    /// Existing content is left untouched.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        OpenOptions::new().create(true).append(true).open(&path)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        debug!("Opened line store at {}", path.display());
        Ok(Self { path, name })
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name of the backing file.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read every stored line, in order.
    ///
    /// A missing file reads as empty; it is created again on the next write.
    /// Invalid UTF-8 is decoded lossily rather than failing the read.
    pub fn load(&self) -> Result<Vec<String>> {
        let content = self.read_content()?;
        Ok(split_lines(&String::from_utf8_lossy(&content)))
    }

    /// Check whether the store holds no lines.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.load()?.is_empty())
    }

    /// Append `line` as the new last line.
    pub fn append(&self, line: &str) -> Result<()> {
        let content = self.read_content()?;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;

        // Content edited outside TextBuddy may lack the final newline
        if content.last().is_some_and(|&byte| byte != b'\n') {
            writeln!(file)?;
        }
        writeln!(file, "{}", line)?;

        info!("Appended line to {}", self.path.display());
        Ok(())
    }

    /// Remove the line at 1-based position `line_number` and return its text.
    pub fn delete_at(&self, line_number: i64) -> Result<String> {
        let mut lines = self.load()?;

        let index = match usize::try_from(line_number) {
            Ok(n) if (1..=lines.len()).contains(&n) => n - 1,
            _ => {
                return Err(TextBuddyError::NotFound {
                    file: self.name.clone(),
                    line: line_number,
                });
            }
        };

        let removed = lines.remove(index);
        self.rewrite(&lines)?;

        info!("Deleted line {} from {}", line_number, self.path.display());
        Ok(removed)
    }

    /// Remove every line.
    pub fn clear(&self) -> Result<()> {
        File::create(&self.path)?;
        info!("Cleared {}", self.path.display());
        Ok(())
    }

    /// Sort lines case-insensitively, keeping the relative order of lines
    /// that compare equal.
    pub fn sort(&self) -> Result<()> {
        let mut lines = self.load()?;
        if lines.is_empty() {
            return Err(TextBuddyError::EmptyFile {
                file: self.name.clone(),
            });
        }

        lines.sort_by_cached_key(|line| line.to_lowercase());
        self.rewrite(&lines)?;

        info!("Sorted {} lines in {}", lines.len(), self.path.display());
        Ok(())
    }

    /// Return the lines containing `token`, ignoring case, in stored order.
    pub fn search(&self, token: &str) -> Result<Vec<String>> {
        let needle = token.to_lowercase();
        let matches: Vec<String> = self
            .load()?
            .into_iter()
            .filter(|line| line.to_lowercase().contains(&needle))
            .collect();

        debug!("Search for {:?} matched {} lines", token, matches.len());
        Ok(matches)
    }

    fn read_content(&self) -> Result<Vec<u8>> {
        match fs::read(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Truncate the backing file and write `lines` back in order.
    fn rewrite(&self, lines: &[String]) -> Result<()> {
        let mut file = File::create(&self.path)?;
        for line in lines {
            writeln!(file, "{}", line)?;
        }
        file.flush()?;
        Ok(())
    }
}

/// Split on `\n` only, so a `\r` inside a stored line survives a reload.
fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    content
        .strip_suffix('\n')
        .unwrap_or(content)
        .split('\n')
        .map(str::to_string)
        .collect()
}
