//! CLI module for textbuddy - command-line arguments.

pub mod commands;

pub use commands::Cli;
