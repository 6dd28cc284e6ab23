//! Error types for a cleaning run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// I/O failures that abort a run. Each variant keeps the path it was working on.
#[derive(Error, Debug)]
pub enum CleanError {
    /// The input file could not be opened.
    #[error("Error opening file: {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },

    /// The input file was opened but a line could not be read.
    #[error("Error reading file: {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// The output file could not be created.
    #[error("Error creating output file: {path:?}: {source}")]
    Create { path: PathBuf, source: io::Error },

    /// Writing to or flushing the output file failed.
    #[error("Error writing output file: {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },

    /// Writing to standard output failed.
    #[error("Error writing to console: {0}")]
    Console(#[source] io::Error),
}
