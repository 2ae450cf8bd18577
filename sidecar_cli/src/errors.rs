use std::io;
use std::path::PathBuf;

use thiserror::Error;

use sidecar::descriptor::{AssembleError, WriteError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Input file not found or not a regular file: {0}")]
    InputNotFound(PathBuf),

    #[error("Input file is not readable: {path}: {source}")]
    InputNotReadable { path: PathBuf, source: io::Error },

    #[error("Failed to assemble metadata record: {0}")]
    Assemble(#[from] AssembleError),

    #[error("Failed to write descriptor: {0}")]
    Write(#[from] WriteError),

    #[error("{failed} of {total} descriptors could not be generated")]
    BatchFailed { failed: usize, total: usize },

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}
