use std::path::PathBuf;
use thiserror::Error;

/// Validation failures caught before any output is written.
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("PDF-Datei nicht gefunden: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Datei ist keine PDF: {}", .0.display())]
    InvalidFormat(PathBuf),
}
