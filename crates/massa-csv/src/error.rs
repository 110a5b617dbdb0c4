//! Error types for the CSV exporter.

use thiserror::Error;

/// Errors that can occur while exporting a dataset.
///
/// A missing output directory surfaces as `Io`; the exporter does not
/// create directories or clean up partial files.
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
