//! CSV file exporter for massa-dados.
//!
//! Writes one dataset per file: UTF-8 with a byte-order mark (spreadsheet
//! tools in pt-BR environments expect the signature), a header row in the
//! spec's column order, then one record per generated row.
//!
//! # Example
//!
//! ```ignore
//! use massa_csv::CsvExporter;
//! use massa_generator::RowGenerator;
//!
//! let mut generator = RowGenerator::new(spec, Some(42))?;
//! let exporter = CsvExporter::new("samples");
//! let metrics = exporter.export(&mut generator, 5000)?;
//! println!("{} linhas", metrics.rows_written);
//! ```

mod error;
mod exporter;

pub use error::ExportError;
pub use exporter::{CsvExporter, ExportMetrics};
