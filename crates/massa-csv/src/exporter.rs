//! Dataset-to-CSV exporter.

use crate::error::ExportError;
use csv::Writer;
use massa_generator::RowGenerator;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Buffer size for CSV writing.
const WRITE_BUFFER_SIZE: usize = 8192;

/// UTF-8 byte-order mark, written so spreadsheet tools decode accented
/// Latin text correctly.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Metrics from one export.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl ExportMetrics {
    /// Rows per second over the whole export.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes datasets to CSV files in one shared output directory.
///
/// The directory must already exist; a missing directory fails the export
/// with the underlying IO error (callers decide whether to create it).
pub struct CsvExporter {
    output_dir: PathBuf,
    include_header: bool,
}

impl CsvExporter {
    /// Create an exporter targeting `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            include_header: true,
        }
    }

    /// Set whether to include the header row.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// The output directory this exporter writes into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Generate `count` rows and write them to the dataset's file.
    pub fn export(
        &self,
        generator: &mut RowGenerator,
        count: u64,
    ) -> Result<ExportMetrics, ExportError> {
        let start = Instant::now();
        let mut metrics = ExportMetrics::default();

        let spec = generator.spec();
        let output_path = self.output_dir.join(spec.file_name);
        info!(
            "Gerando '{}' com {} linhas",
            output_path.display(),
            count
        );

        let mut file = File::create(&output_path)?;
        file.write_all(UTF8_BOM)?;
        let buf_writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(buf_writer);

        if self.include_header {
            writer.write_record(generator.spec().column_names())?;
        }

        for _ in 0..count {
            let row = generator.next_row();
            let record: Vec<String> = row.values().map(|v| v.render()).collect();
            writer.write_record(&record)?;

            metrics.rows_written += 1;
            if metrics.rows_written % 10_000 == 0 {
                debug!("{} linhas escritas", metrics.rows_written);
            }
        }

        writer.flush()?;
        drop(writer);

        metrics.file_size_bytes = std::fs::metadata(&output_path)?.len();
        metrics.total_duration = start.elapsed();

        info!(
            "Arquivo '{}' gerado com {} linhas ({} bytes, {:.0} linhas/s)",
            output_path.display(),
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}
