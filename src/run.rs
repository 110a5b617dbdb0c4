//! Orchestrator: drives the generation of every requested dataset.

use crate::domains;
use anyhow::Context;
use massa_core::DatasetSpec;
use massa_csv::CsvExporter;
use massa_generator::{sub_seed, RowGenerator};
use std::path::PathBuf;
use tracing::info;

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Shared output directory (created if missing).
    pub output_dir: PathBuf,
    /// Rows generated per dataset.
    pub row_count: u64,
    /// Base seed; `None` keeps the default non-reproducible behavior.
    pub seed: Option<u64>,
    /// Domain names to generate; empty means all of them.
    pub domains: Vec<String>,
}

/// Generate the selected datasets in the canonical order.
///
/// Each dataset gets its own generator; with a base seed, the dataset's
/// stable index derives its sub-seed, so a subset run produces the same
/// files a full run would.
pub fn run(options: &RunOptions) -> anyhow::Result<()> {
    let selected = select_specs(&options.domains)?;

    std::fs::create_dir_all(&options.output_dir).with_context(|| {
        format!(
            "falha ao criar o diretório de saída '{}'",
            options.output_dir.display()
        )
    })?;

    info!("Iniciando geração de dados CSV...");

    let exporter = CsvExporter::new(&options.output_dir);
    let mut total_rows = 0u64;

    for (domain_index, spec) in selected {
        let name = spec.name;
        let seed = options.seed.map(|base| sub_seed(base, domain_index as u64));

        let mut generator = RowGenerator::new(spec, seed)
            .with_context(|| format!("especificação inválida do domínio '{name}'"))?;

        let metrics = exporter
            .export(&mut generator, options.row_count)
            .with_context(|| format!("falha ao gerar o domínio '{name}'"))?;

        total_rows += metrics.rows_written;
    }

    info!(
        "Todos os arquivos CSV foram gerados com sucesso! ({} linhas em '{}')",
        total_rows,
        options.output_dir.display()
    );

    Ok(())
}

/// Resolve the requested domain names against the canonical list, keeping
/// each spec's stable index for seed derivation.
fn select_specs(requested: &[String]) -> anyhow::Result<Vec<(usize, DatasetSpec)>> {
    let all: Vec<(usize, DatasetSpec)> = domains::all().into_iter().enumerate().collect();

    if requested.is_empty() {
        return Ok(all);
    }

    let known: Vec<&str> = all.iter().map(|(_, spec)| spec.name).collect();
    for name in requested {
        if !known.contains(&name.as_str()) {
            anyhow::bail!(
                "domínio desconhecido '{name}'.\n\nDomínios disponíveis: {}",
                known.join(", ")
            );
        }
    }

    Ok(all
        .into_iter()
        .filter(|(_, spec)| requested.iter().any(|name| name == spec.name))
        .collect())
}
