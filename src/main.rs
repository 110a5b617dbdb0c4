//! Command-line interface for massa-dados
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate all ten datasets with the defaults (5000 rows each, ./samples)
//! massa-dados gerar
//!
//! # Deterministic run into a custom directory
//! massa-dados gerar --output-dir /tmp/massa --row-count 1000 --seed 42
//!
//! # Only two domains
//! massa-dados gerar --domains ecommerce,fluxo-caixa
//!
//! # List the available domains and their output files
//! massa-dados listar
//! ```

use clap::{Args, Parser, Subcommand};
use massa_dados::{domains, RunOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "massa-dados")]
#[command(about = "Gerador de conjuntos de dados sintéticos de negócio (CSV)")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Gera os arquivos CSV dos domínios selecionados
    Gerar {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Lista os domínios disponíveis
    Listar,
}

/// Generation arguments shared by every domain.
#[derive(Args, Clone, Debug)]
struct GenerateArgs {
    /// Diretório de saída dos arquivos CSV
    #[arg(long, short = 'o', default_value = "samples")]
    output_dir: PathBuf,

    /// Número de linhas geradas por domínio
    #[arg(long, default_value = "5000")]
    row_count: u64,

    /// Semente aleatória para geração determinística (omitir = aleatório)
    #[arg(long)]
    seed: Option<u64>,

    /// Domínios específicos (separados por vírgula; vazio = todos)
    #[arg(long, value_delimiter = ',')]
    domains: Vec<String>,
}

impl From<GenerateArgs> for RunOptions {
    fn from(args: GenerateArgs) -> Self {
        Self {
            output_dir: args.output_dir,
            row_count: args.row_count,
            seed: args.seed,
            domains: args.domains,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Gerar { args } => massa_dados::run(&RunOptions::from(args)),
        Commands::Listar => {
            for spec in domains::all() {
                println!(
                    "{:<14} {:<34} {} colunas",
                    spec.name,
                    spec.file_name,
                    spec.fields.len()
                );
            }
            Ok(())
        }
    }
}
