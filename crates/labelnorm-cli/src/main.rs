mod run;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use labelnorm_core::Vocabulary;
use labelnorm_pipeline::LabelNormalizer;
use tracing_subscriber::EnvFilter;

use crate::run::ExportOptions;

#[derive(Debug, Parser)]
#[command(name = "labelnorm")]
#[command(about = "Normalize retail product labels into BRAND PRODUCT QUANTITY form")]
struct Cli {
    /// Vocabulary YAML with `brands` and `units` lists (overrides LABELNORM_VOCABULARY_PATH)
    #[arg(long, global = true)]
    vocabulary: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize every label in a text file and export TSV and XLSX results
    Run {
        /// Text file with one label per line
        input: PathBuf,

        /// Base name for the exported files (overrides LABELNORM_OUTPUT_STEM)
        #[arg(long)]
        output_stem: Option<String>,

        /// Skip the spreadsheet export
        #[arg(long)]
        no_xlsx: bool,
    },
    /// Normalize labels given on the command line and print the results
    Normalize {
        #[arg(required = true)]
        labels: Vec<String>,

        /// Print full records as JSON instead of one line per label
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in sample labels through the export path
    Demo {
        #[arg(long)]
        output_stem: Option<String>,

        #[arg(long)]
        no_xlsx: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let config = labelnorm_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(env = %config.env, "configuration loaded");

    let vocabulary_path = cli.vocabulary.as_deref().or(config.vocabulary_path.as_deref());
    let vocabulary = load_vocabulary(vocabulary_path)?;
    let normalizer = LabelNormalizer::new(&vocabulary).context("failed to build label pipeline")?;

    match cli.command {
        Some(Commands::Run {
            input,
            output_stem,
            no_xlsx,
        }) => {
            let options = ExportOptions {
                stem: output_stem.unwrap_or_else(|| config.output_stem.clone()),
                xlsx: !no_xlsx,
            };
            let labels = match labelnorm_export::read_labels(&input) {
                Ok(labels) => labels,
                Err(e) => {
                    tracing::error!(error = %e, "could not read labels");
                    Vec::new()
                }
            };
            run::process_labels(&normalizer, &labels, &options, config.preview_count);
        }
        Some(Commands::Normalize { labels, json }) => {
            run::print_normalized(&normalizer, &labels, json)?;
        }
        Some(Commands::Demo {
            output_stem,
            no_xlsx,
        }) => {
            let options = ExportOptions {
                stem: output_stem.unwrap_or_else(|| "sample_labels".to_string()),
                xlsx: !no_xlsx,
            };
            run::process_labels(
                &normalizer,
                run::SAMPLE_LABELS,
                &options,
                config.preview_count,
            );
        }
        None => println!("labelnorm: try `labelnorm run <FILE>` or `labelnorm --help`"),
    }

    Ok(())
}

fn load_vocabulary(path: Option<&Path>) -> anyhow::Result<Vocabulary> {
    match path {
        Some(path) => {
            let vocabulary = labelnorm_core::load_vocabulary(path)
                .with_context(|| format!("failed to load vocabulary from {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                brands = vocabulary.brands.len(),
                units = vocabulary.units.len(),
                "loaded vocabulary"
            );
            Ok(vocabulary)
        }
        None => Ok(Vocabulary::default()),
    }
}
