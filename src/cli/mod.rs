//! Command-line entry points.
//!
//! Every subcommand reads its inputs completely, runs the library conversion in memory and
//! writes its output only once the conversion has succeeded.

pub mod commands;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use crate::convert::{conll_to_tsv, rewrite_dialect, tsv_to_conll};
use crate::engine::{Config, ConversionConfig, OutputFormat, ValidationConfig, VerbPositionEngine};
use crate::input::{check_output_name, load_text, validate_paths, write_text};
use crate::quality::reconcile;
use crate::record::{emit_corpus, parse_token_blocks};
use commands::{CheckArgs, Commands, ConvertArgs, ReconcileArgs, Tsv2ConllArgs};

#[derive(Parser, Debug)]
#[command(
    name = "sorts",
    version,
    about = "Convert, reconcile and check word-order test-suite corpora."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Tsv2conll(args) => run_tsv2conll(&args),
            Commands::Conll2tsv(args) => run_conll2tsv(&args),
            Commands::Conll2conllu(args) => run_conll2conllu(&args),
            Commands::Reconcile(args) => run_reconcile(&args),
            Commands::Check(args) => run_check(&args),
        }
    }
}

fn read(path: &Path) -> Result<String> {
    load_text(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write(path: &Path, content: &str) -> Result<()> {
    write_text(path, content).with_context(|| format!("failed to write {}", path.display()))
}

fn run_tsv2conll(args: &Tsv2ConllArgs) -> Result<()> {
    let config = Config {
        conversion: ConversionConfig::from(args),
        ..Config::default()
    };
    let format = config.conversion.format;
    check_output_name(&args.output, format)?;

    let text = read(&args.input)?;
    let engine = VerbPositionEngine::for_language(config.conversion.language);
    let converted = tsv_to_conll(&text, &engine, format)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;
    write(&args.output, &converted)
}

fn run_conll2tsv(args: &ConvertArgs) -> Result<()> {
    let text = read(&args.input)?;
    let converted = conll_to_tsv(&text)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;
    write(&args.output, &converted)
}

fn run_conll2conllu(args: &ConvertArgs) -> Result<()> {
    let format = OutputFormat::Conllu;
    check_output_name(&args.output, format)?;

    let text = read(&args.input)?;
    write(&args.output, &rewrite_dialect(&text, format.dialect()))
}

fn run_reconcile(args: &ReconcileArgs) -> Result<()> {
    let original = parse_token_blocks(&read(&args.original)?);
    let fixes = parse_token_blocks(&read(&args.fixes)?);
    for issue in original.issues.iter().chain(&fixes.issues) {
        warn!(line = issue.line, raw = %issue.raw, "skipped malformed line");
    }

    let result = reconcile(&original.sentences, &fixes.sentences);
    info!(
        substituted = result.substituted,
        ambiguous = result.ambiguous.len(),
        "reconciliation finished"
    );
    write(&args.output, &emit_corpus(&result.sentences))
}

fn run_check(args: &CheckArgs) -> Result<()> {
    let config = ValidationConfig::from(args);
    let stdout = io::stdout();
    let summary = validate_paths(&args.paths, &config, &mut stdout.lock())
        .context("failed to write the report")?;
    if summary.files == 0 && summary.failed.is_empty() {
        warn!(extension = %config.extension, "no files to check");
    }

    info!(
        files = summary.files,
        sentences_with_findings = summary.reports,
        unreadable = summary.failed.len(),
        "check finished"
    );
    Ok(())
}
