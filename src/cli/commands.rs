use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::engine::{ConversionConfig, Language, OutputFormat, ValidationConfig};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a tabular (.tsv) file into CoNLL-X or CoNLL-U
    Tsv2conll(Tsv2ConllArgs),

    /// Convert a CoNLL file back into the tabular format
    Conll2tsv(ConvertArgs),

    /// Rewrite CoNLL-X metadata into CoNLL-U notation
    Conll2conllu(ConvertArgs),

    /// Replace sentences of an original corpus with their corrected versions
    Reconcile(ReconcileArgs),

    /// Check CoNLL files or directories for structural problems
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct Tsv2ConllArgs {
    pub input: PathBuf,
    pub output: PathBuf,

    /// Output flavour: conll (or x), conllu (or u)
    #[arg(long, default_value = "conll")]
    pub format: OutputFormat,

    /// Language of the test suite: de or nl
    #[arg(long, default_value = "de")]
    pub language: Language,
}

impl From<&Tsv2ConllArgs> for ConversionConfig {
    fn from(args: &Tsv2ConllArgs) -> Self {
        ConversionConfig {
            language: args.language,
            format: args.format,
        }
    }
}

#[derive(Args, Debug)]
pub struct ReconcileArgs {
    /// Corpus whose sentence order is kept
    pub original: PathBuf,

    /// Corrected sentences
    pub fixes: PathBuf,

    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Extension of the files picked up inside directories
    #[arg(long, default_value = "conll")]
    pub extension: String,
}

impl From<&CheckArgs> for ValidationConfig {
    fn from(args: &CheckArgs) -> Self {
        ValidationConfig {
            extension: args.extension.clone(),
            ..ValidationConfig::default()
        }
    }
}
