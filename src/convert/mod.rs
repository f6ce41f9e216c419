//! Whole-text conversions between the test-suite formats.
//!
//! Each conversion takes the complete input text and returns the complete output, or an
//! error before any output exists.

use thiserror::Error;

use crate::engine::{ConfigError, InferenceError};
use crate::record::RecordError;

pub mod dialect;
pub mod tabular;

pub use dialect::rewrite_dialect;
pub use tabular::{conll_to_tsv, sentence_from_tabular, tsv_to_conll};

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("row {row}: {source}")]
    Inference {
        row: usize,
        #[source]
        source: InferenceError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
