//! Record model and codec for the two test-suite formats.
//!
//! - **token.rs**: one line of the token format (`Token`, `Relation`, `NumericField`)
//! - **sentence.rs**: blank-line separated sentences and their identity key
//! - **metadata.rs**: the packed `order`/`props` column and its two dialects
//! - **codec.rs**: parsing token blocks and emitting token lines
//! - **tabular.rs**: the one-row-per-sentence tabular format

use thiserror::Error;

pub mod codec;
pub mod metadata;
pub mod sentence;
pub mod tabular;
pub mod token;

pub use codec::{
    emit_corpus, emit_sentence, emit_token_line, parse_token_blocks, ParseIssue, TokenCorpus,
};
pub use metadata::{
    extract_metadata_field, format_metadata, rewrite_metadata_delimiter, MetadataDialect,
};
pub use sentence::{Sentence, SentenceKey};
pub use tabular::{read_tabular, write_tabular, TabularLayout, TabularRecord};
pub use token::{NumericField, Relation, Token};

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("input has no tabular header")]
    MissingHeader,

    #[error("tabular header is missing the '{0}' column")]
    MissingColumn(String),

    #[error("row {row}: expected at least {expected} fields, found {found}")]
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: invalid {column} '{value}'")]
    InvalidPosition {
        row: usize,
        column: String,
        value: String,
    },

    #[error("sentence '{sentence}' has no '{key}' metadata")]
    MissingMetadata { key: &'static str, sentence: String },

    /// `row` is 0 for the header.
    #[error("row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("failed to render tabular output: {0}")]
    Render(#[source] std::io::Error),
}
