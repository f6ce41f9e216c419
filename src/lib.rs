//! Tooling for word-order test-suite corpora: tabular and CoNLL conversion, verb position
//! inference, reconciliation of corrected sentences and structural validation.

pub mod cli;
pub mod convert;
pub mod engine;
pub mod input;
pub mod quality;
pub mod record;
