//! Quality control over annotated corpora.
//!
//! - **reconcile.rs**: merges a corpus of fixed sentences into an original corpus
//! - **validator.rs**: per-sentence structural checks
//! - **diagnostic.rs**: the findings reported by the validator

pub mod diagnostic;
pub mod reconcile;
pub mod validator;

pub use diagnostic::{Diagnostic, TokenIssue};
pub use reconcile::{reconcile, AmbiguousFix, Reconciliation};
pub use validator::{validate_text, FileValidator, SentenceCheck, SentenceReport};
