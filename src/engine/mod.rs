pub mod config;
pub mod error;
pub mod exceptions;
pub mod inference;
pub mod language;
pub mod order;
pub mod props;

pub use config::{Config, ConfigError, ConversionConfig, OutputFormat, ValidationConfig};
pub use error::{InferenceError, Role};
pub use exceptions::LexicalExceptions;
pub use inference::VerbPositionEngine;
pub use language::{ClusterSlot, Language};
pub use order::{Placement, WordOrder};
pub use props::PropertySet;
