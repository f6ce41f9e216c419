use std::fmt;

use thiserror::Error;

/// Argument slot a rule reads a position from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Subject,
    Object,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Subject => f.write_str("subject"),
            Role::Object => f.write_str("object"),
        }
    }
}

fn aux_suffix(with_aux: &bool) -> &'static str {
    if *with_aux {
        " with aux"
    } else {
        ""
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    #[error("unrecognized word order pattern{}: {label}", aux_suffix(.with_aux))]
    UnrecognizedPattern { label: String, with_aux: bool },

    #[error("{label}: {role} position is required but absent")]
    MissingPosition { label: String, role: Role },

    #[error("{role} position {position} is outside a sentence of {len} tokens")]
    PositionOutOfRange {
        role: Role,
        position: usize,
        len: usize,
    },

    #[error("{label}: sentence of {len} tokens is too short, need at least {required}")]
    SentenceTooShort {
        label: String,
        len: usize,
        required: usize,
    },

    #[error("{label}: verb position {position} is outside a sentence of {len} tokens")]
    VerbOutOfRange {
        label: String,
        position: usize,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_pattern_messages() {
        let plain = InferenceError::UnrecognizedPattern {
            label: "VF[X]".to_string(),
            with_aux: false,
        };
        let aux = InferenceError::UnrecognizedPattern {
            label: "VF[X]".to_string(),
            with_aux: true,
        };
        assert_eq!(plain.to_string(), "unrecognized word order pattern: VF[X]");
        assert_eq!(aux.to_string(), "unrecognized word order pattern with aux: VF[X]");
    }

    #[test]
    fn test_missing_position_message() {
        let err = InferenceError::MissingPosition {
            label: "VF[S]LK[V]MF[O]".to_string(),
            role: Role::Subject,
        };
        assert_eq!(
            err.to_string(),
            "VF[S]LK[V]MF[O]: subject position is required but absent"
        );
    }
}
