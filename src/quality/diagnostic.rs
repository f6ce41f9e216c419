use std::fmt;

/// Rendering of an absent metadata value.
pub const MISSING_VALUE: &str = "[MISSING]";

/// A structural defect found in one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Tokens disagree on the `order` label; sorted distinct values.
    OrderMismatch(Vec<String>),
    /// Tokens disagree on the `props` label; sorted distinct values.
    PropsMismatch(Vec<String>),
    MalformedIndices,
    DuplicateIds,
    /// Indices are not exactly `1..N`; the sorted indices found.
    NonConsecutive(Vec<i64>),
    HeadPointsToLastToken { token: i64, last: i64 },
    HeadIsOwnIndex { token: i64 },
    HeadBeyondLast { token: i64, head: i64, last: i64 },
    NegativeHead { token: i64, head: i64 },
    MultipleSubjects(usize),
    MultipleObjects(usize),
    Misattached {
        relation: String,
        token: String,
        head: String,
    },
}

impl Diagnostic {
    /// Everything except an attachment to the last token counts as an error.
    pub fn is_error(&self) -> bool {
        !matches!(self, Diagnostic::HeadPointsToLastToken { .. })
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::OrderMismatch(values) => {
                f.write_str("order: ")?;
                write_list(f, values)
            }
            Diagnostic::PropsMismatch(values) => {
                f.write_str("props: ")?;
                write_list(f, values)
            }
            Diagnostic::MalformedIndices => f.write_str("indices: [MALFORMED]"),
            Diagnostic::DuplicateIds => f.write_str("duplicate IDs in sentence"),
            Diagnostic::NonConsecutive(indices) => {
                f.write_str("indices not consecutive: ")?;
                write_list(f, indices)
            }
            Diagnostic::HeadPointsToLastToken { token, last } => {
                write!(f, "HEAD points to last token ID {} (from token {})", last, token)
            }
            Diagnostic::HeadIsOwnIndex { token } => write!(f, "HEAD=ID at token {}", token),
            Diagnostic::HeadBeyondLast { token, head, last } => {
                write!(f, "HEAD>{} at token {} (head={})", last, token, head)
            }
            Diagnostic::NegativeHead { token, head } => {
                write!(f, "HEAD<0 at token {} (head={})", token, head)
            }
            Diagnostic::MultipleSubjects(count) => write!(f, "multiple nsubj ({})", count),
            Diagnostic::MultipleObjects(count) => write!(f, "multiple obj ({})", count),
            Diagnostic::Misattached {
                relation,
                token,
                head,
            } => write!(
                f,
                "{} at token {} doesn't attach to verb/root (head={})",
                relation, token, head
            ),
        }
    }
}

/// A token column that could not be read as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenIssue {
    InvalidId(String),
    InvalidHead(String),
    /// A line with fewer than two columns.
    MalformedLine(String),
}

impl fmt::Display for TokenIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenIssue::InvalidId(raw) => write!(f, "Invalid ID '{}'", raw),
            TokenIssue::InvalidHead(raw) => write!(f, "Invalid HEAD '{}'", raw),
            TokenIssue::MalformedLine(raw) => write!(f, "Malformed line '{}'", raw),
        }
    }
}
