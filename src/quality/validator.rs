//! Structural validation of token-format corpora.
//!
//! [`SentenceCheck`] accumulates the tokens of one sentence and is consumed by
//! [`SentenceCheck::finish`]; a fresh check is built at every sentence boundary.
//! [`FileValidator`] walks the sentences of one file and numbers them from 1.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use tracing::warn;

use super::diagnostic::{Diagnostic, TokenIssue, MISSING_VALUE};
use crate::engine::ValidationConfig;
use crate::record::{parse_token_blocks, NumericField, Relation, Sentence, Token};

struct CheckedToken {
    index: NumericField,
    head: Option<i64>,
    relation: Relation,
}

/// Per-sentence accumulator.
pub struct SentenceCheck<'c> {
    config: &'c ValidationConfig,
    head_checks: bool,
    orders: BTreeSet<Option<String>>,
    props: BTreeSet<Option<String>>,
    tokens: Vec<CheckedToken>,
    issues: Vec<TokenIssue>,
}

impl<'c> SentenceCheck<'c> {
    /// `head_checks` enables the head and relation checks (files with enough columns).
    pub fn new(config: &'c ValidationConfig, head_checks: bool) -> Self {
        Self {
            config,
            head_checks,
            orders: BTreeSet::new(),
            props: BTreeSet::new(),
            tokens: Vec::new(),
            issues: Vec::new(),
        }
    }

    pub fn push(&mut self, token: &Token) {
        if let NumericField::Malformed(raw) = &token.index {
            self.issues.push(TokenIssue::InvalidId(raw.clone()));
        }
        if token.index == NumericField::Unset {
            self.issues.push(TokenIssue::InvalidId(token.index.to_string()));
        }

        let head = if self.head_checks {
            if let NumericField::Malformed(raw) = &token.head {
                self.issues.push(TokenIssue::InvalidHead(raw.clone()));
            }
            token.head.value()
        } else {
            None
        };

        self.orders.insert(token.order().map(str::to_string));
        self.props.insert(token.props().map(str::to_string));
        self.tokens.push(CheckedToken {
            index: token.index.clone(),
            head,
            relation: token.relation.clone(),
        });
    }

    /// Column-level problems seen so far.
    pub fn issues(&self) -> &[TokenIssue] {
        &self.issues
    }

    pub fn finish(self) -> (Vec<Diagnostic>, Vec<TokenIssue>) {
        let mut diagnostics = Vec::new();

        if self.orders.len() > 1 {
            diagnostics.push(Diagnostic::OrderMismatch(distinct_values(&self.orders)));
        }
        if self.props.len() > 1 {
            diagnostics.push(Diagnostic::PropsMismatch(distinct_values(&self.props)));
        }

        let indices: Option<Vec<i64>> = self.tokens.iter().map(|t| t.index.value()).collect();
        if !self.tokens.is_empty() {
            match &indices {
                None => diagnostics.push(Diagnostic::MalformedIndices),
                Some(indices) => diagnostics.extend(check_indices(indices)),
            }
        }

        if self.head_checks {
            if let Some(indices) = &indices {
                diagnostics.extend(self.check_heads(indices));
            }
            diagnostics.extend(self.check_multiplicity());
            diagnostics.extend(self.check_attachment());
        }

        (diagnostics, self.issues)
    }

    fn check_heads(&self, indices: &[i64]) -> Vec<Diagnostic> {
        let Some(&last) = indices.iter().max() else {
            return Vec::new();
        };

        let mut flags = Vec::new();
        let mut errors = Vec::new();
        for (&token, checked) in indices.iter().zip(&self.tokens) {
            let Some(head) = checked.head else {
                continue;
            };
            if head == token {
                errors.push(Diagnostic::HeadIsOwnIndex { token });
            }
            if head > last {
                errors.push(Diagnostic::HeadBeyondLast { token, head, last });
            }
            if head < 0 {
                errors.push(Diagnostic::NegativeHead { token, head });
            }
            if head == last {
                flags.push(Diagnostic::HeadPointsToLastToken { token, last });
            }
        }
        flags.extend(errors);
        flags
    }

    fn check_multiplicity(&self) -> Vec<Diagnostic> {
        let count = |relation: &Relation| {
            self.tokens
                .iter()
                .filter(|t| &t.relation == relation)
                .count()
        };

        let mut diagnostics = Vec::new();
        let subjects = count(&Relation::Nsubj);
        if subjects > 1 {
            diagnostics.push(Diagnostic::MultipleSubjects(subjects));
        }
        let objects = count(&Relation::Obj);
        if objects > 1 {
            diagnostics.push(Diagnostic::MultipleObjects(objects));
        }
        diagnostics
    }

    fn check_attachment(&self) -> Vec<Diagnostic> {
        let governors: HashSet<i64> = self
            .tokens
            .iter()
            .filter(|t| self.config.is_governor(t.relation.as_str()))
            .filter_map(|t| t.index.value())
            .collect();

        self.tokens
            .iter()
            .filter(|t| self.config.is_dependent(t.relation.as_str()))
            .filter(|t| !t.head.is_some_and(|head| governors.contains(&head)))
            .map(|t| Diagnostic::Misattached {
                relation: t.relation.to_string(),
                token: t.index.to_string(),
                head: t
                    .head
                    .map(|head| head.to_string())
                    .unwrap_or_else(|| "_".to_string()),
            })
            .collect()
    }
}

fn distinct_values(values: &BTreeSet<Option<String>>) -> Vec<String> {
    let mut rendered: Vec<String> = values
        .iter()
        .map(|v| v.clone().unwrap_or_else(|| MISSING_VALUE.to_string()))
        .collect();
    rendered.sort();
    rendered
}

fn check_indices(indices: &[i64]) -> Option<Diagnostic> {
    let unique: HashSet<i64> = indices.iter().copied().collect();
    if unique.len() != indices.len() {
        return Some(Diagnostic::DuplicateIds);
    }

    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    let consecutive = sorted.iter().zip(1..).all(|(&index, expected)| index == expected);
    if consecutive {
        None
    } else {
        Some(Diagnostic::NonConsecutive(sorted))
    }
}

/// Findings for one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceReport {
    pub file: String,
    /// 1-based position of the sentence in its file.
    pub ordinal: usize,
    pub diagnostics: Vec<Diagnostic>,
    pub issues: Vec<TokenIssue>,
    pub surface: String,
}

impl SentenceReport {
    pub fn has_findings(&self) -> bool {
        !self.diagnostics.is_empty() || !self.issues.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.issues.is_empty() || self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

impl fmt::Display for SentenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for issue in &self.issues {
            writeln!(
                f,
                "[ERROR] {} in {}, sentence {}",
                issue, self.file, self.ordinal
            )?;
        }
        if !self.diagnostics.is_empty() {
            let joined = self
                .diagnostics
                .iter()
                .map(Diagnostic::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                f,
                "[{}] Sentence {} - mismatches: {}",
                self.file, self.ordinal, joined
            )?;
            writeln!(f, "  {}", self.surface)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Walks the sentences of one file.
pub struct FileValidator<'c> {
    file: String,
    config: &'c ValidationConfig,
    columns: Option<usize>,
    ordinal: usize,
}

impl<'c> FileValidator<'c> {
    pub fn new(file: &str, config: &'c ValidationConfig) -> Self {
        Self {
            file: file.to_string(),
            config,
            columns: None,
            ordinal: 0,
        }
    }

    /// Checks the next sentence. The column count of the first token seen decides
    /// whether head checks run for the whole file.
    pub fn check(&mut self, sentence: &Sentence) -> SentenceReport {
        self.ordinal += 1;
        if self.columns.is_none() {
            self.columns = sentence.tokens.first().map(|token| token.width);
        }
        let head_checks = self
            .columns
            .is_some_and(|columns| columns >= self.config.head_check_min_columns);

        let mut check = SentenceCheck::new(self.config, head_checks);
        for token in &sentence.tokens {
            check.push(token);
        }
        let (diagnostics, issues) = check.finish();

        for issue in &issues {
            warn!(file = %self.file, sentence = self.ordinal, %issue, "token issue");
        }

        SentenceReport {
            file: self.file.clone(),
            ordinal: self.ordinal,
            diagnostics,
            issues,
            surface: sentence.text(),
        }
    }
}

/// Validates token-format `text` and returns the reports of sentences with findings.
pub fn validate_text(file: &str, text: &str, config: &ValidationConfig) -> Vec<SentenceReport> {
    let corpus = parse_token_blocks(text);
    let mut validator = FileValidator::new(file, config);

    let mut reports: Vec<SentenceReport> = corpus
        .sentences
        .iter()
        .map(|sentence| validator.check(sentence))
        .collect();

    for issue in corpus.issues {
        if let Some(report) = reports.get_mut(issue.sentence - 1) {
            report.issues.insert(0, TokenIssue::MalformedLine(issue.raw));
        }
    }

    reports.retain(SentenceReport::has_findings);
    reports
}
