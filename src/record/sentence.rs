use std::collections::BTreeSet;

use super::token::{Relation, Token};

/// Lines with fewer columns than this carry no metadata and take no part in the identity key.
pub const KEY_MIN_COLUMNS: usize = 6;

/// Content-derived identity of a sentence: order label, props label and the set of forms.
///
/// The key ignores token order and duplicate forms, so two sentences with the same labels
/// and vocabulary are treated as the same sentence. Short lines are left out, so their
/// `[MISSING]` forms never reach the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SentenceKey {
    pub order: Option<String>,
    pub props: Option<String>,
    pub forms: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    /// `#` lines that preceded the tokens.
    pub comments: Vec<String>,
    pub tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            comments: Vec::new(),
            tokens,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Order label of the first token that carries one.
    pub fn order(&self) -> Option<&str> {
        self.tokens.iter().find_map(Token::order)
    }

    /// Props label of the first token that carries one.
    pub fn props(&self) -> Option<&str> {
        self.tokens.iter().find_map(Token::props)
    }

    pub fn forms(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|token| token.form.as_str())
    }

    /// Space-joined surface forms.
    pub fn text(&self) -> String {
        self.forms().collect::<Vec<_>>().join(" ")
    }

    /// Index of the last token annotated with `relation`.
    pub fn position_of(&self, relation: &Relation) -> Option<usize> {
        self.tokens
            .iter()
            .rev()
            .find(|token| &token.relation == relation)
            .and_then(Token::index_value)
    }

    pub fn identity_key(&self) -> SentenceKey {
        let keyed = || self.tokens.iter().filter(|token| token.width >= KEY_MIN_COLUMNS);
        SentenceKey {
            order: keyed().find_map(Token::order).map(str::to_string),
            props: keyed().find_map(Token::props).map(str::to_string),
            forms: keyed().map(|token| token.form.clone()).collect(),
        }
    }
}
