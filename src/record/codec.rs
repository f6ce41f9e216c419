use tracing::warn;

use super::sentence::Sentence;
use super::token::Token;

/// A token line that could not be read in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// 1-based line number in the source text.
    pub line: usize,
    /// 1-based ordinal of the sentence the line belongs to.
    pub sentence: usize,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenCorpus {
    pub sentences: Vec<Sentence>,
    pub issues: Vec<ParseIssue>,
}

/// Splits token-format text into sentences at blank lines.
///
/// Lines with fewer than two columns are recorded as issues and still produce a
/// placeholder token, so token counts match the source.
pub fn parse_token_blocks(text: &str) -> TokenCorpus {
    let mut corpus = TokenCorpus::default();
    let mut current = Sentence::default();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            if !current.is_empty() {
                corpus.sentences.push(std::mem::take(&mut current));
            }
            continue;
        }

        if line.starts_with('#') {
            current.comments.push(line.to_string());
            continue;
        }

        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() < 2 {
            let issue = ParseIssue {
                line: line_no + 1,
                sentence: corpus.sentences.len() + 1,
                raw: line.to_string(),
            };
            warn!(line = issue.line, raw = %issue.raw, "token line has fewer than 2 columns");
            corpus.issues.push(issue);
        }
        current.tokens.push(Token::from_columns(&columns));
    }

    if !current.is_empty() {
        corpus.sentences.push(current);
    }

    corpus
}

/// Renders a token as exactly ten tab-separated columns.
pub fn emit_token_line(token: &Token) -> String {
    [
        token.index.to_string(),
        token.form.clone(),
        token.lemma.clone(),
        token.upos.clone(),
        token.xpos.clone(),
        token.metadata.clone(),
        token.head.to_string(),
        token.relation.to_string(),
        token.deps.clone(),
        token.misc.clone(),
    ]
    .join("\t")
}

/// Renders a sentence block including its trailing blank line.
pub fn emit_sentence(sentence: &Sentence) -> String {
    let mut out = String::new();
    for comment in &sentence.comments {
        out.push_str(comment);
        out.push('\n');
    }
    for token in &sentence.tokens {
        out.push_str(&emit_token_line(token));
        out.push('\n');
    }
    out.push('\n');
    out
}

pub fn emit_corpus<'a>(sentences: impl IntoIterator<Item = &'a Sentence>) -> String {
    sentences.into_iter().map(emit_sentence).collect()
}
