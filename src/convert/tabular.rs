use tracing::{debug, info};

use super::ConversionError;
use crate::engine::{OutputFormat, PropertySet, VerbPositionEngine};
use crate::record::{
    emit_sentence, format_metadata, parse_token_blocks, read_tabular, write_tabular,
    MetadataDialect, Relation, Sentence, TabularRecord, Token,
};

/// Builds the annotated sentence for a tabular record.
///
/// The verb gets `head=0, verb`; subject and object attach to it as `nsubj` and `obj`;
/// every other token stays unattached.
pub fn sentence_from_tabular(
    record: &TabularRecord,
    engine: &VerbPositionEngine,
    dialect: MetadataDialect,
) -> Result<Sentence, crate::engine::InferenceError> {
    let words = record.words();
    let props = PropertySet::parse(&record.other_props);
    let verb = engine.infer(
        &record.word_order,
        &props,
        record.subject_position,
        record.object_position,
        &words,
    )?;

    let metadata = format_metadata(&record.word_order, &record.other_props, dialect);
    let tokens = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let index = i + 1;
            let token = Token::new(index, word, &metadata);
            if index == verb {
                token.with_dependency(0, Relation::Verb)
            } else if Some(index) == record.subject_position {
                token.with_dependency(verb, Relation::Nsubj)
            } else if Some(index) == record.object_position {
                token.with_dependency(verb, Relation::Obj)
            } else {
                token
            }
        })
        .collect();

    Ok(Sentence::new(tokens))
}

/// Converts a whole tabular file into token format.
///
/// Nothing is returned unless every row converts.
pub fn tsv_to_conll(
    text: &str,
    engine: &VerbPositionEngine,
    format: OutputFormat,
) -> Result<String, ConversionError> {
    let records = read_tabular(text)?;

    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        let row = i + 1;
        let sentence = sentence_from_tabular(record, engine, format.dialect())
            .map_err(|source| ConversionError::Inference { row, source })?;
        debug!(row, tokens = sentence.tokens.len(), "converted row");
        out.push_str(&emit_sentence(&sentence));
    }

    info!(
        rows = records.len(),
        format = %format,
        language = %engine.language(),
        "tabular to token conversion"
    );
    Ok(out)
}

/// Converts token-format text into the tabular format, header included.
pub fn conll_to_tsv(text: &str) -> Result<String, ConversionError> {
    let corpus = parse_token_blocks(text);
    let records = corpus
        .sentences
        .iter()
        .map(Sentence::to_tabular)
        .collect::<Result<Vec<_>, _>>()?;
    let out = write_tabular(&records)?;

    info!(
        sentences = corpus.sentences.len(),
        issues = corpus.issues.len(),
        "token to tabular conversion"
    );
    Ok(out)
}
