use std::collections::HashMap;

use tracing::{info, warn};

use crate::record::{Sentence, SentenceKey};

/// A fix key shared by more than one fix sentence. The last one is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousFix {
    pub key: SentenceKey,
    pub candidates: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reconciliation {
    /// Same length and order as the base corpus.
    pub sentences: Vec<Sentence>,
    /// Number of base sentences replaced by a fix.
    pub substituted: usize,
    /// Fix keys that occurred more than once, sorted by key.
    pub ambiguous: Vec<AmbiguousFix>,
}

/// Replaces every base sentence whose identity key matches a fix sentence.
///
/// Unmatched base sentences are kept as they are. Neither input is modified.
pub fn reconcile(base: &[Sentence], fixes: &[Sentence]) -> Reconciliation {
    let mut fix_map: HashMap<SentenceKey, (&Sentence, usize)> = HashMap::new();
    for fix in fixes {
        let entry = fix_map.entry(fix.identity_key()).or_insert((fix, 0));
        entry.0 = fix;
        entry.1 += 1;
    }

    let mut ambiguous: Vec<AmbiguousFix> = fix_map
        .iter()
        .filter(|(_, (_, count))| *count > 1)
        .map(|(key, (_, count))| AmbiguousFix {
            key: key.clone(),
            candidates: *count,
        })
        .collect();
    ambiguous.sort_by(|a, b| a.key.cmp(&b.key));
    for fix in &ambiguous {
        warn!(
            order = ?fix.key.order,
            props = ?fix.key.props,
            candidates = fix.candidates,
            "ambiguous fix key, using the last sentence"
        );
    }

    let mut substituted = 0;
    let sentences: Vec<Sentence> = base
        .iter()
        .map(|sentence| match fix_map.get(&sentence.identity_key()) {
            Some((fix, _)) => {
                substituted += 1;
                (*fix).clone()
            }
            None => sentence.clone(),
        })
        .collect();

    info!(base = base.len(), fixes = fixes.len(), substituted, "reconciled corpora");

    Reconciliation {
        sentences,
        substituted,
        ambiguous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Relation, Token};

    fn sentence(order: &str, forms: &[&str]) -> Sentence {
        let metadata = format!("order:{order}|props:amb");
        Sentence::new(
            forms
                .iter()
                .enumerate()
                .map(|(i, form)| Token::new(i + 1, form, &metadata))
                .collect(),
        )
    }

    #[test]
    fn test_fix_with_different_token_order_replaces_base() {
        let base = vec![sentence("VF[S]LK[V]MF[O]", &["Anna", "sieht", "Peter", "."])];
        let mut fix = sentence("VF[S]LK[V]MF[O]", &["Peter", "sieht", "Anna", "."]);
        fix.tokens[1] = fix.tokens[1].clone().with_dependency(0, Relation::Verb);

        let result = reconcile(&base, &[fix.clone()]);
        assert_eq!(result.sentences, vec![fix]);
        assert_eq!(result.substituted, 1);
        assert!(result.ambiguous.is_empty());
    }

    #[test]
    fn test_unmatched_sentences_pass_through_in_order() {
        let base = vec![
            sentence("VF[S]LK[V]MF[O]", &["Anna", "sieht", "Peter", "."]),
            sentence("LK[V]MF[SO]", &["Sieht", "Anna", "Peter", "?"]),
            sentence("MF[SO]VC[V]", &["Weil", "Anna", "Peter", "sieht", "."]),
        ];
        let fixes = vec![sentence("VF[O]LK[V]MF[S]", &["Peter", "sieht", "Anna", "."])];

        let result = reconcile(&base, &fixes);
        assert_eq!(result.sentences, base);
        assert_eq!(result.substituted, 0);
    }

    #[test]
    fn test_output_length_matches_base() {
        let base = vec![
            sentence("LK[V]MF[SO]", &["Sieht", "Anna", "Peter", "?"]),
            sentence("LK[V]MF[SO]", &["Sieht", "Anna", "Peter", "?"]),
        ];
        let fixes = vec![
            sentence("LK[V]MF[SO]", &["Sieht", "Peter", "Anna", "?"]),
            sentence("VF[S]LK[V]MF[O]", &["Anna", "lacht", "."]),
        ];
        let result = reconcile(&base, &fixes);
        assert_eq!(result.sentences.len(), 2);
        assert_eq!(result.substituted, 2);
        assert_eq!(result.sentences[0], fixes[0]);
        assert_eq!(result.sentences[1], fixes[0]);
    }

    #[test]
    fn test_duplicate_fix_keys_are_reported_and_last_wins() {
        let base = vec![sentence("LK[V]MF[SO]", &["Sieht", "Anna", "Peter", "?"])];
        let mut first = sentence("LK[V]MF[SO]", &["Sieht", "Anna", "Peter", "?"]);
        first.comments.push("# first".to_string());
        let mut last = sentence("LK[V]MF[SO]", &["Sieht", "Peter", "Anna", "?"]);
        last.comments.push("# last".to_string());

        let result = reconcile(&base, &[first, last.clone()]);
        assert_eq!(result.sentences, vec![last]);
        assert_eq!(result.ambiguous.len(), 1);
        assert_eq!(result.ambiguous[0].candidates, 2);
        assert_eq!(result.ambiguous[0].key.order.as_deref(), Some("LK[V]MF[SO]"));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(reconcile(&[], &[]), Reconciliation::default());
        let base = vec![sentence("LK[V]MF[SO]", &["Sieht", "Anna", "Peter", "?"])];
        assert_eq!(reconcile(&base, &[]).sentences, base);
    }
}
