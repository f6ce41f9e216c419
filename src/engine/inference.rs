//! Verb-position inference.
//!
//! Derives the 1-based index of the verb token from the word-order label, the property
//! tags and the subject/object positions. Sentences end in a punctuation token, so the
//! last *word* of a sentence of `n` tokens sits at index `n - 1`.
//!
//! With an auxiliary (`aux`), the lexical verb closes the clause: it is the last word for
//! fronted and verb-initial orders. In verb-final orders it is the last word in Dutch
//! (`omdat Anna de hond heeft gezien .`) and the word before it in German
//! (`weil Anna den Hund gesehen hat .`).
//!
//! Without an auxiliary, the verb follows the fronted subject or object, comes second
//! after a fronted adverbial, first in questions and last in verb-final clauses. Fronted
//! arguments listed in [`LexicalExceptions`] push the verb one slot further:
//!
//! | order             | fronted form          | condition | verb       |
//! |-------------------|-----------------------|-----------|------------|
//! | `VF[S]LK[V]MF[O]` | proper name           | always    | subject+2  |
//! | `VF[O]LK[V]MF[S]` | diminutive (`kopje`)  | Dutch     | object+2   |
//! | `VF[O]LK[V]MF[S]` | proper name           | `psy`     | object+2   |

use tracing::debug;

use super::error::{InferenceError, Role};
use super::exceptions::LexicalExceptions;
use super::language::{ClusterSlot, Language};
use super::order::{Placement, WordOrder};
use super::props::PropertySet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbPositionEngine {
    language: Language,
    exceptions: LexicalExceptions,
}

impl VerbPositionEngine {
    pub fn new(language: Language, exceptions: LexicalExceptions) -> Self {
        Self {
            language,
            exceptions,
        }
    }

    /// Engine with the built-in exception table of `language`.
    pub fn for_language(language: Language) -> Self {
        Self::new(language, LexicalExceptions::for_language(language).clone())
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn exceptions(&self) -> &LexicalExceptions {
        &self.exceptions
    }

    /// Returns the verb index in `1..=words.len()`.
    pub fn infer(
        &self,
        label: &str,
        props: &PropertySet,
        subject: Option<usize>,
        object: Option<usize>,
        words: &[&str],
    ) -> Result<usize, InferenceError> {
        let order: WordOrder = label.parse().map_err(|_| InferenceError::UnrecognizedPattern {
            label: label.trim().to_string(),
            with_aux: props.has_aux(),
        })?;

        let position = if props.has_aux() {
            self.aux_position(order, words)?
        } else {
            self.plain_position(order, props, subject, object, words)?
        };

        if position == 0 || position > words.len() {
            return Err(InferenceError::VerbOutOfRange {
                label: order.label().to_string(),
                position,
                len: words.len(),
            });
        }

        debug!(order = %order, position, language = %self.language, "inferred verb position");
        Ok(position)
    }

    fn aux_position(&self, order: WordOrder, words: &[&str]) -> Result<usize, InferenceError> {
        let slot = if order.is_verb_cluster() {
            self.language.aux_cluster_slot()
        } else {
            ClusterSlot::LastWord
        };
        word_from_end(order, slot, words.len())
    }

    fn plain_position(
        &self,
        order: WordOrder,
        props: &PropertySet,
        subject: Option<usize>,
        object: Option<usize>,
        words: &[&str],
    ) -> Result<usize, InferenceError> {
        match order.placement() {
            Placement::AfterSubject => {
                let (position, form) = argument(order, Role::Subject, subject, words)?;
                let shift = if self.exceptions.is_proper_name(form) { 2 } else { 1 };
                Ok(position + shift)
            }
            Placement::AfterObject => {
                let (position, form) = argument(order, Role::Object, object, words)?;
                let shifted = (self.language == Language::Dutch
                    && self.exceptions.is_diminutive(form))
                    || (props.is_psy() && self.exceptions.is_proper_name(form));
                Ok(position + if shifted { 2 } else { 1 })
            }
            Placement::Second => Ok(2),
            Placement::First => Ok(1),
            Placement::Final => word_from_end(order, ClusterSlot::LastWord, words.len()),
        }
    }
}

impl Default for VerbPositionEngine {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}

fn word_from_end(order: WordOrder, slot: ClusterSlot, len: usize) -> Result<usize, InferenceError> {
    // Skip the sentence-final punctuation token, then one more word for the penultimate slot.
    let back = match slot {
        ClusterSlot::LastWord => 1,
        ClusterSlot::PenultimateWord => 2,
    };
    match len.checked_sub(back) {
        Some(position) if position >= 1 => Ok(position),
        _ => Err(InferenceError::SentenceTooShort {
            label: order.label().to_string(),
            len,
            required: back + 1,
        }),
    }
}

fn argument<'w>(
    order: WordOrder,
    role: Role,
    position: Option<usize>,
    words: &[&'w str],
) -> Result<(usize, &'w str), InferenceError> {
    let position = position.ok_or_else(|| InferenceError::MissingPosition {
        label: order.label().to_string(),
        role,
    })?;
    match position.checked_sub(1).and_then(|i| words.get(i)) {
        Some(form) => Ok((position, *form)),
        None => Err(InferenceError::PositionOutOfRange {
            role,
            position,
            len: words.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const S_FRONT: &str = "VF[S]LK[V]MF[O]";
    const O_FRONT: &str = "VF[O]LK[V]MF[S]";
    const ADV_SO: &str = "VF[ADV]LK[V]MF[SO]";
    const ADV_OS: &str = "VF[ADV]LK[V]MF[OS]";
    const V1_SO: &str = "LK[V]MF[SO]";
    const V1_OS: &str = "LK[V]MF[OS]";
    const VC_SO: &str = "MF[SO]VC[V]";
    const VC_OS: &str = "MF[OS]VC[V]";

    type Inferred = Result<usize, InferenceError>;

    fn words(sentence: &str) -> Vec<&str> {
        sentence.split_whitespace().collect()
    }

    fn german() -> VerbPositionEngine {
        VerbPositionEngine::for_language(Language::German)
    }

    fn dutch() -> VerbPositionEngine {
        VerbPositionEngine::for_language(Language::Dutch)
    }

    fn infer(
        engine: &VerbPositionEngine,
        label: &str,
        props: &str,
        subject: Option<usize>,
        object: Option<usize>,
        sentence: &str,
    ) -> Inferred {
        engine.infer(label, &PropertySet::parse(props), subject, object, &words(sentence))
    }

    fn de(label: &str, props: &str, s: usize, o: usize, sentence: &str) -> Inferred {
        infer(&german(), label, props, Some(s), Some(o), sentence)
    }

    fn nl(label: &str, props: &str, s: usize, o: usize, sentence: &str) -> Inferred {
        infer(&dutch(), label, props, Some(s), Some(o), sentence)
    }

    #[test]
    fn test_subject_fronted() {
        assert_eq!(de(S_FRONT, "amb", 1, 3, "Anna sieht Peter ."), Ok(2));
    }

    #[test]
    fn test_subject_fronted_multiword_subject() {
        assert_eq!(de(S_FRONT, "amb", 2, 5, "Die Frau sieht den Mann ."), Ok(3));
    }

    #[test]
    fn test_subject_fronted_proper_name_exceptions() {
        for name in ["Staf", "Han", "Essent", "NPO", "Bertolt", "Günter"] {
            let sentence = format!("{name} x sieht Peter .");
            assert_eq!(de(S_FRONT, "amb", 1, 4, &sentence), Ok(3), "{name}");
            assert_eq!(nl(S_FRONT, "amb", 1, 4, &sentence), Ok(3), "{name}");
        }
    }

    #[test]
    fn test_gunter_skips_a_slot_but_anna_does_not() {
        assert_eq!(de(S_FRONT, "amb", 1, 4, "Günter Grass liest Bücher ."), Ok(3));
        assert_eq!(de(S_FRONT, "amb", 1, 3, "Anna liest Bücher ."), Ok(2));
    }

    #[test]
    fn test_object_fronted() {
        assert_eq!(de(O_FRONT, "amb", 3, 1, "Peter sieht Anna ."), Ok(2));
    }

    #[test]
    fn test_dutch_diminutive_object() {
        assert_eq!(nl(O_FRONT, "amb", 4, 1, "kopje koffie drinkt Anna ."), Ok(3));
        assert_eq!(nl(O_FRONT, "amb", 3, 1, "tas draagt Anna ."), Ok(2));
    }

    #[test]
    fn test_diminutive_match_ignores_case() {
        assert_eq!(nl(O_FRONT, "amb", 4, 1, "Kopjes thee drinkt Anna ."), Ok(3));
    }

    #[test]
    fn test_diminutive_is_dutch_only() {
        assert_eq!(de(O_FRONT, "amb", 3, 1, "kopje trinkt Anna ."), Ok(2));
    }

    #[test]
    fn test_object_proper_name_needs_psy() {
        assert_eq!(de(O_FRONT, "amb", 3, 1, "Günter ärgert Anna ."), Ok(2));
        assert_eq!(de(O_FRONT, "amb-psy", 4, 1, "Günter Grass ärgert Anna ."), Ok(3));
    }

    #[test]
    fn test_fixed_positions() {
        assert_eq!(de(ADV_SO, "amb", 3, 4, "Deshalb sieht Anna Peter ."), Ok(2));
        assert_eq!(de(ADV_OS, "amb", 4, 3, "Deshalb sieht Peter Anna ."), Ok(2));
        assert_eq!(de(V1_SO, "amb", 2, 3, "Sieht Anna Peter ?"), Ok(1));
        assert_eq!(de(V1_OS, "amb", 3, 2, "Sieht Peter Anna ?"), Ok(1));
        assert_eq!(de(VC_SO, "amb", 2, 3, "Weil Anna Peter sieht ."), Ok(4));
        assert_eq!(de(VC_OS, "amb", 3, 2, "Weil Peter Anna sieht ."), Ok(4));
    }

    #[test]
    fn test_aux_fronted_orders_take_last_word() {
        assert_eq!(de(S_FRONT, "aux", 1, 3, "Anna hat Peter gesehen ."), Ok(4));
        assert_eq!(de(O_FRONT, "aux", 3, 1, "Peter hat Anna gesehen ."), Ok(4));
        assert_eq!(de(ADV_SO, "aux", 3, 4, "Deshalb hat Anna Peter gesehen ."), Ok(5));
        assert_eq!(de(V1_OS, "aux", 3, 2, "Hat Peter Anna gesehen ?"), Ok(4));
    }

    #[test]
    fn test_aux_ignores_lexical_exceptions() {
        assert_eq!(de(S_FRONT, "aux", 1, 3, "Günter hat Peter gesehen ."), Ok(4));
    }

    #[test]
    fn test_aux_verb_cluster_depends_on_language() {
        assert_eq!(de(VC_SO, "amb-aux", 2, 3, "Weil Anna Peter gesehen hat ."), Ok(4));
        assert_eq!(nl(VC_OS, "amb-aux", 3, 2, "omdat Peter Anna heeft gezien ."), Ok(5));
    }

    #[test]
    fn test_unrecognized_pattern() {
        assert_eq!(
            de("VF[V]MF[SO]", "amb", 1, 2, "a b c ."),
            Err(InferenceError::UnrecognizedPattern {
                label: "VF[V]MF[SO]".to_string(),
                with_aux: false
            })
        );
        assert!(matches!(
            de("VF[V]MF[SO]", "aux", 1, 2, "a b c ."),
            Err(InferenceError::UnrecognizedPattern { with_aux: true, .. })
        ));
    }

    #[test]
    fn test_missing_and_out_of_range_positions() {
        let missing = infer(&german(), S_FRONT, "amb", None, Some(3), "Anna sieht Peter .");
        let outside = de(O_FRONT, "amb", 1, 9, "Anna sieht Peter .");
        assert!(matches!(
            missing,
            Err(InferenceError::MissingPosition { role: Role::Subject, .. })
        ));
        assert!(matches!(
            outside,
            Err(InferenceError::PositionOutOfRange { role: Role::Object, position: 9, len: 4 })
        ));
    }

    #[test]
    fn test_rules_without_arguments_ignore_absent_positions() {
        assert_eq!(infer(&german(), V1_SO, "amb", None, None, "Sieht Anna Peter ?"), Ok(1));
    }

    #[test]
    fn test_short_sentences_are_rejected() {
        let aux = infer(&german(), VC_SO, "aux", None, None, "gesehen .");
        let final_verb = infer(&german(), VC_SO, "amb", None, None, ".");
        let beyond = infer(&german(), S_FRONT, "amb", Some(2), None, "Anna lacht");
        assert!(matches!(aux, Err(InferenceError::SentenceTooShort { required: 3, .. })));
        assert!(matches!(final_verb, Err(InferenceError::SentenceTooShort { required: 2, .. })));
        assert!(matches!(beyond, Err(InferenceError::VerbOutOfRange { position: 3, len: 2, .. })));
    }

    #[test]
    fn test_every_legal_combination_yields_a_position_inside_the_sentence() {
        let tokens = words("Die Frau hat den Mann gesehen .");
        // Arguments sit on word tokens, never on the final punctuation mark.
        let word_slots = 1..tokens.len();
        for engine in [german(), dutch()] {
            for order in WordOrder::ALL {
                for props in ["amb", "aux", "psy", "aux-psy"] {
                    for subject in word_slots.clone() {
                        for object in word_slots.clone().filter(|&o| o != subject) {
                            let position = engine
                                .infer(
                                    order.label(),
                                    &PropertySet::parse(props),
                                    Some(subject),
                                    Some(object),
                                    &tokens,
                                )
                                .unwrap_or_else(|err| {
                                    panic!("{order} {props} s={subject} o={object}: {err}")
                                });
                            assert!((1..=tokens.len()).contains(&position));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_empty_exception_table() {
        let engine = VerbPositionEngine::new(Language::German, LexicalExceptions::empty());
        let pos = infer(&engine, S_FRONT, "amb", Some(1), Some(3), "Günter sieht Peter .");
        assert_eq!(pos, Ok(2));
    }
}
