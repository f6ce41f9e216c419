use std::collections::BTreeSet;

pub const AUX_TAG: &str = "aux";
pub const PSY_TAG: &str = "psy";

/// Property label of a sentence, split into tags.
///
/// Labels such as `amb-aux` or `psy,pp` are split on every non-alphanumeric character.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertySet {
    tags: BTreeSet<String>,
}

impl PropertySet {
    pub fn parse(label: &str) -> Self {
        Self {
            tags: label
                .split(|c: char| !c.is_alphanumeric())
                .filter(|tag| !tag.is_empty())
                .map(str::to_lowercase)
                .collect(),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Analytic construction: the verb cluster is split over an auxiliary and a participle.
    pub fn has_aux(&self) -> bool {
        self.contains(AUX_TAG)
    }

    /// Psychological predicate.
    pub fn is_psy(&self) -> bool {
        self.contains(PSY_TAG)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_delimiters() {
        let props = PropertySet::parse("amb-aux,psy");
        assert!(props.has_aux());
        assert!(props.is_psy());
        assert_eq!(props.tags().collect::<Vec<_>>(), vec!["amb", "aux", "psy"]);
    }

    #[test]
    fn test_tags_are_whole_words() {
        let props = PropertySet::parse("auxiliary-psyche");
        assert!(!props.has_aux());
        assert!(!props.is_psy());
    }

    #[test]
    fn test_empty_label() {
        let props = PropertySet::parse("");
        assert!(!props.has_aux());
        assert_eq!(props.tags().count(), 0);
    }
}
