// Lexical exception tables for verb placement
//
// A few arguments take up one more slot than the rule expects, which moves the verb
// one position to the right. They are listed here as data, one table per language.

use std::collections::BTreeSet;

use lazy_static::lazy_static;

use super::language::Language;

/// Version of the built-in tables. Bump when an entry is added or removed.
pub const EXCEPTIONS_VERSION: u32 = 1;

/// Proper names that shift the verb by one slot, in both languages.
pub const PROPER_NAMES: &[&str] = &["Staf", "Han", "Essent", "NPO", "Bertolt", "Günter"];

/// Dutch diminutives that shift the verb when fronted as object. Matched case-insensitively.
pub const DUTCH_DIMINUTIVES: &[&str] = &["kopje", "kopjes"];

lazy_static! {
    static ref GERMAN: LexicalExceptions = LexicalExceptions::new(
        EXCEPTIONS_VERSION,
        PROPER_NAMES.iter().copied(),
        std::iter::empty(),
    );
    static ref DUTCH: LexicalExceptions = LexicalExceptions::new(
        EXCEPTIONS_VERSION,
        PROPER_NAMES.iter().copied(),
        DUTCH_DIMINUTIVES.iter().copied(),
    );
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LexicalExceptions {
    pub version: u32,
    proper_names: BTreeSet<String>,
    diminutives: BTreeSet<String>,
}

impl LexicalExceptions {
    pub fn new<'a>(
        version: u32,
        proper_names: impl IntoIterator<Item = &'a str>,
        diminutives: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            version,
            proper_names: proper_names.into_iter().map(str::to_string).collect(),
            diminutives: diminutives.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// A table without entries: every rule applies without lexical shifts.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in table for `language`.
    pub fn for_language(language: Language) -> &'static LexicalExceptions {
        match language {
            Language::German => &*GERMAN,
            Language::Dutch => &*DUTCH,
        }
    }

    pub fn with_proper_name(mut self, name: &str) -> Self {
        self.proper_names.insert(name.to_string());
        self
    }

    pub fn with_diminutive(mut self, form: &str) -> Self {
        self.diminutives.insert(form.to_lowercase());
        self
    }

    /// Exact, case-sensitive match.
    pub fn is_proper_name(&self, form: &str) -> bool {
        self.proper_names.contains(form)
    }

    pub fn is_diminutive(&self, form: &str) -> bool {
        self.diminutives.contains(&form.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_proper_names() {
        for language in [Language::German, Language::Dutch] {
            let table = LexicalExceptions::for_language(language);
            for name in ["Staf", "Han", "Essent", "NPO", "Bertolt", "Günter"] {
                assert!(table.is_proper_name(name), "{name} missing for {language}");
            }
            assert!(!table.is_proper_name("Anna"));
            assert!(!table.is_proper_name("günter"));
            assert_eq!(table.version, EXCEPTIONS_VERSION);
        }
    }

    #[test]
    fn test_diminutives_only_in_dutch() {
        let dutch = LexicalExceptions::for_language(Language::Dutch);
        let german = LexicalExceptions::for_language(Language::German);
        assert!(dutch.is_diminutive("kopje"));
        assert!(dutch.is_diminutive("Kopjes"));
        assert!(!dutch.is_diminutive("tas"));
        assert!(!german.is_diminutive("kopje"));
    }

    #[test]
    fn test_extending_a_table() {
        let table = LexicalExceptions::empty()
            .with_proper_name("Marie-Luise")
            .with_diminutive("Huisje");
        assert!(table.is_proper_name("Marie-Luise"));
        assert!(table.is_diminutive("huisje"));
        assert!(!table.is_proper_name("Günter"));
    }
}
