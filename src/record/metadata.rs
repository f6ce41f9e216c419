// Packed `order`/`props` metadata stored in the sixth token column

pub const ORDER_KEY: &str = "order";
pub const PROPS_KEY: &str = "props";

const PAIR_SEPARATOR: char = '|';

/// Key/value separator convention of the metadata column.
///
/// CoNLL-X files use `order:...|props:...`, CoNLL-U files `order=...|props=...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataDialect {
    Colon,
    Equals,
}

impl MetadataDialect {
    pub fn separator(self) -> char {
        match self {
            MetadataDialect::Colon => ':',
            MetadataDialect::Equals => '=',
        }
    }
}

fn is_separator(c: char) -> bool {
    c == ':' || c == '='
}

/// Returns the value stored under `key`, accepting either separator.
pub fn extract_metadata_field<'a>(metadata: &'a str, key: &str) -> Option<&'a str> {
    metadata.split(PAIR_SEPARATOR).find_map(|pair| {
        let rest = pair.strip_prefix(key)?;
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if is_separator(c) => Some(chars.as_str()),
            _ => None,
        }
    })
}

/// Swaps the key/value separator of every pair from `from` to `to`.
///
/// Only the first separator of a pair is considered, so values containing `:` or `=`
/// are left alone and a second pass towards the same dialect changes nothing.
pub fn rewrite_metadata_delimiter(
    metadata: &str,
    from: MetadataDialect,
    to: MetadataDialect,
) -> String {
    metadata
        .split(PAIR_SEPARATOR)
        .map(|pair| match pair.find(is_separator) {
            Some(at) if pair[at..].starts_with(from.separator()) => {
                format!("{}{}{}", &pair[..at], to.separator(), &pair[at + 1..])
            }
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("|")
}

pub fn format_metadata(order: &str, props: &str, dialect: MetadataDialect) -> String {
    let sep = dialect.separator();
    format!("{ORDER_KEY}{sep}{order}|{PROPS_KEY}{sep}{props}")
}
