use tracing::info;

use crate::record::{rewrite_metadata_delimiter, MetadataDialect};

const METADATA_COLUMN: usize = 5;

fn other(dialect: MetadataDialect) -> MetadataDialect {
    match dialect {
        MetadataDialect::Colon => MetadataDialect::Equals,
        MetadataDialect::Equals => MetadataDialect::Colon,
    }
}

/// Rewrites the metadata column of every token line into `to`.
///
/// Works line by line: blank lines, comments and all other columns are copied unchanged.
pub fn rewrite_dialect(text: &str, to: MetadataDialect) -> String {
    let from = other(to);
    let mut rewritten = 0;
    let mut out = String::with_capacity(text.len());

    for line in text.lines() {
        let mut columns: Vec<String> = line.split('\t').map(str::to_string).collect();
        if !line.starts_with('#') && columns.len() > METADATA_COLUMN {
            columns[METADATA_COLUMN] =
                rewrite_metadata_delimiter(&columns[METADATA_COLUMN], from, to);
            rewritten += 1;
        }
        out.push_str(&columns.join("\t"));
        out.push('\n');
    }

    info!(lines = rewritten, "rewrote metadata dialect");
    out
}
