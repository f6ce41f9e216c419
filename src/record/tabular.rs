use std::io;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use super::sentence::Sentence;
use super::token::Relation;
use super::RecordError;

pub const WORD_ORDER: &str = "Word Order";
pub const OTHER_PROPERTIES: &str = "Other Properties";
pub const SUBJECT_POSITION: &str = "Subject Position";
pub const OBJECT_POSITION: &str = "Object Position";
pub const SENTENCE: &str = "Sentence";

/// Header of the tabular format, in column order.
pub const HEADER: [&str; 5] = [
    WORD_ORDER,
    OTHER_PROPERTIES,
    SUBJECT_POSITION,
    OBJECT_POSITION,
    SENTENCE,
];

pub const DELIMITER: u8 = b'\t';

/// One sentence of the tabular test-suite format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularRecord {
    pub word_order: String,
    pub other_props: String,
    pub subject_position: Option<usize>,
    pub object_position: Option<usize>,
    pub sentence: String,
}

impl TabularRecord {
    /// Fields in header order; absent positions become empty fields.
    pub fn to_row(&self) -> [String; 5] {
        let position = |p: Option<usize>| p.map(|p| p.to_string()).unwrap_or_default();
        [
            self.word_order.clone(),
            self.other_props.clone(),
            position(self.subject_position),
            position(self.object_position),
            self.sentence.clone(),
        ]
    }

    pub fn words(&self) -> Vec<&str> {
        self.sentence.split_whitespace().collect()
    }
}

/// Column layout of a tabular file, resolved from its header record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabularLayout {
    columns: [usize; 5],
}

impl TabularLayout {
    pub fn from_headers(headers: &StringRecord) -> Result<Self, RecordError> {
        if headers.iter().all(|name| name.trim().is_empty()) {
            return Err(RecordError::MissingHeader);
        }

        let mut columns = [0; 5];
        for (slot, expected) in columns.iter_mut().zip(HEADER) {
            *slot = headers
                .iter()
                .position(|name| name.trim() == expected)
                .ok_or_else(|| RecordError::MissingColumn(expected.to_string()))?;
        }
        Ok(Self { columns })
    }

    /// Reads one data record; `row` is the 1-based data row number used in errors.
    pub fn read_record(
        &self,
        fields: &StringRecord,
        row: usize,
    ) -> Result<TabularRecord, RecordError> {
        let field = |i: usize| -> Result<&str, RecordError> {
            let column = self.columns[i];
            fields.get(column).ok_or_else(|| RecordError::ShortRow {
                row,
                expected: column + 1,
                found: fields.len(),
            })
        };

        Ok(TabularRecord {
            word_order: field(0)?.trim().to_string(),
            other_props: field(1)?.trim().to_string(),
            subject_position: parse_position(field(2)?, SUBJECT_POSITION, row)?,
            object_position: parse_position(field(3)?, OBJECT_POSITION, row)?,
            sentence: field(4)?.trim().to_string(),
        })
    }
}

fn parse_position(raw: &str, column: &str, row: usize) -> Result<Option<usize>, RecordError> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "None" {
        return Ok(None);
    }
    raw.parse::<usize>()
        .map(Some)
        .map_err(|_| RecordError::InvalidPosition {
            row,
            column: column.to_string(),
            value: raw.to_string(),
        })
}

/// Reads a tab-delimited file with a header line. Quoted fields follow RFC 4180, so a
/// doubled `""` inside quotes is one `"`. Rows whose fields are all blank are skipped.
pub fn read_tabular(text: &str) -> Result<Vec<TabularRecord>, RecordError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|source| RecordError::Csv { row: 0, source })?
        .clone();
    let layout = TabularLayout::from_headers(&headers)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let fields = result.map_err(|source| RecordError::Csv { row, source })?;
        if fields.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        records.push(layout.read_record(&fields, row)?);
    }
    Ok(records)
}

/// Renders records as a tab-delimited file, header first, one `\n`-terminated line per
/// record. Fields holding a tab or a `"` are quoted.
pub fn write_tabular<'a>(
    records: impl IntoIterator<Item = &'a TabularRecord>,
) -> Result<String, RecordError> {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(HEADER)
        .map_err(|source| RecordError::Csv { row: 0, source })?;
    for (i, record) in records.into_iter().enumerate() {
        writer
            .write_record(record.to_row())
            .map_err(|source| RecordError::Csv { row: i + 1, source })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| RecordError::Render(err.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|err| RecordError::Render(io::Error::new(io::ErrorKind::InvalidData, err)))
}

impl Sentence {
    /// Tabular view of an annotated sentence, taking subject and object from the
    /// `nsubj`/`obj` relations.
    pub fn to_tabular(&self) -> Result<TabularRecord, RecordError> {
        let order = self.order().ok_or_else(|| RecordError::MissingMetadata {
            key: super::metadata::ORDER_KEY,
            sentence: self.text(),
        })?;
        let props = self.props().ok_or_else(|| RecordError::MissingMetadata {
            key: super::metadata::PROPS_KEY,
            sentence: self.text(),
        })?;

        Ok(TabularRecord {
            word_order: order.to_string(),
            other_props: props.to_string(),
            subject_position: self.position_of(&Relation::Nsubj),
            object_position: self.position_of(&Relation::Obj),
            sentence: self.text(),
        })
    }
}
