use serde_json::Value;

use crate::record::{extract, FieldPath, FALLBACK};

/// One column of a report section: display label, path into the source
/// record, and the value substituted when the path resolves to nothing.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub label: &'static str,
    pub path: FieldPath,
    pub fallback: &'static str,
}

impl Column {
    pub const fn new(label: &'static str, path: FieldPath) -> Self {
        Self {
            label,
            path,
            fallback: FALLBACK,
        }
    }
}

/// Project records into rows, one row per record, in input order.
///
/// Each row's values follow the mapping's column order regardless of the
/// source record's own key order. Malformed records yield fallback-heavy
/// rows, never an error. The iterator is lazy; collecting it forces
/// evaluation, which is safe since responses are bounded by the API's
/// `limit` parameter.
pub fn project<'a>(
    records: &'a [Value],
    mapping: &'a [Column],
) -> impl Iterator<Item = Vec<String>> + 'a {
    records.iter().map(move |record| {
        mapping
            .iter()
            .map(|column| extract(record, column.path, column.fallback))
            .collect()
    })
}
