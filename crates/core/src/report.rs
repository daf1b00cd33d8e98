use serde_json::Value;

use crate::project::{project, Column};
use crate::record::extract;
use crate::table;

/// A titled, independently omittable group of rows within a report.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Section {
    /// Project a list of records through a field mapping, one row per
    /// record.
    pub fn from_records(title: &str, records: &[Value], mapping: &[Column]) -> Self {
        Self {
            title: title.to_string(),
            headers: mapping.iter().map(|c| c.label.to_string()).collect(),
            rows: project(records, mapping).collect(),
        }
    }

    /// Transpose a single record into a two-column Field/Value table.
    ///
    /// A present record always yields one row per mapping entry; missing
    /// fields degrade to fallback values, not missing rows, so the section
    /// never composes away once the record exists.
    pub fn from_record_fields(title: &str, record: &Value, mapping: &[Column]) -> Self {
        Self {
            title: title.to_string(),
            headers: vec!["Field".to_string(), "Value".to_string()],
            rows: mapping
                .iter()
                .map(|c| vec![c.label.to_string(), extract(record, c.path, c.fallback)])
                .collect(),
        }
    }

    /// Build a section from pre-computed rows, for shapes that are not a
    /// one-to-one projection of a record list (e.g. flattened link pairs).
    pub fn from_rows(title: &str, headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            title: title.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }
}

/// Assemble sections into one report.
///
/// Sections with zero rows are omitted; survivors keep their declared
/// order, each printed as a `Title:` line followed by its table, with one
/// blank line between sections. When nothing survives, `no_data` is
/// returned verbatim.
pub fn compose(sections: &[Section], no_data: &str) -> String {
    let mut output = String::new();

    for section in sections.iter().filter(|s| !s.rows.is_empty()) {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&section.title);
        output.push_str(":\n");
        output.push_str(&table::render(&section.headers, &section.rows));
    }

    if output.is_empty() {
        no_data.to_string()
    } else {
        output
    }
}
