//! Record and column types for the table view-model.
//!
//! A record is a flat mapping from field name to a text-or-number cell value,
//! with one required `id` field that uniquely identifies it within the
//! dataset. Records are immutable once built; the view-model engine only
//! reads them.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single cell value: either text or a number.
///
/// This is the only value space the table understands. Anything else in the
/// source data (booleans, arrays, nested objects) is dropped at ingestion.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// A numeric value. Stored as f64 to cover both integers and floats
    /// from JSON without loss for the magnitudes seen in practice.
    Number(f64),
    /// A text value.
    Text(String),
}

impl Cell {
    /// Render the cell for display.
    pub fn display(&self) -> String {
        match self {
            // Integral floats print without a trailing ".0" so flight
            // numbers and unix timestamps look like the source data.
            Cell::Number(n) if n.fract() == 0.0 && n.is_finite() => format!("{}", *n as i64),
            Cell::Number(n) => format!("{}", n),
            Cell::Text(s) => s.clone(),
        }
    }

    /// Whether this cell holds a number (used for column alignment).
    pub fn is_number(&self) -> bool {
        matches!(self, Cell::Number(_))
    }

    /// Three-way comparison with standard ordering semantics per type:
    /// numeric for numbers, lexicographic for text.
    ///
    /// Comparing a number against text is not meaningful for the data this
    /// table handles, but the order must still be total so sorting never
    /// panics: numbers order before text, and NaN compares equal to
    /// everything numeric.
    pub fn compare(&self, other: &Cell) -> Ordering {
        match (self, other) {
            (Cell::Number(a), Cell::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Cell::Text(a), Cell::Text(b)) => a.cmp(b),
            (Cell::Number(_), Cell::Text(_)) => Ordering::Less,
            (Cell::Text(_), Cell::Number(_)) => Ordering::Greater,
        }
    }
}

/// One data row: a mapping from field name to cell value.
///
/// The `id` field is required and is stored inside the field map like any
/// other field, so it can also be displayed as a column.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, Cell>,
}

impl Record {
    /// Build a record from a field map.
    ///
    /// Returns `None` when the map has no text `id` field; such rows cannot
    /// be keyed and are dropped by the caller.
    pub fn new(fields: BTreeMap<String, Cell>) -> Option<Self> {
        match fields.get("id") {
            Some(Cell::Text(_)) => Some(Self { fields }),
            _ => None,
        }
    }

    /// The record's unique identifier.
    pub fn id(&self) -> &str {
        match self.fields.get("id") {
            Some(Cell::Text(s)) => s,
            // new() guarantees a text id.
            _ => unreachable!("record constructed without a text id"),
        }
    }

    /// Look up a field by name. Missing fields render as empty cells.
    pub fn get(&self, key: &str) -> Option<&Cell> {
        self.fields.get(key)
    }

    /// The number of fields on this record.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// A column definition: which field to show and whether the user may sort
/// by it. The ordered sequence of columns determines render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// The record field this column displays. Also used as the literal
    /// header label.
    pub key: String,
    /// Whether activating this column's header toggles a sort on it.
    #[serde(default)]
    pub sortable: bool,
}

impl Column {
    /// Create a column definition.
    pub fn new(key: impl Into<String>, sortable: bool) -> Self {
        Self {
            key: key.into(),
            sortable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn record(pairs: &[(&str, Cell)]) -> Record {
        let fields = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        Record::new(fields).unwrap()
    }

    #[test]
    fn test_record_requires_text_id() {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), text("Falcon 1"));
        assert!(Record::new(fields.clone()).is_none());

        fields.insert("id".to_string(), Cell::Number(7.0));
        assert!(Record::new(fields.clone()).is_none());

        fields.insert("id".to_string(), text("abc"));
        let rec = Record::new(fields).unwrap();
        assert_eq!(rec.id(), "abc");
    }

    #[test]
    fn test_record_field_lookup() {
        let rec = record(&[("id", text("a")), ("n", Cell::Number(3.0))]);
        assert_eq!(rec.get("n"), Some(&Cell::Number(3.0)));
        assert_eq!(rec.get("missing"), None);
        assert_eq!(rec.field_count(), 2);
    }

    #[test]
    fn test_number_comparison() {
        assert_eq!(
            Cell::Number(1.0).compare(&Cell::Number(2.0)),
            Ordering::Less
        );
        assert_eq!(
            Cell::Number(2.0).compare(&Cell::Number(1.0)),
            Ordering::Greater
        );
        assert_eq!(
            Cell::Number(1.5).compare(&Cell::Number(1.5)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_text_comparison_is_lexicographic() {
        assert_eq!(text("apollo").compare(&text("falcon")), Ordering::Less);
        assert_eq!(text("falcon").compare(&text("falcon")), Ordering::Equal);
    }

    #[test]
    fn test_mixed_comparison_is_total() {
        assert_eq!(Cell::Number(9.0).compare(&text("1")), Ordering::Less);
        assert_eq!(text("1").compare(&Cell::Number(9.0)), Ordering::Greater);
    }

    #[test]
    fn test_nan_compares_equal() {
        let nan = Cell::Number(f64::NAN);
        assert_eq!(nan.compare(&Cell::Number(1.0)), Ordering::Equal);
        assert_eq!(nan.compare(&nan), Ordering::Equal);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Number(42.0).display(), "42");
        assert_eq!(Cell::Number(1.5).display(), "1.5");
        assert_eq!(text("Starlink").display(), "Starlink");
    }
}
