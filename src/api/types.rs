//! Conversion from raw API JSON to table records.
//!
//! The launch endpoint returns an array of JSON objects with a mix of
//! scalars, arrays, and nested objects. The table only understands text and
//! numbers, so ingestion flattens each object to its top-level string and
//! number fields and drops everything else. Objects without a string `id`
//! cannot be keyed and are skipped.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::warn;

use crate::model::{Cell, Record};

/// Convert one JSON object into a record.
///
/// Returns `None` when the value is not an object or has no string `id`.
pub fn record_from_json(value: &Value) -> Option<Record> {
    let object = value.as_object()?;

    let mut fields = BTreeMap::new();
    for (key, val) in object {
        match val {
            Value::String(s) => {
                fields.insert(key.clone(), Cell::Text(s.clone()));
            }
            Value::Number(n) => {
                if let Some(f) = n.as_f64() {
                    fields.insert(key.clone(), Cell::Number(f));
                }
            }
            // Booleans, nulls, arrays, and nested objects have no cell
            // representation.
            _ => {}
        }
    }

    Record::new(fields)
}

/// Convert a JSON array response into records, skipping malformed entries.
pub fn records_from_json(value: &Value) -> Option<Vec<Record>> {
    let items = value.as_array()?;

    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0usize;
    for item in items {
        match record_from_json(item) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(skipped, total = items.len(), "Skipped entries without an id");
    }

    Some(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_fields_are_kept() {
        let json = json!({
            "id": "5eb87cd9ffd86e000604b32a",
            "name": "FalconSat",
            "flight_number": 1,
            "date_utc": "2006-03-24T22:30:00.000Z",
            "date_unix": 1143239400
        });

        let record = record_from_json(&json).unwrap();
        assert_eq!(record.id(), "5eb87cd9ffd86e000604b32a");
        assert_eq!(record.get("name"), Some(&Cell::Text("FalconSat".into())));
        assert_eq!(record.get("flight_number"), Some(&Cell::Number(1.0)));
        assert_eq!(record.get("date_unix"), Some(&Cell::Number(1143239400.0)));
    }

    #[test]
    fn test_non_scalar_fields_are_dropped() {
        let json = json!({
            "id": "x",
            "success": false,
            "failures": [{"time": 33}],
            "links": {"webcast": "https://example.com"},
            "window": null
        });

        let record = record_from_json(&json).unwrap();
        assert_eq!(record.get("success"), None);
        assert_eq!(record.get("failures"), None);
        assert_eq!(record.get("links"), None);
        assert_eq!(record.get("window"), None);
        assert_eq!(record.field_count(), 1);
    }

    #[test]
    fn test_object_without_id_is_rejected() {
        assert!(record_from_json(&json!({"name": "no id"})).is_none());
        assert!(record_from_json(&json!({"id": 42, "name": "numeric id"})).is_none());
        assert!(record_from_json(&json!("not an object")).is_none());
    }

    #[test]
    fn test_array_conversion_skips_bad_entries() {
        let json = json!([
            {"id": "a", "n": 1},
            {"n": 2},
            {"id": "b", "n": 3}
        ]);

        let records = records_from_json(&json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), "a");
        assert_eq!(records[1].id(), "b");
    }

    #[test]
    fn test_non_array_response_is_rejected() {
        assert!(records_from_json(&json!({"error": "nope"})).is_none());
    }
}
