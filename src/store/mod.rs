pub mod document;
pub mod error;
pub mod repository;

pub use document::Document;
pub use error::StoreError;
pub use repository::Repository;

use chrono::Utc;
use serde_json::Value;

/// Default id for created records: current time in epoch milliseconds. Two
/// creations in the same millisecond can collide; that risk is documented,
/// not guarded against.
pub fn next_record_id() -> Value {
    Value::from(Utc::now().timestamp_millis())
}

/// Coerce a raw id path segment the way the router compares it: numeric
/// segments become numbers, everything else stays a string.
pub fn path_id_value(segment: &str) -> Value {
    segment
        .parse::<i64>()
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(segment))
}

pub(crate) fn id_matches(record: &Value, segment: &str) -> bool {
    record.get("id") == Some(&path_id_value(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_id_coercion() {
        assert_eq!(path_id_value("12"), json!(12));
        assert_eq!(path_id_value("abc-3"), json!("abc-3"));
        assert_eq!(path_id_value("-4"), json!(-4));
    }

    #[test]
    fn id_matching_distinguishes_number_from_string() {
        assert!(id_matches(&json!({"id": 5}), "5"));
        assert!(!id_matches(&json!({"id": "5"}), "5"));
        assert!(id_matches(&json!({"id": "RH"}), "RH"));
        assert!(!id_matches(&json!({"nom": "x"}), "1"));
    }
}
