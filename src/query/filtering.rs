use serde_json::Value;

/// Text form of a scalar field, used for substring filtering and string
/// sorting. Arrays, objects and nulls have no text form and never match.
pub(crate) fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn field_contains(record: &Value, field: &str, needle: &str) -> bool {
    record
        .get(field)
        .and_then(text_of)
        .map(|haystack| haystack.to_lowercase().contains(&needle.to_lowercase()))
        .unwrap_or(false)
}

/// Keep the records matching every filter as a case-insensitive substring on
/// the same-named field. Records missing a filtered field are excluded.
pub fn apply(records: Vec<Value>, filters: &[(String, String)]) -> Vec<Value> {
    if filters.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| {
            filters
                .iter()
                .all(|(field, needle)| field_contains(record, field, needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn people() -> Vec<Value> {
        vec![
            json!({"id": 1, "nom": "Durand", "departement_id": 10}),
            json!({"id": 2, "nom": "Dupont", "departement_id": 20}),
            json!({"id": 3, "prenom": "Zoé"}),
        ]
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let out = apply(people(), &[("nom".to_string(), "DUR".to_string())]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0]["id"], 1);
    }

    #[test]
    fn numbers_match_by_text_form() {
        let out = apply(people(), &[("departement_id".to_string(), "2".to_string())]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0]["id"], 2);
    }

    #[test]
    fn missing_field_excludes_record() {
        let out = apply(people(), &[("nom".to_string(), "d".to_string())]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn all_filters_must_match() {
        let out = apply(
            people(),
            &[
                ("nom".to_string(), "du".to_string()),
                ("departement_id".to_string(), "10".to_string()),
            ],
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0]["id"], 1);
    }
}
