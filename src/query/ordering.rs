use std::cmp::Ordering;

use serde_json::Value;

use super::filtering::text_of;
use super::params::SortDirection;

/// Stable in-place sort on one field. Records where the field is missing or
/// null sort last regardless of direction; numbers compare numerically,
/// everything else as lowercased text.
pub fn sort(records: &mut [Value], field: &str, direction: SortDirection) {
    records.sort_by(|a, b| compare(a.get(field), b.get(field), direction));
}

fn compare(a: Option<&Value>, b: Option<&Value>, direction: SortDirection) -> Ordering {
    match (present(a), present(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => {
            let ordering = value_cmp(x, y);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn value_cmp(a: &Value, b: &Value) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_f64(), b.as_f64()) {
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }
    let x = text_of(a).unwrap_or_default().to_lowercase();
    let y = text_of(b).unwrap_or_default().to_lowercase();
    x.cmp(&y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(records: &[Value]) -> Vec<i64> {
        records.iter().map(|r| r["id"].as_i64().unwrap()).collect()
    }

    #[test]
    fn strings_sort_case_insensitively() {
        let mut records = vec![
            json!({"id": 1, "nom": "dupont"}),
            json!({"id": 2, "nom": "Bernard"}),
            json!({"id": 3, "nom": "ALBERT"}),
        ];
        sort(&mut records, "nom", SortDirection::Asc);
        assert_eq!(ids(&records), vec![3, 2, 1]);
    }

    #[test]
    fn numbers_sort_numerically_not_lexically() {
        let mut records = vec![
            json!({"id": 1, "solde": 9}),
            json!({"id": 2, "solde": 30}),
            json!({"id": 3, "solde": 100}),
        ];
        sort(&mut records, "solde", SortDirection::Asc);
        assert_eq!(ids(&records), vec![1, 2, 3]);
    }

    #[test]
    fn missing_values_sort_last_in_both_directions() {
        let base = vec![
            json!({"id": 1}),
            json!({"id": 2, "nom": "Martin"}),
            json!({"id": 3, "nom": null}),
            json!({"id": 4, "nom": "Aubert"}),
        ];

        let mut asc = base.clone();
        sort(&mut asc, "nom", SortDirection::Asc);
        assert_eq!(ids(&asc), vec![4, 2, 1, 3]);

        let mut desc = base;
        sort(&mut desc, "nom", SortDirection::Desc);
        assert_eq!(ids(&desc), vec![2, 4, 1, 3]);
    }

    #[test]
    fn sort_is_stable_on_equal_keys() {
        let mut records = vec![
            json!({"id": 1, "statut": "actif"}),
            json!({"id": 2, "statut": "actif"}),
            json!({"id": 3, "statut": "actif"}),
        ];
        sort(&mut records, "statut", SortDirection::Desc);
        assert_eq!(ids(&records), vec![1, 2, 3]);
    }
}
