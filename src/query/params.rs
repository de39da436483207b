use std::collections::HashMap;

/// Query keys consumed by the list pipeline itself. Every other key is
/// treated as a field filter.
const RESERVED: &[&str] = &["start", "length", "sortBy", "sortDir"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn from_param(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// Parsed list-endpoint query string, DataTables style: a window
/// (`start`/`length`), an optional sort key, and free-form field filters.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub start: usize,
    /// Page size. Absent means "no slicing": the whole filtered set.
    pub length: Option<usize>,
    pub sort_by: Option<String>,
    pub sort_dir: SortDirection,
    /// Remaining query pairs, matched as case-insensitive substrings against
    /// the same-named record field.
    pub filters: Vec<(String, String)>,
}

impl ListQuery {
    pub fn from_map(params: &HashMap<String, String>) -> Self {
        let start = params
            .get("start")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0);
        let length = params.get("length").and_then(|raw| raw.parse().ok());
        let sort_by = params
            .get("sortBy")
            .map(|raw| raw.trim().to_string())
            .filter(|field| !field.is_empty());
        let sort_dir = params
            .get("sortDir")
            .map(|raw| SortDirection::from_param(raw))
            .unwrap_or_default();

        let mut filters: Vec<(String, String)> = params
            .iter()
            .filter(|(key, value)| !RESERVED.contains(&key.as_str()) && !value.is_empty())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        // HashMap iteration order is arbitrary; keep filters deterministic.
        filters.sort();

        Self {
            start,
            length,
            sort_by,
            sort_dir,
            filters,
        }
    }
}
