pub mod filtering;
pub mod ordering;
pub mod params;

pub use params::{ListQuery, SortDirection};

use serde_json::Value;

/// One evaluated page of a collection, with the counters the DataTables
/// server-side contract expects.
#[derive(Debug, Clone)]
pub struct Page {
    pub records: Vec<Value>,
    /// Unfiltered collection size.
    pub records_total: usize,
    /// Size after filters, before slicing.
    pub records_filtered: usize,
}

/// Full list pipeline: filter, sort, then slice `start..start+length` of the
/// result. Without `length` the whole filtered set is returned.
pub fn evaluate(records: Vec<Value>, query: &ListQuery) -> Page {
    let records_total = records.len();

    let mut filtered = filtering::apply(records, &query.filters);
    if let Some(field) = &query.sort_by {
        ordering::sort(&mut filtered, field, query.sort_dir);
    }
    let records_filtered = filtered.len();

    let start = query.start.min(filtered.len());
    let end = match query.length {
        Some(length) => start.saturating_add(length).min(filtered.len()),
        None => filtered.len(),
    };
    let records = filtered.drain(start..end).collect();

    Page {
        records,
        records_total,
        records_filtered,
    }
}
