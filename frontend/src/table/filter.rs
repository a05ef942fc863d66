/// Keep the records where at least one searchable field contains `query`,
/// ignoring case. An empty query keeps everything in the original order.
pub fn filter_records<T: Clone>(
    records: &[T],
    query: &str,
    search_fields: fn(&T) -> Vec<String>,
) -> Vec<T> {
    if query.is_empty() {
        return records.to_vec();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            search_fields(record)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
