use super::model::CatalogEntry;

/// Narrows an already-fetched list by a live search string. A blank query
/// returns the input unchanged; otherwise entries whose folded name contains
/// the folded query survive, in their original order. No I/O.
pub fn filter_by_name(entries: Vec<CatalogEntry>, query: &str) -> Vec<CatalogEntry> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return entries;
    }

    let needle = trimmed.to_lowercase();
    entries
        .into_iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .collect()
}
