use crate::creator::Creator;

const INDEX_SEPARATOR: &str = " / ";

/// Trims surrounding whitespace and lowercases.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Searchable text of a record: name, kana, base and tags, each normalized.
///
/// `role` is left out so that picking a title never happens through free text.
pub fn build_index(creator: &Creator) -> String {
    [&creator.name, &creator.kana, &creator.base]
        .into_iter()
        .chain(creator.tags.iter())
        .map(|part| normalize(part))
        .collect::<Vec<_>>()
        .join(INDEX_SEPARATOR)
}

/// Substring match of the normalized query against the record's index.
pub fn matches_query(creator: &Creator, query: &str) -> bool {
    let query = normalize(query);
    query.is_empty() || build_index(creator).contains(&query)
}
