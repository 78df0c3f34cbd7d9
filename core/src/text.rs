//! String matching helpers.

/// Case-insensitive substring test using per-character Unicode lowercase
/// mapping, which is the same in every locale and position. An empty
/// `needle` matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}

// `str::to_lowercase` applies the final-sigma rule; folding char by char
// keeps a letter's lowercase form independent of its neighbours.
fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}
