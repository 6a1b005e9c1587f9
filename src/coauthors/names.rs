/// Literal separator between names in a raw author string.
pub const AUTHOR_SEPARATOR: &str = " and ";

/// Reorder a raw "First Middle Last" name into the NSF "Last, First Middle"
/// form: the final space-separated token becomes the surname, everything
/// before it the given part.
///
/// A single-token name yields "{token}, " with an empty given part. Not
/// idempotent; apply to raw names only.
pub fn nsf_name(raw: &str) -> String {
    match raw.rsplit_once(' ') {
        Some((given, family)) => format!("{}, {}", family, given),
        None => format!("{}, ", raw),
    }
}

/// Split a raw "A and B and C" author string into individual names.
pub fn split_authors(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(AUTHOR_SEPARATOR)
}
