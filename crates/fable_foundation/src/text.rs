//! Engine-wide text policy.
//!
//! Matching is case-insensitive substring containment, everywhere. One
//! policy keeps collectors and tests predictable.

/// Returns true if `haystack` contains `needle`, ignoring ASCII case.
///
/// An empty needle matches everything, which lets a bare verb fall through
/// to "collect nothing" handling upstream rather than failing here.
#[must_use]
pub fn matches_search(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

/// Joins the non-empty parts with single newlines.
///
/// Event results compose this way: an event's own message first, then each
/// member result, with empty results dropped entirely.
#[must_use]
pub fn join_lines<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join_with(parts, "\n")
}

/// Joins the non-empty parts with blank lines between them.
///
/// Used for paragraph-level output such as a room description followed by
/// an on-enter message.
#[must_use]
pub fn join_blocks<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join_with(parts, "\n\n")
}

fn join_with<I, S>(parts: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        let part = part.as_ref();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(separator);
        }
        out.push_str(part);
    }
    out
}
