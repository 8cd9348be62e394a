//! Project-name slugs and percent-encoding helpers.

#[cfg(test)]
#[path = "slug_test.rs"]
mod slug_test;

/// Derive a URL-safe slug from a human-readable project name.
///
/// Lowercases, trims, strips everything outside the word/space/hyphen
/// class, collapses runs of whitespace/underscores/hyphens to a single
/// hyphen, and trims leading/trailing hyphens. Idempotent.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut run_separator = false;
    for ch in text.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if run_separator && !slug.is_empty() {
                slug.push('-');
            }
            run_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '_' || ch == '-' {
            run_separator = true;
        }
    }
    slug
}

/// Percent-encode a value for use in a URL path segment or query value.
#[must_use]
pub fn percent_encode(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Decode a percent-encoded value, returning the input unchanged when it is
/// not valid percent-encoding. Organization names configured through env
/// files sometimes arrive pre-encoded.
#[must_use]
pub fn percent_decode(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), |decoded| decoded.into_owned())
}
