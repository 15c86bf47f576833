//! Filesystem-safe slugs for emitted HTML file names.

use unicode_normalization::UnicodeNormalization;

/// Maximum slug length in characters.
pub const MAX_SLUG_LEN: usize = 80;

/// Returned when nothing survives sanitization.
pub const FALLBACK_SLUG: &str = "item";

/// Combining diacritical marks block, stripped after NFKD decomposition.
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Turn arbitrary text into a token made of `[A-Za-z0-9_-]`.
///
/// `fallback` is used when `input` is absent or empty. Steps: NFKD
/// decomposition, diacritics removed, every run of disallowed characters
/// replaced by a single `-`, leading and trailing `-` trimmed, truncated
/// to [`MAX_SLUG_LEN`]. Never returns an empty string.
///
/// Truncation happens after trimming, so a slug cut mid-run may end in `-`.
pub fn slug(input: Option<&str>, fallback: &str) -> String {
    let source = match input {
        Some(s) if !s.is_empty() => s,
        _ => fallback,
    };

    let mut out = String::with_capacity(source.len());
    let mut in_run = false;
    for c in source.nfkd().filter(|c| !is_combining_mark(*c)) {
        if is_allowed(c) {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('-');
            in_run = true;
        }
    }

    let slug: String = out.trim_matches('-').chars().take(MAX_SLUG_LEN).collect();
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}
