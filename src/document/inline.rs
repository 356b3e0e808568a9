//! Inline markup stripping.
//!
//! Terminal output is styled per line, so inline spans are flattened to
//! plain text: links keep their target in angle brackets, emphasis and code
//! markers are dropped.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern should compile")
});

static STRONG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(.*?)\*\*|__(.*?)__").expect("strong pattern should compile")
});

static EMPHASIS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*|_(.*?)_").expect("emphasis pattern should compile"));

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("code pattern should compile"));

/// Resolve inline markdown in a single line to its display form.
///
/// # Example
///
/// ```
/// use mdview::document::strip_inline;
///
/// assert_eq!(
///     strip_inline("see [docs](https://example.com) for **more**"),
///     "see docs <https://example.com> for more"
/// );
/// ```
pub fn strip_inline(line: &str) -> String {
    let text = LINK_RE.replace_all(line, "$1 <$2>");
    let text = STRONG_RE.replace_all(&text, either_group);
    let text = EMPHASIS_RE.replace_all(&text, either_group);
    CODE_RE.replace_all(&text, "$1").into_owned()
}

// The delimiter patterns are two-way alternations; exactly one side matched.
fn either_group(caps: &Captures<'_>) -> String {
    caps.get(1)
        .or_else(|| caps.get(2))
        .map_or_else(String::new, |m| m.as_str().to_string())
}
