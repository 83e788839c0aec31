//! Kata id extraction.
//!
//! The import tool accepts either a full kata URL or a raw id. The id is a
//! hex string; URLs carry it in a `kata/<hex>` path segment.

use std::sync::OnceLock;

use regex::Regex;

/// Matches a `kata/<hex>` path segment or a bare 24-char hex id.
fn kata_id_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"kata/([0-9a-f]+)|\b([0-9a-f]{24})\b").ok())
        .as_ref()
}

/// Extract a kata id from a URL or raw input.
///
/// Recognizes a `kata/<hex>` path segment (any length of hex, so slugs with
/// trailing text are cut at the first non-hex character) and bare
/// 24-character hex ids embedded in other text. Input that matches neither
/// is returned trimmed, verbatim — the API accepts slugs as identifiers too.
#[must_use]
pub fn extract_challenge_id(input: &str) -> String {
    kata_id_pattern()
        .and_then(|pattern| pattern.captures(input))
        .and_then(|captures| captures.get(1).or_else(|| captures.get(2)))
        .map_or_else(|| input.trim().to_string(), |id| id.as_str().to_string())
}
