//! Answer extraction for multiple-choice queries.
//!
//! A query carries numbered options as lines of the form "N. text". The
//! extractor picks the option whose label appears verbatim (case-insensitive)
//! in the model's free-text response. Matching is plain substring
//! containment, kept bug-for-bug compatible with the service contract: a
//! short label can match inside a longer word ("1900" matches "1900s").
//! There is no confidence score and no disambiguation.

use std::collections::BTreeMap;

/// Parse numbered options out of a query.
///
/// Each line containing a '.' is split at the FIRST dot; if the trimmed
/// prefix is entirely ASCII digits, the line contributes an option with that
/// number and the trimmed, lowercased suffix as its label. A later line with
/// the same number overwrites an earlier one.
pub fn parse_options(query: &str) -> BTreeMap<u32, String> {
    let mut options = BTreeMap::new();

    for line in query.lines() {
        let Some((prefix, suffix)) = line.split_once('.') else {
            continue;
        };
        let prefix = prefix.trim();
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        let Ok(number) = prefix.parse::<u32>() else {
            continue;
        };
        options.insert(number, suffix.trim().to_lowercase());
    }

    options
}

/// Map a model response back onto one of the query's numbered options.
///
/// Returns the lowest-numbered option whose label occurs as a substring of
/// the lowercased response text, or None when no label matches. Pure and
/// deterministic: the BTreeMap keyed by option number fixes the tie-break
/// when several labels are present.
pub fn extract_answer(query: &str, response_text: &str) -> Option<u32> {
    let options = parse_options(query);
    if options.is_empty() {
        return None;
    }

    let response = response_text.to_lowercase();

    for (number, label) in &options {
        // An empty label is a substring of everything; never match it.
        if label.is_empty() {
            continue;
        }
        if response.contains(label.as_str()) {
            return Some(*number);
        }
    }

    None
}
