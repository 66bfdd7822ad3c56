//! Path extraction: pull every `<path>` element's `d` attribute.
//!
//! Runs on repaired markup, so a single regex with a mandatory space before
//! `d="` is sufficient: the repair stage has already restored the
//! separators this pattern relies on. Elements without a `d` attribute (or
//! with an empty one) simply do not match and are skipped. Finding nothing
//! is not an error; the caller emits an entity-empty document.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_PATH_DATA: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<path[^>]* d="([^"]+)""#).unwrap());

/// Return each path element's data string, in document order.
pub fn extract_path_data(markup: &str) -> Vec<String> {
    RE_PATH_DATA
        .captures_iter(markup)
        .map(|caps| caps[1].to_string())
        .collect()
}
