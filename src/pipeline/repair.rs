//! Markup repair: deterministic cleanup of glued tags and attributes.
//!
//! ## Why is repair necessary?
//!
//! Some raster-to-vector authoring tools emit SVG where the whitespace
//! separating tag names and attributes, or two adjacent quoted attributes,
//! has been lost:
//!
//! - `<pathd="M0 0L5 5"/>` — tag name fused with its first attribute
//! - `x="1"y="2"` — no space between quoted attributes
//! - `d="M0 0"style="…"` — path data fused with the next attribute
//!
//! A real XML parser rejects all of these outright. This module instead
//! applies five cheap, deterministic regex passes that restore the missing
//! separators without touching content, so the extraction stage downstream
//! can still find every path. It is a best-effort heuristic, not a markup
//! parser: it never fails, and imperfectly repaired input simply yields
//! fewer extraction matches.
//!
//! ## Rule Order
//!
//! Rules must run in this specific order: tag/attribute splitting first so
//! the quoted-attribute rules see well-formed tag starts, value spacing
//! before the final whitespace collapse so superfluous inserted spaces are
//! folded back to one. The collapse pass also makes the whole sequence
//! idempotent on markup that is already free of the defect class.

use once_cell::sync::Lazy;
use regex::Regex;

/// Apply all repair rules to the raw markup.
///
/// Runs five deterministic passes in a defined order. Each pass is a pure
/// function (`&str → String`) with no shared state.
///
/// Rules (applied in order):
/// 1. Insert a space between a tag name and a fused attribute token
/// 2. Insert a space between two adjacent quoted attributes
/// 3. Insert a space after a `d="…"` value fused with another attribute
/// 4. Insert a space after every simple quoted value
/// 5. Collapse any run of 2+ whitespace characters to a single space
pub fn repair_markup(input: &str) -> String {
    let s = split_tag_and_attribute(input);
    let s = split_adjacent_quoted_attributes(&s);
    let s = split_path_data_boundary(&s);
    let s = pad_quoted_values(&s);
    collapse_whitespace(&s)
}

// ── Rule 1: Split tag name from fused attribute ──────────────────────────────
//
// `<pathd=` → `<path d=`. The attribute token is consumed and re-emitted
// rather than asserted with a lookahead (the regex crate has none); under
// replace_all the two forms rewrite the text identically.

static RE_TAG_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([a-zA-Z0-9:-]+)([a-zA-Z-]+=)").unwrap());

fn split_tag_and_attribute(input: &str) -> String {
    RE_TAG_ATTR.replace_all(input, "<$1 $2").to_string()
}

// ── Rule 2: Split adjacent quoted attributes ─────────────────────────────────
//
// `x="1"y="2"` → `x="1" y="2"`: the closing quote of one value directly
// touching the next attribute name.

static RE_QUOTE_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([a-zA-Z-]+=)""#).unwrap());

fn split_adjacent_quoted_attributes(input: &str) -> String {
    RE_QUOTE_ATTR.replace_all(input, "\" $1\"").to_string()
}

// ── Rule 3: Split path data from a fused following attribute ─────────────────
//
// Path data may contain any character except the quote, so rule 2 (which
// only recognises simple attribute names) cannot see this boundary.

static RE_D_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"d="([^"]+)"([a-zA-Z-]+=)"#).unwrap());

fn split_path_data_boundary(input: &str) -> String {
    RE_D_BOUNDARY.replace_all(input, "d=\"$1\" $2").to_string()
}

// ── Rule 4: Pad simple quoted values ─────────────────────────────────────────
//
// A space after every `"value"` whose content is a plain token. Catches
// boundaries the earlier rules miss (numeric attribute names, `>` hugging a
// value). The extra spaces this introduces next to already-correct markup
// are folded away by rule 5.

static RE_QUOTED_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([a-zA-Z0-9.-]+)""#).unwrap());

fn pad_quoted_values(input: &str) -> String {
    RE_QUOTED_VALUE.replace_all(input, "\"$1\" ").to_string()
}

// ── Rule 5: Collapse whitespace runs ─────────────────────────────────────────

static RE_MULTI_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

fn collapse_whitespace(input: &str) -> String {
    RE_MULTI_WS.replace_all(input, " ").to_string()
}

// ── Tests ────────────────────────────────────────────────────────────────────
