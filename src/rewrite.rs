//! Visibility rewrite applied to extracted blocks before emission.
//!
//! The declaration's leading qualifiers are parsed and the line re-rendered
//! deterministically, so a declaration that is already `pub` (in any form)
//! passes through untouched instead of growing a second qualifier.

use once_cell::sync::Lazy;
use regex::Regex;

static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?P<vis>pub(?:\([^)]*\))?\s+)?(?P<asy>async\s+)?(?P<kw>fn)\b")
        .unwrap()
});

/// Ensures the block's declaration carries a `pub` qualifier.
///
/// Inserts `pub ` before the declaration keyword (before `async` when
/// present). Blocks whose declaration already has a visibility qualifier,
/// and blocks with no recognizable declaration, are returned unchanged.
pub fn make_public(block: &str) -> String {
    let Some(caps) = DECLARATION.captures(block) else {
        return block.to_string();
    };
    if caps.name("vis").is_some() {
        return block.to_string();
    }

    let insert_at = caps
        .name("asy")
        .map(|m| m.start())
        .unwrap_or_else(|| caps.name("kw").map(|m| m.start()).unwrap_or(0));

    format!("{}pub {}", &block[..insert_at], &block[insert_at..])
}
