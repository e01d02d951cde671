//! Locates `#[tauri::command]` function definitions in raw source text.
//!
//! Two independent steps: [`find_declaration`] pattern-matches the marker
//! plus signature, [`find_block_end`] runs a delimiter-aware balance scan
//! to the end of the body. The scan skips string literals, raw strings,
//! char literals, line comments and nested block comments, so brace
//! characters inside those never unbalance the count.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SplitError;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Byte offset of the first marker+signature match for `name`, in document
/// order. Later declarations with the same name are ignored.
pub fn find_declaration(source: &str, name: &str) -> Result<Option<usize>, SplitError> {
    if !IDENTIFIER.is_match(name) {
        return Err(SplitError::InvalidFunctionName(name.to_string()));
    }

    let pattern = format!(
        r"#\[tauri::command\]\s*(?:pub(?:\([^)]*\))?\s+)?(?:async\s+)?fn\s+{name}\s*\([^)]*\)"
    );
    // Infallible: `name` is a plain identifier, the rest is static.
    let declaration = Regex::new(&pattern).unwrap();

    Ok(declaration.find(source).map(|m| m.start()))
}

/// Exclusive end offset of the first balanced `{`..`}` block at or after
/// `start`, or `None` if the braces never balance before end of input.
pub fn find_block_end(source: &str, start: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut entered = false;
    let mut i = start;

    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = skip_line_comment(bytes, i);
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = skip_block_comment(bytes, i);
                continue;
            }
            b'"' => {
                i = skip_string(bytes, i);
                continue;
            }
            b'r' | b'b' => {
                if let Some(end) = skip_raw_string(bytes, i) {
                    i = end;
                    continue;
                }
            }
            b'\'' => {
                if let Some(end) = skip_char_literal(bytes, i) {
                    i = end;
                    continue;
                }
                // Otherwise a lifetime; fall through.
            }
            b'{' => {
                depth += 1;
                entered = true;
            }
            b'}' => {
                depth = depth.saturating_sub(1);
                if entered && depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// Exact source slice of the named function (marker through closing
/// brace), or `Ok(None)` when no declaration matches. A miss is a normal
/// outcome for names that live in a different file.
pub fn extract_function<'a>(source: &'a str, name: &str) -> Result<Option<&'a str>, SplitError> {
    let Some(start) = find_declaration(source, name)? else {
        return Ok(None);
    };
    Ok(find_block_end(source, start).map(|end| &source[start..end]))
}

fn skip_line_comment(bytes: &[u8], i: usize) -> usize {
    let mut j = i + 2;
    while j < bytes.len() && bytes[j] != b'\n' {
        j += 1;
    }
    j
}

// Block comments nest in Rust.
fn skip_block_comment(bytes: &[u8], i: usize) -> usize {
    let mut depth = 1usize;
    let mut j = i + 2;
    while j + 1 < bytes.len() && depth > 0 {
        if bytes[j] == b'/' && bytes[j + 1] == b'*' {
            depth += 1;
            j += 2;
        } else if bytes[j] == b'*' && bytes[j + 1] == b'/' {
            depth -= 1;
            j += 2;
        } else {
            j += 1;
        }
    }
    if depth == 0 {
        j
    } else {
        bytes.len()
    }
}

fn skip_string(bytes: &[u8], i: usize) -> usize {
    let mut j = i + 1;
    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b'"' => return j + 1,
            _ => j += 1,
        }
    }
    bytes.len()
}

/// Returns the end of a raw (byte) string starting at `i`, or `None` when
/// the bytes at `i` are not actually a raw-string opener.
fn skip_raw_string(bytes: &[u8], i: usize) -> Option<usize> {
    // An identifier ending in `r`/`b` is not a raw-string prefix.
    if i > 0 && is_ident_byte(bytes[i - 1]) {
        return None;
    }

    let mut j = i;
    if bytes[j] == b'b' {
        j += 1;
    }
    if bytes.get(j) != Some(&b'r') {
        return None;
    }
    j += 1;

    let mut hashes = 0usize;
    while bytes.get(j) == Some(&b'#') {
        hashes += 1;
        j += 1;
    }
    if bytes.get(j) != Some(&b'"') {
        return None;
    }
    j += 1;

    while j < bytes.len() {
        if bytes[j] == b'"' {
            let end = j + 1 + hashes;
            if bytes.len() >= end && bytes[j + 1..end].iter().all(|&b| b == b'#') {
                return Some(end);
            }
        }
        j += 1;
    }
    Some(bytes.len())
}

/// Returns the end of a char literal opening at `i`, or `None` when the
/// quote starts a lifetime instead.
fn skip_char_literal(bytes: &[u8], i: usize) -> Option<usize> {
    let next = *bytes.get(i + 1)?;
    if next == b'\\' {
        // Escapes may span several bytes (`'\u{7fff}'`); scan to the quote
        // that closes the literal, never past a newline.
        let mut j = i + 3;
        while j < bytes.len() {
            match bytes[j] {
                b'\'' => return Some(j + 1),
                b'\n' => return None,
                _ => j += 1,
            }
        }
        None
    } else if next == b'\'' {
        // Empty quotes never form a literal.
        None
    } else {
        let len = utf8_len(next);
        match bytes.get(i + 1 + len) {
            Some(&b'\'') => Some(i + 2 + len),
            _ => None,
        }
    }
}

fn is_ident_byte(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

fn utf8_len(leading: u8) -> usize {
    match leading {
        b if b < 0x80 => 1,
        b if b < 0xE0 => 2,
        b if b < 0xF0 => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SOURCE: &str = indoc! {r#"
        use std::fs;

        #[tauri::command]
        fn get_wallets(state: State) -> Result<Vec<Wallet>, String> {
            let wallets = state.load();
            Ok(wallets)
        }

        #[tauri::command]
        pub async fn ping_proxy(url: String) -> Result<u64, String> {
            let elapsed = probe(&url).await?;
            Ok(elapsed)
        }

        fn helper() {
            // not a command
        }
    "#};

    #[test]
    fn finds_plain_declaration() {
        let start = find_declaration(SOURCE, "get_wallets").unwrap().unwrap();
        assert!(SOURCE[start..].starts_with("#[tauri::command]"));
    }

    #[test]
    fn finds_pub_async_declaration() {
        let block = extract_function(SOURCE, "ping_proxy").unwrap().unwrap();
        assert!(block.starts_with("#[tauri::command]"));
        assert!(block.contains("pub async fn ping_proxy"));
        assert!(block.ends_with('}'));
    }

    #[test]
    fn unmarked_function_is_not_found() {
        assert_eq!(extract_function(SOURCE, "helper").unwrap(), None);
    }

    #[test]
    fn absent_name_is_not_found() {
        assert_eq!(extract_function(SOURCE, "does_not_exist").unwrap(), None);
    }

    #[test]
    fn rejects_non_identifier_names() {
        let err = find_declaration(SOURCE, "get_wallets()").unwrap_err();
        assert_eq!(err, SplitError::InvalidFunctionName("get_wallets()".into()));
    }

    #[test]
    fn span_is_brace_balanced() {
        let block = extract_function(SOURCE, "get_wallets").unwrap().unwrap();
        let mut depth = 0i32;
        let mut peak = 0i32;
        for b in block.bytes() {
            match b {
                b'{' => {
                    depth += 1;
                    peak = peak.max(depth);
                }
                b'}' => depth -= 1,
                _ => {}
            }
            assert!(depth >= 0);
        }
        assert_eq!(depth, 0);
        assert!(peak > 0);
    }

    #[test]
    fn first_declaration_wins() {
        let source = indoc! {r#"
            #[tauri::command]
            fn dup(a: u32) -> u32 {
                a + 1
            }

            #[tauri::command]
            fn dup(a: u64) -> u64 {
                a + 2
            }
        "#};
        let block = extract_function(source, "dup").unwrap().unwrap();
        assert!(block.contains("a + 1"));
        assert!(!block.contains("a + 2"));
    }

    #[test]
    fn braces_inside_string_literals_are_ignored() {
        let source = indoc! {r#"
            #[tauri::command]
            fn render() -> String {
                format!("{{\"open\": \"}}\"}}")
            }
        "#};
        let block = extract_function(source, "render").unwrap().unwrap();
        assert!(block.ends_with('}'));
        assert!(block.contains("format!"));
    }

    #[test]
    fn braces_inside_comments_are_ignored() {
        let source = indoc! {r#"
            #[tauri::command]
            fn noted() -> u32 {
                // closing } here must not end the scan
                /* nor this one: } /* nested { */ } */
                7
            }

            fn after() {}
        "#};
        let block = extract_function(source, "noted").unwrap().unwrap();
        assert!(block.trim_end().ends_with('}'));
        assert!(!block.contains("after"));
    }

    #[test]
    fn braces_inside_raw_strings_are_ignored() {
        let source = indoc! {r##"
            #[tauri::command]
            fn raw() -> &'static str {
                r#"unbalanced } inside"#
            }
        "##};
        let block = extract_function(source, "raw").unwrap().unwrap();
        assert!(block.contains(r##"r#"unbalanced } inside"#"##));
        assert!(block.trim_end().ends_with('}'));
    }

    #[test]
    fn braces_inside_char_literals_are_ignored() {
        let source = indoc! {r#"
            #[tauri::command]
            fn count(input: &str) -> usize {
                input.chars().filter(|&c| c == '}').count()
            }
        "#};
        let block = extract_function(source, "count").unwrap().unwrap();
        assert!(block.trim_end().ends_with('}'));
        assert!(block.contains("'}'"));
    }

    #[test]
    fn lifetimes_do_not_derail_the_scan() {
        let source = indoc! {r#"
            #[tauri::command]
            fn borrow<'a>(input: &'a str) -> &'a str {
                &input[..1]
            }
        "#};
        let block = extract_function(source, "borrow").unwrap().unwrap();
        assert!(block.contains("<'a>"));
        assert!(block.trim_end().ends_with('}'));
    }

    #[test]
    fn unbalanced_body_yields_none() {
        let source = "#[tauri::command]\nfn broken() {\n    let x = 1;\n";
        assert_eq!(extract_function(source, "broken").unwrap(), None);
    }
}
