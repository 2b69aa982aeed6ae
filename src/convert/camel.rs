use crate::convert::tokenizer::{is_delimiter, tokenize, BoundarySplit};

// Unlike the other converters, periods are not delimiters here.
const DELIMITERS: &[char] = &['-', '_'];

/// Convert a string to camelCase.
///
/// The trimmed input is split on whitespace, hyphens and underscores; the
/// first token is lowercased entirely and every later token gets an
/// uppercase first character with the rest lowercased. An input without any
/// delimiter is recased in place instead, keeping an already-camelCase
/// token untouched.
pub fn to_camel_case(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    // The split path applies whenever a delimiter occurs anywhere, even one
    // that only borders the edge: "alreadyCamel-" flattens to "alreadycamel".
    if !trimmed.chars().any(|ch| is_delimiter(ch, DELIMITERS)) {
        return recase_single_token(trimmed);
    }

    let tokens = tokenize(trimmed, DELIMITERS, BoundarySplit::Off);
    let mut result = String::with_capacity(trimmed.len());

    for (i, token) in tokens.iter().enumerate() {
        if i == 0 {
            result.push_str(&token.to_ascii_lowercase());
        } else {
            result.push_str(&capitalize(token));
        }
    }

    result
}

/// A token with no delimiters keeps as much of its original casing as
/// possible.
fn recase_single_token(token: &str) -> String {
    if is_already_camel(token) {
        return token.to_string();
    }

    // No lowercase letters at all: treat the token as an acronym and
    // flatten it.
    if token.to_ascii_uppercase() == token {
        return token.to_ascii_lowercase();
    }

    // Mixed case: only the first character is forced down.
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercase letter first, ASCII letters and digits after, and at least one
/// uppercase letter somewhere.
fn is_already_camel(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    if !chars.as_str().chars().all(|ch| ch.is_ascii_alphanumeric()) {
        return false;
    }
    token.chars().any(|ch| ch.is_ascii_uppercase())
}

/// Uppercase the first character and lowercase the rest; digits and symbols
/// pass through unchanged.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}
