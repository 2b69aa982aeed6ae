use crate::convert::tokenizer::{tokenize, BoundarySplit};

const DELIMITERS: &[char] = &['_', '.', '-'];

/// Convert a string to kebab-case: `"Hello World"` becomes `"hello-world"`
pub fn to_kebab_case(input: &str) -> String {
    tokenize(input, DELIMITERS, BoundarySplit::LowerUpper)
        .iter()
        .map(|token| token.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
