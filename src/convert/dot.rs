use crate::convert::tokenizer::{tokenize, BoundarySplit};

const DELIMITERS: &[char] = &['-', '_', '.'];

/// Convert a string to dot.case: `"Hello World"` becomes `"hello.world"`
///
/// Unlike kebab-case, an acronym run closes before a capitalized word,
/// so `FOOBar` becomes `foo.bar` while `FOOBAR` stays one word.
pub fn to_dot_case(input: &str) -> String {
    tokenize(input.trim(), DELIMITERS, BoundarySplit::AcronymAware)
        .iter()
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_delimited_words() {
        assert_eq!(to_dot_case("NASA API"), "nasa.api");
        assert_eq!(to_dot_case("user_123-id"), "user.123.id");
        assert_eq!(to_dot_case("foo--bar__baz"), "foo.bar.baz");
        assert_eq!(to_dot_case("shouty.DOT.case"), "shouty.dot.case");
    }

    #[test]
    fn test_splits_casing_boundaries() {
        assert_eq!(to_dot_case("alreadyCamel"), "already.camel");
        assert_eq!(to_dot_case("HelloWorld"), "hello.world");
    }

    #[test]
    fn test_acronym_runs_close_before_words() {
        assert_eq!(to_dot_case("FOOBar"), "foo.bar");
        assert_eq!(to_dot_case("FOOBAR"), "foobar");
        assert_eq!(to_dot_case("ABCDef"), "abc.def");
        assert_eq!(to_dot_case("FOOBARBaz"), "foobar.baz");
    }

    #[test]
    fn test_trims_and_empties() {
        assert_eq!(to_dot_case("  trimmed.edges  "), "trimmed.edges");
        assert_eq!(to_dot_case(""), "");
        assert_eq!(to_dot_case("..."), "");
    }
}
