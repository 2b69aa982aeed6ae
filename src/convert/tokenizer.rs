// Shared tokenizer behind the three converters: delimiter runs separate the
// input into raw tokens, then each token is optionally divided again on
// casing boundaries. Empty tokens never survive, so consecutive delimiters
// collapse and edge delimiters vanish.

/// How a single token may be divided once delimiters are consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoundarySplit {
    /// Tokens are kept whole.
    Off,
    /// Break before an uppercase letter that follows a lowercase letter.
    LowerUpper,
    /// `LowerUpper`, plus close an acronym run before a capitalized word:
    /// `FOOBar` splits into `FOO` and `Bar`, while `FOOBAR` stays whole.
    AcronymAware,
}

// Any Unicode whitespace counts, on top of the converter's own characters.
pub(crate) fn is_delimiter(ch: char, extra: &[char]) -> bool {
    ch.is_whitespace() || extra.contains(&ch)
}

pub(crate) fn tokenize(input: &str, extra: &[char], boundaries: BoundarySplit) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in input.chars() {
        if is_delimiter(ch, extra) {
            if !current.is_empty() {
                split_token(&current, boundaries, &mut tokens);
                current.clear();
            }
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        split_token(&current, boundaries, &mut tokens);
    }

    tokens
}

fn split_token(token: &str, boundaries: BoundarySplit, out: &mut Vec<String>) {
    if boundaries == BoundarySplit::Off {
        out.push(token.to_string());
        return;
    }

    let chars: Vec<char> = token.chars().collect();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if starts_new_part(&chars, i, boundaries) && !current.is_empty() {
            out.push(current.clone());
            current.clear();
        }
        current.push(ch);
    }

    if !current.is_empty() {
        out.push(current);
    }
}

fn starts_new_part(chars: &[char], i: usize, boundaries: BoundarySplit) -> bool {
    if i == 0 || !chars[i].is_ascii_uppercase() {
        return false;
    }

    let prev = chars[i - 1];
    if prev.is_ascii_lowercase() {
        return true;
    }

    // An acronym run ends where the next letter starts a normal word.
    boundaries == BoundarySplit::AcronymAware
        && prev.is_ascii_uppercase()
        && chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_delimiter_runs() {
        assert_eq!(
            tokenize("foo--bar__baz", &['-', '_'], BoundarySplit::Off),
            vec!["foo", "bar", "baz"]
        );
        assert_eq!(
            tokenize("  spaced\tout  ", &[], BoundarySplit::Off),
            vec!["spaced", "out"]
        );
        assert!(tokenize("-_-", &['-', '_'], BoundarySplit::Off).is_empty());
        assert!(tokenize("", &[], BoundarySplit::Off).is_empty());
    }

    #[test]
    fn test_lower_upper_boundaries() {
        assert_eq!(
            tokenize("helloWorld", &[], BoundarySplit::LowerUpper),
            vec!["hello", "World"]
        );
        assert_eq!(
            tokenize("aBC", &[], BoundarySplit::LowerUpper),
            vec!["a", "BC"]
        );
        // Digits do not open a boundary.
        assert_eq!(
            tokenize("hello2You", &[], BoundarySplit::LowerUpper),
            vec!["hello2You"]
        );
        // Acronym runs stay whole without the acronym rule.
        assert_eq!(
            tokenize("FOOBar", &[], BoundarySplit::LowerUpper),
            vec!["FOOBar"]
        );
    }

    #[test]
    fn test_acronym_runs_close_before_words() {
        assert_eq!(
            tokenize("FOOBar", &[], BoundarySplit::AcronymAware),
            vec!["FOO", "Bar"]
        );
        assert_eq!(
            tokenize("FOOBAR", &[], BoundarySplit::AcronymAware),
            vec!["FOOBAR"]
        );
        assert_eq!(
            tokenize("ABCDef", &[], BoundarySplit::AcronymAware),
            vec!["ABC", "Def"]
        );
        assert_eq!(
            tokenize("FOOBARBaz", &[], BoundarySplit::AcronymAware),
            vec!["FOOBAR", "Baz"]
        );
        assert_eq!(
            tokenize("AbC", &[], BoundarySplit::AcronymAware),
            vec!["Ab", "C"]
        );
        assert_eq!(
            tokenize("alreadyCamel", &[], BoundarySplit::AcronymAware),
            vec!["already", "Camel"]
        );
    }

    #[test]
    fn test_boundary_splitting_combines_with_delimiters() {
        assert_eq!(
            tokenize("fooBar-bazQux", &['-'], BoundarySplit::LowerUpper),
            vec!["foo", "Bar", "baz", "Qux"]
        );
    }
}
