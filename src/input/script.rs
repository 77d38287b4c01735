//! Key scripts: textual sequences of key identifiers.
//!
//! Lets a host replay input such as `7 + 3 Enter` or `12*3=` without a real
//! keyboard. Named keys are written as words, every other key is a single
//! character.

use lazy_static::lazy_static;
use regex::Regex;

use super::keys::{KeyAction, normalize_key};

lazy_static! {
    /// An alphabetic run (named key or letter key) or any other single
    /// non-whitespace character.
    static ref KEY_TOKEN: Regex = Regex::new(r"[A-Za-z]+|\S").unwrap();
}

/// Split a key script into key identifiers.
///
/// Identifiers are returned verbatim, including unknown ones; filtering is
/// left to [`normalize_key`].
pub fn tokenize_script(script: &str) -> Vec<String> {
    KEY_TOKEN
        .find_iter(script)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokenize a script and normalize each key, dropping unknown keys.
pub fn parse_script(script: &str) -> Vec<KeyAction> {
    tokenize_script(script)
        .iter()
        .filter_map(|key| normalize_key(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::Operator;

    #[test]
    fn test_compact_script() {
        assert_eq!(tokenize_script("12*3="), vec!["1", "2", "*", "3", "="]);
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            tokenize_script("7 + 3 Enter"),
            vec!["7", "+", "3", "Enter"]
        );
        assert_eq!(
            tokenize_script("42Backspace\tEscape"),
            vec!["4", "2", "Backspace", "Escape"]
        );
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(tokenize_script("9 C a"), vec!["9", "C", "a"]);
    }

    #[test]
    fn test_empty_script() {
        assert!(tokenize_script("").is_empty());
        assert!(tokenize_script("   \n").is_empty());
    }

    #[test]
    fn test_parse_drops_unknown_keys() {
        assert_eq!(
            parse_script("5 % Tab + 1 ="),
            vec![
                KeyAction::Value('5'),
                KeyAction::Operator(Operator::Add),
                KeyAction::Value('1'),
                KeyAction::Operator(Operator::Equals),
            ]
        );
    }
}
