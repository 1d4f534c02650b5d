//! Splitting source text into segments

use std::fmt;

/// Separator used when the caller does not supply one
pub const DEFAULT_SEPARATOR: &str = ",";

/// A resolved, non-empty separator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator(String);

impl Default for Separator {
    fn default() -> Self {
        Self(DEFAULT_SEPARATOR.to_string())
    }
}

impl Separator {
    /// Use the caller's delimiter when given, the comma otherwise.
    /// An empty delimiter counts as not given.
    pub fn resolve(provided: Option<&str>) -> Self {
        match provided {
            Some(s) if !s.is_empty() => Self(s.to_string()),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split `text` at every occurrence of `separator`, left to right.
///
/// Always yields at least one segment: `""` splits to `[""]`, and empty
/// segments between consecutive separators are kept.
pub fn segment<'a>(text: &'a str, separator: &Separator) -> Vec<&'a str> {
    text.split(separator.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn comma() -> Separator {
        Separator::default()
    }

    #[test]
    fn test_splits_on_default_comma() {
        assert_eq!(segment("a,b,c", &comma()), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_text_is_one_empty_segment() {
        assert_eq!(segment("", &comma()), vec![""]);
    }

    #[test]
    fn test_consecutive_separators_keep_empty_segment() {
        assert_eq!(segment("a,,b", &comma()), vec!["a", "", "b"]);
        assert_eq!(segment(",", &comma()), vec!["", ""]);
    }

    #[test]
    fn test_caller_delimiter_is_honored() {
        let dash = Separator::resolve(Some("-"));
        assert_eq!(segment("a-b-c", &dash), vec!["a", "b", "c"]);
        // the comma must not be used once a delimiter is supplied
        assert_eq!(segment("a,b", &dash), vec!["a,b"]);
    }

    #[test]
    fn test_resolve_falls_back_to_comma() {
        assert_eq!(Separator::resolve(None).as_str(), ",");
        assert_eq!(Separator::resolve(Some("")).as_str(), ",");
        assert_eq!(Separator::resolve(Some(" | ")).as_str(), " | ");
    }

    #[test]
    fn test_multi_char_separator_matches_left_to_right() {
        let sep = Separator::resolve(Some("--"));
        assert_eq!(segment("a---b", &sep), vec!["a", "-b"]);
    }

    #[test]
    fn test_duplicates_are_preserved() {
        assert_eq!(segment("x,x,x", &comma()), vec!["x", "x", "x"]);
    }

    fn arb_separator() -> impl Strategy<Value = Separator> {
        prop_oneof![
            3 => Just(Separator::default()),
            1 => Just(Separator::resolve(Some("-"))),
            1 => Just(Separator::resolve(Some("::"))),
            1 => "[a-z;|]{1,3}".prop_map(|s| Separator::resolve(Some(&s))),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_join_reconstructs_text(text in "[a-c,;:|-]{0,40}", sep in arb_separator()) {
            let parts = segment(&text, &sep);
            prop_assert_eq!(parts.join(sep.as_str()), text);
        }

        #[test]
        fn prop_count_is_one_plus_occurrences(text in "[a-c,;:|-]{0,40}", sep in arb_separator()) {
            let occurrences = text.matches(sep.as_str()).count();
            prop_assert_eq!(segment(&text, &sep).len(), occurrences + 1);
        }

        #[test]
        fn prop_text_without_separator_is_single_segment(text in "[a-z ]{0,30}") {
            prop_assert_eq!(segment(&text, &comma()), vec![text.as_str()]);
        }
    }
}
