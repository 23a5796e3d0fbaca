//! Text cleanup applied before the detector looks at an input string.

use std::collections::HashMap;

pub const UNICODE_MINUS: char = '\u{2212}';

/// Merges every run of two or more ASCII spaces into one. Tabs and other
/// whitespace are left alone.
pub fn collapse_spaces(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut previous_space = false;
    for c in text.chars() {
        if c == ' ' {
            if !previous_space {
                collapsed.push(c);
            }
            previous_space = true;
        } else {
            collapsed.push(c);
            previous_space = false;
        }
    }
    collapsed
}

/// Replaces the first U+2212 MINUS SIGN with an ASCII hyphen-minus.
pub fn normalize_minus_sign(text: &str) -> String {
    replace_first_occurrence(text, UNICODE_MINUS, "-")
}

/// Replaces every U+2212, for inputs where both RA and Dec carry one.
pub fn normalize_all_minus_signs(text: &str) -> String {
    let mut normalized = text.to_string();
    while normalized.contains(UNICODE_MINUS) {
        normalized = normalize_minus_sign(&normalized);
    }
    normalized
}

pub fn character_histogram(text: &str) -> HashMap<char, usize> {
    let mut histogram = HashMap::new();
    for c in text.chars() {
        *histogram.entry(c).or_insert(0) += 1;
    }
    histogram
}

/// Replaces the first `match_char` with `replacement`; an empty replacement deletes it.
pub fn replace_first_occurrence(text: &str, match_char: char, replacement: &str) -> String {
    match text.find(match_char) {
        Some(idx) => {
            let mut replaced = String::with_capacity(text.len() + replacement.len());
            replaced.push_str(&text[..idx]);
            replaced.push_str(replacement);
            replaced.push_str(&text[idx + match_char.len_utf8()..]);
            replaced
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(
            collapse_spaces("The Big     Dog   was  fast  !"),
            "The Big Dog was fast !"
        );
        assert_eq!(collapse_spaces("  05 37"), " 05 37");
        assert_eq!(collapse_spaces("a\t\tb"), "a\t\tb");
        assert_eq!(collapse_spaces(""), "");
    }

    #[test]
    fn test_collapse_spaces_is_idempotent() {
        let once = collapse_spaces("05h   37m  -80d    28m");
        assert_eq!(collapse_spaces(&once), once);
    }

    #[test]
    fn test_minus_sign_first_only() {
        assert_eq!(normalize_minus_sign("10 \u{2212}20"), "10 -20");
        assert_eq!(
            normalize_minus_sign("\u{2212}1 \u{2212}2"),
            "-1 \u{2212}2"
        );
        assert_eq!(normalize_minus_sign("10 20"), "10 20");
    }

    #[test]
    fn test_minus_sign_all() {
        assert_eq!(normalize_all_minus_signs("\u{2212}1 \u{2212}2"), "-1 -2");
    }

    #[test]
    fn test_character_histogram() {
        let histogram = character_histogram("05h37m09.885s");
        assert_eq!(histogram.get(&'h'), Some(&1));
        assert_eq!(histogram.get(&'8'), Some(&2));
        assert_eq!(histogram.get(&'.'), Some(&1));
        assert_eq!(histogram.get(&'d'), None);
    }

    #[test]
    fn test_replace_first_occurrence() {
        assert_eq!(replace_first_occurrence("05h37m09s", 'h', ":"), "05:37m09s");
        assert_eq!(replace_first_occurrence("09.885s", 's', ""), "09.885");
        assert_eq!(replace_first_occurrence("1m2m", 'm', ":"), "1:2m");
        assert_eq!(replace_first_occurrence("abc", 'z', ":"), "abc");
        assert_eq!(replace_first_occurrence("80°28", '°', ":"), "80:28");
    }
}
