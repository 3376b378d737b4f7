//! String helpers shared by the canonicalizers.

/// Returns true for empty or whitespace-only text.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Trims and replaces every internal whitespace run with one space.
///
/// # Examples
///
/// ```
/// use survey_normalization::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  New \t Zealand "), "New Zealand");
/// ```
pub fn collapse_whitespace(value: &str) -> String {
    let mut collapsed = String::with_capacity(value.len());
    for part in value.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(part);
    }
    collapsed
}

/// Upper-cases the first letter of every word and lower-cases the rest.
///
/// A word starts after any character that is not a letter, so apostrophes
/// and hyphens start new words.
///
/// # Examples
///
/// ```
/// use survey_normalization::title_case;
///
/// assert_eq!(title_case("new zealand"), "New Zealand");
/// assert_eq!(title_case("CÔTE D'IVOIRE"), "Côte D'Ivoire");
/// assert_eq!(title_case("guinea-bissau"), "Guinea-Bissau");
/// ```
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_letter = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(ch);
            previous_is_letter = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn title_case_handles_digits_and_mixed_case() {
        assert_eq!(title_case("uNITED kINGDOM"), "United Kingdom");
        assert_eq!(title_case("3rd place"), "3Rd Place");
        assert_eq!(title_case(""), "");
    }
}
