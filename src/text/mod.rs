//! Text normalization pipeline for scraped anekdots.
//!
//! Two pure transforms run in a fixed order:
//!
//! - **Symbol filter**: drops every character outside the allowed alphabet
//! - **Punctuation normalizer**: canonicalizes punctuation runs and spacing
//!
//! [`preprocess`] composes them and trims the result. All functions here are
//! total and free of shared mutable state, so they can be called from any
//! number of threads at once.

pub mod filter;
pub mod punctuation;

pub use filter::{ALLOWED_PUNCTUATION, filter_symbols, is_allowed};
pub use punctuation::{SENTENCE_MARKS, correct_punctuation};

/// Cleans one raw text item.
///
/// Applies [`filter_symbols`], then [`correct_punctuation`], then trims
/// leading and trailing whitespace.
///
/// # Examples
///
/// ```
/// use anekdots::text::preprocess;
///
/// assert_eq!(
///     preprocess("Если?убьёт??то???умрёшь????"),
///     "Если? убьёт? то? умрёшь?"
/// );
/// assert_eq!(preprocess("()#$%^[]{}"), "");
/// ```
#[must_use]
pub fn preprocess(input: &str) -> String {
    correct_punctuation(&filter_symbols(input))
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(
        "— Я ухожу]]], — говорит женщин{а но()()вой няне##",
        "— Я ухожу, — говорит женщина новой няне" ;
        "dialogue with debris"
    )]
    #[test_case("Если?убьёт??то???умрёшь????", "Если? убьёт? то? умрёшь?" ; "question runs")]
    #[test_case("«Привет»", "«Привет»" ; "guillemets trimmed")]
    #[test_case("()#$%^[]{}", "" ; "nothing allowed")]
    #[test_case("", "" ; "empty")]
    #[test_case("   ", "" ; "only spaces")]
    fn test_preprocess(input: &str, expected: &str) {
        assert_eq!(preprocess(input), expected);
    }

    #[test]
    fn test_removed_characters_leave_no_gap_artifacts() {
        // The filter removes the brackets, the normalizer then collapses the
        // double space they leave behind.
        assert_eq!(preprocess("Муж (и) к"), "Муж и к");
        assert_eq!(preprocess("а ( ) б"), "а  б");
    }

    #[test]
    fn test_newlines_inside_item_are_dropped() {
        assert_eq!(preprocess("Первая строка.\nВторая"), "Первая строка. Вторая");
        assert_eq!(preprocess("слово\nслово"), "словослово");
    }

    #[test]
    fn test_dash_at_start_loses_leading_space() {
        assert_eq!(preprocess("—Здравствуй"), "— Здравствуй");
    }

    #[test]
    fn test_idempotent_on_clean_sentence() {
        let once = preprocess("— Ты куда?!  — «Домой», — ответил он...");
        assert_eq!(preprocess(&once), once);
    }
}
