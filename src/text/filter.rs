//! Allow-list character filter.
//!
//! Scraped paragraphs carry stray markup debris, emoji, brackets and
//! typographic symbols. Everything outside a small alphabet of Latin and
//! Cyrillic letters, digits, space and a fixed punctuation list is dropped.

/// Punctuation marks that survive filtering, in addition to letters,
/// digits and the plain space.
pub const ALLOWED_PUNCTUATION: [char; 17] = [
    '—', '!', '?', '.', ',', '-', '+', '=', '@', ';', ':', '\'', '"', '_', '«', '»', '*',
];

/// Returns whether `c` belongs to the allowed character set.
///
/// # Examples
///
/// ```
/// use anekdots::text::is_allowed;
///
/// assert!(is_allowed('ё'));
/// assert!(is_allowed('»'));
/// assert!(!is_allowed('('));
/// assert!(!is_allowed('\n'));
/// ```
#[must_use]
pub const fn is_allowed(c: char) -> bool {
    matches!(
        c,
        'a'..='z'
            | 'A'..='Z'
            | '0'..='9'
            | 'а'..='я'
            | 'А'..='Я'
            | 'ё'
            | 'Ё'
            | ' '
            | '—'
            | '!'
            | '?'
            | '.'
            | ','
            | '-'
            | '+'
            | '='
            | '@'
            | ';'
            | ':'
            | '\''
            | '"'
            | '_'
            | '«'
            | '»'
            | '*'
    )
}

/// Removes every character that is not in the allowed set.
///
/// Retained characters keep their order; nothing is substituted for the
/// removed ones.
///
/// # Examples
///
/// ```
/// use anekdots::text::filter_symbols;
///
/// assert_eq!(filter_symbols("Муж&&ик (смеётся)"), "Мужик смеётся");
/// ```
#[must_use]
pub fn filter_symbols(input: &str) -> String {
    input.chars().filter(|&c| is_allowed(c)).collect()
}
