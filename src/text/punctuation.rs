//! Punctuation and spacing canonicalization.
//!
//! The normalizer is an ordered table of regex rewrites. Every sentence mark
//! gets its own pair of rules, applied mark by mark, followed by the em-dash
//! and guillemet rules. Each rule sees the output of the rule before it, so
//! the table order is part of the behavior.

use regex::{NoExpand, Regex};
use std::sync::OnceLock;

/// Sentence marks normalized to "no space before, one space after",
/// in the order their rules run.
pub const SENTENCE_MARKS: [char; 6] = ['!', '?', '.', ',', ':', ';'];

/// A single regex rewrite applied to the whole text.
#[derive(Debug)]
struct Rewrite {
    pattern: Regex,
    replacement: String,
}

impl Rewrite {
    // Patterns are built from literals and escaped marks only.
    #[allow(clippy::expect_used)]
    fn new(pattern: &str, replacement: impl Into<String>) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid rewrite pattern"),
            replacement: replacement.into(),
        }
    }

    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, NoExpand(&self.replacement))
            .into_owned()
    }
}

/// Returns the compiled rewrite table.
fn rules() -> &'static [Rewrite] {
    static RULES: OnceLock<Vec<Rewrite>> = OnceLock::new();
    RULES.get_or_init(build_rules)
}

fn build_rules() -> Vec<Rewrite> {
    let mut rules = Vec::with_capacity(SENTENCE_MARKS.len() * 2 + 4);

    for mark in SENTENCE_MARKS {
        let escaped = regex::escape(mark.encode_utf8(&mut [0; 4]));
        let canonical = format!("{mark} ");
        // "!!!" -> "! "
        rules.push(Rewrite::new(&format!("{escaped}+"), canonical.clone()));
        // "word  !  word" -> "word! word"
        rules.push(Rewrite::new(&format!(" *{escaped} *"), canonical));
    }

    rules.push(Rewrite::new("—+", "—"));
    rules.push(Rewrite::new(" *— *", " — "));
    rules.push(Rewrite::new(" *«", " «"));
    rules.push(Rewrite::new("» *", "» "));

    rules
}

/// Rewrites punctuation runs and the spaces around them into canonical form.
///
/// After this pass every sentence mark (`! ? . , : ;`) appears once per run
/// with no space before it and one space after it, em-dashes are surrounded
/// by single spaces, `«` has one space before it and `»` one space after it.
///
/// The final double-space collapse is a single non-overlapping pass, so a
/// run of three or four plain spaces away from punctuation shrinks to two
/// rather than one.
///
/// # Examples
///
/// ```
/// use anekdots::text::correct_punctuation;
///
/// assert_eq!(correct_punctuation("Привет ,  Андрей!!"), "Привет, Андрей! ");
/// assert_eq!(correct_punctuation("А——ты"), "А — ты");
/// ```
#[must_use]
pub fn correct_punctuation(input: &str) -> String {
    let text = rules()
        .iter()
        .fold(input.to_string(), |text, rule| rule.apply(&text));

    text.replace("  ", " ")
}
