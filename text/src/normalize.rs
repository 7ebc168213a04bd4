//! Text cleanup applied before phonemization.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;
use unicode_normalization::UnicodeNormalization;

static DOT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{2,}").unwrap());
static QUESTION_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\?|\?!|!\?|\?\.").unwrap());
static EXCLAIM_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\.|!,").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static AROUND_QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\s*"\s*"#).unwrap());
static BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([.,!?;])").unwrap());

/// Cleans `text` for phonemization.
///
/// With `normalize` set the text is NFKC-normalized first. Then runs of dots
/// become one dot, the mixed terminal pairs `.?`, `?!`, `!?`, `?.` become `?`,
/// `!.` and `!,` become `!`, and every whitespace run becomes one space.
/// Leading and trailing whitespace is collapsed, not trimmed.
///
/// Each rule runs once, so a pair created by an earlier replacement
/// survives: `"ya!.?"` becomes `"ya!?"`, and only a second pass gives
/// `"ya?"`. Text without such chains is a fixed point.
pub fn preprocess_text(text: &str, language: &str, normalize: bool) -> String {
    trace!(language, normalize, "normalize: preprocess");

    let text = if normalize {
        text.nfkc().collect::<String>()
    } else {
        text.to_string()
    };

    let text = DOT_RUN.replace_all(&text, ".");
    let text = QUESTION_PAIR.replace_all(&text, "?");
    let text = EXCLAIM_PAIR.replace_all(&text, "!");
    collapse_whitespace(&text)
}

/// Replaces every whitespace run with a single ASCII space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").into_owned()
}

/// Removes whitespace next to double quotes and before `.,!?;`.
pub fn tidy_punctuation_spacing(text: &str) -> String {
    let text = AROUND_QUOTE.replace_all(text, "\"");
    BEFORE_PUNCT.replace_all(&text, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_dot_runs() {
        assert_eq!(preprocess_text("wait... what", "en", false), "wait. what");
        assert_eq!(preprocess_text("a..b", "en", false), "a.b");
        assert_eq!(preprocess_text("single.", "en", false), "single.");
    }

    #[test]
    fn mixed_question_pairs() {
        assert_eq!(preprocess_text("really.?", "en", false), "really?");
        assert_eq!(preprocess_text("really?!", "en", false), "really?");
        assert_eq!(preprocess_text("really!?", "en", false), "really?");
        assert_eq!(preprocess_text("really?.", "en", false), "really?");
        assert_eq!(preprocess_text("what...?", "en", false), "what?");
    }

    #[test]
    fn mixed_exclaim_pairs() {
        assert_eq!(preprocess_text("stop!.", "en", false), "stop!");
        assert_eq!(preprocess_text("stop!, now", "en", false), "stop! now");
        assert_eq!(preprocess_text("stop!!", "en", false), "stop!!");
    }

    #[test]
    fn whitespace_runs() {
        assert_eq!(preprocess_text("a \t\n b", "en", false), "a b");
        assert_eq!(preprocess_text("  lead and trail  ", "en", false), " lead and trail ");
    }

    #[test]
    fn rule_order_example() {
        assert_eq!(
            preprocess_text("Hello,,, world..!!   foo", "en", false),
            "Hello,,, world.!! foo"
        );
    }

    #[test]
    fn nfkc_only_when_requested() {
        // U+FB01 LATIN SMALL LIGATURE FI, U+FF01 FULLWIDTH EXCLAMATION MARK
        let text = "\u{FB01}ne\u{FF01}";
        assert_eq!(preprocess_text(text, "en", true), "fine!");
        assert_eq!(preprocess_text(text, "en", false), text);

        // decomposed e + combining acute composes to U+00E9
        assert_eq!(preprocess_text("cafe\u{0301}", "fr", true), "caf\u{00E9}");
    }

    #[test]
    fn idempotent_on_representative_inputs() {
        let inputs = [
            "Hello,,, world..!!   foo",
            "Is it?!  Really.?",
            "No!. Never!,   ever...",
            "\u{FB01}ne   day\u{2026} ok",
            "plain text",
            "",
        ];
        for input in inputs {
            for normalize in [false, true] {
                let once = preprocess_text(input, "en", normalize);
                let twice = preprocess_text(&once, "en", normalize);
                assert_eq!(once, twice, "input {input:?}");
            }
        }
    }

    #[test]
    fn chained_pairs_need_a_second_pass() {
        let once = preprocess_text("ya!.?", "id", false);
        assert_eq!(once, "ya!?");
        assert_eq!(preprocess_text(&once, "id", false), "ya?");
    }

    #[test]
    fn tidy_spacing() {
        assert_eq!(
            tidy_punctuation_spacing(r#"dia berkata " halo " ."#),
            r#"dia berkata"halo"."#
        );
        assert_eq!(tidy_punctuation_spacing("ya , tidak !"), "ya, tidak!");
        assert_eq!(tidy_punctuation_spacing("tanpa tanda"), "tanpa tanda");
    }
}
