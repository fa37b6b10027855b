//! Text metrics: word count, reading time, syllables and readability.
//!
//! Tokenization is whitespace based. CJK text without spaces counts as a
//! single word per run; that is a known limitation of the heuristic.

use std::sync::LazyLock;

use regex::Regex;

static VOWEL_GROUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("valid vowel regex"));

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid sentence regex"));

/// Readability reported for text with no words.
pub const EMPTY_READABILITY: i32 = 0;

/// Counts whitespace-delimited words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Reading time in whole minutes, rounded up. Zero words read in zero minutes.
pub fn estimate_reading_time(word_count: usize, words_per_minute: usize) -> usize {
    word_count.div_ceil(words_per_minute.max(1))
}

/// Estimates syllables as the number of one- or two-vowel groups.
///
/// Words of three characters or fewer always count as one syllable. Longer
/// words without vowels count as zero.
pub fn count_syllables(word: &str) -> usize {
    if word.chars().count() <= 3 {
        return 1;
    }
    let lower = word.to_lowercase();
    VOWEL_GROUP.find_iter(&lower).count()
}

/// Counts sentence segments between runs of `.`, `!` and `?`.
///
/// Whitespace-only segments still count; only empty segments are dropped.
/// Never returns less than one.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_END.split(text).filter(|s| !s.is_empty()).count().max(1)
}

/// Flesch Reading Ease style score, rounded to the nearest integer.
///
/// The result is not clamped and may exceed 100 or go negative. Text without
/// words returns [`EMPTY_READABILITY`].
///
/// # Example
///
/// ```rust
/// use seoscope_core::calculate_readability;
///
/// assert_eq!(calculate_readability("The cat sat on the mat."), 116);
/// assert_eq!(calculate_readability(""), 0);
/// ```
pub fn calculate_readability(text: &str) -> i32 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return EMPTY_READABILITY;
    }

    let sentences = count_sentences(text) as f64;
    let word_count = words.len() as f64;
    let syllables = words.iter().map(|w| count_syllables(w)).sum::<usize>() as f64;

    let score = 206.835 - 1.015 * (word_count / sentences) - 84.6 * (syllables / word_count);
    round_half_up(score) as i32
}

/// Rounds halves toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("   \n\t ", 0)]
    #[case("one", 1)]
    #[case("hello world", 2)]
    #[case("  leading and trailing  ", 3)]
    #[case("para one\n\npara two", 4)]
    fn test_count_words(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(count_words(text), expected);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(200, 1)]
    #[case(201, 2)]
    #[case(1300, 7)]
    fn test_reading_time(#[case] words: usize, #[case] minutes: usize) {
        assert_eq!(estimate_reading_time(words, 200), minutes);
    }

    #[test]
    fn test_reading_time_zero_wpm_does_not_panic() {
        assert_eq!(estimate_reading_time(10, 0), 10);
    }

    #[rstest]
    #[case("the", 1)]
    #[case("a", 1)]
    #[case("cat", 1)]
    #[case("rhythm", 1)]
    #[case("beautiful", 4)]
    #[case("READABILITY", 5)]
    #[case("queue", 2)]
    #[case("nth", 1)]
    #[case("psst", 0)]
    fn test_count_syllables(#[case] word: &str, #[case] expected: usize) {
        assert_eq!(count_syllables(word), expected);
    }

    #[rstest]
    #[case("", 1)]
    #[case("No terminator", 1)]
    #[case("One. Two! Three?", 3)]
    #[case("Wait... what?!", 2)]
    #[case("Trailing space. ", 2)]
    fn test_count_sentences(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(count_sentences(text), expected);
    }

    #[test]
    fn test_readability_empty_is_sentinel() {
        assert_eq!(calculate_readability(""), EMPTY_READABILITY);
        assert_eq!(calculate_readability(" \n\n "), EMPTY_READABILITY);
    }

    #[test]
    fn test_readability_simple_sentence() {
        // 6 words, 1 sentence, 6 syllables: 206.835 - 6.09 - 84.6 = 116.145
        assert_eq!(calculate_readability("The cat sat on the mat."), 116);
    }

    #[test]
    fn test_readability_not_clamped() {
        let hard = "Incomprehensibilities notwithstanding, institutionalization characteristically \
                    overcomplicates interdisciplinary responsibilities";
        assert!(calculate_readability(hard) < 0);
        assert!(calculate_readability("Go. Run. Sit.") > 100);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }
}
