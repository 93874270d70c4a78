//! Score extraction — an explicit score in the reply wins; otherwise a keyword
//! sentiment heuristic stands in for one.

use std::sync::OnceLock;

use regex::Regex;

const BASE_SCORE: i64 = 70;
const WORD_WEIGHT: i64 = 5;
const HEURISTIC_FLOOR: i64 = 40;
const HEURISTIC_CEILING: i64 = 100;

const POSITIVE_WORDS: &[&str] = &["excellent", "outstanding", "strong", "great", "impressive"];
const NEGATIVE_WORDS: &[&str] = &["weak", "lacking", "missing", "poor", "needs improvement"];

/// Where a score came from. Logged, and used by tests to tell the paths apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSource {
    Explicit,
    Heuristic,
}

fn explicit_score_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // `Score: 85/100`, `**Score:** 85`, `rating 73/100`, `Overall score - 90`,
        // `Score (out of 100): 62`. The optional group eats a leading scale.
        Regex::new(
            r"(?i)\b(?:score|rating)\b(?:[^0-9\n]{0,12}?(?:out\s+of|/)\s*100\b)?([^0-9\n]{0,12}?)(\d{1,3})",
        )
        .expect("score pattern is a valid regex")
    })
}

/// True when the gap before a number ends in a scale marker, i.e. the number
/// is the `100` of `out of 100` rather than a score.
fn is_scale_denominator(gap: &str) -> bool {
    let gap = gap.trim_end().to_lowercase();
    gap.ends_with("out of") || gap.ends_with('/')
}

/// Finds an explicit score in the text, clamped to [0, 100].
pub fn explicit_score(text: &str) -> Option<u8> {
    explicit_score_pattern()
        .captures_iter(text)
        .filter(|caps| !caps.get(1).is_some_and(|gap| is_scale_denominator(gap.as_str())))
        .find_map(|caps| caps.get(2)?.as_str().parse::<u32>().ok())
        .map(|value| value.min(100) as u8)
}

fn count_occurrences(haystack: &str, words: &[&str]) -> i64 {
    words
        .iter()
        .map(|w| haystack.matches(w).count() as i64)
        .sum()
}

/// `70 + 5 * (positive - negative)`, clamped to [40, 100].
pub fn heuristic_score(text: &str) -> u8 {
    let lowered = text.to_lowercase();
    let positive = count_occurrences(&lowered, POSITIVE_WORDS);
    let negative = count_occurrences(&lowered, NEGATIVE_WORDS);
    (BASE_SCORE + WORD_WEIGHT * (positive - negative)).clamp(HEURISTIC_FLOOR, HEURISTIC_CEILING)
        as u8
}

pub fn extract_score(text: &str) -> (u8, ScoreSource) {
    match explicit_score(text) {
        Some(score) => (score, ScoreSource::Explicit),
        None => (heuristic_score(text), ScoreSource::Heuristic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_score_forms() {
        assert_eq!(explicit_score("Score: 85/100"), Some(85));
        assert_eq!(explicit_score("score: 73"), Some(73));
        assert_eq!(explicit_score("Overall rating 73/100"), Some(73));
        assert_eq!(explicit_score("**Score:** 91/100"), Some(91));
        assert_eq!(explicit_score("SCORE - 12"), Some(12));
    }

    #[test]
    fn test_explicit_score_is_clamped() {
        assert_eq!(explicit_score("Score: 250"), Some(100));
        assert_eq!(explicit_score("Score: 0/100"), Some(0));
    }

    #[test]
    fn test_explicit_score_skips_out_of_scale() {
        assert_eq!(explicit_score("1. Overall score out of 100: 78"), Some(78));
        assert_eq!(explicit_score("Overall Score (out of 100): 62"), Some(62));
        assert_eq!(explicit_score("Rating / 100 - 55"), Some(55));
        assert_eq!(explicit_score("Score: 85 out of 100"), Some(85));
        // a scale with no score after it is not a score
        assert_eq!(explicit_score("Give an overall score out of 100."), None);
    }

    #[test]
    fn test_no_explicit_score() {
        assert_eq!(explicit_score("A great profile overall."), None);
        // the number must be on the same line
        assert_eq!(explicit_score("Score\n85"), None);
    }

    #[test]
    fn test_heuristic_base_is_seventy() {
        assert_eq!(heuristic_score("A neutral sentence."), 70);
    }

    #[test]
    fn test_heuristic_counts_case_insensitively() {
        // +3 positive, -1 negative → 70 + 10
        let text = "Excellent work, GREAT docs, strong tests, but weak CI.";
        assert_eq!(heuristic_score(text), 80);
    }

    #[test]
    fn test_heuristic_counts_phrases() {
        assert_eq!(heuristic_score("Needs improvement. Needs improvement."), 60);
    }

    #[test]
    fn test_heuristic_floor_and_ceiling() {
        assert_eq!(heuristic_score(&"poor ".repeat(20)), 40);
        assert_eq!(heuristic_score(&"outstanding ".repeat(20)), 100);
    }

    #[test]
    fn test_heuristic_stays_in_range_for_mixed_text() {
        let samples = [
            "",
            "weak weak weak great",
            "impressive impressive lacking missing missing missing missing",
            "strong strong strong strong strong strong strong",
        ];
        for text in samples {
            let score = heuristic_score(text);
            assert!((40..=100).contains(&score), "{text:?} scored {score}");
        }
    }

    #[test]
    fn test_extract_score_prefers_explicit() {
        assert_eq!(
            extract_score("Score: 42/100. Outstanding, excellent, impressive."),
            (42, ScoreSource::Explicit)
        );
        assert_eq!(extract_score("Great."), (75, ScoreSource::Heuristic));
    }
}
