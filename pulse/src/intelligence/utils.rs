use std::sync::OnceLock;

use regex::Regex;

fn strip_pattern() -> &'static Regex {
    static STRIP: OnceLock<Regex> = OnceLock::new();
    STRIP.get_or_init(|| Regex::new(r"[^a-z0-9\s#@]").expect("static tokenizer pattern"))
}

/// Split free text into lower-case tokens.
///
/// Everything other than ASCII letters, digits, whitespace, `#` and `@` is
/// removed before splitting, so `"Love it!"` becomes `["love", "it"]` and
/// hashtags/handles survive intact. Empty input yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    strip_pattern()
        .replace_all(&lowered, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(
            tokenize("Amazing features shipped, love it!"),
            vec!["amazing", "features", "shipped", "love", "it"]
        );
    }

    #[test]
    fn test_tokenize_keeps_hashtags_and_handles() {
        assert_eq!(
            tokenize("Ping @support about #RapidQuest"),
            vec!["ping", "@support", "about", "#rapidquest"]
        );
    }

    #[test]
    fn test_tokenize_drops_non_ascii_and_empty_tokens() {
        assert_eq!(tokenize("  it's — fine  "), vec!["its", "fine"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("!!! ???").is_empty());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(5.0 / 6.0, 3), 0.833);
        assert_eq!(round_to(-1.0 / 6.0, 3), -0.167);
    }
}
