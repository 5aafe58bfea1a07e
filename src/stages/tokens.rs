//! Token-count features for titles and bodies.
//!
//! For each text field:
//! 1. Split the text into word and punctuation tokens
//! 2. Keep tokens made only of alphabetic characters
//! 3. Lowercase them
//! 4. Drop stopwords
//! 5. Count what is left
//!
//! Case folding happens before the stopword lookup, so `El` and `el` are both
//! removed. Absent text counts as zero.

use super::Stage;
use crate::models::{Record, RecordSet};
use crate::stopwords::StopWords;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

/// Words, optionally joined by internal hyphens or apostrophes, or runs of
/// punctuation. `\w` is Unicode-aware, so `ñ`, `á` and `ü` are word characters.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+(?:['’\-]\w+)*|[^\w\s]+").expect("token pattern"));

/// Split `text` into word and punctuation tokens.
///
/// `¿Qué pasó en el e-mail?` yields `¿`, `Qué`, `pasó`, `en`, `el`, `e-mail`, `?`.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    TOKEN_RE.find_iter(text).map(|m| m.as_str())
}

/// Lowercased alphabetic tokens of `text` that are not stopwords.
pub fn meaningful_tokens<'a>(
    text: &'a str,
    stop_words: &'a StopWords,
) -> impl Iterator<Item = String> + 'a {
    tokenize(text)
        .filter(|token| token.chars().all(char::is_alphabetic))
        .map(str::to_lowercase)
        .filter(move |token| !stop_words.contains(token))
}

/// Which text column a [`TokenCounter`] reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Body,
}

/// Writes `title_token_count` or `body_token_count`.
#[derive(Debug, Clone)]
pub struct TokenCounter {
    field: TextField,
    stop_words: Arc<StopWords>,
}

impl TokenCounter {
    pub fn new(field: TextField, stop_words: Arc<StopWords>) -> Self {
        TokenCounter { field, stop_words }
    }

    pub fn count(&self, text: Option<&str>) -> usize {
        text.map_or(0, |t| meaningful_tokens(t, &self.stop_words).count())
    }
}

impl Stage for TokenCounter {
    fn name(&self) -> &'static str {
        match self.field {
            TextField::Title => "title_tokens",
            TextField::Body => "body_tokens",
        }
    }

    fn apply(&self, records: RecordSet) -> RecordSet {
        records.map_records(|record| match self.field {
            TextField::Title => Record {
                title_token_count: Some(self.count(record.title.as_deref())),
                ..record
            },
            TextField::Body => Record {
                body_token_count: Some(self.count(record.body.as_deref())),
                ..record
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spanish() -> Arc<StopWords> {
        Arc::new(StopWords::spanish())
    }

    #[test]
    fn test_tokenize_splits_punctuation() {
        let tokens: Vec<_> = tokenize("¿Qué pasó en el e-mail?").collect();
        assert_eq!(tokens, vec!["¿", "Qué", "pasó", "en", "el", "e-mail", "?"]);
    }

    #[test]
    fn test_tokenize_keeps_accented_words_whole() {
        let tokens: Vec<_> = tokenize("Año nuevo, pingüino y camión.").collect();
        assert_eq!(
            tokens,
            vec!["Año", "nuevo", ",", "pingüino", "y", "camión", "."]
        );
    }

    #[test]
    fn test_count_drops_numbers_punctuation_and_stopwords() {
        let counter = TokenCounter::new(TextField::Body, spanish());
        // gobierno, anuncia, nuevas, medidas, opinas
        assert_eq!(
            counter.count(Some("El Gobierno anuncia 3 nuevas medidas, ¿qué opinas?")),
            5
        );
    }

    #[test]
    fn test_capitalized_stopwords_are_case_folded() {
        let counter = TokenCounter::new(TextField::Title, spanish());
        assert_eq!(counter.count(Some("El La Los Del")), 0);
        assert_eq!(counter.count(Some("EL GOBIERNO")), 1);

        let stop_words = StopWords::spanish();
        let tokens: Vec<_> = meaningful_tokens("Crisis En Madrid", &stop_words).collect();
        assert_eq!(tokens, vec!["crisis", "madrid"]);
    }

    #[test]
    fn test_hyphenated_and_numeric_tokens_are_not_alphabetic() {
        let counter = TokenCounter::new(TextField::Body, Arc::new(StopWords::empty()));
        assert_eq!(counter.count(Some("covid-19 e-mail 2021 hola")), 1);
    }

    #[test]
    fn test_absent_text_counts_zero() {
        let counter = TokenCounter::new(TextField::Body, spanish());
        assert_eq!(counter.count(None), 0);
        assert_eq!(counter.count(Some("")), 0);
    }

    #[test]
    fn test_count_never_exceeds_raw_token_count() {
        let counter = TokenCounter::new(TextField::Body, Arc::new(StopWords::empty()));
        for text in [
            "hola,mundo",
            "Paragraph one. Paragraph two.",
            "¡¡Última hora!! 24h de cobertura | en directo",
            "  ",
        ] {
            let raw = tokenize(text).count();
            assert!(counter.count(Some(text)) <= raw, "{text}");
        }
    }

    #[test]
    fn test_stage_fills_only_its_field() {
        let record = Record::new(
            0,
            "https://a.com/x",
            Some("Sube el paro".to_string()),
            Some("El paro sube en marzo".to_string()),
        );
        let records = RecordSet::new(vec![record]);
        let out = TokenCounter::new(TextField::Title, spanish()).apply(records);
        assert_eq!(out.records()[0].title_token_count, Some(2));
        assert_eq!(out.records()[0].body_token_count, None);

        let out = TokenCounter::new(TextField::Body, spanish()).apply(out);
        assert_eq!(out.records()[0].body_token_count, Some(3));
    }
}
