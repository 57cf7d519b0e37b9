//! Text normalization: case folding, alphabetic filtering and stopword removal

use crate::processing::document::NormalizedText;
use crate::processing::stopwords::ENGLISH_STOP_WORDS;
use regex::Regex;
use std::collections::HashSet;

/// Turns raw text into [`NormalizedText`].
///
/// The stopword set is fixed at construction. Build one normalizer per
/// process and share it; `normalize` takes `&self` and never mutates.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stop_words: HashSet<String>,
    non_alpha_regex: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    /// Normalizer using the English stopword list
    pub fn new() -> Self {
        Self::with_stop_words(ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Normalizer using exactly the given stopwords
    pub fn with_stop_words<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = stop_words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let non_alpha_regex = Regex::new(r"[^a-z]+").expect("Invalid non-alphabetic regex");

        Self {
            stop_words,
            non_alpha_regex,
        }
    }

    /// English stopwords plus additional words from configuration
    pub fn with_extra_stop_words<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalizer = Self::new();
        for word in extra {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() {
                normalizer.stop_words.insert(word);
            }
        }
        normalizer
    }

    pub fn normalize(&self, text: &str) -> NormalizedText {
        let lowered = text.to_lowercase();
        let alpha_only = self.non_alpha_regex.replace_all(&lowered, " ");

        let tokens = alpha_only
            .split_whitespace()
            .filter(|token| !self.stop_words.contains(*token))
            .map(str::to_string)
            .collect();

        NormalizedText::from_tokens(tokens)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}
