//! Frequency-ranked important words

use crate::words::words;
use std::collections::HashMap;

/// Words never ranked, regardless of frequency
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "with", "by", "about",
    "as", "of", "is", "was", "were", "be", "been", "am", "are", "that", "this", "these", "those",
    "it", "they", "them", "their", "has", "have", "had", "not", "no", "will", "would", "should",
    "could", "can", "may", "might", "must", "shall",
];

/// Ranks the words of a text by frequency
///
/// Words shorter than the minimum length and stopwords are ignored. Equal
/// frequencies keep first-occurrence order.
///
/// # Examples
///
/// ```
/// use textsift_extractor::KeywordExtractor;
///
/// let extractor = KeywordExtractor::new(10, 4);
/// let words = extractor.extract("apple apple banana banana cherry");
/// assert_eq!(words, vec!["apple", "banana", "cherry"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KeywordExtractor {
    max_keywords: usize,
    min_chars: usize,
}

impl KeywordExtractor {
    /// Keep at most `max_keywords` words of at least `min_chars` characters
    pub fn new(max_keywords: usize, min_chars: usize) -> Self {
        Self {
            max_keywords,
            min_chars,
        }
    }

    /// Important words of `text`, most frequent first
    pub fn extract(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for word in words(&lowered) {
            if word.chars().count() < self.min_chars || STOPWORDS.contains(&word) {
                continue;
            }
            let count = counts.entry(word).or_insert(0);
            if *count == 0 {
                order.push(word);
            }
            *count += 1;
        }

        let mut ranked: Vec<(&str, usize)> = order
            .into_iter()
            .map(|word| (word, counts[word]))
            .collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(self.max_keywords)
            .map(|(word, _)| word.to_string())
            .collect()
    }
}
