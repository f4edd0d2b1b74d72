//! Whitespace normalization and sentence segmentation
//!
//! Segmentation has three tiers, each used only when the one before it finds
//! nothing:
//!
//! 1. split after `.`, `!` or `?` followed by whitespace (or ending the text),
//! 2. split on the lines of the original text, when it has more than one,
//! 3. fixed-size character chunks of the normalized text.
//!
//! So `sentences` is never empty unless the normalized text is.

use crate::types::ProcessedText;

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Collapse every whitespace run to one space and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits normalized text into sentences
#[derive(Debug, Clone, Copy)]
pub struct Segmenter {
    chunk_size: usize,
}

impl Segmenter {
    /// Create a segmenter whose last-resort chunks hold `chunk_size` characters
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Segment `normalized`; `original` is the text before normalization
    pub fn segment(&self, normalized: &str, original: &str) -> Vec<String> {
        if normalized.is_empty() {
            return Vec::new();
        }

        let sentences = split_sentences(normalized);
        if !sentences.is_empty() {
            return sentences;
        }

        let lines = split_lines(original);
        if !lines.is_empty() {
            return lines;
        }

        self.chunk(normalized)
    }

    fn chunk(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        chars
            .chunks(self.chunk_size)
            .map(|chunk| chunk.iter().collect())
            .collect()
    }
}

/// Sentences ending in terminal punctuation; empty if there is no boundary
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }
        let at_boundary = match chars.peek() {
            Some((_, next)) => next.is_whitespace(),
            None => true,
        };
        if at_boundary {
            let end = index + c.len_utf8();
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }

    if sentences.is_empty() {
        return sentences;
    }
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

/// Non-blank lines of the original text, each normalized; empty for one line
fn split_lines(original: &str) -> Vec<String> {
    let lines: Vec<String> = original
        .lines()
        .map(normalize_whitespace)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return Vec::new();
    }
    lines
}

fn push_trimmed(out: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        out.push(fragment.to_string());
    }
}

/// Normalize `raw` and segment it into sentences
pub fn process_text(raw: &str, chunk_size: usize) -> ProcessedText {
    let full_text = normalize_whitespace(raw);
    let sentences = Segmenter::new(chunk_size).segment(&full_text, raw);
    ProcessedText {
        full_text,
        sentences,
    }
}
