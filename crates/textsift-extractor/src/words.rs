//! Word tokens: maximal runs of alphanumeric characters and underscores

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Iterate over the word tokens of `text`, in order
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
}

/// Number of word tokens in `text`
pub fn word_count(text: &str) -> usize {
    words(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_split_on_punctuation() {
        let tokens: Vec<&str> = words("Hello, world! it's snake_case 42").collect();
        assert_eq!(tokens, vec!["Hello", "world", "it", "s", "snake_case", "42"]);
    }

    #[test]
    fn test_unicode_letters_are_word_chars() {
        let tokens: Vec<&str> = words("naïve café/déjà vu").collect();
        assert_eq!(tokens, vec!["naïve", "café", "déjà", "vu"]);
    }

    #[test]
    fn test_word_count_of_empty_text() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  \n\t "), 0);
        assert_eq!(word_count("one two\nthree"), 3);
    }
}
