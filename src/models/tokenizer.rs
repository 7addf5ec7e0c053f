use crate::types::{Token, TokenRef};

/// Splits text into the tokens that get aligned.
pub struct Tokenizer {
    per_char: bool,
    case_sensitive: bool,
}

impl Tokenizer {
    /// Configuration for word-level alignment (WER): one token per whitespace-separated word
    pub fn word_parser(case_sensitive: bool) -> Self {
        Self {
            per_char: false,
            case_sensitive,
        }
    }

    /// Configuration for character-level alignment (CER): one token per non-whitespace char
    pub fn char_parser(case_sensitive: bool) -> Self {
        Self {
            per_char: true,
            case_sensitive,
        }
    }

    /// Tokenizer function to split the text into individual tokens.
    pub fn tokenize(&self, text: &TokenRef) -> Vec<Token> {
        let text = if self.case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        };

        if self.per_char {
            return text
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| c.to_string())
                .collect();
        }

        text.split_whitespace() // Split into words
            .map(|word| word.to_string())
            .collect()
    }
}
