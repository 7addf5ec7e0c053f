use edit_align::Tokenizer;

#[cfg(test)]
mod word_tokenizer_tests {
    use super::*;

    #[test]
    fn test_case_sensitive() {
        let tokenizer = Tokenizer::word_parser(true);

        let tokens = tokenizer.tokenize("The cat sat");
        assert_eq!(tokens, vec!["The", "cat", "sat"]);
    }

    #[test]
    fn test_non_case_sensitive() {
        let tokenizer = Tokenizer::word_parser(false);

        let tokens = tokenizer.tokenize("The Cat SAT");
        assert_eq!(tokens, vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_tokenize_with_mixed_whitespace() {
        let tokenizer = Tokenizer::word_parser(true);

        let text = "This  is\n   a test\tstring\n\n";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["This", "is", "a", "test", "string"]);
    }

    #[test]
    fn test_tokenize_keeps_punctuation() {
        let tokenizer = Tokenizer::word_parser(true);

        let tokens = tokenizer.tokenize("Hello, world!");
        assert_eq!(tokens, vec!["Hello,", "world!"]);
    }

    #[test]
    fn test_tokenize_empty_string() {
        let tokenizer = Tokenizer::word_parser(true);

        let tokens = tokenizer.tokenize("");
        assert_eq!(tokens, Vec::<String>::new());
    }
}

#[cfg(test)]
mod char_tokenizer_tests {
    use super::*;

    #[test]
    fn test_one_token_per_char() {
        let tokenizer = Tokenizer::char_parser(true);

        let tokens = tokenizer.tokenize("abc");
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_whitespace_dropped() {
        let tokenizer = Tokenizer::char_parser(true);

        let tokens = tokenizer.tokenize("a b\tc\n");
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_non_case_sensitive() {
        let tokenizer = Tokenizer::char_parser(false);

        let tokens = tokenizer.tokenize("AbC");
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_multibyte_chars() {
        let tokenizer = Tokenizer::char_parser(true);

        let tokens = tokenizer.tokenize("日本語");
        assert_eq!(tokens, vec!["日", "本", "語"]);
    }
}
