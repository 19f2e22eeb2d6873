use super::token::Token;
use super::tokenizer;

/// Ordered token sequence for one reversal pass.
///
/// Built from raw text, transformed in place, then serialized back to a
/// string; it has no life beyond a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    pub fn parse(text: &str) -> Self {
        Self {
            tokens: tokenizer::tokenize(text),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Reverses the order of word tokens in place.
    ///
    /// Two moving pointers swap words from both ends and skip over
    /// punctuation tokens, so every punctuation token keeps its
    /// sequence position.
    pub fn reverse_words(&mut self) {
        if self.tokens.is_empty() {
            return;
        }

        let mut first = 0;
        let mut last = self.tokens.len() - 1;

        while first < last {
            while first < last && self.tokens[first].is_punctuation() {
                first += 1;
            }
            while first < last && self.tokens[last].is_punctuation() {
                last -= 1;
            }
            if first >= last {
                break;
            }

            self.tokens.swap(first, last);
            first += 1;
            last -= 1;
        }
    }

    /// Serializes the tokens back to a string.
    ///
    /// A single space precedes each word token unless the output is
    /// still empty; punctuation tokens attach with no preceding space.
    pub fn assemble(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Punctuation(mark) => out.push(*mark),
                Token::Word(text) => {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    out.push_str(text);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Token {
        Token::Word(text.to_string())
    }

    #[test]
    fn test_reverse_words_plain() {
        let mut sentence = Sentence::parse("one two three");
        sentence.reverse_words();
        assert_eq!(sentence.assemble(), "three two one");
    }

    #[test]
    fn test_reverse_words_keeps_punctuation_positions() {
        let mut sentence = Sentence::parse("you, shall not pass");
        sentence.reverse_words();
        assert_eq!(
            sentence.tokens(),
            &[
                word("pass"),
                Token::Punctuation(','),
                word("not"),
                word("shall"),
                word("you"),
            ]
        );
        assert_eq!(sentence.assemble(), "pass, not shall you");
    }

    #[test]
    fn test_reverse_words_empty() {
        let mut sentence = Sentence::parse("");
        sentence.reverse_words();
        assert_eq!(sentence.assemble(), "");
    }

    #[test]
    fn test_reverse_words_single_word() {
        let mut sentence = Sentence::parse("hello");
        sentence.reverse_words();
        assert_eq!(sentence.assemble(), "hello");
    }

    #[test]
    fn test_reverse_words_punctuation_only() {
        let mut sentence = Sentence::parse(",;:");
        let before = sentence.clone();
        sentence.reverse_words();
        assert_eq!(sentence, before, "punctuation-only input should not change");
    }

    #[test]
    fn test_reverse_words_single_word_between_marks() {
        let mut sentence = Sentence::parse(":hello;");
        sentence.reverse_words();
        assert_eq!(
            sentence.tokens(),
            &[Token::Punctuation(':'), word("hello"), Token::Punctuation(';')]
        );
    }

    #[test]
    fn test_assemble_no_space_before_punctuation() {
        let sentence = Sentence::parse("not, pass");
        assert_eq!(sentence.assemble(), "not, pass");
    }

    #[test]
    fn test_assemble_leading_mark_then_word() {
        let sentence = Sentence::parse(": go");
        assert_eq!(sentence.assemble(), ": go");
    }

    #[test]
    fn test_assemble_collapses_extra_whitespace() {
        let mut sentence = Sentence::parse("a   b\t c");
        sentence.reverse_words();
        assert_eq!(sentence.assemble(), "c b a");
    }
}
