use lazy_static::lazy_static;
use regex::Regex;

use super::token::Token;

/// Punctuation marks recognized as standalone tokens.
pub const PUNCTUATION: &[char] = &[':', ';', ',', '.', '!', '?'];

lazy_static! {
    static ref TOKEN_PATTERN: Regex =
        Regex::new(r"\w+|[:;,.!?]").expect("token pattern should compile");
}

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Splits the punctuation run anchored at the very end of the input off
/// the rest of the string.
///
/// The suffix is returned verbatim so it can be reattached unchanged
/// after reversal. Either half may be empty.
pub fn split_trailing_punctuation(input: &str) -> (&str, &str) {
    let body = input.trim_end_matches(PUNCTUATION);
    (body, &input[body.len()..])
}

/// Tokenizes text into word tokens and punctuation tokens.
///
/// A maximal run of word characters is one word token; each recognized
/// punctuation mark is its own token. Whitespace and any other
/// characters are discarded.
pub fn tokenize(text: &str) -> Vec<Token> {
    TOKEN_PATTERN
        .find_iter(text)
        .map(|found| {
            let lexeme = found.as_str();
            match lexeme.chars().next() {
                Some(c) if is_punctuation(c) => Token::Punctuation(c),
                _ => Token::Word(lexeme.to_string()),
            }
        })
        .collect()
}
