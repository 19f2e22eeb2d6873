pub mod reverser;
pub mod sentence;
pub mod token;
pub mod tokenizer;

pub use reverser::reverse_words;
pub use sentence::Sentence;
pub use token::Token;
pub use tokenizer::{is_punctuation, split_trailing_punctuation, tokenize, PUNCTUATION};
