//! Word-order reversal with punctuation kept in place.

pub mod reversal;

pub use reversal::{reverse_words, Sentence, Token};
