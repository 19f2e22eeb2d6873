use super::sentence::Sentence;
use super::tokenizer::split_trailing_punctuation;

/// Reverses the order of words in `input`.
///
/// Interior punctuation marks keep their token positions and attach to
/// the preceding text with no space; a punctuation run at the very end
/// of the input is reattached verbatim after the reversal. Total over
/// every input: a string with no words and no punctuation yields an
/// empty string.
pub fn reverse_words(input: &str) -> String {
    let (body, trailing) = split_trailing_punctuation(input);

    let mut sentence = Sentence::parse(body);
    sentence.reverse_words();

    let mut output = sentence.assemble();
    output.push_str(trailing);
    output
}
