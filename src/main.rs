use wordrev::reverse_words;

const DEMO_SENTENCES: &[&str] = &["you, shall not pass!!", "you shall not, pass!!"];

fn main() {
    for sentence in DEMO_SENTENCES {
        println!("{}", reverse_words(sentence));
    }
}
