/// One display unit: a word (apostrophes included) or a single
/// non-letter character.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
