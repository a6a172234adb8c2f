/// Refers to a tokenizer by name
///
/// The tokenizer itself is either built into the search engine (eg,
/// "standard", "whitespace") or defined separately in the index's analysis
/// settings. Custom analyzers only need its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tokenizer {
    name: String,
}


impl Tokenizer {
    pub fn new<N: Into<String>>(name: N) -> Tokenizer {
        Tokenizer {
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}


impl<'a> From<&'a str> for Tokenizer {
    fn from(name: &'a str) -> Tokenizer {
        Tokenizer::new(name)
    }
}
