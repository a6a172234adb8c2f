/// Refers to a token filter by name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenFilter {
    name: String,
}


impl TokenFilter {
    pub fn new<N: Into<String>>(name: N) -> TokenFilter {
        TokenFilter {
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}


/// Refers to a char filter by name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharFilter {
    name: String,
}


impl CharFilter {
    pub fn new<N: Into<String>>(name: N) -> CharFilter {
        CharFilter {
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}


/// A filter in a custom analyzer's pipeline
///
/// Token filters run on the token stream after the tokenizer, char filters
/// run on the raw text before it. A custom analyzer keeps both kinds in a
/// single list and separates them when it is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnalyzerFilter {
    Token(TokenFilter),
    Char(CharFilter),
}


impl AnalyzerFilter {
    pub fn name(&self) -> &str {
        match *self {
            AnalyzerFilter::Token(ref filter) => filter.name(),
            AnalyzerFilter::Char(ref filter) => filter.name(),
        }
    }
}


impl From<TokenFilter> for AnalyzerFilter {
    fn from(filter: TokenFilter) -> AnalyzerFilter {
        AnalyzerFilter::Token(filter)
    }
}


impl From<CharFilter> for AnalyzerFilter {
    fn from(filter: CharFilter) -> AnalyzerFilter {
        AnalyzerFilter::Char(filter)
    }
}


#[cfg(test)]
mod tests {
    use super::{AnalyzerFilter, CharFilter, TokenFilter};

    #[test]
    fn test_filter_names() {
        let lowercase: AnalyzerFilter = TokenFilter::new("lowercase").into();
        let html_strip: AnalyzerFilter = CharFilter::new("html_strip").into();

        assert_eq!(lowercase.name(), "lowercase");
        assert_eq!(html_strip.name(), "html_strip");
        assert_eq!(lowercase, AnalyzerFilter::Token(TokenFilter::new("lowercase")));
        assert_eq!(html_strip, AnalyzerFilter::Char(CharFilter::new("html_strip")));
    }

    #[test]
    fn test_same_name_different_kind() {
        let token: AnalyzerFilter = TokenFilter::new("mapping").into();
        let char_filter: AnalyzerFilter = CharFilter::new("mapping").into();

        assert_eq!(token.name(), char_filter.name());
        assert!(token != char_filter);
    }
}
