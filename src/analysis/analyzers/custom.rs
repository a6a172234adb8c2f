use document::DocumentBuilder;
use analysis::AnalyzerDefinition;
use analysis::tokenizers::Tokenizer;
use analysis::filters::AnalyzerFilter;


/// Defines a "custom" analyzer from a tokenizer and a list of filters
///
/// Token filters and char filters share one list. When built, they are split
/// into the "filter" and "char_filter" fields, each keeping the order they
/// had in the list. Either field is left out if it would be empty.
///
/// # Examples
///
/// ```
/// use rusticsearch_analysis::analysis::{AnalyzerDefinition, CustomAnalyzerDefinition};
/// use rusticsearch_analysis::analysis::{Tokenizer, TokenFilter, CharFilter};
///
/// let analyzer = CustomAnalyzerDefinition::from_filters(
///     "my_custom",
///     Tokenizer::new("standard"),
///     TokenFilter::new("lowercase"),
///     vec![CharFilter::new("html_strip").into(), TokenFilter::new("asciifolding").into()],
/// );
///
/// assert_eq!(
///     analyzer.json().to_string(),
///     r#"{"type":"custom","tokenizer":"standard","filter":["lowercase","asciifolding"],"char_filter":["html_strip"]}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CustomAnalyzerDefinition {
    name: String,
    tokenizer: Tokenizer,
    filters: Vec<AnalyzerFilter>,
}


impl CustomAnalyzerDefinition {
    pub fn new<N: Into<String>>(name: N, tokenizer: Tokenizer, filters: Vec<AnalyzerFilter>) -> CustomAnalyzerDefinition {
        CustomAnalyzerDefinition {
            name: name.into(),
            tokenizer: tokenizer,
            filters: filters,
        }
    }

    /// Like `new`, but always has at least one filter
    pub fn from_filters<N, F, I>(name: N, tokenizer: Tokenizer, first: F, rest: I) -> CustomAnalyzerDefinition
        where N: Into<String>,
              F: Into<AnalyzerFilter>,
              I: IntoIterator<Item=AnalyzerFilter>
    {
        let mut filters = vec![first.into()];
        filters.extend(rest);

        CustomAnalyzerDefinition::new(name, tokenizer, filters)
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn filters(&self) -> &[AnalyzerFilter] {
        &self.filters
    }

    fn token_filter_names(&self) -> Vec<&str> {
        self.filters.iter().filter_map(|filter| {
            match *filter {
                AnalyzerFilter::Token(ref filter) => Some(filter.name()),
                AnalyzerFilter::Char(_) => None,
            }
        }).collect()
    }

    fn char_filter_names(&self) -> Vec<&str> {
        self.filters.iter().filter_map(|filter| {
            match *filter {
                AnalyzerFilter::Char(ref filter) => Some(filter.name()),
                AnalyzerFilter::Token(_) => None,
            }
        }).collect()
    }
}


impl AnalyzerDefinition for CustomAnalyzerDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self, doc: &mut dyn DocumentBuilder) {
        doc.field("type", "custom".into());
        doc.field("tokenizer", self.tokenizer.name().into());

        let token_filters = self.token_filter_names();
        if !token_filters.is_empty() {
            doc.field("filter", token_filters.into());
        }

        let char_filters = self.char_filter_names();
        if !char_filters.is_empty() {
            doc.field("char_filter", char_filters.into());
        }
    }
}


#[cfg(test)]
mod tests {
    use analysis::AnalyzerDefinition;
    use analysis::tokenizers::Tokenizer;
    use analysis::filters::{AnalyzerFilter, CharFilter, TokenFilter};
    use super::CustomAnalyzerDefinition;

    #[test]
    fn test_no_filters() {
        let analyzer = CustomAnalyzerDefinition::new("bare", Tokenizer::new("keyword"), Vec::new());

        assert_eq!(analyzer.json_with_name(), json!({
            "bare": {
                "type": "custom",
                "tokenizer": "keyword",
            }
        }));
    }

    #[test]
    fn test_mixed_filters_keep_relative_order() {
        let filters: Vec<AnalyzerFilter> = vec![
            CharFilter::new("html_strip").into(),
            TokenFilter::new("lowercase").into(),
            CharFilter::new("mapping").into(),
            TokenFilter::new("asciifolding").into(),
            TokenFilter::new("stop").into(),
        ];
        let analyzer = CustomAnalyzerDefinition::new("mixed", Tokenizer::new("standard"), filters);

        assert_eq!(analyzer.json(), json!({
            "type": "custom",
            "tokenizer": "standard",
            "filter": ["lowercase", "asciifolding", "stop"],
            "char_filter": ["html_strip", "mapping"],
        }));
    }

    #[test]
    fn test_only_token_filters() {
        let analyzer = CustomAnalyzerDefinition::new("tokens", Tokenizer::new("standard"), vec![
            TokenFilter::new("lowercase").into(),
        ]);
        let json = analyzer.json();

        assert_eq!(json["filter"], json!(["lowercase"]));
        assert!(json.get("char_filter").is_none());
    }

    #[test]
    fn test_only_char_filters() {
        let analyzer = CustomAnalyzerDefinition::new("chars", Tokenizer::new("standard"), vec![
            CharFilter::new("html_strip").into(),
        ]);
        let json = analyzer.json();

        assert_eq!(json["char_filter"], json!(["html_strip"]));
        assert!(json.get("filter").is_none());
    }

    #[test]
    fn test_from_filters() {
        let analyzer = CustomAnalyzerDefinition::from_filters(
            "folded",
            Tokenizer::new("whitespace"),
            TokenFilter::new("lowercase"),
            vec![TokenFilter::new("asciifolding").into()],
        );

        assert_eq!(analyzer.filters(), &[
            AnalyzerFilter::Token(TokenFilter::new("lowercase")),
            AnalyzerFilter::Token(TokenFilter::new("asciifolding")),
        ][..]);
        assert_eq!(analyzer.tokenizer().name(), "whitespace");
    }

    #[test]
    fn test_from_filters_with_single_char_filter() {
        let analyzer = CustomAnalyzerDefinition::from_filters(
            "stripped",
            Tokenizer::new("standard"),
            CharFilter::new("html_strip"),
            Vec::new(),
        );

        assert_eq!(analyzer.json_with_name(), json!({
            "stripped": {
                "type": "custom",
                "tokenizer": "standard",
                "char_filter": ["html_strip"],
            }
        }));
    }

    #[test]
    fn test_duplicate_filters_are_kept() {
        let analyzer = CustomAnalyzerDefinition::new("dup", Tokenizer::new("standard"), vec![
            TokenFilter::new("lowercase").into(),
            TokenFilter::new("lowercase").into(),
        ]);

        assert_eq!(analyzer.json()["filter"], json!(["lowercase", "lowercase"]));
    }
}
