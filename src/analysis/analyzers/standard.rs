use document::{DocumentBuilder, FieldValue};
use analysis::{AnalyzerDefinition, DEFAULT_MAX_TOKEN_LENGTH};
use analysis::analyzers::collect_words;


/// Defines a "standard" analyzer
///
/// # Examples
///
/// ```
/// use rusticsearch_analysis::analysis::{AnalyzerDefinition, StandardAnalyzerDefinition};
///
/// let analyzer = StandardAnalyzerDefinition::new("my_analyzer")
///     .with_stopwords(vec!["the", "a"])
///     .with_max_token_length(10);
///
/// assert_eq!(
///     analyzer.json_with_name().to_string(),
///     r#"{"my_analyzer":{"type":"standard","stopwords":["the","a"],"max_token_length":10}}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StandardAnalyzerDefinition {
    name: String,
    stopwords: Vec<String>,
    max_token_length: i32,
}


impl StandardAnalyzerDefinition {
    pub fn new<N: Into<String>>(name: N) -> StandardAnalyzerDefinition {
        StandardAnalyzerDefinition {
            name: name.into(),
            stopwords: Vec::new(),
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }

    pub fn stopwords(&self) -> &[String] {
        &self.stopwords
    }

    pub fn max_token_length(&self) -> i32 {
        self.max_token_length
    }

    pub fn with_stopwords<I, S>(&self, stopwords: I) -> StandardAnalyzerDefinition
        where I: IntoIterator<Item=S>,
              S: Into<String>
    {
        StandardAnalyzerDefinition {
            stopwords: collect_words(stopwords),
            ..self.clone()
        }
    }

    pub fn with_max_token_length(&self, max_token_length: i32) -> StandardAnalyzerDefinition {
        StandardAnalyzerDefinition {
            max_token_length: max_token_length,
            ..self.clone()
        }
    }
}


impl AnalyzerDefinition for StandardAnalyzerDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self, doc: &mut dyn DocumentBuilder) {
        doc.field("type", "standard".into());
        doc.field("stopwords", FieldValue::from(&self.stopwords[..]));
        doc.field("max_token_length", self.max_token_length.into());
    }
}
