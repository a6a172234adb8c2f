use document::{DocumentBuilder, FieldValue};
use analysis::AnalyzerDefinition;
use analysis::analyzers::collect_words;


/// Defines a "stop" analyzer
///
/// The "stopwords" field is always written, even when the list is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct StopAnalyzerDefinition {
    name: String,
    stopwords: Vec<String>,
}


impl StopAnalyzerDefinition {
    pub fn new<N: Into<String>>(name: N) -> StopAnalyzerDefinition {
        StopAnalyzerDefinition {
            name: name.into(),
            stopwords: Vec::new(),
        }
    }

    pub fn stopwords(&self) -> &[String] {
        &self.stopwords
    }

    pub fn with_stopwords<I, S>(&self, stopwords: I) -> StopAnalyzerDefinition
        where I: IntoIterator<Item=S>,
              S: Into<String>
    {
        StopAnalyzerDefinition {
            stopwords: collect_words(stopwords),
            ..self.clone()
        }
    }
}


impl AnalyzerDefinition for StopAnalyzerDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self, doc: &mut dyn DocumentBuilder) {
        doc.field("type", "stop".into());
        doc.field("stopwords", FieldValue::from(&self.stopwords[..]));
    }
}
