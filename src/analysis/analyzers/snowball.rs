use document::{DocumentBuilder, FieldValue};
use analysis::{AnalyzerDefinition, DEFAULT_LANGUAGE};
use analysis::analyzers::collect_words;


/// Defines a "snowball" analyzer
///
/// Unlike the stop and standard analyzers, "stopwords" is left out entirely
/// when there are none, so the engine's language defaults apply.
#[derive(Debug, Clone, PartialEq)]
pub struct SnowballAnalyzerDefinition {
    name: String,
    language: String,
    stopwords: Vec<String>,
}


impl SnowballAnalyzerDefinition {
    pub fn new<N: Into<String>>(name: N) -> SnowballAnalyzerDefinition {
        SnowballAnalyzerDefinition {
            name: name.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            stopwords: Vec::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn stopwords(&self) -> &[String] {
        &self.stopwords
    }

    pub fn with_language<L: Into<String>>(&self, language: L) -> SnowballAnalyzerDefinition {
        SnowballAnalyzerDefinition {
            language: language.into(),
            ..self.clone()
        }
    }

    pub fn with_stopwords<I, S>(&self, stopwords: I) -> SnowballAnalyzerDefinition
        where I: IntoIterator<Item=S>,
              S: Into<String>
    {
        SnowballAnalyzerDefinition {
            stopwords: collect_words(stopwords),
            ..self.clone()
        }
    }
}


impl AnalyzerDefinition for SnowballAnalyzerDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self, doc: &mut dyn DocumentBuilder) {
        doc.field("type", "snowball".into());
        doc.field("language", (&self.language).into());

        if !self.stopwords.is_empty() {
            doc.field("stopwords", FieldValue::from(&self.stopwords[..]));
        }
    }
}
