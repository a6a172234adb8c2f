use document::DocumentBuilder;
use analysis::{AnalyzerDefinition, DEFAULT_LOWERCASE};


/// Defines a "pattern" analyzer, which splits text on a regular expression
///
/// The pattern is written out as-is. It is not compiled or checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternAnalyzerDefinition {
    name: String,
    pattern: String,
    lowercase: bool,
}


impl PatternAnalyzerDefinition {
    pub fn new<N: Into<String>, P: Into<String>>(name: N, pattern: P) -> PatternAnalyzerDefinition {
        PatternAnalyzerDefinition {
            name: name.into(),
            pattern: pattern.into(),
            lowercase: DEFAULT_LOWERCASE,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    pub fn with_lowercase(&self, lowercase: bool) -> PatternAnalyzerDefinition {
        PatternAnalyzerDefinition {
            lowercase: lowercase,
            ..self.clone()
        }
    }
}


impl AnalyzerDefinition for PatternAnalyzerDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self, doc: &mut dyn DocumentBuilder) {
        doc.field("type", "pattern".into());
        doc.field("lowercase", self.lowercase.into());
        doc.field("pattern", (&self.pattern).into());
    }
}
