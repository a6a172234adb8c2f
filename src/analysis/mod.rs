pub mod tokenizers;
pub mod filters;
pub mod analyzers;
pub mod settings;

use serde_json::Value;

use document::{DocumentBuilder, JsonTreeBuilder};

pub use analysis::analyzers::Analyzer;
pub use analysis::analyzers::custom::CustomAnalyzerDefinition;
pub use analysis::analyzers::pattern::PatternAnalyzerDefinition;
pub use analysis::analyzers::snowball::SnowballAnalyzerDefinition;
pub use analysis::analyzers::standard::StandardAnalyzerDefinition;
pub use analysis::analyzers::stop::StopAnalyzerDefinition;
pub use analysis::filters::{AnalyzerFilter, CharFilter, TokenFilter};
pub use analysis::settings::AnalysisSettings;
pub use analysis::tokenizers::Tokenizer;


/// Default `max_token_length` of the standard analyzer
pub const DEFAULT_MAX_TOKEN_LENGTH: i32 = 255;

/// Default language of the snowball analyzer
pub const DEFAULT_LANGUAGE: &'static str = "English";

/// Default `lowercase` flag of the pattern analyzer
pub const DEFAULT_LOWERCASE: bool = true;


/// Something that can write itself into a named analyzer object
///
/// Implementors only provide `name` and `build`. The remaining methods wrap
/// the output of `build` in an object keyed by the analyzer name and/or
/// allocate a fresh document to build into.
pub trait AnalyzerDefinition {
    fn name(&self) -> &str;

    /// Writes the analyzer's fields, without an enclosing object
    fn build(&self, doc: &mut dyn DocumentBuilder);

    /// Writes the analyzer's fields inside an object named after the analyzer
    fn build_with_name(&self, doc: &mut dyn DocumentBuilder) {
        trace!("building analyzer {:?}", self.name());

        doc.start_object(Some(self.name()));
        self.build(doc);
        doc.end_object();
    }

    /// Returns `{<name>: {<fields>}}`
    fn json_with_name(&self) -> Value {
        let mut doc = JsonTreeBuilder::new();
        doc.start_object(None);
        self.build_with_name(&mut doc);
        doc.end_object();
        doc.finish()
    }

    /// Returns `{<fields>}`
    fn json(&self) -> Value {
        let mut doc = JsonTreeBuilder::new();
        doc.start_object(None);
        self.build(&mut doc);
        doc.end_object();
        doc.finish()
    }
}
