use std::slice;

use serde::{Serialize, Serializer};
use serde_json::Value;

use document::{DocumentBuilder, JsonTreeBuilder};
use analysis::AnalyzerDefinition;
use analysis::analyzers::Analyzer;


/// The analyzers of an index, in the order they were inserted
///
/// Builds the "analysis" section of an index's settings:
///
/// ```json
/// {"analysis": {"analyzer": {"<name>": {...}, ...}}}
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisSettings {
    analyzers: Vec<Analyzer>,
}


impl AnalysisSettings {
    pub fn new() -> AnalysisSettings {
        AnalysisSettings::default()
    }

    /// Adds an analyzer, replacing any existing analyzer with the same name
    ///
    /// A replaced analyzer keeps its position and is returned.
    pub fn insert<A: Into<Analyzer>>(&mut self, analyzer: A) -> Option<Analyzer> {
        let analyzer = analyzer.into();

        match self.analyzers.iter().position(|existing| existing.name() == analyzer.name()) {
            Some(index) => {
                debug!("replacing analyzer {:?}", analyzer.name());
                Some(::std::mem::replace(&mut self.analyzers[index], analyzer))
            }
            None => {
                self.analyzers.push(analyzer);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Analyzer> {
        self.analyzers.iter().find(|analyzer| analyzer.name() == name)
    }

    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<Analyzer> {
        self.analyzers.iter()
    }

    pub fn build(&self, doc: &mut dyn DocumentBuilder) {
        doc.start_object(Some("analysis"));
        doc.start_object(Some("analyzer"));

        for analyzer in self.analyzers.iter() {
            analyzer.build_with_name(doc);
        }

        doc.end_object();
        doc.end_object();
    }

    pub fn json(&self) -> Value {
        let mut doc = JsonTreeBuilder::new();
        doc.start_object(None);
        self.build(&mut doc);
        doc.end_object();
        doc.finish()
    }
}


impl<'a> IntoIterator for &'a AnalysisSettings {
    type Item = &'a Analyzer;
    type IntoIter = slice::Iter<'a, Analyzer>;

    fn into_iter(self) -> slice::Iter<'a, Analyzer> {
        self.analyzers.iter()
    }
}


impl Serialize for AnalysisSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.json().serialize(serializer)
    }
}
