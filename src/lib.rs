//! Builders for the analysis section of Elasticsearch-compatible index
//! settings
//!
//! Each analyzer definition is an immutable value that writes itself into a
//! `DocumentBuilder`. Collect them into `AnalysisSettings` to produce the
//! `{"analysis": {"analyzer": {...}}}` fragment of a create-index request.

extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate serde_json;
#[macro_use]
extern crate log;

pub mod document;
pub mod analysis;
pub mod settings_parser;

pub use document::{DocumentBuilder, FieldValue, JsonTreeBuilder, JsonWriter};
pub use analysis::{AnalyzerDefinition, Analyzer, AnalysisSettings};
pub use analysis::{StopAnalyzerDefinition, StandardAnalyzerDefinition, PatternAnalyzerDefinition, SnowballAnalyzerDefinition, CustomAnalyzerDefinition};
pub use analysis::{Tokenizer, AnalyzerFilter, TokenFilter, CharFilter};
