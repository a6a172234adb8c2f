pub mod stop;
pub mod standard;
pub mod pattern;
pub mod snowball;
pub mod custom;

use serde::{Serialize, Serializer};

use document::DocumentBuilder;
use analysis::AnalyzerDefinition;
use analysis::analyzers::stop::StopAnalyzerDefinition;
use analysis::analyzers::standard::StandardAnalyzerDefinition;
use analysis::analyzers::pattern::PatternAnalyzerDefinition;
use analysis::analyzers::snowball::SnowballAnalyzerDefinition;
use analysis::analyzers::custom::CustomAnalyzerDefinition;


pub(crate) fn collect_words<I, S>(words: I) -> Vec<String>
    where I: IntoIterator<Item=S>,
          S: Into<String>
{
    words.into_iter().map(|word| word.into()).collect()
}


/// Any one of the analyzer definitions
///
/// Used wherever analyzers of different kinds are kept together, such as in
/// `AnalysisSettings`.
#[derive(Debug, Clone, PartialEq)]
pub enum Analyzer {
    Stop(StopAnalyzerDefinition),
    Standard(StandardAnalyzerDefinition),
    Pattern(PatternAnalyzerDefinition),
    Snowball(SnowballAnalyzerDefinition),
    Custom(CustomAnalyzerDefinition),
}


impl Analyzer {
    /// The value written into the analyzer's "type" field
    pub fn analyzer_type(&self) -> &'static str {
        match *self {
            Analyzer::Stop(_) => "stop",
            Analyzer::Standard(_) => "standard",
            Analyzer::Pattern(_) => "pattern",
            Analyzer::Snowball(_) => "snowball",
            Analyzer::Custom(_) => "custom",
        }
    }

    fn definition(&self) -> &dyn AnalyzerDefinition {
        match *self {
            Analyzer::Stop(ref analyzer) => analyzer,
            Analyzer::Standard(ref analyzer) => analyzer,
            Analyzer::Pattern(ref analyzer) => analyzer,
            Analyzer::Snowball(ref analyzer) => analyzer,
            Analyzer::Custom(ref analyzer) => analyzer,
        }
    }
}


impl AnalyzerDefinition for Analyzer {
    fn name(&self) -> &str {
        self.definition().name()
    }

    fn build(&self, doc: &mut dyn DocumentBuilder) {
        self.definition().build(doc)
    }
}


impl From<StopAnalyzerDefinition> for Analyzer {
    fn from(analyzer: StopAnalyzerDefinition) -> Analyzer {
        Analyzer::Stop(analyzer)
    }
}


impl From<StandardAnalyzerDefinition> for Analyzer {
    fn from(analyzer: StandardAnalyzerDefinition) -> Analyzer {
        Analyzer::Standard(analyzer)
    }
}


impl From<PatternAnalyzerDefinition> for Analyzer {
    fn from(analyzer: PatternAnalyzerDefinition) -> Analyzer {
        Analyzer::Pattern(analyzer)
    }
}


impl From<SnowballAnalyzerDefinition> for Analyzer {
    fn from(analyzer: SnowballAnalyzerDefinition) -> Analyzer {
        Analyzer::Snowball(analyzer)
    }
}


impl From<CustomAnalyzerDefinition> for Analyzer {
    fn from(analyzer: CustomAnalyzerDefinition) -> Analyzer {
        Analyzer::Custom(analyzer)
    }
}


impl Serialize for Analyzer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.json().serialize(serializer)
    }
}
