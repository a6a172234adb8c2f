pub mod analysis_analyzer;

use std::error::Error;
use std::fmt;

use serde_json::Value;

use analysis::settings::AnalysisSettings;

use self::analysis_analyzer::{AnalyzerParseError, parse as parse_analyzer};


#[derive(Debug, PartialEq)]
pub enum AnalysisSettingsParseError {
    ExpectedObject,
    AnalyzerParseError(String, AnalyzerParseError),
}


impl fmt::Display for AnalysisSettingsParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AnalysisSettingsParseError::ExpectedObject => write!(f, "expected an object"),
            AnalysisSettingsParseError::AnalyzerParseError(ref name, ref e) => write!(f, "analyzer {:?}: {}", name, e),
        }
    }
}


impl Error for AnalysisSettingsParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            AnalysisSettingsParseError::ExpectedObject => None,
            AnalysisSettingsParseError::AnalyzerParseError(_, ref e) => Some(e),
        }
    }
}


/// Reads analyzers out of index settings
///
/// Accepts either a full settings body (`{"settings": {"analysis": ...}}`)
/// or just the analysis fragment (`{"analysis": ...}`). Missing sections
/// give empty settings.
pub fn parse(data: &Value) -> Result<AnalysisSettings, AnalysisSettingsParseError> {
    let mut data = data.as_object().ok_or(AnalysisSettingsParseError::ExpectedObject)?;

    if let Some(settings) = data.get("settings") {
        data = settings.as_object().ok_or(AnalysisSettingsParseError::ExpectedObject)?;
    }

    let mut analysis_settings = AnalysisSettings::new();

    if let Some(analysis) = data.get("analysis") {
        let analysis = analysis.as_object().ok_or(AnalysisSettingsParseError::ExpectedObject)?;

        // Analyzers
        if let Some(analyzer_data) = analysis.get("analyzer") {
            let analyzer_data = analyzer_data.as_object().ok_or(AnalysisSettingsParseError::ExpectedObject)?;

            for (name, data) in analyzer_data {
                let analyzer = match parse_analyzer(name, data) {
                    Ok(analyzer) => analyzer,
                    Err(e) => return Err(AnalysisSettingsParseError::AnalyzerParseError(name.to_string(), e)),
                };

                analysis_settings.insert(analyzer);
            }
        }
    }

    Ok(analysis_settings)
}
