use std::error::Error;
use std::fmt;

use serde_json::{Map, Value};

use analysis::{DEFAULT_LANGUAGE, DEFAULT_LOWERCASE, DEFAULT_MAX_TOKEN_LENGTH};
use analysis::analyzers::Analyzer;
use analysis::analyzers::stop::StopAnalyzerDefinition;
use analysis::analyzers::standard::StandardAnalyzerDefinition;
use analysis::analyzers::pattern::PatternAnalyzerDefinition;
use analysis::analyzers::snowball::SnowballAnalyzerDefinition;
use analysis::analyzers::custom::CustomAnalyzerDefinition;
use analysis::tokenizers::Tokenizer;
use analysis::filters::{AnalyzerFilter, CharFilter, TokenFilter};


#[derive(Debug, PartialEq)]
pub enum AnalyzerParseError {
    ExpectedObject,
    ExpectedString,
    ExpectedBoolean,
    ExpectedInteger,
    ExpectedArray,
    ExpectedKey(String),
    UnrecognisedType(String),
}


impl fmt::Display for AnalyzerParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AnalyzerParseError::ExpectedObject => write!(f, "expected an object"),
            AnalyzerParseError::ExpectedString => write!(f, "expected a string"),
            AnalyzerParseError::ExpectedBoolean => write!(f, "expected a boolean"),
            AnalyzerParseError::ExpectedInteger => write!(f, "expected a 32-bit integer"),
            AnalyzerParseError::ExpectedArray => write!(f, "expected an array of strings"),
            AnalyzerParseError::ExpectedKey(ref key) => write!(f, "missing key {:?}", key),
            AnalyzerParseError::UnrecognisedType(ref analyzer_type) => write!(f, "unrecognised analyzer type {:?}", analyzer_type),
        }
    }
}


impl Error for AnalyzerParseError {}


fn parse_string(json: &Value) -> Result<String, AnalyzerParseError> {
    json.as_str().map(|string| string.to_owned()).ok_or(AnalyzerParseError::ExpectedString)
}


fn parse_string_array(json: &Value) -> Result<Vec<String>, AnalyzerParseError> {
    let array = json.as_array().ok_or(AnalyzerParseError::ExpectedArray)?;

    let mut strings = Vec::with_capacity(array.len());
    for item in array.iter() {
        let string = item.as_str().ok_or(AnalyzerParseError::ExpectedArray)?;
        strings.push(string.to_owned());
    }

    Ok(strings)
}


fn parse_stopwords(data: &Map<String, Value>) -> Result<Vec<String>, AnalyzerParseError> {
    match data.get("stopwords") {
        Some(stopwords_json) => parse_string_array(stopwords_json),
        None => Ok(Vec::new()),
    }
}


/// Reads one analyzer from the body of an `analysis.analyzer.<name>` object
pub fn parse(name: &str, json: &Value) -> Result<Analyzer, AnalyzerParseError> {
    let data = json.as_object().ok_or(AnalyzerParseError::ExpectedObject)?;

    // Get type
    let analyzer_type_json = data.get("type").ok_or(AnalyzerParseError::ExpectedKey("type".to_string()))?;
    let analyzer_type = analyzer_type_json.as_str().ok_or(AnalyzerParseError::ExpectedString)?;

    match analyzer_type {
        "stop" => {
            let stopwords = parse_stopwords(data)?;

            Ok(StopAnalyzerDefinition::new(name).with_stopwords(stopwords).into())
        }
        "standard" => {
            let stopwords = parse_stopwords(data)?;

            let max_token_length = match data.get("max_token_length") {
                Some(max_token_length_json) => {
                    match max_token_length_json.as_i64() {
                        Some(max_token_length) if max_token_length >= i32::min_value() as i64
                                               && max_token_length <= i32::max_value() as i64 => {
                            max_token_length as i32
                        }
                        _ => return Err(AnalyzerParseError::ExpectedInteger),
                    }
                }
                None => DEFAULT_MAX_TOKEN_LENGTH,
            };

            Ok(StandardAnalyzerDefinition::new(name)
                .with_stopwords(stopwords)
                .with_max_token_length(max_token_length)
                .into())
        }
        "pattern" => {
            let pattern_json = data.get("pattern").ok_or(AnalyzerParseError::ExpectedKey("pattern".to_string()))?;
            let pattern = parse_string(pattern_json)?;

            let lowercase = match data.get("lowercase") {
                Some(lowercase_json) => lowercase_json.as_bool().ok_or(AnalyzerParseError::ExpectedBoolean)?,
                None => DEFAULT_LOWERCASE,
            };

            Ok(PatternAnalyzerDefinition::new(name, pattern).with_lowercase(lowercase).into())
        }
        "snowball" => {
            let language = match data.get("language") {
                Some(language_json) => parse_string(language_json)?,
                None => DEFAULT_LANGUAGE.to_string(),
            };

            let stopwords = parse_stopwords(data)?;

            Ok(SnowballAnalyzerDefinition::new(name)
                .with_language(language)
                .with_stopwords(stopwords)
                .into())
        }
        "custom" => {
            // Get tokenizer
            let tokenizer_json = data.get("tokenizer").ok_or(AnalyzerParseError::ExpectedKey("tokenizer".to_string()))?;
            let tokenizer = Tokenizer::new(parse_string(tokenizer_json)?);

            // Token filters come first. The interleaving with char filters
            // isn't recorded in the JSON, and doesn't affect the output.
            let mut filters = Vec::new();

            if let Some(filter_json) = data.get("filter") {
                for filter_name in parse_string_array(filter_json)? {
                    filters.push(AnalyzerFilter::Token(TokenFilter::new(filter_name)));
                }
            }

            if let Some(char_filter_json) = data.get("char_filter") {
                for filter_name in parse_string_array(char_filter_json)? {
                    filters.push(AnalyzerFilter::Char(CharFilter::new(filter_name)));
                }
            }

            Ok(CustomAnalyzerDefinition::new(name, tokenizer, filters).into())
        }
        // TODO
        // simple
        // whitespace
        // keyword
        // fingerprint
        // language analyzers (english, french, ...)
        _ => {
            debug!("unrecognised analyzer type {:?} for {:?}", analyzer_type, name);
            Err(AnalyzerParseError::UnrecognisedType(analyzer_type.to_owned()))
        }
    }
}
