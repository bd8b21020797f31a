//! A parser and formatter compiled from the same pattern.

use std::sync::Arc;

use crate::ast::Pattern;
use crate::formatter::NumberFormatter;
use crate::options::SeparatorConfig;
use crate::reader::NumberParser;

/// Both directions of one pattern and separator configuration.
///
/// The pattern is parsed once and shared by the two halves.
#[derive(Debug, Clone)]
pub struct NumberCodec {
    parser: NumberParser,
    formatter: NumberFormatter,
}

impl NumberCodec {
    pub fn new(pattern: &str, config: &SeparatorConfig) -> Self {
        let parsed = Arc::new(Pattern::parse(pattern));
        NumberCodec {
            parser: NumberParser::from_parsed(Arc::clone(&parsed), config.clone()),
            formatter: NumberFormatter::from_parsed(parsed, config.clone()),
        }
    }

    pub fn format(&self, value: f64) -> String {
        self.formatter.format(value)
    }

    pub fn parse(&self, text: &str) -> Option<f64> {
        self.parser.parse(text)
    }

    pub fn pattern(&self) -> &Pattern {
        self.formatter.pattern()
    }

    pub fn config(&self) -> &SeparatorConfig {
        self.formatter.config()
    }

    pub fn parser(&self) -> &NumberParser {
        &self.parser
    }

    pub fn formatter(&self) -> &NumberFormatter {
        &self.formatter
    }
}
