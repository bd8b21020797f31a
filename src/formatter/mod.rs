//! Number to text formatting.

mod number;

pub use number::format_number;

use std::sync::Arc;

use crate::ast::{Pattern, Section};
use crate::options::SeparatorConfig;
use crate::value::Value;

/// A pattern compiled for rendering numbers as text.
///
/// Immutable once built; cloning shares the parsed pattern.
#[derive(Debug, Clone)]
pub struct NumberFormatter {
    pattern: Arc<Pattern>,
    config: SeparatorConfig,
}

impl NumberFormatter {
    /// Compile `pattern` with the given separators.
    pub fn new(pattern: &str, config: &SeparatorConfig) -> Self {
        Self::from_parsed(Arc::new(Pattern::parse(pattern)), config.clone())
    }

    pub(crate) fn from_parsed(pattern: Arc<Pattern>, config: SeparatorConfig) -> Self {
        NumberFormatter { pattern, config }
    }

    /// Format a numeric value.
    ///
    /// NaN, infinities and an empty pattern yield an empty string.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() || self.pattern.is_empty() {
            return String::new();
        }

        let (section, positive) = self.select_section(value);

        let mut magnitude = value;
        if section.percent {
            magnitude *= 100.0;
        }
        if !positive {
            magnitude = -magnitude;
        }

        format_number(magnitude, section, &self.config)
    }

    /// Format an untyped value; anything but a number yields `""`.
    pub fn format_value<'a>(&self, value: impl Into<Value<'a>>) -> String {
        match value.into().as_number() {
            Some(n) => self.format(n),
            None => String::new(),
        }
    }

    /// Select the section for a value's sign.
    ///
    /// `+0.0` counts as positive and `-0.0` as negative.
    fn select_section(&self, value: f64) -> (&Section, bool) {
        let positive = value > 0.0 || (value == 0.0 && value.is_sign_positive());
        if positive {
            (self.pattern.positive(), true)
        } else {
            (self.pattern.negative(), false)
        }
    }

    /// The parsed pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn config(&self) -> &SeparatorConfig {
        &self.config
    }
}

/// Compile a pattern into a formatting function.
pub fn compile_formatter(
    pattern: &str,
    config: &SeparatorConfig,
) -> impl Fn(f64) -> String + Clone + Send + Sync + 'static {
    let formatter = NumberFormatter::new(pattern, config);
    move |value| formatter.format(value)
}
