//! Text to number parsing.
//!
//! A pattern is compiled once into an anchored regular expression with one
//! alternative per sign section. Each alternative names its own captures
//! (`pi`/`pf` for the positive section, `ni`/`nf` for the negative one), so
//! the matched branch is read off the captures instead of group arithmetic.

use std::sync::Arc;

use regex::{Captures, Regex};
use tracing::{debug, trace, warn};

use crate::ast::{DigitPlaceholder, Pattern, PatternPart, Section};
use crate::options::SeparatorConfig;
use crate::value::Value;

/// Largest integer magnitude an f64 holds exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Regex for one significant digit run with no leading zero.
const PLAIN_RUN: &str = r"(?:[1-9]\d*)?";

/// A pattern compiled for reading numbers back from text.
///
/// Immutable once built; cloning shares the parsed pattern and matcher.
#[derive(Debug, Clone)]
pub struct NumberParser {
    pattern: Arc<Pattern>,
    config: SeparatorConfig,
    matcher: Option<Regex>,
}

impl NumberParser {
    /// Compile `pattern` with the given separators.
    pub fn new(pattern: &str, config: &SeparatorConfig) -> Self {
        Self::from_parsed(Arc::new(Pattern::parse(pattern)), config.clone())
    }

    pub(crate) fn from_parsed(pattern: Arc<Pattern>, config: SeparatorConfig) -> Self {
        let matcher = if pattern.is_empty() {
            None
        } else {
            build_matcher(&pattern, &config)
        };
        NumberParser {
            pattern,
            config,
            matcher,
        }
    }

    /// Parse formatted text.
    ///
    /// Returns `None` for empty text, text the pattern does not match, and
    /// integer parts beyond [`MAX_SAFE_INTEGER`].
    pub fn parse(&self, text: &str) -> Option<f64> {
        if text.is_empty() {
            return None;
        }
        let matcher = self.matcher.as_ref()?;
        let Some(caps) = matcher.captures(text) else {
            trace!(text, pattern = self.pattern.source(), "text does not match pattern");
            return None;
        };

        let (section, negative) = if caps.name("ni").is_some() {
            (self.pattern.negative(), true)
        } else {
            (self.pattern.positive(), false)
        };

        read_value(&caps, section, negative)
    }

    /// Parse an untyped value; anything but text yields `None`.
    pub fn parse_value<'a>(&self, value: impl Into<Value<'a>>) -> Option<f64> {
        self.parse(value.into().as_text()?)
    }

    /// The parsed pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn config(&self) -> &SeparatorConfig {
        &self.config
    }
}

/// Compile a pattern into a parsing function.
pub fn compile_parser(
    pattern: &str,
    config: &SeparatorConfig,
) -> impl Fn(&str) -> Option<f64> + Clone + Send + Sync + 'static {
    let parser = NumberParser::new(pattern, config);
    move |text| parser.parse(text)
}

fn read_value(caps: &Captures<'_>, section: &Section, negative: bool) -> Option<f64> {
    let (integer_name, fraction_name) = if negative { ("ni", "nf") } else { ("pi", "pf") };

    let integer_digits = digits_of(caps.name(integer_name).map_or("", |m| m.as_str()));
    let magnitude = integer_value(&integer_digits)?;
    let mut value = magnitude as f64;

    if let Some(fraction) = caps.name(fraction_name) {
        let fraction_digits = digits_of(fraction.as_str());
        if !fraction_digits.is_empty() {
            value += format!("0.{}", fraction_digits).parse::<f64>().unwrap_or(0.0);
        }
    }

    if negative {
        value = -value;
    }
    if section.percent {
        value /= 100.0;
    }
    Some(value)
}

fn digits_of(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Integer value of a digit string, or `None` beyond the safe range.
fn integer_value(digits: &str) -> Option<u64> {
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(0);
    }
    // u64 holds any 19-digit number
    if significant.len() > 19 {
        trace!(digits, "integer part overflows");
        return None;
    }
    let value: u64 = significant.parse().ok()?;
    if value > MAX_SAFE_INTEGER {
        trace!(digits, "integer part overflows");
        return None;
    }
    Some(value)
}

fn build_matcher(pattern: &Pattern, config: &SeparatorConfig) -> Option<Regex> {
    let positive = section_regex(pattern.positive(), config, "pi", "pf");
    let negative = section_regex(pattern.negative(), config, "ni", "nf");
    let source = format!("^(?:{}|{})$", positive, negative);

    match Regex::new(&source) {
        Ok(matcher) => {
            debug!(pattern = pattern.source(), regex = %source, "compiled parser");
            Some(matcher)
        }
        Err(err) => {
            warn!(pattern = pattern.source(), error = %err, "cannot build parser; nothing will match");
            None
        }
    }
}

fn section_regex(
    section: &Section,
    config: &SeparatorConfig,
    integer_name: &str,
    fraction_name: &str,
) -> String {
    let mut result = String::new();

    let parts = &section.integer_parts;
    let run = section.integer_run;
    let capture = format!(
        "(?P<{}>{})",
        integer_name,
        integer_run_regex(&parts[run.start..run.end], section, config)
    );
    for (index, part) in parts.iter().enumerate() {
        if index == run.start {
            result.push_str(&capture);
        }
        if let PatternPart::Literal(text) = part {
            result.push_str(&regex::escape(text));
        }
    }
    if run.start >= parts.len() {
        // no digits to read, but the empty capture still marks the branch
        result.push_str(&format!("(?P<{}>)", integer_name));
    }

    if !section.has_fraction_digits() {
        return result;
    }
    if let Some(parts) = &section.fraction_parts {
        let run = section.fraction_run;
        let prefix = literals_regex(&parts[..run.start]);
        let digits = fraction_run_regex(&parts[run.start..run.end]);
        let suffix = literals_regex(&parts[run.end..]);
        result.push_str(&format!(
            "(?:{}{}(?P<{}>{})|{}){}",
            regex::escape(&config.decimal_separator),
            prefix,
            fraction_name,
            digits,
            prefix,
            suffix
        ));
    }

    result
}

fn literals_regex(parts: &[PatternPart]) -> String {
    parts
        .iter()
        .filter_map(|part| match part {
            PatternPart::Literal(text) => Some(regex::escape(text)),
            _ => None,
        })
        .collect()
}

/// Regex for the integer marker run.
///
/// With a `#,` grouping the leading `#`/`,` markers collapse into one
/// optional run of digits and separators that starts with a non-zero digit.
/// Otherwise every `#` run is an optional run without a leading zero, and an
/// all-`0` run matches exactly its width.
fn integer_run_regex(run: &[PatternPart], section: &Section, config: &SeparatorConfig) -> String {
    let separator = regex::escape(&config.thousands_separator);
    let grouped = !section.group_sizes.is_empty();
    let lead = if grouped {
        format!(r"(?:(?:{0})*[1-9](?:\d|{0})*)?", separator)
    } else {
        PLAIN_RUN.to_string()
    };

    let mut result = String::new();

    if grouped && section.optional_grouping {
        let skip = run
            .iter()
            .take_while(|part| {
                matches!(
                    part,
                    PatternPart::Digit(DigitPlaceholder::Hash) | PatternPart::ThousandsSeparator
                )
            })
            .count();
        result.push_str(&lead);
        for part in &run[skip..] {
            match part {
                PatternPart::Digit(digit) if digit.is_required() => result.push_str(r"\d"),
                PatternPart::Digit(_) => result.push_str(r"\d?"),
                PatternPart::ThousandsSeparator => result.push_str(&separator),
                PatternPart::Literal(_) => {}
            }
        }
        return result;
    }

    let mut previous_optional = false;
    for part in run {
        let optional = matches!(part, PatternPart::Digit(digit) if !digit.is_required());
        match part {
            PatternPart::Digit(digit) if digit.is_required() => result.push_str(r"\d"),
            PatternPart::Digit(_) if !previous_optional => result.push_str(&lead),
            PatternPart::Digit(_) => {}
            PatternPart::ThousandsSeparator => result.push_str(&separator),
            PatternPart::Literal(_) => {}
        }
        previous_optional = optional;
    }
    result
}

/// Regex for the fraction marker run: `0` is a digit, `#` an optional one.
fn fraction_run_regex(run: &[PatternPart]) -> String {
    run.iter()
        .map(|part| match part {
            PatternPart::Digit(digit) if digit.is_required() => r"\d",
            PatternPart::Digit(_) => r"\d?",
            _ => "",
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(pattern: &str, text: &str) -> Option<f64> {
        NumberParser::new(pattern, &SeparatorConfig::default()).parse(text)
    }

    #[test]
    fn test_parse_grouped() {
        assert_eq!(parse("#,##0", "1,234,567"), Some(1234567.0));
        assert_eq!(parse("#,##0", "1234567"), Some(1234567.0));
        assert_eq!(parse("#,##0", "0"), Some(0.0));
    }

    #[test]
    fn test_parse_rejects_leading_zero() {
        assert_eq!(parse("#,##0", "012"), None);
        assert_eq!(parse("#0", "05"), None);
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse("#0.00%", "12.50%"), Some(0.125));
        assert_eq!(parse("#0.00%", "12%"), Some(0.12));
        assert_eq!(parse("0.00%", "12.50%"), None);
    }

    #[test]
    fn test_parse_negative_forms() {
        assert_eq!(parse("#,##0.00", "-1,234.50"), Some(-1234.5));
        assert_eq!(parse("#,##0.00;(#,##0.00)", "(1,234.50)"), Some(-1234.5));
        assert_eq!(parse("#,##0.00;(#,##0.00)", "-1,234.50"), None);
    }

    #[test]
    fn test_fraction_is_optional() {
        assert_eq!(parse("#,##0.00", "1,234"), Some(1234.0));
        assert_eq!(parse("0.##", "3.5"), Some(3.5));
        assert_eq!(parse("0.##", "3.555"), None);
    }

    #[test]
    fn test_fixed_width_matches_exact_digit_count() {
        assert_eq!(parse("00", "05"), Some(5.0));
        assert_eq!(parse("00", "23"), Some(23.0));
        assert_eq!(parse("00", "123"), None);
        assert_eq!(parse("00", "5"), None);
        assert_eq!(parse("0", "5"), Some(5.0));
        assert_eq!(parse("0,000", "1,234"), Some(1234.0));
    }

    #[test]
    fn test_integer_without_markers() {
        assert_eq!(parse(".00", ".50"), Some(0.5));
        assert_eq!(parse(".00", "1.50"), None);
        assert_eq!(parse(".00", "-.50"), Some(-0.5));
        assert_eq!(parse(".00;(.00)", "(.25)"), Some(-0.25));
    }

    #[test]
    fn test_literals_match_verbatim() {
        assert_eq!(parse("'$'#,##0.00", "$1,234.50"), Some(1234.5));
        assert_eq!(parse("'$'#,##0.00", "1,234.50"), None);
        assert_eq!(parse("#0'%'", "50%"), Some(50.0));
        assert_eq!(parse("(0)", "(7)"), Some(7.0));
    }

    #[test]
    fn test_overflow_is_rejected() {
        assert_eq!(parse("#0", "9007199254740991"), Some(9007199254740991.0));
        assert_eq!(parse("#0", "9007199254740992"), None);
        assert_eq!(parse("#0", "123456789012345678901234"), None);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(parse("#,##0", ""), None);
        assert_eq!(parse("", "12"), None);
    }

    #[test]
    fn test_parse_value_requires_text() {
        let parser = NumberParser::new("0", &SeparatorConfig::default());
        assert_eq!(parser.parse_value("3"), Some(3.0));
        assert_eq!(parser.parse_value(3.0), None);
        assert_eq!(parser.parse_value(true), None);
    }

    #[test]
    fn test_custom_separators() {
        let config = SeparatorConfig::new(".", ",");
        let parser = NumberParser::new("#,##0.00", &config);
        assert_eq!(parser.parse("1.234,50"), Some(1234.5));
        assert_eq!(parser.parse("1,234.50"), None);
    }
}
