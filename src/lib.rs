//! ldmlfmt - LDML number patterns in both directions
//!
//! Compile a pattern such as `"#,##0.00"` or `"0.00%;(0.00%)"` into a
//! formatter (number to text) or a parser (text to number), or recover an
//! equivalent pattern from any formatting function by probing it.
//!
//! ```
//! use ldmlfmt::{compile_formatter, compile_parser, infer_pattern, SeparatorConfig};
//!
//! let config = SeparatorConfig::default();
//! let format = compile_formatter("#,##0.00", &config);
//! assert_eq!(format(1234.5), "1,234.50");
//!
//! let parse = compile_parser("#,##0.00", &config);
//! assert_eq!(parse("1,234.50"), Some(1234.5));
//!
//! assert_eq!(infer_pattern(format).unwrap(), "#,##0.00");
//! ```

pub mod analysis;
pub mod ast;
pub mod error;
pub mod options;
pub mod value;

mod cache;
mod codec;
mod formatter;
mod infer;
pub mod parser;
mod reader;

pub use ast::{Pattern, Section};
pub use cache::{PatternCache, DEFAULT_CACHE_SIZE};
pub use codec::NumberCodec;
pub use error::{InferError, ProbeSide};
pub use formatter::{compile_formatter, NumberFormatter};
pub use infer::{infer_pattern, MAX_PROBE_DIGITS};
pub use options::SeparatorConfig;
pub use reader::{compile_parser, NumberParser, MAX_SAFE_INTEGER};
pub use value::Value;

/// Format a value with a pattern compiled for this call only.
pub fn format(value: f64, pattern: &str, config: &SeparatorConfig) -> String {
    NumberFormatter::new(pattern, config).format(value)
}

/// Format a value with a pattern and the default separators.
pub fn format_default(value: f64, pattern: &str) -> String {
    format(value, pattern, &SeparatorConfig::default())
}

/// Parse text with a pattern compiled for this call only.
pub fn parse(text: &str, pattern: &str, config: &SeparatorConfig) -> Option<f64> {
    NumberParser::new(pattern, config).parse(text)
}

/// Parse text with a pattern and the default separators.
pub fn parse_default(text: &str, pattern: &str) -> Option<f64> {
    parse(text, pattern, &SeparatorConfig::default())
}
