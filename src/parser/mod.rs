//! Parser for LDML number patterns.

pub mod lexer;
pub mod tokens;

use crate::analysis::{self, Precision};
use crate::ast::{DigitPlaceholder, MarkerRun, Pattern, PatternPart, Section};
use lexer::Lexer;
use tokens::{SpannedToken, Token};

/// Parse a pattern string into a Pattern.
///
/// Never fails: the pattern grammar is a caller precondition, and a
/// malformed pattern simply yields the sections its tokens describe.
pub fn parse(pattern: &str) -> Pattern {
    let [positive, negative] = analysis::split_signs(pattern);
    let explicit_negative = Lexer::new(pattern).any(|t| t.token == Token::SectionSep);

    Pattern::from_sections(
        pattern,
        parse_section(&positive),
        parse_section(&negative),
        explicit_negative,
    )
}

/// Parse one sub-pattern (no `;`) into a Section.
pub fn parse_section(sub_pattern: &str) -> Section {
    let (integer_text, fraction_text) = analysis::split_decimal(sub_pattern);

    let integer_parts = Parser::new(integer_text).parse_parts();
    let fraction_parts = fraction_text.map(|text| Parser::new(text).parse_parts());

    let integer_run = MarkerRun::last_in(&integer_parts);
    let fraction_run = fraction_parts
        .as_deref()
        .map_or(MarkerRun { start: 0, end: 0 }, MarkerRun::first_in);

    Section {
        integer_run,
        fraction_run,
        percent: analysis::is_percent(sub_pattern),
        group_sizes: analysis::group_sizes(integer_text),
        optional_grouping: has_optional_grouping(integer_text),
        integer_precision: Precision::integer(Some(integer_text)),
        fraction_precision: Precision::fraction(fraction_text),
        integer_parts,
        fraction_parts,
    }
}

/// True if a `#` is immediately followed by a `,`.
fn has_optional_grouping(integer_text: &str) -> bool {
    let tokens: Vec<Token> = Lexer::new(integer_text).map(|t| t.token).collect();
    tokens
        .windows(2)
        .any(|pair| pair[0] == Token::Hash && pair[1] == Token::ThousandsSep)
}

/// Parser turning one half of a sub-pattern into typed parts.
struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Current token
    current: SpannedToken,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        let mut lexer = Lexer::new(text);
        let current = lexer.next_token();
        Self { lexer, current }
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    fn parse_parts(&mut self) -> Vec<PatternPart> {
        let mut builder = PartsBuilder::default();

        loop {
            match &self.current.token {
                Token::Eof => break,

                // Digit placeholders
                Token::Zero => builder.add_part(PatternPart::Digit(DigitPlaceholder::Zero)),
                Token::Hash => builder.add_part(PatternPart::Digit(DigitPlaceholder::Hash)),

                Token::ThousandsSep => builder.add_part(PatternPart::ThousandsSeparator),

                // The percent sign renders as itself; scaling is a section flag
                Token::Percent => builder.add_literal("%"),

                // A second decimal point or a stray section separator is plain text
                Token::DecimalPoint => builder.add_literal("."),
                Token::SectionSep => builder.add_literal(";"),

                Token::Literal(ch) => {
                    let mut buf = [0u8; 4];
                    builder.add_literal(ch.encode_utf8(&mut buf));
                }
                Token::QuotedString(s) => builder.add_literal(s),
            }
            self.advance();
        }

        builder.build()
    }
}

/// Helper collecting parts, merging adjacent literal text.
#[derive(Default)]
struct PartsBuilder {
    parts: Vec<PatternPart>,
}

impl PartsBuilder {
    fn add_part(&mut self, part: PatternPart) {
        self.parts.push(part);
    }

    fn add_literal(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(PatternPart::Literal(last)) = self.parts.last_mut() {
            last.push_str(text);
        } else {
            self.parts.push(PatternPart::Literal(text.to_string()));
        }
    }

    fn build(self) -> Vec<PatternPart> {
        self.parts
    }
}
