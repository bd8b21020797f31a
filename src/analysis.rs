//! Structural facts about raw pattern text.
//!
//! Every function here is pure and quote aware: markers inside a `'...'`
//! run are plain text and never counted.

use crate::parser::lexer::Lexer;
use crate::parser::tokens::Token;

/// Digit-count bounds for one part of a sub-pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Precision {
    /// Number of `0` placeholders.
    pub min: usize,
    /// `min` plus the number of `#` placeholders; `None` means unbounded.
    pub max: Option<usize>,
}

impl Precision {
    /// Bounds of an integer part.
    ///
    /// Any `#` leaves the maximum open. An all-`0` part is fixed width, so
    /// its maximum equals its minimum.
    pub fn integer(part: Option<&str>) -> Self {
        let min = required_digits(part);
        let max = if optional_digits(part) > 0 {
            None
        } else {
            Some(min)
        };
        Precision { min, max }
    }

    /// Bounds of a fractional part. Always bounded.
    pub fn fraction(part: Option<&str>) -> Self {
        let min = required_digits(part);
        Precision {
            min,
            max: Some(min + optional_digits(part)),
        }
    }

    /// The maximum, or zero when unbounded.
    pub fn max_or_zero(&self) -> usize {
        self.max.unwrap_or(0)
    }
}

/// Group sizes of an integer pattern, outermost first.
///
/// The text before the first `,` is the head and has no entry; every later
/// segment contributes its count of `#`/`0` placeholders.
pub fn group_sizes(integer_pattern: &str) -> Vec<usize> {
    let mut sizes = Vec::new();
    let mut current: Option<usize> = None;

    for spanned in Lexer::new(integer_pattern) {
        match spanned.token {
            Token::ThousandsSep => {
                if let Some(size) = current {
                    sizes.push(size);
                }
                current = Some(0);
            }
            token if token.is_digit_placeholder() => {
                if let Some(size) = current.as_mut() {
                    *size += 1;
                }
            }
            _ => {}
        }
    }

    if let Some(size) = current {
        sizes.push(size);
    }
    sizes
}

/// Count of `0` placeholders; an absent part counts zero.
pub fn required_digits(part: Option<&str>) -> usize {
    count_tokens(part, &Token::Zero)
}

/// Count of `#` placeholders; an absent part counts zero.
pub fn optional_digits(part: Option<&str>) -> usize {
    count_tokens(part, &Token::Hash)
}

fn count_tokens(part: Option<&str>, wanted: &Token) -> usize {
    part.map_or(0, |text| {
        Lexer::new(text).filter(|t| &t.token == wanted).count()
    })
}

/// Split a pattern into its positive and negative sub-patterns.
///
/// A pattern without an unquoted `;` gets `"-"` + positive as its negative
/// form. Anything after a second `;` is ignored.
pub fn split_signs(pattern: &str) -> [String; 2] {
    let mut separators = Lexer::new(pattern)
        .filter(|t| t.token == Token::SectionSep)
        .map(|t| (t.start, t.end));

    match separators.next() {
        Some((start, end)) => {
            let positive = &pattern[..start];
            let rest = &pattern[end..];
            let negative = match separators.next() {
                Some((second, _)) => &pattern[end..second],
                None => rest,
            };
            [positive.to_string(), negative.to_string()]
        }
        None => [pattern.to_string(), format!("-{}", pattern)],
    }
}

/// Split a sub-pattern at its first unquoted `.`.
pub fn split_decimal(sub_pattern: &str) -> (&str, Option<&str>) {
    let point = Lexer::new(sub_pattern).find(|t| t.token == Token::DecimalPoint);
    match point {
        Some(point) => (&sub_pattern[..point.start], Some(&sub_pattern[point.end..])),
        None => (sub_pattern, None),
    }
}

/// True if the sub-pattern has a `%` outside every quoted run.
pub fn is_percent(sub_pattern: &str) -> bool {
    Lexer::new(sub_pattern).any(|t| t.token == Token::Percent)
}
