//! Parsed pattern types.

use crate::analysis::Precision;

/// Digit placeholder type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitPlaceholder {
    /// `0` - Display digit or zero
    Zero,
    /// `#` - Display digit or nothing
    Hash,
}

impl DigitPlaceholder {
    /// Returns true if this placeholder requires a digit (shows 0 for missing).
    pub fn is_required(&self) -> bool {
        matches!(self, DigitPlaceholder::Zero)
    }
}

/// A single part of a sub-pattern half (integer or fraction).
#[derive(Debug, Clone, PartialEq)]
pub enum PatternPart {
    /// Text emitted as-is (unquoted characters, quoted runs, `%`)
    Literal(String),
    /// Digit placeholder (0 or #)
    Digit(DigitPlaceholder),
    /// Grouping separator (`,`)
    ThousandsSeparator,
}

impl PatternPart {
    /// Returns true for digit placeholders and grouping separators.
    pub fn is_marker(&self) -> bool {
        matches!(
            self,
            PatternPart::Digit(_) | PatternPart::ThousandsSeparator
        )
    }
}

/// Position of the marker run that receives the digits of one part.
///
/// `start..end` indexes into the part list. An empty range at the end of
/// the list means the part has no markers at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRun {
    pub start: usize,
    pub end: usize,
}

impl MarkerRun {
    /// The run nearest the decimal point: the last one in an integer part.
    pub fn last_in(parts: &[PatternPart]) -> Self {
        match parts.iter().rposition(PatternPart::is_marker) {
            Some(end) => {
                let start = parts[..end]
                    .iter()
                    .rposition(|p| !p.is_marker())
                    .map_or(0, |i| i + 1);
                MarkerRun { start, end: end + 1 }
            }
            None => MarkerRun {
                start: parts.len(),
                end: parts.len(),
            },
        }
    }

    /// The run nearest the decimal point: the first one in a fraction part.
    pub fn first_in(parts: &[PatternPart]) -> Self {
        match parts.iter().position(PatternPart::is_marker) {
            Some(start) => {
                let end = parts[start..]
                    .iter()
                    .position(|p| !p.is_marker())
                    .map_or(parts.len(), |i| start + i);
                MarkerRun { start, end }
            }
            None => MarkerRun {
                start: parts.len(),
                end: parts.len(),
            },
        }
    }
}

/// One sign form of a pattern (positive or negative).
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Parts before the decimal point
    pub integer_parts: Vec<PatternPart>,
    /// Parts after the decimal point, if the sub-pattern has one
    pub fraction_parts: Option<Vec<PatternPart>>,
    /// Marker run receiving the integer digits
    pub integer_run: MarkerRun,
    /// Marker run receiving the fraction digits
    pub fraction_run: MarkerRun,
    /// True if the section has an unquoted `%`
    pub percent: bool,
    /// Group sizes, outermost first
    pub group_sizes: Vec<usize>,
    /// True if a `#` directly precedes a `,` in the integer part
    pub optional_grouping: bool,
    pub integer_precision: Precision,
    pub fraction_precision: Precision,
}

impl Section {
    /// Returns true if the section allows any fractional digits.
    pub fn has_fraction_digits(&self) -> bool {
        self.fraction_precision.max_or_zero() > 0
    }
}

/// A parsed number pattern.
///
/// Holds the positive and negative sections. A pattern without an explicit
/// negative form gets `"-"` followed by the positive form.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    source: String,
    positive: Section,
    negative: Section,
    explicit_negative: bool,
}

impl Pattern {
    /// Create a Pattern from its parsed sections.
    pub fn from_sections(
        source: &str,
        positive: Section,
        negative: Section,
        explicit_negative: bool,
    ) -> Self {
        Pattern {
            source: source.to_string(),
            positive,
            negative,
            explicit_negative,
        }
    }

    /// Parse a pattern string. Malformed patterns still parse; the result
    /// is whatever the token stream describes.
    pub fn parse(pattern: &str) -> Pattern {
        crate::parser::parse(pattern)
    }

    /// The pattern text this was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn positive(&self) -> &Section {
        &self.positive
    }

    pub fn negative(&self) -> &Section {
        &self.negative
    }

    /// Returns true if the pattern spelled out its negative form.
    pub fn has_explicit_negative(&self) -> bool {
        self.explicit_negative
    }

    /// Both sections, positive first.
    pub fn sections(&self) -> [&Section; 2] {
        [&self.positive, &self.negative]
    }

    /// Returns true if the pattern is empty.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}
