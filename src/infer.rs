//! Pattern inference from an opaque formatter.
//!
//! The formatter is treated as an oracle. Probe values are written as
//! decimal text made of synthetic `1` digits; rendering a probe and the
//! same probe with one more `1` shows whether that digit position is
//! required (`0` in the pattern) or optional (`#`). The probe text that
//! survives both loops is rendered once more and turned back into a pattern.
//!
//! Each loop adds one synthetic digit per step and gives up after
//! [`MAX_PROBE_DIGITS`] steps, so inference always terminates. The
//! heuristics are tuned for common pattern shapes: unusual group sizes or
//! digits inside literal text may not be recovered exactly.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::{InferError, ProbeSide};

/// Upper bound on synthetic digits added by any probe loop.
pub const MAX_PROBE_DIGITS: usize = 64;

/// Grouped probes must reach this value so no separator boundary is left
/// between the probe and its next extension.
const GROUPING_THRESHOLD: f64 = 100000.0;

/// Value whose rendering tells whether the formatter groups digits.
const GROUPING_PROBE: f64 = 12345.0;

static GROUP_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9])[^0-9]([0-9])").expect("static regex"));

/// Reconstruct a pattern string that formats like `formatter`.
///
/// The result is behaviorally equivalent, not necessarily identical, to
/// the pattern behind the formatter; for instance `"##0"` comes back as
/// `"#0"`. A formatter whose fixed-width integer part hides the digits of
/// 100 (such as `"0.00%"`) is not recognized as scaling by 100.
pub fn infer_pattern<F>(formatter: F) -> Result<String, InferError>
where
    F: Fn(f64) -> String,
{
    let probe = Probe {
        formatter: &formatter,
        percent: formatter(1.0).contains("100"),
    };

    let value_text = probe.settle(".".to_string(), ProbeSide::Integer)?;
    let value_text = probe.settle(value_text, ProbeSide::Fraction)?;
    trace!(value_text = %value_text, percent = probe.percent, "probing settled");

    let positive = probe.synthesize(&value_text, false);
    let negative = probe.synthesize(&value_text, true);

    let pattern = if negative == format!("-{}", positive) {
        positive
    } else {
        format!("{};{}", positive, negative)
    };
    debug!(pattern = %pattern, "inferred pattern");
    Ok(pattern)
}

struct Probe<'f, F> {
    formatter: &'f F,
    percent: bool,
}

impl<F> Probe<'_, F>
where
    F: Fn(f64) -> String,
{
    fn render(&self, value_text: &str, negative: bool) -> String {
        let value = probe_value(value_text, self.percent, negative);
        let rendered = (self.formatter)(value);
        trace!(value_text, value, rendered = %rendered, "probe");
        rendered
    }

    /// Grow `value_text` on one side until an extra digit stops behaving
    /// like the ones before it.
    ///
    /// A digit that keeps the rendered length is recorded as `0`, one that
    /// lengthens it as `1`. The integer side stops at the first length
    /// change; the fraction side stops once the rendering shrinks. Both stop
    /// when the extra digit renders identically.
    fn settle(&self, mut value_text: String, side: ProbeSide) -> Result<String, InferError> {
        let mut probe_text = value_text.clone();
        let mut rendered = self.render(&probe_text, false);

        for _ in 0..MAX_PROBE_DIGITS {
            let next_probe = extend(&probe_text, side, '1');
            let next_rendered = self.render(&next_probe, false);

            let length = rendered.chars().count();
            let next_length = next_rendered.chars().count();
            let continues = rendered != next_rendered
                && match side {
                    ProbeSide::Integer => length == next_length,
                    ProbeSide::Fraction => length <= next_length,
                };

            if !continues {
                if side == ProbeSide::Integer && next_length > length {
                    value_text = self.clear_grouping(value_text)?;
                }
                return Ok(value_text);
            }

            let marker = if length == next_length { '0' } else { '1' };
            value_text = extend(&value_text, side, marker);
            probe_text = next_probe;
            rendered = next_rendered;
        }

        Err(InferError::NoFixedPoint {
            side,
            probes: MAX_PROBE_DIGITS,
        })
    }

    /// Prefix optional digits so a grouped probe sits past the smallest
    /// separator boundary.
    fn clear_grouping(&self, mut value_text: String) -> Result<String, InferError> {
        let grouped = !(self.formatter)(GROUPING_PROBE).contains("12345");

        for _ in 0..MAX_PROBE_DIGITS {
            value_text.insert(0, '1');
            if !grouped || probe_value(&value_text, self.percent, false) >= GROUPING_THRESHOLD {
                return Ok(value_text);
            }
        }

        Err(InferError::NoFixedPoint {
            side: ProbeSide::Integer,
            probes: MAX_PROBE_DIGITS,
        })
    }

    /// Render the settled probe and turn the rendering into a pattern.
    fn synthesize(&self, value_text: &str, negative: bool) -> String {
        let rendered = self.render(value_text, negative);

        // A 3 in the first fractional place sits right after the separator
        let (integer, fraction) = value_text.split_once('.').unwrap_or((value_text, ""));
        let marked = format!("{}.3{}", integer, fraction.get(1..).unwrap_or(""));
        let decimal_index = self
            .render(&marked, negative)
            .chars()
            .position(|c| c == '3')
            .and_then(|i| i.checked_sub(1));

        let skeleton = GROUP_GAP.replace_all(&rendered, "${1},${2}");
        let mut chars: Vec<char> = skeleton.chars().collect();
        let mut decimal = decimal_index.filter(|&i| i < chars.len());
        if let Some(i) = decimal {
            chars[i] = '.';
        }

        // Leading optional integer digits collapse into one
        let integer_end = decimal.unwrap_or(chars.len());
        if let Some(first) = chars[..integer_end].iter().position(|&c| c == '1') {
            let run = chars[first..integer_end]
                .iter()
                .take_while(|&&c| c == '1')
                .count();
            chars.drain(first + 1..first + run);
            decimal = decimal.map(|i| i - (run - 1));
        }

        quote_literals(&chars, decimal, self.percent)
    }
}

/// Write a skeleton as pattern text.
///
/// `1` becomes `#`. Characters that would read as markers but are literal
/// output go into quoted runs: `#` and `;` always, `%` unless the formatter
/// scales, and `,`/`.` outside the digits.
fn quote_literals(chars: &[char], decimal: Option<usize>, percent: bool) -> String {
    let span = {
        let mut digits = chars
            .iter()
            .enumerate()
            .filter(|&(i, c)| c.is_ascii_digit() || Some(i) == decimal)
            .map(|(i, _)| i);
        digits.next().map(|first| (first, digits.last().unwrap_or(first)))
    };

    let mut pattern = String::new();
    let mut quoted = String::new();
    for (index, &ch) in chars.iter().enumerate() {
        let inside = span.is_some_and(|(first, last)| first <= index && index <= last);
        let literal_marker = match ch {
            '#' | ';' => true,
            '%' => !percent,
            ',' | '.' => !inside,
            _ => false,
        };
        if literal_marker {
            quoted.push(ch);
            continue;
        }
        close_quote(&mut pattern, &mut quoted);
        match ch {
            '1' => pattern.push('#'),
            '\'' => pattern.push_str("''"),
            _ => pattern.push(ch),
        }
    }
    close_quote(&mut pattern, &mut quoted);
    pattern
}

fn close_quote(pattern: &mut String, quoted: &mut String) {
    if !quoted.is_empty() {
        pattern.push('\'');
        pattern.push_str(quoted);
        pattern.push('\'');
        quoted.clear();
    }
}

fn extend(text: &str, side: ProbeSide, digit: char) -> String {
    match side {
        ProbeSide::Integer => format!("{}{}", digit, text),
        ProbeSide::Fraction => format!("{}{}", text, digit),
    }
}

/// The number a probe text stands for.
///
/// Percent formatters get the value scaled down so the rendered digits
/// match the probe text.
fn probe_value(text: &str, percent: bool, negative: bool) -> f64 {
    let (integer, fraction) = text.split_once('.').unwrap_or((text, ""));
    let integer = if integer.is_empty() { "0" } else { integer };
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    let magnitude = format!("{}.{}", integer, fraction)
        .parse::<f64>()
        .unwrap_or(0.0);

    let value = if percent { 0.01 * magnitude } else { magnitude };
    if negative {
        -value
    } else {
        value
    }
}
