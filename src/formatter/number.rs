//! Digit extraction, grouping and splicing for one section.

use crate::analysis::Precision;
use crate::ast::{MarkerRun, PatternPart, Section};
use crate::options::SeparatorConfig;

/// Format a non-negative magnitude with a section.
///
/// Sign selection and percent scaling happen before this point.
pub fn format_number(magnitude: f64, section: &Section, config: &SeparatorConfig) -> String {
    let max_fraction = section.fraction_precision.max_or_zero();
    let (integer_digits, fraction_digits) = to_fixed(magnitude, max_fraction);

    let integer_digits = normalize_integer(&integer_digits, section.integer_precision);
    let fraction_digits = normalize_fraction(&fraction_digits, section.fraction_precision);

    let grouped = apply_groups(
        &integer_digits,
        &section.group_sizes,
        &config.thousands_separator,
    );
    let mut result = splice(&section.integer_parts, section.integer_run, &grouped);

    if section.has_fraction_digits() {
        if !fraction_digits.is_empty() {
            result.push_str(&config.decimal_separator);
        }
        if let Some(parts) = &section.fraction_parts {
            result.push_str(&splice(parts, section.fraction_run, &fraction_digits));
        }
    }

    result
}

/// Fixed-point digits of `value` with exactly `digits` fractional digits.
///
/// Rounds the exact binary value; a tie goes to the larger magnitude.
fn to_fixed(value: f64, digits: usize) -> (String, String) {
    let exact = format!("{:.*}", exact_fraction_digits(value), value.abs());
    let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let round_up = fraction
        .as_bytes()
        .get(digits)
        .is_some_and(|&b| b >= b'5');

    let mut kept: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().take(digits))
        .collect();
    let mut integer_len = integer.len();
    kept.resize(integer_len + digits, b'0');

    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            integer_len += 1;
        }
    }

    let (integer, fraction) = kept.split_at(integer_len);
    (
        integer.iter().map(|&b| b as char).collect(),
        fraction.iter().map(|&b| b as char).collect(),
    )
}

/// Length of the fractional part of the exact decimal expansion of `value`.
///
/// A finite f64 is `m * 2^e`; with `m` odd and `e < 0` its expansion ends
/// after exactly `-e` fractional digits.
fn exact_fraction_digits(value: f64) -> usize {
    if value == 0.0 || !value.is_finite() {
        return 0;
    }
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction_bits = bits & ((1 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction_bits, -1074)
    } else {
        (fraction_bits | (1 << 52), biased - 1075)
    };
    let exponent = exponent + i64::from(mantissa.trailing_zeros());
    usize::try_from(-exponent).unwrap_or(0)
}

/// Keep at most `max` low-order digits, drop leading zeros down to the
/// minimum, then pad up to it.
///
/// An all-`0` part is fixed width, so `"00"` turns 123 into `23`.
fn normalize_integer(digits: &str, precision: Precision) -> String {
    let digits = match precision.max {
        Some(max) if digits.len() > max => &digits[digits.len() - max..],
        _ => digits,
    };
    let leading_zeros = digits.bytes().take_while(|&b| b == b'0').count();
    let removable = leading_zeros.min(digits.len().saturating_sub(precision.min));
    let kept = &digits[removable..];

    let padding = precision.min.saturating_sub(kept.len());
    let mut result = "0".repeat(padding);
    result.push_str(kept);
    result
}

/// Cut to the maximum, drop trailing zeros down to the minimum, pad up to it.
fn normalize_fraction(digits: &str, precision: Precision) -> String {
    let max = precision.max_or_zero();
    let mut result: String = digits.chars().take(max).collect();
    while result.len() > precision.min && result.ends_with('0') {
        result.pop();
    }
    while result.len() < precision.min {
        result.push('0');
    }
    result
}

/// Insert separators between digit groups.
///
/// `group_sizes` is outermost first. Chunking starts at the least
/// significant digit with the innermost size; the outermost size repeats
/// once the list runs out. A zero size takes all remaining digits.
fn apply_groups(digits: &str, group_sizes: &[usize], separator: &str) -> String {
    if group_sizes.is_empty() || digits.is_empty() {
        return digits.to_string();
    }

    let chars: Vec<char> = digits.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut sizes = group_sizes.iter().rev().copied();
    let mut size = 0;
    let mut end = chars.len();

    while end > 0 {
        if let Some(next) = sizes.next() {
            size = next;
        }
        let start = if size == 0 { 0 } else { end.saturating_sub(size) };
        groups.push(chars[start..end].iter().collect());
        end = start;
    }

    groups.reverse();
    groups.join(separator)
}

/// Put `digits` in place of the marker run and emit literals verbatim.
///
/// Markers outside the run render as nothing, and so do the digits of a
/// part without markers.
fn splice(parts: &[PatternPart], run: MarkerRun, digits: &str) -> String {
    let mut result = String::new();

    for (index, part) in parts.iter().enumerate() {
        if index == run.start {
            result.push_str(digits);
        }
        if let PatternPart::Literal(text) = part {
            result.push_str(text);
        }
    }

    result
}
