//! Loosely typed values for callers holding untyped data.

/// A value handed to a formatter or parser from untyped data.
///
/// Formatters only accept numbers and parsers only accept text; anything
/// else yields the not-formattable (`""`) or not-parseable (`None`) result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// A numeric value
    Number(f64),
    /// A text value
    Text(&'a str),
    /// A boolean value
    Bool(bool),
    /// An empty cell
    Empty,
}

impl Value<'_> {
    /// Returns the number, if this is one and it is not NaN.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if !n.is_nan() => Some(*n),
            _ => None,
        }
    }

    /// Returns the text, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl<'a> From<f64> for Value<'a> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl<'a> From<f32> for Value<'a> {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<i64> for Value<'a> {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<i32> for Value<'a> {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a> From<bool> for Value<'a> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<'a> From<()> for Value<'a> {
    fn from(_: ()) -> Self {
        Value::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_number_rejects_nan_and_text() {
        assert_eq!(Value::from(1.5).as_number(), Some(1.5));
        assert_eq!(Value::from(f64::NAN).as_number(), None);
        assert_eq!(Value::from("1.5").as_number(), None);
    }

    #[test]
    fn test_as_text() {
        assert_eq!(Value::from("12%").as_text(), Some("12%"));
        assert_eq!(Value::from(true).as_text(), None);
        assert_eq!(Value::from(()).as_text(), None);
    }
}
