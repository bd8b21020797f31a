//! Separator configuration.

/// The separators substituted for the pattern's `,` and `.` markers.
///
/// Cloned into every compiled parser and formatter; never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeparatorConfig {
    /// Text placed between digit groups.
    pub thousands_separator: String,
    /// Text placed between the integer and fractional digits.
    pub decimal_separator: String,
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        Self::new(",", ".")
    }
}

impl SeparatorConfig {
    pub fn new(thousands_separator: impl Into<String>, decimal_separator: impl Into<String>) -> Self {
        SeparatorConfig {
            thousands_separator: thousands_separator.into(),
            decimal_separator: decimal_separator.into(),
        }
    }
}
