//! Token types for the pattern lexer.

/// A token in an LDML number pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Literal(char),
    QuotedString(String),

    // Digit placeholders
    Zero, // 0
    Hash, // #

    // Separators
    DecimalPoint, // .
    ThousandsSep, // ,
    SectionSep,   // ;

    // Special characters
    Percent, // %

    // End of input
    Eof,
}

impl Token {
    /// Returns true for `0` and `#`.
    pub fn is_digit_placeholder(&self) -> bool {
        matches!(self, Token::Zero | Token::Hash)
    }
}

/// A token with its byte span in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
