//! Lexer for tokenizing LDML number patterns.
//!
//! The lexer handles the quoting rules of the pattern syntax:
//! - `'text'` becomes a single QuotedString token; nothing inside is a marker
//! - `''` is a literal single quote, inside or outside a quoted run
//! - an unterminated quote swallows the rest of the input as quoted text
//!
//! The lexer never fails. Malformed patterns still produce a token stream;
//! what that stream means is up to the caller.

use crate::parser::tokens::{SpannedToken, Token};

const QUOTE: char = '\'';

/// A lexer for pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> SpannedToken {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            };
        };

        let token = match ch {
            QUOTE => self.lex_quoted(),
            '0' => self.single(Token::Zero),
            '#' => self.single(Token::Hash),
            '.' => self.single(Token::DecimalPoint),
            ',' => self.single(Token::ThousandsSep),
            ';' => self.single(Token::SectionSep),
            '%' => self.single(Token::Percent),
            other => self.single(Token::Literal(other)),
        };

        SpannedToken {
            token,
            start,
            end: self.position,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn peek_char(&self) -> Option<char> {
        let mut chars = self.input[self.position..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    fn single(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    /// Lex a quote: either `''` or a quoted run up to the closing quote.
    fn lex_quoted(&mut self) -> Token {
        if self.peek_char() == Some(QUOTE) {
            self.advance();
            self.advance();
            return Token::Literal(QUOTE);
        }

        // Skip the opening quote
        self.advance();
        let mut text = String::new();
        while let Some(ch) = self.current_char() {
            if ch == QUOTE {
                if self.peek_char() == Some(QUOTE) {
                    text.push(QUOTE);
                    self.advance();
                    self.advance();
                    continue;
                }
                self.advance();
                return Token::QuotedString(text);
            }
            text.push(ch);
            self.advance();
        }
        Token::QuotedString(text)
    }
}

impl Iterator for Lexer<'_> {
    type Item = SpannedToken;

    fn next(&mut self) -> Option<SpannedToken> {
        let spanned = self.next_token();
        if spanned.token == Token::Eof {
            None
        } else {
            Some(spanned)
        }
    }
}
