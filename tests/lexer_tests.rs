//! Tests for the pattern lexer.

use ldmlfmt::parser::lexer::Lexer;
use ldmlfmt::parser::tokens::Token;

#[test]
fn test_lex_two_sections() {
    let mut lexer = Lexer::new("0%;(0%)");
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::Percent);
    assert_eq!(lexer.next_token().token, Token::SectionSep);
    assert_eq!(lexer.next_token().token, Token::Literal('('));
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::Percent);
    assert_eq!(lexer.next_token().token, Token::Literal(')'));
    assert_eq!(lexer.next_token().token, Token::Eof);
}

#[test]
fn test_lex_quoted_markers() {
    let mut lexer = Lexer::new("'#,0.%;'0");
    assert_eq!(
        lexer.next_token().token,
        Token::QuotedString("#,0.%;".to_string())
    );
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::Eof);
}

#[test]
fn test_lex_escaped_quote_outside_quotes() {
    let tokens: Vec<Token> = Lexer::new("''0").map(|t| t.token).collect();
    assert_eq!(tokens, vec![Token::Literal('\''), Token::Zero]);
}

#[test]
fn test_digit_placeholder_predicate() {
    assert!(Token::Zero.is_digit_placeholder());
    assert!(Token::Hash.is_digit_placeholder());
    assert!(!Token::ThousandsSep.is_digit_placeholder());
}
