use loxi::literal::Literal;
use loxi::token::{Location, Token, TokenKind};

#[test]
fn create_token() {
    let token = Token::new(0, TokenKind::LeftParen, "(".to_string(), None, Location::new(1, 3));

    assert_eq!(token.kind, TokenKind::LeftParen);
    assert_eq!(token.lexeme, "(");
    assert_eq!(token.literal, None);
    assert_eq!(token.location.line, 1);
    assert_eq!(token.location.column, 3);
}

#[test]
fn display_token() {
    let token = Token::new(0, TokenKind::LeftParen, "(".to_string(), None, Location::new(0, 0));
    assert_eq!(format!("{token}"), "LeftParen '(' @ 1:1");
}

#[test]
fn location_displays_one_indexed() {
    let location = Location::new(4, 9);
    assert_eq!(format!("{location}"), "5:10");
}

#[test]
fn equality_is_by_id_not_lexeme() {
    let a = Token::new(1, TokenKind::Identifier, "x".to_string(), None, Location::new(0, 0));
    let b = Token::new(2, TokenKind::Identifier, "x".to_string(), None, Location::new(0, 0));
    let c = Token::new(1, TokenKind::Identifier, "y".to_string(), None, Location::new(5, 5));

    assert_ne!(a, b);
    assert_eq!(a, c);
}

#[test]
fn carries_an_optional_literal() {
    let token = Token::new(0, TokenKind::Number, "1".to_string(), Some(Literal::Number(1.0)), Location::new(0, 0));
    assert_eq!(token.literal, Some(Literal::Number(1.0)));
}
