use miette::SourceSpan;
use nom::{IResult, branch::alt, combinator::map};

use crate::Count;

use super::{
    errors::{ParseError, ParseErrorKind},
    primitives::{closing_delimiter, digits, element_symbol, opening_delimiter, separator},
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Delimiter {
    Paren,
    Bracket,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TokenKind<'s> {
    Symbol(&'s str),
    Count(Count),
    Open(Delimiter),
    Close(Delimiter),
    Separator,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Token<'s> {
    pub kind: TokenKind<'s>,
    pub span: SourceSpan,
}

impl Delimiter {
    pub const fn opening(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Bracket => '[',
        }
    }

    pub const fn closing(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Bracket => ']',
        }
    }
}

/// Splits a formula into tokens, failing on the first character that can't start one or on the first
/// malformed count
pub fn tokenize(formula: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let mut rest = formula;

    while let Some(next) = rest.chars().next() {
        let offset = formula.len() - rest.len();
        let Ok((remaining, kind)) = token_kind(rest) else {
            let kind = ParseErrorKind::InvalidCharacter(next);
            return Err(ParseError::new(formula, (offset, next.len_utf8()), kind));
        };
        let span = SourceSpan::from((offset, rest.len() - remaining.len()));

        let kind = match kind {
            Lexeme::Digits(digits) => {
                let count = digits.parse().map_err(|error| {
                    ParseError::new(formula, span, ParseErrorKind::InvalidMultiplier(error))
                })?;
                TokenKind::Count(count)
            }
            Lexeme::Token(kind) => kind,
        };

        tokens.push(Token { kind, span });
        rest = remaining;
    }

    Ok(tokens)
}

// Counts are only validated once their span is known, so digits are lexed separately from the other tokens
enum Lexeme<'s> {
    Digits(&'s str),
    Token(TokenKind<'s>),
}

fn token_kind(i: &str) -> IResult<&str, Lexeme<'_>> {
    alt((
        map(digits, Lexeme::Digits),
        map(element_symbol, |symbol| Lexeme::Token(TokenKind::Symbol(symbol))),
        map(opening_delimiter, |delimiter| Lexeme::Token(TokenKind::Open(delimiter))),
        map(closing_delimiter, |delimiter| Lexeme::Token(TokenKind::Close(delimiter))),
        map(separator, |_| Lexeme::Token(TokenKind::Separator)),
    ))(i)
}
