use nom::{
    IResult,
    character::complete::{digit1, one_of, satisfy},
    combinator::{map, recognize},
    multi::many0_count,
    sequence::pair,
};

use super::tokens::Delimiter;

/// uppercase
///   = "A" | "B" | "C" | "D" | "E" | "F" | "G"
///   | "H" | "I" | "J" | "K" | "L" | "M" | "N"
///   | "O" | "P" | "Q" | "R" | "S" | "T" | "U"
///   | "V" | "W" | "X" | "Y" | "Z"
///   ;
pub fn uppercase(i: &str) -> IResult<&str, char> {
    satisfy(|c| c.is_ascii_uppercase())(i)
}

/// lowercase
///   = "a" | "b" | "c" | "d" | "e" | "f" | "g"
///   | "h" | "i" | "j" | "k" | "l" | "m" | "n"
///   | "o" | "p" | "q" | "r" | "s" | "t" | "u"
///   | "v" | "w" | "x" | "y" | "z"
///   ;
pub fn lowercase(i: &str) -> IResult<&str, char> {
    satisfy(|c| c.is_ascii_lowercase())(i)
}

/// Element Symbol = uppercase , { lowercase } ;
pub fn element_symbol(i: &str) -> IResult<&str, &str> {
    recognize(pair(uppercase, many0_count(lowercase)))(i)
}

/// Digits = digit , { digit } ;
///
/// Validation of the digits (no zero, no leading zeros, no overflow) is left to [`crate::Count`]'s `FromStr`
pub fn digits(i: &str) -> IResult<&str, &str> {
    digit1(i)
}

/// Opening Delimiter = "(" | "[" ;
pub fn opening_delimiter(i: &str) -> IResult<&str, Delimiter> {
    map(one_of("(["), |c| match c {
        '(' => Delimiter::Paren,
        '[' => Delimiter::Bracket,
        _ => unreachable!(),
    })(i)
}

/// Closing Delimiter = ")" | "]" ;
pub fn closing_delimiter(i: &str) -> IResult<&str, Delimiter> {
    map(one_of(")]"), |c| match c {
        ')' => Delimiter::Paren,
        ']' => Delimiter::Bracket,
        _ => unreachable!(),
    })(i)
}

/// Separator = "·" | "•" | "*" ;
pub fn separator(i: &str) -> IResult<&str, char> {
    one_of("·•*")(i)
}
