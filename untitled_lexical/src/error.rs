//! Contains all kinds of fatal lexical errors that can occur while tokenizing the source code.
//!
//! The [`Display`](std::fmt::Display) output of each variant is the diagnostic text carried by
//! the terminal [`TokenKind::Error`](crate::token::TokenKind::Error) token.

use enum_as_inner::EnumAsInner;
use thiserror::Error;

/// Is an enumeration containing all kinds of lexical errors that halt the lexer.
///
/// Variants carrying a [`String`] hold the offending part of the input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("invalid UTF-8 encoding")]
    InvalidEncoding,

    #[error("floating points not supported: {0:?}")]
    FloatingPoint(String),

    #[error("bad number syntax: {0:?}")]
    BadNumberSyntax(String),

    #[error("invalid operator: {0:?}")]
    InvalidOperator(String),

    #[error("unterminated character constant")]
    UnterminatedCharacter,

    #[error("empty character constant")]
    EmptyCharacter,

    #[error("invalid character constant: {0:?}")]
    InvalidCharacter(String),

    #[error("failed to enter brainfuck mode: {0:?}")]
    BrainfuckEnter(String),

    #[error("unmatched ')'")]
    UnmatchedParenthesis,

    #[error("failed to exit brainfuck mode: {0:?}")]
    BrainfuckExit(String),

    #[error("unmatched triple-backtick")]
    UnmatchedBrainfuck,

    #[error("invalid identifier {0:?}")]
    InvalidIdentifier(String),

    #[error("expected ')' to close identifier")]
    UnclosedIdentifier,
}
