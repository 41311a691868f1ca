//! Is a module containing the [`Token`] type and all of its related types.

use std::{collections::HashMap, fmt::Display, ops::Range, str::FromStr};

use enum_as_inner::EnumAsInner;
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// Is an unsigned integer that represents a byte index in the lexer input.
pub type ByteIndex = usize;

/// Is an enumeration representing keywords in the UNTITLED programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    If,
    While,
    Function,
    Return,
    Break,
    Continue,
    Const,
    Type,
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> =
                KeywordKind::iter().map(|keyword| (keyword.as_str(), keyword)).collect();
        }
        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the source spelling of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::While => "while",
            Self::Function => "function",
            Self::Return => "return",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Const => "const",
            Self::Type => "type",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::If => "IF",
            Self::While => "WHILE",
            Self::Function => "FUNCTION",
            Self::Return => "RETURN",
            Self::Break => "BREAK",
            Self::Continue => "CONTINUE",
            Self::Const => "CONST",
            Self::Type => "TYPE",
        }
    }
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Is an enumeration of the brainfuck commands recognized inside a brainfuck block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum BrainfuckKind {
    /// `+`
    Increment,

    /// `-`
    Decrement,

    /// `>`
    MoveRight,

    /// `<`
    MoveLeft,

    /// `.`
    Output,

    /// `,`
    Input,

    /// `[`
    LoopOpen,

    /// `]`
    LoopClose,
}

impl BrainfuckKind {
    /// Gets the brainfuck command that the given character spells, if any.
    #[must_use]
    pub fn from_char(character: char) -> Option<Self> {
        Some(match character {
            '+' => Self::Increment,
            '-' => Self::Decrement,
            '>' => Self::MoveRight,
            '<' => Self::MoveLeft,
            '.' => Self::Output,
            ',' => Self::Input,
            '[' => Self::LoopOpen,
            ']' => Self::LoopClose,
            _ => return None,
        })
    }

    /// Gets the character that spells the command.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Increment => '+',
            Self::Decrement => '-',
            Self::MoveRight => '>',
            Self::MoveLeft => '<',
            Self::Output => '.',
            Self::Input => ',',
            Self::LoopOpen => '[',
            Self::LoopClose => ']',
        }
    }
}

/// Is an enumeration containing all kinds of tokens in the UNTITLED programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum TokenKind {
    /// A fatal diagnostic; the token text is the message.
    Error,

    /// A non-fatal diagnostic; the token text is the message.
    Warning,

    /// The end of the input was reached.
    EndOfInput,

    Identifier,

    /// A decimal or hexadecimal digit sequence.
    Number,

    /// A single character between single quotes.
    Character,

    Semicolon,
    Comma,
    Dot,
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,

    Keyword(KeywordKind),

    Plus,
    Minus,
    Star,
    PlusEqual,
    MinusEqual,
    StarEqual,
    PlusPlus,
    MinusMinus,
    Assign,

    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    And,
    Or,
    Not,

    /// `&`, the copy/reference marker.
    Reference,

    /// The triple backtick that opens and closes a brainfuck block.
    Brainfuck,

    /// A command inside a brainfuck block.
    BrainfuckCommand(BrainfuckKind),
}

impl TokenKind {
    /// Checks whether the kind carries a diagnostic message rather than source text.
    #[must_use]
    pub fn is_diagnostic(self) -> bool { matches!(self, Self::Error | Self::Warning) }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::EndOfInput => "EOF",
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::Character => "CHAR",
            Self::Semicolon => "SEMICOLON",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::LeftBrace => "LEFT BRACE",
            Self::RightBrace => "RIGHT BRACE",
            Self::LeftParen => "LEFT PAREN",
            Self::RightParen => "RIGHT PAREN",
            Self::Keyword(keyword) => keyword.label(),
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "MULT",
            Self::PlusEqual => "PLUS EQUAL",
            Self::MinusEqual => "MINUS EQUAL",
            Self::StarEqual => "MULT EQUAL",
            Self::PlusPlus => "PLUS PLUS",
            Self::MinusMinus => "MINUS MINUS",
            Self::Assign => "ASSIGN",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT EQUAL",
            Self::Less => "LESS",
            Self::Greater => "GREATER",
            Self::LessEqual => "LESS EQUAL",
            Self::GreaterEqual => "GREATER EQUAL",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Reference => "COPY",
            Self::Brainfuck => "BRAINFUCK",
            Self::BrainfuckCommand(command) => match command {
                BrainfuckKind::Increment => "INCREMENT",
                BrainfuckKind::Decrement => "DECREMENT",
                BrainfuckKind::MoveRight => "RIGHT",
                BrainfuckKind::MoveLeft => "LEFT",
                BrainfuckKind::Output => "OUTPUT",
                BrainfuckKind::Input => "INPUT",
                BrainfuckKind::LoopOpen => "LEFT BRACKET",
                BrainfuckKind::LoopClose => "RIGHT BRACKET",
            },
        };

        f.write_str(label)
    }
}

/// Represents a classified, contiguous piece of the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Is the kind of the token.
    pub kind: TokenKind,

    /// Is the exact source text the token was scanned from, or the message of a diagnostic
    /// token.
    pub text: String,

    /// Is the byte range of the input that the token covers. For a diagnostic this is the
    /// offending part of the input.
    pub span: Range<ByteIndex>,
}

impl Token {
    /// Creates a new [`Token`].
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Range<ByteIndex>) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Creates a non-fatal diagnostic token carrying the given message.
    #[must_use]
    pub fn warning(message: impl Display, span: Range<ByteIndex>) -> Self {
        Self::new(TokenKind::Warning, message.to_string(), span)
    }

    /// Checks whether no token can follow this one in a stream.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput | TokenKind::Error)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Error => write!(f, "error: {}", self.text),
            TokenKind::Warning => write!(f, "warning: {}", self.text),
            TokenKind::EndOfInput => f.write_str("EOF"),
            TokenKind::Identifier => write!(f, "[id: {}]", self.text),
            TokenKind::Number => write!(f, "[num: {}]", self.text),
            TokenKind::Character => write!(f, "[char: {}]", self.text),
            TokenKind::Semicolon => f.write_str(";"),
            TokenKind::LeftBrace => f.write_str("{"),
            TokenKind::RightBrace => f.write_str("}"),
            TokenKind::Keyword(KeywordKind::Function) => f.write_str("[func]"),
            TokenKind::Keyword(keyword) => write!(f, "[{}]", keyword.as_str()),
            TokenKind::Brainfuck => f.write_str("[```]"),
            TokenKind::BrainfuckCommand(BrainfuckKind::LoopOpen) => f.write_str("[open]"),
            TokenKind::BrainfuckCommand(BrainfuckKind::LoopClose) => f.write_str("[close]"),
            TokenKind::BrainfuckCommand(command) => write!(f, "[{}]", command.as_char()),

            // every remaining kind is an operator or a punctuation spelled by its own text
            _ => write!(f, "[{}]", self.text),
        }
    }
}
