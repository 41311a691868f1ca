//! Contains the [`Cursor`], the rune-level reading primitives the scanner is built on, and the
//! fixed character classes of the language.

use std::{borrow::Cow, ops::Range};

use crate::{error::Error, token::ByteIndex};

/// Every rune that can start an operator or a punctuation.
pub const SYMBOLS: &str = "+-*/%<>=!&|^`~[]{}.,;:?()'\"";

/// The decimal digits.
pub const DIGITS: &str = "0123456789";

/// The digits accepted after a `0x` or `0X` prefix.
pub const HEX_DIGITS: &str = "0123456789abcdefABCDEF";

/// The runes that separate tokens.
pub const WHITESPACE: &str = " \t\r\n";

/// Checks if the given character is one of the [`SYMBOLS`].
#[must_use]
pub fn is_symbol(character: char) -> bool { SYMBOLS.contains(character) }

/// Checks if the given character is one of the [`DIGITS`].
#[must_use]
pub fn is_digit(character: char) -> bool { DIGITS.contains(character) }

/// Checks if the given character is one of the [`WHITESPACE`] runes.
#[must_use]
pub fn is_whitespace(character: char) -> bool { WHITESPACE.contains(character) }

/// Checks if the given character is a letter. Letter-like numerals such as `Ⅻ` are not.
#[must_use]
pub fn is_letter(character: char) -> bool { character.is_alphabetic() && !character.is_numeric() }

/// Checks if the given character can be a part of an identifier.
///
/// Any rune that is neither whitespace nor a symbol qualifies, including digits and non-ASCII
/// letters.
#[must_use]
pub fn is_identifier_rune(character: char) -> bool {
    !is_whitespace(character) && !is_symbol(character)
}

/// Decodes the first UTF-8 encoded rune of the given bytes along with its width.
fn decode(bytes: &[u8]) -> Option<(char, usize)> {
    let head = &bytes[..bytes.len().min(4)];

    // the head may cut a later rune in half, only the first one matters
    let valid = match std::str::from_utf8(head) {
        Ok(valid) => valid,
        Err(error) => std::str::from_utf8(&head[..error.valid_up_to()]).ok()?,
    };

    valid
        .chars()
        .next()
        .map(|character| (character, character.len_utf8()))
}

/// Is a reading head over the lexer input that assembles the text of one token at a time.
///
/// The cursor tracks two offsets: `start`, where the token currently being assembled begins, and
/// `position`, the offset of the next unread rune. `start <= position <= input.len()` always
/// holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    input: &'a [u8],
    start: ByteIndex,
    position: ByteIndex,

    /// The width of the last rune read by [`Self::advance`], cleared once it has been retreated
    /// over.
    width: Option<usize>,
}

impl<'a> Cursor<'a> {
    /// Creates a new [`Cursor`] at the beginning of the given input.
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            start: 0,
            position: 0,
            width: None,
        }
    }

    /// Gets the offset at which the token being assembled starts.
    #[must_use]
    pub fn start(&self) -> ByteIndex { self.start }

    /// Gets the offset of the next unread rune.
    #[must_use]
    pub fn position(&self) -> ByteIndex { self.position }

    /// Reads the next rune and moves past it.
    ///
    /// Returns [`None`] at the end of the input; the end is never consumed, so retreating over
    /// it is a no-op.
    ///
    /// # Errors
    /// - [`Error::InvalidEncoding`]: the bytes at the current position are not valid UTF-8.
    pub fn advance(&mut self) -> Result<Option<char>, Error> {
        let rest = &self.input[self.position..];

        if rest.is_empty() {
            self.width = Some(0);
            return Ok(None);
        }

        let (character, width) = decode(rest).ok_or(Error::InvalidEncoding)?;

        self.position += width;
        self.width = Some(width);

        Ok(Some(character))
    }

    /// Steps back over the rune returned by the last [`Self::advance`].
    ///
    /// Only one step of pushback is available: retreating twice without advancing in between is
    /// a logic error.
    pub fn retreat(&mut self) {
        let width = self.width.take();
        debug_assert!(width.is_some(), "retreat without a preceding advance");

        self.position -= width.unwrap_or(0);
    }

    /// Returns the next rune without consuming it.
    ///
    /// # Errors
    /// See [`Self::advance`].
    pub fn peek(&mut self) -> Result<Option<char>, Error> {
        let character = self.advance()?;
        self.retreat();

        Ok(character)
    }

    /// Consumes the next rune if it satisfies the predicate.
    ///
    /// # Errors
    /// See [`Self::advance`].
    pub fn accept_if(&mut self, predicate: impl Fn(char) -> bool) -> Result<bool, Error> {
        match self.advance()? {
            Some(character) if predicate(character) => Ok(true),
            _ => {
                self.retreat();
                Ok(false)
            }
        }
    }

    /// Consumes the next rune if it is one of the `valid` runes.
    ///
    /// # Errors
    /// See [`Self::advance`].
    pub fn accept(&mut self, valid: &str) -> Result<bool, Error> {
        self.accept_if(|character| valid.contains(character))
    }

    /// Consumes runes for as long as they satisfy the predicate. Consuming none is fine.
    ///
    /// # Errors
    /// See [`Self::advance`].
    pub fn accept_run_while(&mut self, predicate: impl Fn(char) -> bool) -> Result<(), Error> {
        while self.accept_if(&predicate)? {}
        Ok(())
    }

    /// Consumes runes for as long as they are one of the `valid` runes.
    ///
    /// # Errors
    /// See [`Self::advance`].
    pub fn accept_run(&mut self, valid: &str) -> Result<(), Error> {
        self.accept_run_while(|character| valid.contains(character))
    }

    /// Gets the text of the token being assembled.
    #[must_use]
    pub fn lexeme(&self) -> Cow<'a, str> {
        // every byte in the range was decoded by `advance`, the conversion is never lossy
        String::from_utf8_lossy(&self.input[self.start..self.position])
    }

    /// Gets the byte range of the token being assembled.
    #[must_use]
    pub fn span(&self) -> Range<ByteIndex> { self.start..self.position }

    /// Drops the text assembled so far and starts the next token at the current position.
    pub fn ignore(&mut self) { self.start = self.position; }
}
