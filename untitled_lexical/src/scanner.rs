//! Contains the [`Scanner`], the state machine that turns the input into [`Token`]s.

use std::{collections::VecDeque, str::FromStr};

use crate::{
    cursor::{self, Cursor, DIGITS, HEX_DIGITS, WHITESPACE},
    error::Error,
    token::{BrainfuckKind, KeywordKind, Token, TokenKind},
};

/// Is an enumeration of the states of the [`Scanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    /// Decides which kind of token begins at the current position. Re-entered after every token
    /// of the host language.
    Start,

    /// Skips a run of whitespace.
    WhiteSpace,

    /// Scans a decimal or hexadecimal number.
    Number,

    /// Scans an operator, a punctuation, a character literal or the opening of a brainfuck
    /// block.
    Operator,

    /// Scans an identifier or a keyword.
    Text,

    /// Scans the inside of a brainfuck block.
    Brainfuck,

    /// Scans a `( identifier )` inside a brainfuck block, right after the `(`.
    BrainfuckIdentifier,
}

/// Is a one-pass scanner over the input, running the lexer state machine.
///
/// The scanner is an [`Iterator`] of [`Token`]s. The last token it yields is either
/// [`TokenKind::EndOfInput`] or [`TokenKind::Error`].
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    state: Option<State>,
    pending: VecDeque<Token>,
}

impl<'a> Scanner<'a> {
    /// Creates a new [`Scanner`] in the [`State::Start`] state.
    #[must_use]
    pub fn new<I: AsRef<[u8]> + ?Sized>(input: &'a I) -> Self {
        Self {
            cursor: Cursor::new(input.as_ref()),
            state: Some(State::Start),
            pending: VecDeque::new(),
        }
    }

    /// Gets the current state, [`None`] once the scanner has halted.
    #[must_use]
    pub fn state(&self) -> Option<State> { self.state }

    /// Runs the current state once and returns the state the scanner moved to.
    ///
    /// Tokens emitted by the transition are queued and handed out by [`Iterator::next`]. A fatal
    /// error queues a single [`TokenKind::Error`] token and halts the scanner.
    pub fn step(&mut self) -> Option<State> {
        let state = self.state?;

        self.state = match self.transition(state) {
            Ok(next) => next,
            Err(error) => {
                // undecodable bytes are never consumed, the span points right at them
                let span = if matches!(error, Error::InvalidEncoding) {
                    self.cursor.position()..self.cursor.position()
                } else {
                    self.cursor.span()
                };

                self.pending
                    .push_back(Token::new(TokenKind::Error, error.to_string(), span));
                None
            }
        };

        self.state
    }

    fn transition(&mut self, state: State) -> Result<Option<State>, Error> {
        match state {
            State::Start => self.lex_start(),
            State::WhiteSpace => self.lex_whitespace(),
            State::Number => self.lex_number(),
            State::Operator => self.lex_operator(),
            State::Text => self.lex_text(),
            State::Brainfuck => self.lex_brainfuck(),
            State::BrainfuckIdentifier => self.lex_brainfuck_identifier(),
        }
    }

    /// Queues a token made of the text assembled so far.
    fn emit(&mut self, kind: TokenKind) {
        self.pending.push_back(Token::new(
            kind,
            self.cursor.lexeme(),
            self.cursor.span(),
        ));
        self.cursor.ignore();
    }

    /// Emits `compound` if the next rune is one of `second`, `single` otherwise.
    fn emit_either(
        &mut self,
        second: &str,
        compound: TokenKind,
        single: TokenKind,
    ) -> Result<(), Error> {
        let kind = if self.cursor.accept(second)? {
            compound
        } else {
            single
        };

        self.emit(kind);
        Ok(())
    }

    fn lex_start(&mut self) -> Result<Option<State>, Error> {
        let next = match self.cursor.peek()? {
            None => {
                self.emit(TokenKind::EndOfInput);
                return Ok(None);
            }
            Some(character) if cursor::is_whitespace(character) => State::WhiteSpace,
            Some(character) if cursor::is_digit(character) => State::Number,
            Some(character) if cursor::is_symbol(character) => State::Operator,
            Some(_) => State::Text,
        };

        Ok(Some(next))
    }

    fn lex_whitespace(&mut self) -> Result<Option<State>, Error> {
        self.cursor.accept_run(WHITESPACE)?;
        self.cursor.ignore();

        Ok(Some(State::Start))
    }

    fn lex_number(&mut self) -> Result<Option<State>, Error> {
        let digits = if self.cursor.accept("0")? && self.cursor.accept("xX")? {
            HEX_DIGITS
        } else {
            DIGITS
        };
        self.cursor.accept_run(digits)?;

        if self.cursor.peek()? == Some('.') {
            // finish reading the fraction so that the diagnostic shows the whole literal
            self.cursor.advance()?;
            self.cursor.accept_run(digits)?;

            return Err(Error::FloatingPoint(self.cursor.lexeme().into_owned()));
        }

        if self.cursor.peek()?.is_some_and(cursor::is_letter) {
            return Err(Error::BadNumberSyntax(self.cursor.lexeme().into_owned()));
        }

        self.emit(TokenKind::Number);
        Ok(Some(State::Start))
    }

    fn lex_operator(&mut self) -> Result<Option<State>, Error> {
        match self.cursor.advance()? {
            Some('+') => {
                if self.cursor.accept("=")? {
                    self.emit(TokenKind::PlusEqual);
                } else {
                    self.emit_either("+", TokenKind::PlusPlus, TokenKind::Plus)?;
                }
            }
            Some('-') => {
                if self.cursor.accept("=")? {
                    self.emit(TokenKind::MinusEqual);
                } else {
                    self.emit_either("-", TokenKind::MinusMinus, TokenKind::Minus)?;
                }
            }
            Some('*') => self.emit_either("=", TokenKind::StarEqual, TokenKind::Star)?,
            Some('=') => self.emit_either("=", TokenKind::Equal, TokenKind::Assign)?,
            Some('!') => self.emit_either("=", TokenKind::NotEqual, TokenKind::Not)?,
            Some('<') => self.emit_either("=", TokenKind::LessEqual, TokenKind::Less)?,
            Some('>') => self.emit_either("=", TokenKind::GreaterEqual, TokenKind::Greater)?,
            Some('&') => self.emit_either("&", TokenKind::And, TokenKind::Reference)?,
            Some('|') => {
                // there is no single pipe operator
                if !self.cursor.accept("|")? {
                    return Err(Error::InvalidOperator(self.cursor.lexeme().into_owned()));
                }
                self.emit(TokenKind::Or);
            }
            Some('(') => self.emit(TokenKind::LeftParen),
            Some(')') => self.emit(TokenKind::RightParen),
            Some('{') => self.emit(TokenKind::LeftBrace),
            Some('}') => self.emit(TokenKind::RightBrace),
            Some(';') => self.emit(TokenKind::Semicolon),
            Some(',') => self.emit(TokenKind::Comma),
            Some('.') => self.emit(TokenKind::Dot),
            Some('\'') => {
                match self.cursor.advance()? {
                    None => return Err(Error::UnterminatedCharacter),
                    Some('\'') => return Err(Error::EmptyCharacter),
                    Some(_) => {}
                }

                if !self.cursor.accept("'")? {
                    return Err(Error::InvalidCharacter(self.cursor.lexeme().into_owned()));
                }
                self.emit(TokenKind::Character);
            }
            Some('`') => {
                if !(self.cursor.accept("`")? && self.cursor.accept("`")?) {
                    return Err(Error::BrainfuckEnter(self.cursor.lexeme().into_owned()));
                }
                self.emit(TokenKind::Brainfuck);

                return Ok(Some(State::Brainfuck));
            }
            _ => return Err(Error::InvalidOperator(self.cursor.lexeme().into_owned())),
        }

        Ok(Some(State::Start))
    }

    fn lex_text(&mut self) -> Result<Option<State>, Error> {
        self.cursor.accept_run_while(cursor::is_identifier_rune)?;

        let kind = KeywordKind::from_str(&self.cursor.lexeme())
            .map_or(TokenKind::Identifier, TokenKind::Keyword);
        self.emit(kind);

        Ok(Some(State::Start))
    }

    fn lex_brainfuck(&mut self) -> Result<Option<State>, Error> {
        match self.cursor.advance()? {
            None => return Err(Error::UnmatchedBrainfuck),
            Some('(') => {
                self.cursor.ignore();
                return Ok(Some(State::BrainfuckIdentifier));
            }
            Some(')') => return Err(Error::UnmatchedParenthesis),
            Some('`') => {
                if !(self.cursor.accept("`")? && self.cursor.accept("`")?) {
                    return Err(Error::BrainfuckExit(self.cursor.lexeme().into_owned()));
                }
                self.emit(TokenKind::Brainfuck);

                return Ok(Some(State::Start));
            }
            Some(character) => match BrainfuckKind::from_char(character) {
                Some(command) => self.emit(TokenKind::BrainfuckCommand(command)),

                // anything else is a brainfuck comment
                None => self.cursor.ignore(),
            },
        }

        Ok(Some(State::Brainfuck))
    }

    fn lex_brainfuck_identifier(&mut self) -> Result<Option<State>, Error> {
        self.cursor.accept_run(WHITESPACE)?;
        self.cursor.ignore();

        if !self.cursor.accept_if(cursor::is_identifier_rune)? {
            // take the offending rune into the diagnostic
            self.cursor.advance()?;
            return Err(Error::InvalidIdentifier(self.cursor.lexeme().into_owned()));
        }
        self.cursor.accept_run_while(cursor::is_identifier_rune)?;
        self.emit(TokenKind::Identifier);

        self.cursor.accept_run(WHITESPACE)?;
        if !self.cursor.accept(")")? {
            return Err(Error::UnclosedIdentifier);
        }
        self.cursor.ignore();

        Ok(Some(State::Brainfuck))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }

            self.state?;
            self.step();
        }
    }
}

impl<'a> std::iter::FusedIterator for Scanner<'a> {}

/// Tokenizes the whole input at once.
///
/// The returned list always ends with either a [`TokenKind::EndOfInput`] or a
/// [`TokenKind::Error`] token.
#[must_use]
pub fn tokenize<I: AsRef<[u8]> + ?Sized>(input: &I) -> Vec<Token> { Scanner::new(input).collect() }

#[cfg(test)]
mod tests;
