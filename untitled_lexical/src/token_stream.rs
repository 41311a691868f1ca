//! Contains the [`TokenStream`] struct and its related types.

use std::{
    iter::FusedIterator,
    sync::Arc,
    thread::{self, JoinHandle},
};

use crossbeam_channel::{bounded, select, Receiver, Sender, TryRecvError};

use crate::{scanner::Scanner, token::Token};

/// Is the consuming end of a lexer running on its own thread.
///
/// Tokens are handed over through a rendezvous channel: the lexer blocks on every token until
/// the stream receives it, and the stream blocks until the lexer produces one. Tokens arrive in
/// source order and the stream ends after the [`TokenKind::EndOfInput`] or
/// [`TokenKind::Error`] token.
///
/// Dropping the stream stops the lexer and waits for its thread to finish.
///
/// [`TokenKind::EndOfInput`]: crate::token::TokenKind::EndOfInput
/// [`TokenKind::Error`]: crate::token::TokenKind::Error
#[derive(Debug)]
pub struct TokenStream {
    tokens: Receiver<Token>,
    stop: Sender<()>,
    producer: Option<JoinHandle<()>>,
}

impl TokenStream {
    /// Starts lexing the given input on a new thread.
    #[must_use]
    pub fn spawn(input: impl AsRef<[u8]>) -> Self {
        let input: Arc<[u8]> = Arc::from(input.as_ref());

        let (token_sender, tokens) = bounded(0);
        let (stop, stop_receiver) = bounded(1);

        let producer = thread::spawn(move || produce(&input, &token_sender, &stop_receiver));

        Self {
            tokens,
            stop,
            producer: Some(producer),
        }
    }

    /// Gets a [`Canceller`] that can stop the lexer from any thread.
    #[must_use]
    pub fn canceller(&self) -> Canceller {
        Canceller {
            stop: self.stop.clone(),
        }
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> { self.tokens.recv().ok() }
}

impl FusedIterator for TokenStream {}

impl Drop for TokenStream {
    fn drop(&mut self) {
        self.canceller().cancel();

        if let Some(producer) = self.producer.take() {
            // a panicking lexer has nothing left to hand over
            let _ = producer.join();
        }
    }
}

/// Is a handle that stops the lexer feeding a [`TokenStream`].
///
/// Once cancelled, the lexer gives up on the token it is trying to hand over and the stream
/// ends.
#[derive(Debug, Clone)]
pub struct Canceller {
    stop: Sender<()>,
}

impl Canceller {
    /// Asks the lexer to stop. Cancelling more than once, or after the lexer has finished, does
    /// nothing.
    pub fn cancel(&self) {
        // full means a cancellation is already pending, disconnected means the lexer is done
        let _ = self.stop.try_send(());
    }
}

fn produce(input: &[u8], tokens: &Sender<Token>, stop: &Receiver<()>) {
    for token in Scanner::new(input) {
        // a pending cancellation wins over a consumer waiting for the token
        if !matches!(stop.try_recv(), Err(TryRecvError::Empty)) {
            return;
        }

        select! {
            send(tokens, token) -> result => {
                if result.is_err() {
                    return;
                }
            },
            recv(stop) -> _ => return,
        }
    }
}
