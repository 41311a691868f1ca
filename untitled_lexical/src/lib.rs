//! This crate implements the lexical analysis of the UNTITLED programming language. This phase
//! is responsible for tokenizing the source code, including inline brainfuck blocks, into a
//! stream of tokens.
//!
//! The [`scanner::Scanner`] runs the lexer state machine on the calling thread, while the
//! [`token_stream::TokenStream`] runs it on a thread of its own and hands the tokens over one at
//! a time.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;
pub mod token_stream;
