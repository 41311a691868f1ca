//! The command line front end of the UNTITLED lexer: loads a source file, lexes it, and prints
//! the tokens laid out line by line.

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

use std::{
    fmt::Display,
    fs::File,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

pub use clap::Parser;
use untitled_base::{
    diagnostic::Handler,
    log::{formatting, Message, Severity, SourceCodeDisplay},
    source_file::{self, SourceFile, Span},
};
use untitled_lexical::{
    token::{Token, TokenKind},
    token_stream::TokenStream,
};

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "untitled",
    about = "The UNTITLED programming language lexer, with inline brainfuck blocks."
)]
pub struct Argument {
    /// The source file to lex.
    pub file: PathBuf,

    /// Prints the kind of every token instead of its display form.
    #[clap(long = "kinds")]
    pub kinds: bool,

    /// Separates the tokens of consecutive source lines by a single line break, dropping blank
    /// lines.
    #[clap(long = "collapse-newlines")]
    pub collapse_newlines: bool,

    /// Prints the diagnostics without ANSI colors.
    #[clap(long = "no-color")]
    pub no_color: bool,
}

/// An error or warning token reported by the lexer, located in its source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The severity of the diagnostic.
    pub severity: Severity,

    /// The diagnostic text carried by the token.
    pub message: String,

    /// The span of source code the diagnostic points at.
    pub span: Option<Span>,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Message::new(self.severity, &self.message))?;

        if let Some(span) = &self.span {
            let help = match self.severity {
                Severity::Error => Some("lexing stops at the first error"),
                Severity::Warning => None,
            };

            write!(f, "\n{}", SourceCodeDisplay::new(span, help))?;
        }

        Ok(())
    }
}

/// A struct that implements [`Handler`] by printing every diagnostic to the standard error
/// stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Printer;

impl Handler<Diagnostic> for Printer {
    fn receive(&self, diagnostic: Diagnostic) {
        eprintln!("{diagnostic}");
    }
}

/// The tokens of a source file laid out for printing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Listing {
    /// The printed tokens, one output line per source line.
    pub text: String,

    /// Whether the lexer stopped at an error.
    pub failed: bool,
}

/// Lexes the whole source file and lays out its tokens.
///
/// Tokens from the same source line are separated by a space. Each source line starts a new
/// output line, and blank source lines are kept unless `collapse_newlines` is set. `Error` and
/// `Warning` tokens are reported to the handler rather than listed.
#[must_use]
pub fn list(
    source_file: &Arc<SourceFile>,
    argument: &Argument,
    handler: &impl Handler<Diagnostic>,
) -> Listing {
    let mut listing = Listing::default();
    let mut previous_line = None;

    for token in TokenStream::spawn(source_file.content()) {
        let span = Span::new(source_file.clone(), token.span.clone());

        if token.kind.is_diagnostic() {
            let severity = if token.kind == TokenKind::Error {
                listing.failed = true;
                Severity::Error
            } else {
                Severity::Warning
            };

            handler.receive(Diagnostic {
                severity,
                message: token.text,
                span,
            });
            continue;
        }

        let line = span
            .as_ref()
            .map_or(previous_line.unwrap_or(1), |span| span.start_location().line);

        match previous_line {
            Some(previous) if line > previous => {
                let breaks = if argument.collapse_newlines {
                    1
                } else {
                    line - previous
                };

                listing.text.push_str(&"\n".repeat(breaks));
            }
            Some(_) => listing.text.push(' '),
            None => {}
        }

        listing.text.push_str(&render(&token, argument.kinds));
        previous_line = Some(line);
    }

    if previous_line.is_some() {
        listing.text.push('\n');
    }

    listing
}

fn render(token: &Token, kinds: bool) -> String {
    if kinds {
        token.kind.to_string()
    } else {
        token.to_string()
    }
}

fn load(path: &Path) -> Result<Arc<SourceFile>, source_file::Error> {
    let file = File::open(path)?;
    SourceFile::load(&file, path.to_path_buf())
}

/// Runs the program with the given arguments.
#[must_use]
pub fn run(argument: &Argument) -> ExitCode {
    formatting::set_enabled(!argument.no_color);

    let source_file = match load(&argument.file) {
        Ok(source_file) => source_file,
        Err(error) => {
            let msg = Message::new(
                Severity::Error,
                format!("{}: {error}", argument.file.display()),
            );

            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let listing = list(&source_file, argument, &Printer);
    print!("{}", listing.text);

    if listing.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
