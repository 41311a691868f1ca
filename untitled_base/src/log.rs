//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Style};

use crate::source_file::Span;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 1;

    while number >= 10 {
        number /= 10;
        digit += 1;
    }

    digit
}

/// Gets the number of columns the character takes up when printed. Tabs are expanded to four
/// spaces.
fn char_width(char: char) -> usize {
    if char == '\t' {
        4
    } else {
        1
    }
}

/// Structure implementing [`Display`] that prints the lines covered by a span with the spanned
/// characters marked underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T: Display> SourceCodeDisplay<'a, T> {
    fn write_gutter(
        f: &mut std::fmt::Formatter<'_>,
        line_number: Option<usize>,
        width: usize,
        separator: &str,
    ) -> std::fmt::Result {
        match line_number {
            Some(line_number) => write!(
                f,
                "{}{:padding$} ",
                Style::Bold.with(Color::Cyan.with(line_number)),
                "",
                padding = width - get_digit(line_number)
            )?,
            None => write!(f, "{:width$} ", "")?,
        }

        write!(f, "{}", Style::Bold.with(Color::Cyan.with(separator)))
    }
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source_file = self.span.source_file();
        let start_location = self.span.start_location();
        let end_location = self.span.end_location();
        let width = get_digit(end_location.line);

        writeln!(
            f,
            "{:width$}{} {}:{}:{}",
            "",
            Style::Bold.with(Color::Cyan.with("-->")),
            source_file.full_path().display(),
            start_location.line,
            start_location.column
        )?;

        Self::write_gutter(f, None, width, "┃")?;
        writeln!(f)?;

        for line_number in start_location.line..=end_location.line {
            let line = source_file
                .get_line(line_number)
                .unwrap_or_default()
                .trim_end_matches(['\r', '\n']);

            // the marked columns of this line, end exclusive
            let from = if line_number == start_location.line {
                start_location.column
            } else {
                1
            };
            let to = if line_number == end_location.line {
                end_location.column
            } else {
                line.chars().count() + 1
            };

            // a span ending at the start of a line marks nothing on it
            if line_number != start_location.line && to <= from {
                continue;
            }

            Self::write_gutter(f, Some(line_number), width, "┃")?;
            write!(f, " ")?;
            for char in line.chars() {
                if char == '\t' {
                    write!(f, "    ")?;
                } else {
                    write!(f, "{char}")?;
                }
            }
            writeln!(f)?;

            let padding = line
                .chars()
                .take(from - 1)
                .map(char_width)
                .sum::<usize>();
            let marked = line
                .chars()
                .skip(from - 1)
                .take(to.saturating_sub(from))
                .map(char_width)
                .sum::<usize>()
                // empty spans still get a single marker
                .max(1);

            Self::write_gutter(f, None, width, "┃")?;
            writeln!(
                f,
                " {:padding$}{}",
                "",
                Style::Bold.with(Color::Red.with("^".repeat(marked)))
            )?;
        }

        if let Some(help_display) = &self.help_display {
            Self::write_gutter(f, None, width, "=")?;
            writeln!(f, " {}: {help_display}", Style::Bold.with("help"))?;
        }

        Ok(())
    }
}
