use crate::lexer::{Lexeme, Span};
use colored::{ColoredString, Colorize};
use std::error;
use std::fmt;
use thiserror::Error;

/// Which side of a parenthesized group is missing its partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paren {
    Open,
    Close,
}

/// What went wrong, independent of where.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A token that is not an operator, a parenthesis, or an operand.
    #[error("Unexpected token '{0}'.")]
    UnexpectedToken(String),
    /// A `)` without a `(` before it, or a `(` that is never closed. Holds the parenthesis that
    /// was found without a partner.
    #[error("Unbalanced parenthesis '{0}'.")]
    UnbalancedParenthesis(Paren),
    /// A precedence lookup for a symbol that is not in the table. The parser never does this
    /// for user input, so seeing it means there's a bug.
    #[error("Unknown operator '{0}'.")]
    UnknownOperator(String),
}

/// An error from parsing one expression, together with the position of the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError<'s> {
    source: &'s str,
    kind: ParseErrorKind,
    span: Span,
}

/// Renders a [`ParseError`], with or without color. See
/// [`ParseError::display_with_color_override`].
#[derive(Debug, Clone, Copy)]
pub struct ErrorDisplay<'e, 's> {
    error: &'e ParseError<'s>,
    color: bool,
}

impl<'s> ParseError<'s> {
    pub(crate) fn unexpected_token(source: &'s str, lexeme: Lexeme<'s>) -> ParseError<'s> {
        ParseError {
            source,
            kind: ParseErrorKind::UnexpectedToken(lexeme.text.to_owned()),
            span: lexeme.span,
        }
    }

    pub(crate) fn unbalanced(source: &'s str, paren: Paren, span: Span) -> ParseError<'s> {
        ParseError {
            source,
            kind: ParseErrorKind::UnbalancedParenthesis(paren),
            span,
        }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> ParseErrorKind {
        self.kind
    }

    /// The byte range of the offending token in the source.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The text of the offending token.
    pub fn token(&self) -> &'s str {
        &self.source[self.span.0..self.span.1]
    }

    /// Display the error, with or without ANSI colors. Plain `Display` never colors, since
    /// errors usually go to stderr and only the caller knows whether that is a terminal.
    pub fn display_with_color_override(&self, color: bool) -> ErrorDisplay<'_, 's> {
        ErrorDisplay { error: self, color }
    }

    fn label(&self) -> &'static str {
        match &self.kind {
            ParseErrorKind::UnexpectedToken(_) => "unexpected token",
            ParseErrorKind::UnbalancedParenthesis(Paren::Open) => "never closed",
            ParseErrorKind::UnbalancedParenthesis(Paren::Close) => "nothing to close",
            ParseErrorKind::UnknownOperator(_) => "unknown operator",
        }
    }

    /// One-indexed line and column (in chars) of the start of the span, together with the
    /// contents of that line.
    fn location(&self) -> (usize, usize, &'s str) {
        let before = &self.source[..self.span.0];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let col = self.source[line_start..self.span.0].chars().count() + 1;
        let rest = &self.source[line_start..];
        let contents = rest.lines().next().unwrap_or("");
        (line, col, contents)
    }
}

impl<'e, 's> ErrorDisplay<'e, 's> {
    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_owned()
        }
    }
}

fn red(text: &str) -> ColoredString {
    text.red().bold()
}

fn blue(text: &str) -> ColoredString {
    text.blue().bold()
}

impl<'e, 's> fmt::Display for ErrorDisplay<'e, 's> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let error = self.error;
        let (line, col, contents) = error.location();
        let width = line.to_string().len();
        let margin = " ".repeat(width);
        let carets = "^".repeat(error.token().chars().count().max(1));

        writeln!(f, "{}: {}", self.paint("Parse Error", red), error.kind)?;
        writeln!(f, "{}{} {}:{}", margin, self.paint("-->", blue), line, col)?;
        writeln!(f, "{} {}", margin, self.paint("|", blue))?;
        writeln!(
            f,
            "{} {}{}",
            self.paint(&line.to_string(), blue),
            self.paint("|", blue),
            contents
        )?;
        writeln!(
            f,
            "{} {}{}{} {}",
            margin,
            self.paint("|", blue),
            " ".repeat(col - 1),
            self.paint(&carets, red),
            self.paint(error.label(), red)
        )
    }
}

impl<'s> fmt::Display for ParseError<'s> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_with_color_override(false))
    }
}

impl<'s> error::Error for ParseError<'s> {}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Paren::Open => write!(f, "("),
            Paren::Close => write!(f, ")"),
        }
    }
}
