use regex::{Error as RegexError, Regex};

/// A range of byte offsets into the source text. The start is inclusive, and the end exclusive.
pub type Span = (usize, usize);

/// One whitespace-delimited "word" of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lexeme<'s> {
    pub text: &'s str,
    pub span: Span,
}

/// Decides which tokens count as operands.
#[derive(Debug, Clone)]
pub(crate) enum OperandRule {
    /// Non-empty, and every character is alphanumeric.
    Alphanumeric,
    /// Matches the (whole-token anchored) regex.
    Regex(Regex),
}

/// Split `source` on runs of whitespace. Does not check what the words are; that's left to the
/// parser.
pub fn lex(source: &str) -> Lex<'_> {
    Lex { source, index: 0 }
}

#[derive(Debug, Clone)]
pub struct Lex<'s> {
    source: &'s str,
    index: usize,
}

impl OperandRule {
    pub(crate) fn from_regex(pattern: &str) -> Result<OperandRule, RegexError> {
        let regex = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(OperandRule::Regex(regex))
    }

    pub(crate) fn matches(&self, text: &str) -> bool {
        match self {
            OperandRule::Alphanumeric => {
                !text.is_empty() && text.chars().all(|ch| ch.is_alphanumeric())
            }
            OperandRule::Regex(regex) => regex.is_match(text),
        }
    }
}

impl<'s> Iterator for Lex<'s> {
    type Item = Lexeme<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        self.eat_whitespace();
        let remaining = self.remaining();
        let len = remaining
            .find(char::is_whitespace)
            .unwrap_or(remaining.len());
        if len == 0 {
            None
        } else {
            Some(self.eat_token(len))
        }
    }
}

impl<'s> Lex<'s> {
    pub fn remaining(&self) -> &'s str {
        &self.source[self.index..]
    }

    fn eat_whitespace(&mut self) {
        let remaining = self.remaining();
        self.index += remaining.len() - remaining.trim_start().len();
    }

    fn eat_token(&mut self, len: usize) -> Lexeme<'s> {
        let span = (self.index, self.index + len);
        self.index += len;
        Lexeme {
            text: &self.source[span.0..span.1],
            span,
        }
    }
}
