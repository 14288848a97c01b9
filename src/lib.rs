//! Convert infix expressions to reverse polish notation, using the shunting-yard algorithm.
//!
//! Input is a single line of whitespace-separated tokens: operands (alphanumeric words like
//! `x` or `42`), operators from a precedence table, and the parentheses `(` and `)`. Multi
//! character operators like `**` must be written as their own word. The output is the same
//! tokens, reordered into postfix order, with the parentheses removed:
//!
//! ```
//! assert_eq!(infix_rpn::parse("1 + 2 - 3").unwrap(), "1 2 + 3 -");
//! assert_eq!(infix_rpn::parse("2 ** ~ 1").unwrap(), "2 1 ~ **");
//! assert_eq!(infix_rpn::parse("( a || b ) && c").unwrap(), "a b || c &&");
//! ```
//!
//! The standard precedence table, tightest first:
//!
//! | ops             | prec | assoc |
//! |-----------------|------|-------|
//! | `!` `~`         | 0    | right |
//! | `**`            | 1    | right |
//! | `*` `/` `%`     | 2    | left  |
//! | `+` `-`         | 3    | left  |
//! | `==` `!=`       | 5    | left  |
//! | `&`             | 6    | left  |
//! | `^`             | 7    | left  |
//! | `\|`            | 8    | left  |
//! | `&&`            | 9    | left  |
//! | `\|\|`          | 10   | left  |
//!
//! Use [`GrammarBuilder`] for a different table.

mod grammar;
mod lexer;
mod op;
mod parse_error;
mod postfix;
mod shunter;

pub use grammar::{Grammar, GrammarBuilder, GrammarError};
pub use lexer::{lex, Lex, Lexeme, Span};
pub use op::{Assoc, Fixity, Op, Prec};
pub use parse_error::{ErrorDisplay, Paren, ParseError, ParseErrorKind};
pub use postfix::{Item, Postfix};
pub use shunter::shunt;

/// Convert `expression` to reverse polish notation using the standard grammar, and join the
/// result with spaces.
pub fn parse(expression: &str) -> Result<String, ParseError<'_>> {
    let grammar = Grammar::standard();
    let postfix = grammar.parse(expression)?;
    Ok(postfix.to_string())
}
