use crate::grammar::Grammar;
use crate::lexer::{lex, Lexeme, Span};
use crate::op::Op;
use crate::parse_error::{Paren, ParseError};
use crate::postfix::{Item, Postfix};

/// A classified word of the source.
#[derive(Debug, Clone, Copy)]
enum Token<'s, 'g> {
    Operand(Lexeme<'s>),
    Operator(Lexeme<'s>, &'g Op),
    Open(Lexeme<'s>),
    Close(Lexeme<'s>),
}

/// An entry on the operator stack. An open paren is only ever a group boundary; it has no
/// precedence.
#[derive(Debug, Clone, Copy)]
enum StackEntry<'s, 'g> {
    Operator(Lexeme<'s>, &'g Op),
    OpenParen(Span),
}

fn classify<'s, 'g>(
    grammar: &'g Grammar,
    source: &'s str,
    lexeme: Lexeme<'s>,
) -> Result<Token<'s, 'g>, ParseError<'s>> {
    match lexeme.text {
        "(" => Ok(Token::Open(lexeme)),
        ")" => Ok(Token::Close(lexeme)),
        text => {
            if let Some(op) = grammar.op(text) {
                Ok(Token::Operator(lexeme, op))
            } else if grammar.is_operand(text) {
                Ok(Token::Operand(lexeme))
            } else {
                Err(ParseError::unexpected_token(source, lexeme))
            }
        }
    }
}

/// Convert an infix expression into reverse polish notation. For example, `1 * 2 + 3 * 4` would
/// become `1 2 * 3 4 * +`.
///
/// An incoming operator pops every operator on top of the stack that binds at least as tightly,
/// stopping at the innermost open paren. When precedences tie, a left-associative incoming
/// operator pops (`a - b - c` becomes `a b - c -`) and a right-associative one doesn't
/// (`a ** b ** c` becomes `a b c ** **`).
pub fn shunt<'s, 'g>(
    grammar: &'g Grammar,
    source: &'s str,
) -> Result<Postfix<'s, 'g>, ParseError<'s>> {
    let mut stack = Vec::<StackEntry>::new();
    let mut output = Vec::<Item>::new();
    for lexeme in lex(source) {
        match classify(grammar, source, lexeme)? {
            Token::Operand(lexeme) => output.push(Item::Operand(lexeme)),
            Token::Open(lexeme) => stack.push(StackEntry::OpenParen(lexeme.span)),
            Token::Close(lexeme) => loop {
                match stack.pop() {
                    Some(StackEntry::Operator(top_lexeme, top)) => {
                        output.push(Item::Operator(top_lexeme, top))
                    }
                    Some(StackEntry::OpenParen(_)) => break,
                    None => {
                        return Err(ParseError::unbalanced(source, Paren::Close, lexeme.span))
                    }
                }
            },
            Token::Operator(lexeme, op) => {
                while let Some(&StackEntry::Operator(top_lexeme, top)) = stack.last() {
                    if (top.prec, op.is_right_assoc()) > (op.prec, false) {
                        break;
                    }
                    stack.pop();
                    output.push(Item::Operator(top_lexeme, top));
                }
                stack.push(StackEntry::Operator(lexeme, op));
            }
        }
        #[cfg(feature = "debug_mode")]
        print_state(lexeme, &stack, &output);
    }
    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(lexeme, op) => output.push(Item::Operator(lexeme, op)),
            StackEntry::OpenParen(span) => {
                return Err(ParseError::unbalanced(source, Paren::Open, span))
            }
        }
    }
    Ok(Postfix::new(output))
}

#[cfg(feature = "debug_mode")]
fn print_state(lexeme: Lexeme, stack: &[StackEntry], output: &[Item]) {
    print!("{:<6} stack: ", lexeme.text);
    for entry in stack {
        match entry {
            StackEntry::Operator(_, op) => print!("{} ", op),
            StackEntry::OpenParen(_) => print!("( "),
        }
    }
    print!("  output: ");
    for item in output {
        print!("{} ", item.text());
    }
    println!();
}
