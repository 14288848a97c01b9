use crate::lexer::Lexeme;
use crate::op::{Fixity, Op};
use std::fmt;
use std::slice;

/// One token of the output, in postfix order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item<'s, 'g> {
    Operand(Lexeme<'s>),
    Operator(Lexeme<'s>, &'g Op),
}

/// An expression in reverse polish notation. Every operand and operator from the source appears
/// exactly once; parentheses are gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postfix<'s, 'g> {
    items: Vec<Item<'s, 'g>>,
}

impl<'s, 'g> Item<'s, 'g> {
    pub fn lexeme(&self) -> Lexeme<'s> {
        match self {
            Item::Operand(lexeme) | Item::Operator(lexeme, _) => *lexeme,
        }
    }

    pub fn text(&self) -> &'s str {
        self.lexeme().text
    }

    /// The operator, if this is one.
    pub fn op(&self) -> Option<&'g Op> {
        match self {
            Item::Operand(_) => None,
            Item::Operator(_, op) => Some(*op),
        }
    }
}

impl<'s, 'g> Postfix<'s, 'g> {
    pub(crate) fn new(items: Vec<Item<'s, 'g>>) -> Postfix<'s, 'g> {
        Postfix { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Item<'s, 'g>> {
        self.items.iter()
    }

    /// The source text of each item, in order.
    pub fn symbols(&self) -> Vec<&'s str> {
        self.items.iter().map(|item| item.text()).collect()
    }

    /// Rebuild a fully parenthesized infix expression, like `((1 + 2) - 3)` or `(! a)`, to make
    /// the grouping visible. Returns `None` unless the items form exactly one expression (so not
    /// for `1 +` or `1 2`).
    pub fn parenthesize(&self) -> Option<String> {
        let mut stack = Vec::<String>::new();
        for item in &self.items {
            match item {
                Item::Operand(lexeme) => stack.push(lexeme.text.to_owned()),
                Item::Operator(lexeme, op) => {
                    if stack.len() < op.arity() {
                        return None;
                    }
                    let args = stack.split_off(stack.len() - op.arity());
                    let expr = match op.fixity {
                        Fixity::Prefix => format!("({} {})", lexeme.text, args[0]),
                        Fixity::Infix => format!("({} {} {})", args[0], lexeme.text, args[1]),
                    };
                    stack.push(expr);
                }
            }
        }
        if stack.len() == 1 {
            stack.pop()
        } else {
            None
        }
    }
}

impl<'a, 's, 'g> IntoIterator for &'a Postfix<'s, 'g> {
    type Item = &'a Item<'s, 'g>;
    type IntoIter = slice::Iter<'a, Item<'s, 'g>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'s, 'g> fmt::Display for Postfix<'s, 'g> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item.text())?;
        }
        Ok(())
    }
}
