use crate::lexer::OperandRule;
use crate::op::{Assoc, Fixity, Op, Prec};
use crate::parse_error::{ParseError, ParseErrorKind};
use crate::postfix::Postfix;
use crate::shunter::shunt;
use regex::Error as RegexError;
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

/// The default operator table. Rank 4 is deliberately left unused.
const STANDARD_OPS: &[(&str, Fixity, Assoc, Prec)] = &[
    ("!", Fixity::Prefix, Assoc::Right, 0),
    ("~", Fixity::Prefix, Assoc::Right, 0),
    ("**", Fixity::Infix, Assoc::Right, 1),
    ("*", Fixity::Infix, Assoc::Left, 2),
    ("/", Fixity::Infix, Assoc::Left, 2),
    ("%", Fixity::Infix, Assoc::Left, 2),
    ("+", Fixity::Infix, Assoc::Left, 3),
    ("-", Fixity::Infix, Assoc::Left, 3),
    ("==", Fixity::Infix, Assoc::Left, 5),
    ("!=", Fixity::Infix, Assoc::Left, 5),
    ("&", Fixity::Infix, Assoc::Left, 6),
    ("^", Fixity::Infix, Assoc::Left, 7),
    ("|", Fixity::Infix, Assoc::Left, 8),
    ("&&", Fixity::Infix, Assoc::Left, 9),
    ("||", Fixity::Infix, Assoc::Left, 10),
];

/// A precedence table, plus the rule for what counts as an operand. Ready to parse.
#[derive(Debug, Clone)]
pub struct Grammar {
    ops: Vec<Op>,
    // symbol -> index into `ops`
    op_indices: HashMap<String, usize>,
    operands: OperandRule,
}

/// Used to construct a custom grammar. Operators are listed with their precedence; smaller
/// precedence binds tighter.
///
/// ```
/// use infix_rpn::GrammarBuilder;
///
/// let grammar = GrammarBuilder::new()
///     .prefix("-", 0)
///     .infixr("^", 1)
///     .infixl("+", 2)
///     .finish()
///     .unwrap();
/// assert_eq!(grammar.parse("- a ^ b + c").unwrap().to_string(), "a - b ^ c +");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GrammarBuilder {
    ops: Vec<Op>,
    operand_regex: Option<String>,
}

#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("Duplicate operator '{0}'. Each operator symbol may appear only once in a grammar.")]
    DuplicateOp(String),
    #[error("Operator symbol '{0}' is reserved. Operators can't be empty, be a parenthesis, contain whitespace, or look like an operand.")]
    ReservedSymbol(String),
    #[error("{0}")]
    RegexError(#[from] RegexError),
}

impl GrammarBuilder {
    pub fn new() -> GrammarBuilder {
        GrammarBuilder::default()
    }

    /// A prefix operator, like `! _`. Prefix operators are always right associative.
    pub fn prefix(self, symbol: &str, prec: Prec) -> GrammarBuilder {
        self.op(symbol, Fixity::Prefix, Assoc::Right, prec)
    }

    /// A left-associative infix operator, like `_ - _`.
    pub fn infixl(self, symbol: &str, prec: Prec) -> GrammarBuilder {
        self.op(symbol, Fixity::Infix, Assoc::Left, prec)
    }

    /// A right-associative infix operator, like `_ ** _`.
    pub fn infixr(self, symbol: &str, prec: Prec) -> GrammarBuilder {
        self.op(symbol, Fixity::Infix, Assoc::Right, prec)
    }

    /// Replace the default operand rule (all alphanumeric) with a regex. The regex must match
    /// the whole token.
    pub fn operand_regex(mut self, regex: &str) -> GrammarBuilder {
        self.operand_regex = Some(regex.to_owned());
        self
    }

    pub fn finish(self) -> Result<Grammar, GrammarError> {
        let operands = match &self.operand_regex {
            Some(regex) => OperandRule::from_regex(regex)?,
            None => OperandRule::Alphanumeric,
        };
        for op in &self.ops {
            if is_reserved(&op.symbol, &operands) {
                return Err(GrammarError::ReservedSymbol(op.symbol.clone()));
            }
        }
        let mut seen = HashSet::new();
        for op in &self.ops {
            if !seen.insert(op.symbol.as_str()) {
                return Err(GrammarError::DuplicateOp(op.symbol.clone()));
            }
        }
        Ok(Grammar::new_unchecked(self.ops, operands))
    }

    fn op(mut self, symbol: &str, fixity: Fixity, assoc: Assoc, prec: Prec) -> GrammarBuilder {
        self.ops.push(Op::new(symbol, fixity, assoc, prec));
        self
    }
}

fn is_reserved(symbol: &str, operands: &OperandRule) -> bool {
    symbol.is_empty()
        || symbol == "("
        || symbol == ")"
        || symbol.contains(char::is_whitespace)
        || operands.matches(symbol)
}

impl Grammar {
    /// The built-in table: logical and bitwise operators, comparison, arithmetic, and the
    /// prefix operators `!` and `~`.
    pub fn standard() -> Grammar {
        let ops = STANDARD_OPS
            .iter()
            .map(|(symbol, fixity, assoc, prec)| Op::new(symbol, *fixity, *assoc, *prec))
            .collect();
        Grammar::new_unchecked(ops, OperandRule::Alphanumeric)
    }

    fn new_unchecked(ops: Vec<Op>, operands: OperandRule) -> Grammar {
        let op_indices = ops
            .iter()
            .enumerate()
            .map(|(i, op)| (op.symbol.clone(), i))
            .collect();
        Grammar {
            ops,
            op_indices,
            operands,
        }
    }

    /// Convert `source` to reverse polish notation.
    pub fn parse<'s, 'g>(&'g self, source: &'s str) -> Result<Postfix<'s, 'g>, ParseError<'s>> {
        shunt(self, source)
    }

    /// Look up an operator's precedence and associativity.
    pub fn priority_of(&self, symbol: &str) -> Result<(Prec, Assoc), ParseErrorKind> {
        match self.op(symbol) {
            Some(op) => Ok((op.prec, op.assoc)),
            None => Err(ParseErrorKind::UnknownOperator(symbol.to_owned())),
        }
    }

    pub fn op(&self, symbol: &str) -> Option<&Op> {
        self.op_indices.get(symbol).map(|i| &self.ops[*i])
    }

    /// The operators, in the order they were declared.
    pub fn ops(&self) -> impl Iterator<Item = &Op> + '_ {
        self.ops.iter()
    }

    pub fn is_operand(&self, text: &str) -> bool {
        self.operands.matches(text)
    }
}

impl Default for Grammar {
    fn default() -> Grammar {
        Grammar::standard()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:<8}{:<8}{:<8}{}", "Op", "Fixity", "Assoc", "Prec")?;
        for op in &self.ops {
            writeln!(
                f,
                "{:<8}{:<8}{:<8}{}",
                op.symbol,
                op.fixity.to_string(),
                op.assoc.to_string(),
                op.prec
            )?;
        }
        Ok(())
    }
}
