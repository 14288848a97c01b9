use std::fmt;

/// Precedence level. Smaller is tighter / wins.
pub type Prec = u16;

/// Whether an operator takes an argument only on its right, or on both sides. For example:
///
/// - `! _` (not) takes an argument only on the right, so it is a `Prefix` operator.
/// - `_ - _` takes an argument on both sides, so it is an `Infix` operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Prefix,
    Infix,
}

/// Whether an operator is left or right associative. For example:
///
/// - Subtraction is left associative because `0 - 10 - 1` is equal to `(0 - 10) - 1 = -11` rather
///   than `0 - (10 - 1) = -9`.
/// - Exponentiation is right associative: `2 ** 3 ** 2` is `2 ** (3 ** 2)`.
/// - Prefix operators are right associative, so that `! ~ a` is `! (~ a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assoc {
    Left,
    Right,
}

/// An operator in a precedence table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Op {
    pub symbol: String,
    pub fixity: Fixity,
    pub assoc: Assoc,
    pub prec: Prec,
}

impl Op {
    pub(crate) fn new(symbol: &str, fixity: Fixity, assoc: Assoc, prec: Prec) -> Op {
        Op {
            symbol: symbol.to_owned(),
            fixity,
            assoc,
            prec,
        }
    }

    /// The number of arguments this operator consumes from the postfix output.
    pub fn arity(&self) -> usize {
        match self.fixity {
            Fixity::Prefix => 1,
            Fixity::Infix => 2,
        }
    }

    pub fn is_right_assoc(&self) -> bool {
        self.assoc == Assoc::Right
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

impl fmt::Display for Fixity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Fixity::Prefix => write!(f, "prefix"),
            Fixity::Infix => write!(f, "infix"),
        }
    }
}

impl fmt::Display for Assoc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Assoc::Left => write!(f, "left"),
            Assoc::Right => write!(f, "right"),
        }
    }
}
