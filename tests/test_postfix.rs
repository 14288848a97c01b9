use infix_rpn::{Assoc, Fixity, Grammar, Item};

fn parenthesize(src: &str) -> Option<String> {
    let grammar = Grammar::standard();
    let postfix = grammar.parse(src).unwrap();
    postfix.parenthesize()
}

#[test]
fn test_items() {
    let grammar = Grammar::standard();
    let postfix = grammar.parse("a + ! b").unwrap();
    assert_eq!(postfix.symbols(), vec!["a", "b", "!", "+"]);
    assert_eq!(postfix.len(), 4);
    assert!(!postfix.is_empty());

    let items = postfix.iter().collect::<Vec<_>>();
    assert!(matches!(items[0], Item::Operand(_)));
    assert_eq!(items[2].op().map(|op| op.arity()), Some(1));
    assert_eq!(items[3].op().map(|op| op.symbol.as_str()), Some("+"));
    assert_eq!(items[3].lexeme().span, (2, 3));
    assert_eq!(items[1].op(), None);

    let num_ops = (&postfix).into_iter().filter(|item| item.op().is_some()).count();
    assert_eq!(num_ops, 2);

    assert!(grammar.parse("").unwrap().is_empty());
}

#[test]
fn test_parenthesize() {
    assert_eq!(parenthesize("a").as_deref(), Some("a"));
    assert_eq!(parenthesize("1 + 2 - 3").as_deref(), Some("((1 + 2) - 3)"));
    assert_eq!(parenthesize("2 ** 3 ** 2").as_deref(), Some("(2 ** (3 ** 2))"));
    assert_eq!(parenthesize("2 ** ~ 1").as_deref(), Some("(2 ** (~ 1))"));
    assert_eq!(
        parenthesize("1 + 2 - ! ~ 3").as_deref(),
        Some("((1 + 2) - (! (~ 3)))")
    );
    assert_eq!(
        parenthesize("2 ** 1 == 1 ** 2 + 1").as_deref(),
        Some("((2 ** 1) == ((1 ** 2) + 1))")
    );
    assert_eq!(
        parenthesize("( a || b ) && c").as_deref(),
        Some("((a || b) && c)")
    );
}

#[test]
fn test_parenthesize_malformed() {
    // The converter doesn't check arity, so these get through, but don't form one expression.
    assert_eq!(parenthesize(""), None);
    assert_eq!(parenthesize("1 +"), None);
    assert_eq!(parenthesize("1 2"), None);
    assert_eq!(parenthesize("+ + 1"), None);
}

/// Parses infix by precedence climbing, producing the same fully parenthesized form as
/// `Postfix::parenthesize`.
struct Climber<'a> {
    grammar: &'a Grammar,
    tokens: Vec<&'a str>,
    pos: usize,
}

impl<'a> Climber<'a> {
    fn expr(&mut self, limit: u32) -> String {
        let mut lhs = self.primary();
        while let Some(&token) = self.tokens.get(self.pos) {
            let op = match self.grammar.op(token) {
                Some(op) => op,
                None => break,
            };
            let prec = op.prec as u32;
            if prec < limit || (prec == limit && op.assoc == Assoc::Right) {
                self.pos += 1;
                let rhs = self.expr(prec);
                lhs = format!("({} {} {})", lhs, token, rhs);
            } else {
                break;
            }
        }
        lhs
    }

    fn primary(&mut self) -> String {
        let token = self.tokens[self.pos];
        self.pos += 1;
        if token == "(" {
            let inner = self.expr(u32::MAX);
            assert_eq!(self.tokens[self.pos], ")");
            self.pos += 1;
            inner
        } else if let Some(op) = self.grammar.op(token) {
            assert_eq!(op.fixity, Fixity::Prefix);
            let operand = self.expr(op.prec as u32);
            format!("({} {})", token, operand)
        } else {
            token.to_owned()
        }
    }
}

struct Rng(u64);

impl Rng {
    fn below(&mut self, n: usize) -> usize {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 % n as u64) as usize
    }
}

fn gen_expr(rng: &mut Rng, depth: usize, out: &mut Vec<&'static str>) {
    const OPERANDS: &[&str] = &["a", "b", "c", "1", "2", "x9"];
    const PREFIX: &[&str] = &["!", "~"];
    const INFIX: &[&str] = &[
        "**", "*", "/", "%", "+", "-", "==", "!=", "&", "^", "|", "&&", "||",
    ];

    let choice = if depth == 0 { 0 } else { rng.below(5) };
    match choice {
        0 => out.push(OPERANDS[rng.below(OPERANDS.len())]),
        1 => {
            out.push(PREFIX[rng.below(PREFIX.len())]);
            gen_expr(rng, depth - 1, out);
        }
        2 => {
            out.push("(");
            gen_expr(rng, depth - 1, out);
            out.push(")");
        }
        _ => {
            gen_expr(rng, depth - 1, out);
            out.push(INFIX[rng.below(INFIX.len())]);
            gen_expr(rng, depth - 1, out);
        }
    }
}

#[test]
fn test_matches_precedence_climbing() {
    let grammar = Grammar::standard();
    let mut rng = Rng(0x2545_f491_4f6c_dd1d);
    for _ in 0..500 {
        let mut tokens = vec![];
        gen_expr(&mut rng, 5, &mut tokens);
        let src = tokens.join(" ");

        let mut climber = Climber {
            grammar: &grammar,
            tokens: tokens.clone(),
            pos: 0,
        };
        let expected = climber.expr(u32::MAX);
        assert_eq!(climber.pos, tokens.len());

        let postfix = grammar.parse(&src).unwrap();
        assert_eq!(postfix.parenthesize(), Some(expected), "{}", src);
        let num_parens = tokens.iter().filter(|t| **t == "(" || **t == ")").count();
        assert_eq!(postfix.len(), tokens.len() - num_parens);
    }
}
