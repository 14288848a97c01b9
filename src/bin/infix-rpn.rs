use infix_rpn::Grammar;
use std::io::{self, BufRead, IsTerminal};
use std::process;

// Converts each line of stdin (or the command line arguments, if there are any) to reverse
// polish notation.
fn main() {
    let grammar = Grammar::standard();
    let color = io::stderr().is_terminal();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if !args.is_empty() {
        if !convert(&grammar, &args.join(" "), color) {
            process::exit(1);
        }
        return;
    }

    let mut failed = false;
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("{}", err);
                process::exit(2);
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        failed |= !convert(&grammar, &line, color);
    }
    if failed {
        process::exit(1);
    }
}

fn convert(grammar: &Grammar, line: &str, color: bool) -> bool {
    match grammar.parse(line) {
        Ok(postfix) => {
            println!("{}", postfix);
            true
        }
        Err(err) => {
            eprint!("{}", err.display_with_color_override(color));
            false
        }
    }
}
