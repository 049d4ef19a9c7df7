use safecalc::calculator::Calculator;
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    println!("=== safecalc ===");
    println!("Type an arithmetic expression, \"history\" to review the session, or \"exit\" to quit.");

    let mut calculator = Calculator::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") {
            break;
        }
        if input.eq_ignore_ascii_case("history") {
            if calculator.history().is_empty() {
                println!("history is empty");
            }
            for entry in calculator.history() {
                println!("{}", entry);
            }
            continue;
        }

        match calculator.evaluate(input) {
            Ok(value) => println!("{}", value),
            Err(message) => println!("{}", message),
        }
    }

    Ok(())
}
