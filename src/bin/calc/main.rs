use std::collections::VecDeque;

use anyhow::Result;
use calc::CalcError;
use cfg_if::cfg_if;
use log::{debug, warn};

#[cfg(feature = "tui")]
mod tui;
#[cfg(feature = "tui")]
use tui::highlight;

const PROMPT: &str = "calc> ";

fn main() -> Result<()> {
    env_logger::init();

    println!("calc {}", env!("CARGO_PKG_VERSION"));

    cfg_if! {
    if #[cfg(feature = "tui")] {
        tui::drive()?;
    } else {
        plain_drive()?;
    }
    }

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn plain_drive() -> Result<()> {
    use std::io::{self, Write};

    let mut buffer = String::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        stdout.write_all(PROMPT.as_bytes())?;
        stdout.flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            // eof
            println!();
            break;
        }

        if eval(&buffer) == EvalState::Done {
            break;
        }
        buffer.truncate(0);
    }

    Ok(())
}

#[derive(Debug, Eq, PartialEq)]
enum EvalState {
    Regular,
    Done,
}

fn eval(line: &str) -> EvalState {
    let line = line.trim();
    if "exit" == line {
        return EvalState::Done;
    }

    match calc::feed(line) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => debug!("nothing to evaluate"),
        Err(e) => {
            warn!("{:?}", e);
            report(&e);
        }
    }

    EvalState::Regular
}

fn report(e: &anyhow::Error) {
    let label = match CalcError::extract(e) {
        Some(calc) => format!("{} error", calc.kind()),
        None => "error".to_string(),
    };
    let mut stack: VecDeque<_> = e.chain().rev().collect();

    println!(
        "{}",
        highlight(format!(
            "{label}: {}",
            stack
                .pop_front()
                .expect("chain contains at least the error")
        ))
    );

    for error in stack {
        println!("cause: {}", error);
    }
}

#[cfg(not(feature = "tui"))]
fn highlight(message: String) -> String {
    message
}
