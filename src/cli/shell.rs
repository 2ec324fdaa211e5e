//! Interactive shell
//!
//! Reads commands line by line and runs them against one session, so
//! added expenses, accepted suggestions and toggles stay visible until the
//! shell exits.

use std::io::{self, BufRead, Write};

use clap::Parser;

use crate::error::FinboardResult;
use crate::session::Session;

use super::{run_command, Commands};

const PROMPT: &str = "finboard> ";

#[derive(Parser, Debug)]
#[command(name = "finboard", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Commands,
}

enum Flow {
    Continue,
    Exit,
}

/// Run the shell until `exit`, `quit` or end of input
pub fn run_shell<R: BufRead>(session: &mut Session, input: R) -> FinboardResult<()> {
    println!("Finboard shell. Type 'help' for commands, 'exit' to quit.");
    prompt()?;

    for line in input.lines() {
        if let Flow::Exit = run_line(session, &line?)? {
            break;
        }
        prompt()?;
    }

    println!();
    Ok(())
}

fn prompt() -> FinboardResult<()> {
    print!("{}", PROMPT);
    io::stdout().flush()?;
    Ok(())
}

fn run_line(session: &mut Session, line: &str) -> FinboardResult<Flow> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Flow::Continue);
    }
    if matches!(line, "exit" | "quit") {
        return Ok(Flow::Exit);
    }

    let Some(words) = shlex::split(line) else {
        eprintln!("Error: unbalanced quotes");
        return Ok(Flow::Continue);
    };

    let parsed = match ShellLine::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(err) => {
            err.print()?;
            return Ok(Flow::Continue);
        }
    };

    match parsed.command {
        Commands::Shell => println!("Already in a shell."),
        command => {
            if let Err(err) = run_command(session, command) {
                eprintln!("Error: {}", err);
            }
        }
    }

    Ok(Flow::Continue)
}
