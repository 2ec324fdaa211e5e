use anyhow::Result;
use clap::Parser;

use finboard::cli::{run_command, Cli};
use finboard::config::{FinboardPaths, Settings};
use finboard::session::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => FinboardPaths::with_base_dir(dir),
        None => FinboardPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let mut session = Session::start(paths, settings)?;

    match cli.command {
        Some(command) => run_command(&mut session, command)?,
        None => {
            println!("Finboard - personal finance dashboard");
            println!();
            println!("Run 'finboard --help' for usage information.");
            println!("Run 'finboard login' and then 'finboard dashboard' to get started.");
        }
    }

    session.end();
    Ok(())
}
