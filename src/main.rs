use std::{env, process::ExitCode};

use colored::Colorize;
use sudoku_cruncher::cli::{run, CliError, Config};

fn main() -> ExitCode {
    env_logger::init();
    let result = Config::from_args(env::args_os()).and_then(|config| run(&config));
    match result {
        Ok(solved) => {
            // pretty blocks already end in a newline, leaving a blank line between them
            for text in solved {
                println!("{text}");
            }
            ExitCode::SUCCESS
        }
        Err(CliError::Help(usage)) => {
            print!("{usage}");
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("{}", format!("{err}").trim_end().red());
            ExitCode::from(err.exit_code())
        }
    }
}
