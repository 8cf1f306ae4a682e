use std::io;
use std::process::ExitCode;

use colored::Colorize;
use tagged_objects::demo;

fn main() -> ExitCode {
    let stdout = io::stdout();
    let mut sink = stdout.lock();

    // Safety net for anything that escapes the demo's specific handlers.
    // Never entered in a normal run.
    match demo::run(&mut sink) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("Caught failure: {err}").red());
            ExitCode::FAILURE
        }
    }
}
