//! fib — arbitrary-precision Fibonacci calculator.

use std::process::ExitCode;

use fib_lib::{app, config, errors};

fn main() -> ExitCode {
    // Parse CLI args and run
    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            fib_cli::ui::print_error(&format!("{err:#}"));
            ExitCode::from(u8::try_from(errors::exit_code(&err)).unwrap_or(1))
        }
    }
}
