//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

/// fib — arbitrary-precision Fibonacci calculator.
#[derive(Parser, Debug)]
#[command(name = "fib", version, about, allow_negative_numbers = true)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Index of the Fibonacci number to compute.
    #[arg(
        value_name = "N",
        env = "FIB_N",
        required_unless_present_any = ["interactive", "completion"]
    )]
    pub n: Option<i64>,

    /// Algorithm to use: iter, recur, matrix, or all.
    #[arg(short, long, default_value = "matrix")]
    pub algorithm: String,

    /// Output format: dec, hex, or bin.
    #[arg(short, long, default_value = "dec")]
    pub format: String,

    /// Show the calculation time.
    #[arg(short, long)]
    pub time: bool,

    /// Show only the calculation time, not the result.
    #[arg(short = 'T', long)]
    pub time_only: bool,

    /// Output only the number without label or prefix.
    #[arg(short, long)]
    pub raw: bool,

    /// Show detailed calculation information.
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the result to this file instead of standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Prompt for every option interactively.
    #[arg(short, long)]
    pub interactive: bool,

    /// Show a progress bar on standard error.
    #[arg(long)]
    pub progress: bool,

    /// Reject indices above this value.
    #[arg(long, value_name = "N")]
    pub max_n: Option<u64>,

    /// Memory limit (e.g., "8G", "512M"); empty means the available system memory.
    #[arg(long, default_value = "")]
    pub memory_limit: String,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
