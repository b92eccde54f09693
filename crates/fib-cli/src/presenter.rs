//! CLI result presenter.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use num_bigint::BigUint;
use tracing::info;

use fib_core::calculator::FibError;
use fib_core::format::OutputFormat;
use fib_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_duration, format_result_line, format_time_line, write_to_file};
use crate::ui;

/// How a result is shown.
#[derive(Debug, Clone, Default)]
pub struct PresentationOptions {
    /// Base of the digit string.
    pub format: OutputFormat,
    /// Print the digits without label or prefix.
    pub raw: bool,
    /// Print the calculation time after the result.
    pub show_time: bool,
    /// Print only the calculation time.
    pub time_only: bool,
    /// Write the result line here instead of stdout.
    pub output: Option<PathBuf>,
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    options: PresentationOptions,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(options: PresentationOptions) -> Self {
        Self { options }
    }

    /// Write the result of F(n) to `out`, or to the output file if one is set.
    ///
    /// `--time-only` suppresses the result line, including the file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing to `out` or the output file fails.
    pub fn write_result(
        &self,
        out: &mut dyn Write,
        n: u64,
        value: &BigUint,
        duration: Duration,
    ) -> io::Result<()> {
        let opts = &self.options;

        if !opts.time_only {
            let line = format_result_line(n, value, opts.format, opts.raw);
            match &opts.output {
                Some(path) => {
                    write_to_file(path, &line)?;
                    info!(path = %path.display(), "Result written to file");
                }
                None => writeln!(out, "{line}")?,
            }
        }

        if opts.show_time || opts.time_only {
            writeln!(out, "{}", format_time_line(duration))?;
        }
        Ok(())
    }

    /// Render the per-algorithm summary of a comparison run.
    #[must_use]
    pub fn render_comparison(results: &[CalculationResult]) -> Vec<String> {
        let mut lines = vec![ui::header("Comparison Results")];
        for result in results {
            let status = match &result.outcome {
                Ok(_) => "OK".to_string(),
                Err(e) => format!("ERROR: {e}"),
            };
            lines.push(format!(
                "  {:<12} {:>12} [{status}]",
                result.algorithm,
                format_duration(result.duration),
            ));
        }
        lines
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, n: u64, value: &BigUint, duration: Duration) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_result(&mut out, n, value, duration)?;
        out.flush()
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        for line in Self::render_comparison(results) {
            println!("{line}");
        }
    }

    fn present_error(&self, algorithm: &str, error: &FibError) {
        ui::print_error(&format!("{algorithm}: {error}"));
    }
}
