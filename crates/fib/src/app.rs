//! Application entry point and dispatch.

use std::io;
use std::sync::Arc;
use std::thread;

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use fib_cli::presenter::{CLIResultPresenter, PresentationOptions};
use fib_cli::progress::ProgressBars;
use fib_cli::prompt::{run_interactive, InteractiveRequest};
use fib_core::calculator::{check_index_ceiling, validate_index, FibError};
use fib_core::format::OutputFormat;
use fib_core::memory_budget::resolve_memory_limit;
use fib_core::observer::ProgressSubject;
use fib_core::observers::{ChannelObserver, LoggingObserver};
use fib_core::options::Options;
use fib_core::registry::DefaultFactory;
use fib_orchestration::calculator_selection::get_calculators_to_run;
use fib_orchestration::interfaces::{
    drain_progress, CalculationResult, ProgressReporter, ResultPresenter,
};
use fib_orchestration::orchestrator::{
    analyze_comparison_results, execute_calculations_with_observer,
};

use crate::config::AppConfig;
use crate::logging;

/// A fully resolved calculation request.
#[derive(Debug, Clone)]
pub struct Request {
    pub n: u64,
    pub algorithm: String,
    pub verbose: bool,
    pub progress: bool,
    pub memory_limit: Option<usize>,
    pub presentation: PresentationOptions,
}

impl Request {
    /// Resolve a request from command-line flags.
    ///
    /// # Errors
    ///
    /// Fails on a missing, negative or too large index, an unknown format,
    /// or a malformed memory limit.
    pub fn from_config(config: &AppConfig) -> Result<Self, FibError> {
        let raw_n = config
            .n
            .ok_or_else(|| FibError::Config("missing Fibonacci index".into()))?;
        let n = resolve_index(validate_index(raw_n)?, config.max_n)?;

        Ok(Self {
            n,
            algorithm: config.algorithm.clone(),
            verbose: config.verbose,
            progress: config.progress,
            memory_limit: resolve_memory_limit(&config.memory_limit)?,
            presentation: PresentationOptions {
                format: config.format.parse::<OutputFormat>()?,
                raw: config.raw,
                show_time: config.time,
                time_only: config.time_only,
                output: config.output.clone(),
            },
        })
    }

    /// Resolve a request from interactive answers. Options with no prompt
    /// (progress, index ceiling, memory limit) still come from the flags.
    ///
    /// # Errors
    ///
    /// Fails if the index exceeds `--max-n` or the memory limit is malformed.
    pub fn from_interactive(config: &AppConfig, answers: InteractiveRequest) -> Result<Self, FibError> {
        Ok(Self {
            n: resolve_index(answers.n, config.max_n)?,
            algorithm: answers.algorithm.short_name().to_string(),
            verbose: answers.verbose,
            progress: config.progress,
            memory_limit: resolve_memory_limit(&config.memory_limit)?,
            presentation: PresentationOptions {
                format: answers.format,
                raw: answers.raw,
                show_time: answers.show_time,
                time_only: answers.time_only,
                output: answers.output,
            },
        })
    }

    fn options(&self) -> Options {
        Options {
            memory_limit: self.memory_limit,
            verbose: self.verbose,
        }
        .normalize()
    }
}

fn resolve_index(n: u64, max_n: Option<u64>) -> Result<u64, FibError> {
    match max_n {
        Some(max) => check_index_ceiling(n, max),
        None => Ok(n),
    }
}

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fib_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let request = if config.interactive {
        let answers = run_interactive().context("interactive session failed")?;
        Request::from_interactive(config, answers)?
    } else {
        Request::from_config(config)?
    };

    logging::init(request.verbose)?;
    run_request(&request)
}

/// Compute and present a resolved request.
pub fn run_request(request: &Request) -> Result<()> {
    let opts = request.options();
    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run(&request.algorithm, &factory)?;
    debug!(n = request.n, algorithm = %request.algorithm, "Resolved request");

    let subject = ProgressSubject::new();
    if request.verbose {
        subject.register(Arc::new(LoggingObserver::new()));
    }
    // Bars are drawn on their own thread, fed through a channel.
    let display = if request.progress {
        let labels: Vec<&str> = calculators.iter().map(|c| c.name()).collect();
        let bars = Arc::new(ProgressBars::new(&labels)?);
        let (tx, rx) = crossbeam_channel::unbounded();
        subject.register(Arc::new(ChannelObserver::new(tx)));
        let reporter = Arc::clone(&bars);
        let handle = thread::spawn(move || drain_progress(&rx, reporter.as_ref()));
        Some((bars, handle))
    } else {
        None
    };

    let results = execute_calculations_with_observer(&calculators, request.n, &opts, &subject);
    // Dropping the channel sender lets the display thread finish.
    subject.clear();
    if let Some((bars, handle)) = display {
        handle
            .join()
            .map_err(|_| anyhow!("progress display thread panicked"))?;
        bars.complete();
    }

    let presenter = CLIResultPresenter::new(request.presentation.clone());
    present(&presenter, request.n, &results)
}

fn present(presenter: &dyn ResultPresenter, n: u64, results: &[CalculationResult]) -> Result<()> {
    if let [single] = results {
        let value = single.outcome.as_ref().map_err(Clone::clone)?;
        presenter
            .present_result(n, value, single.duration)
            .context("failed to write result")?;
        return Ok(());
    }

    presenter.present_comparison(results);
    for result in results {
        if let Some(e) = result.error() {
            presenter.present_error(&result.algorithm, e);
        }
    }
    analyze_comparison_results(results)?;

    // Results agree, so the first success stands for all of them.
    if let Some((value, duration)) = results
        .iter()
        .find_map(|r| r.value().map(|v| (v, r.duration)))
    {
        presenter
            .present_result(n, value, duration)
            .context("failed to write result")?;
    }
    Ok(())
}
