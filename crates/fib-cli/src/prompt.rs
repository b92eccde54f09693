//! Interactive configuration.
//!
//! Prompts for every option the command line accepts and prints a summary
//! before the calculation starts. Answers are collected with `inquire`;
//! turning them into a request is a separate pure step.

use std::path::PathBuf;

use inquire::error::{CustomUserError, InquireResult};
use inquire::ui::RenderConfig;
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, InquireError, Select, Text};

use fib_core::algorithm::Algorithm;
use fib_core::constants::INTERACTIVE_MAX_INDEX;
use fib_core::format::OutputFormat;

use crate::ui;

/// Everything collected by an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveRequest {
    pub n: u64,
    pub algorithm: Algorithm,
    pub format: OutputFormat,
    pub show_time: bool,
    pub time_only: bool,
    pub raw: bool,
    pub verbose: bool,
    pub output: Option<PathBuf>,
}

/// Raw answers, exactly as the prompts returned them.
#[derive(Debug, Clone)]
pub struct Answers {
    pub n: u64,
    pub algorithm: Algorithm,
    pub format: OutputFormat,
    pub show_time: bool,
    pub time_only: bool,
    pub raw: bool,
    pub verbose: bool,
    pub output: String,
}

/// Why an interactive session ended without a request.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("the operation was canceled using the ESC key")]
    Canceled,
    #[error("the operation was interrupted using Ctrl+C")]
    Interrupted,
    #[error("interactive mode needs a terminal on standard input")]
    NotTty,
    #[error("could not show a prompt: {0}")]
    Prompt(#[source] InquireError),
}

fn ask<T>(answer: InquireResult<T>) -> Result<T, PromptError> {
    match answer {
        Ok(value) => Ok(value),
        Err(InquireError::OperationCanceled) => Err(PromptError::Canceled),
        Err(InquireError::OperationInterrupted) => Err(PromptError::Interrupted),
        Err(InquireError::NotTTY) => Err(PromptError::NotTty),
        Err(other) => Err(PromptError::Prompt(other)),
    }
}

/// Range check for the index prompt.
///
/// # Errors
///
/// Returns the message shown under the prompt when `n` is out of range.
pub fn check_index(n: u64) -> Result<(), String> {
    if n <= INTERACTIVE_MAX_INDEX {
        Ok(())
    } else {
        Err(format!(
            "Number must be between 0 and {INTERACTIVE_MAX_INDEX}. Please try again."
        ))
    }
}

/// Turn raw answers into a request.
///
/// Time-only is dropped unless timing was asked for, and a blank file name
/// means standard output.
#[must_use]
pub fn resolve(answers: Answers) -> InteractiveRequest {
    let output = answers.output.trim();
    InteractiveRequest {
        n: answers.n,
        algorithm: answers.algorithm,
        format: answers.format,
        show_time: answers.show_time,
        time_only: answers.show_time && answers.time_only,
        raw: answers.raw,
        verbose: answers.verbose,
        output: (!output.is_empty()).then(|| PathBuf::from(output)),
    }
}

/// Lines of the configuration summary.
#[must_use]
pub fn summary_lines(r: &InteractiveRequest) -> Vec<String> {
    let yes_no = |b: bool| if b { "Yes" } else { "No" };
    let output = r
        .output
        .as_ref()
        .map_or_else(|| "No (standard output)".to_string(), |p| p.display().to_string());

    vec![
        ui::header("Configuration Summary"),
        format!("Fibonacci Number: {}", r.n),
        format!("Algorithm: {}", r.algorithm),
        format!("Format: {}", r.format),
        format!("Show time: {}", yes_no(r.show_time)),
        format!("Time only (no result): {}", yes_no(r.time_only)),
        format!("Raw output: {}", yes_no(r.raw)),
        format!("Detailed information: {}", yes_no(r.verbose)),
        format!("Output file: {output}"),
    ]
}

fn default_cursor<T: PartialEq>(options: &[T], default: &T) -> usize {
    options.iter().position(|o| o == default).unwrap_or(0)
}

fn confirm(message: &str) -> Result<bool, PromptError> {
    ask(Confirm::new(message).with_default(false).prompt())
}

fn collect_answers() -> Result<Answers, PromptError> {
    let n = ask(
        CustomType::<u64>::new("Enter the Fibonacci number to calculate:")
            .with_help_message(&format!("An integer between 0 and {INTERACTIVE_MAX_INDEX}"))
            .with_error_message("Invalid input. Please enter an integer.")
            .with_validator(|n: &u64| -> Result<Validation, CustomUserError> {
                Ok(match check_index(*n) {
                    Ok(()) => Validation::Valid,
                    Err(message) => Validation::Invalid(message.into()),
                })
            })
            .prompt(),
    )?;

    let algorithms = Algorithm::ALL.to_vec();
    let cursor = default_cursor(&algorithms, &Algorithm::Matrix);
    let algorithm = ask(
        Select::new("Choose algorithm:", algorithms)
            .with_starting_cursor(cursor)
            .prompt(),
    )?;

    let formats = OutputFormat::ALL.to_vec();
    let cursor = default_cursor(&formats, &OutputFormat::Decimal);
    let format = ask(
        Select::new("Choose output format:", formats)
            .with_starting_cursor(cursor)
            .prompt(),
    )?;

    let show_time = confirm("Do you want to show calculation time?")?;
    let time_only = show_time && confirm("Do you want to show ONLY the time (skip result output)?")?;
    let raw = confirm("Do you want to show only the raw number?")?;
    let verbose = confirm("Do you want to show detailed calculation information?")?;
    let output = ask(
        Text::new("Enter the output file name:")
            .with_help_message("Press Enter to print to standard output")
            .prompt(),
    )?;

    Ok(Answers {
        n,
        algorithm,
        format,
        show_time,
        time_only,
        raw,
        verbose,
        output,
    })
}

/// Run an interactive session on the terminal and print the summary.
///
/// # Errors
///
/// Fails if standard input is not a terminal, or if the user cancels.
pub fn run_interactive() -> Result<InteractiveRequest, PromptError> {
    if ui::is_color_disabled() {
        inquire::set_global_render_config(RenderConfig::empty());
    }

    println!("\n{}\n", ui::header("fib"));
    let request = resolve(collect_answers()?);

    println!();
    for line in summary_lines(&request) {
        println!("{line}");
    }
    println!("\nProcessing...\n");
    Ok(request)
}
