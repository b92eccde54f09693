//! # fib-cli
//!
//! CLI output, interactive prompts, progress display, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod progress;
pub mod prompt;
pub mod ui;

pub use presenter::{CLIResultPresenter, PresentationOptions};
pub use progress::ProgressBars;
pub use prompt::{run_interactive, InteractiveRequest, PromptError};
