//! Progress bars driven by calculator progress updates.

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use fib_core::progress::ProgressUpdate;
use fib_orchestration::interfaces::ProgressReporter;

/// Bar resolution: progress fractions are mapped onto `0..=BAR_LEN`.
const BAR_LEN: u64 = 1000;

const TEMPLATE: &str = "{prefix:>10} [{elapsed_precise}] {bar:40.cyan/blue} {percent:>3}% {msg}";

/// One progress bar per calculator, indexed by `calc_index`.
pub struct ProgressBars {
    // Kept alive so the bars stay attached to their draw target.
    _multi: MultiProgress,
    bars: Vec<ProgressBar>,
}

impl ProgressBars {
    /// Create bars on stderr, one per label.
    ///
    /// # Errors
    ///
    /// Returns an error if the bar template is invalid.
    pub fn new(labels: &[&str]) -> Result<Self, indicatif::style::TemplateError> {
        Self::with_draw_target(labels, ProgressDrawTarget::stderr())
    }

    /// Create bars drawing to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bar template is invalid.
    pub fn with_draw_target(
        labels: &[&str],
        target: ProgressDrawTarget,
    ) -> Result<Self, indicatif::style::TemplateError> {
        let style = ProgressStyle::with_template(TEMPLATE)?.progress_chars("##-");
        let multi = MultiProgress::with_draw_target(target);
        let bars = labels
            .iter()
            .map(|label| {
                let bar = multi.add(ProgressBar::new(BAR_LEN));
                bar.set_style(style.clone());
                bar.set_prefix((*label).to_string());
                bar
            })
            .collect();

        Ok(Self {
            _multi: multi,
            bars,
        })
    }

    /// The bar for `calc_index`, if there is one.
    #[must_use]
    pub fn bar(&self, calc_index: usize) -> Option<&ProgressBar> {
        self.bars.get(calc_index)
    }
}

impl ProgressReporter for ProgressBars {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn report(&self, update: &ProgressUpdate) {
        let Some(bar) = self.bars.get(update.calc_index) else {
            return;
        };
        if update.done {
            bar.finish_with_message("done");
            return;
        }

        let pos = (update.progress.clamp(0.0, 1.0) * BAR_LEN as f64).round() as u64;
        bar.set_position(pos);
        if update.total_steps > 0 {
            bar.set_message(format!("step {}/{}", update.current_step, update.total_steps));
        }
    }

    fn complete(&self) {
        for bar in &self.bars {
            if !bar.is_finished() {
                bar.abandon();
            }
        }
    }
}
