//! Progress display for the conversion loop.
//!
//! [`Progress`] decorates the work-list iterator: each item pulled through
//! [`Progress::wrap`] advances the bar. It has no say in what happens to the
//! item. When disabled, or when stderr is not a terminal, the bar is hidden
//! and the wrapper is a plain pass-through.

use indicatif::{ProgressBar, ProgressBarIter, ProgressStyle};

const TEMPLATE: &str = "convert {bar:30.cyan/blue} {pos}/{len} [{elapsed_precise}<{eta}] {msg}";

pub struct Progress {
    bar: ProgressBar,
}

impl Progress {
    /// A bar over `total` items. `visible = false` gives a hidden bar.
    pub fn new(total: usize, visible: bool) -> Self {
        let total = total as u64;
        let bar = if visible {
            ProgressBar::new(total)
        } else {
            ProgressBar::hidden()
        };
        bar.set_length(total);
        bar.set_style(
            ProgressStyle::with_template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        Self { bar }
    }

    /// Wrap the work list so iteration drives the bar.
    pub fn wrap<I: Iterator>(&self, iter: I) -> ProgressBarIter<I> {
        self.bar.wrap_iter(iter)
    }

    /// Show what is being worked on next to the bar.
    pub fn set_message(&self, msg: impl Into<String>) {
        self.bar.set_message(msg.into());
    }

    /// Print a line to stdout without tearing the bar.
    pub fn println(&self, line: &str) {
        self.bar.suspend(|| println!("{line}"));
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.position()
    }
}
