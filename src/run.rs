//! The conversion driver.
//!
//! [`run`] takes a resolved [`ConvertConfig`] through one full pass:
//!
//! ```text
//! src exists? ──no──► Err(SourceNotFound)                     exit 1
//!     │
//!   select ──listing fails──► Err(Listing)                     exit 1
//!     │
//!  targets empty? ──yes──► Ok(NothingToDo)                      exit 0
//!     │
//!  header, then convert_file for each target under the
//!  progress bar, one line per outcome ──► Ok(Completed)        exit 0
//! ```
//!
//! Per-file skips and failures are reported and counted but never change
//! the result. There are no retries.

use crate::config::ConvertConfig;
use crate::convert::{Outcome, convert_file};
use crate::imaging::ImageBackend;
use crate::output;
use crate::progress::Progress;
use crate::select;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("src not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("cannot list {}: {source}", .path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Per-outcome counts for the closing line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTally {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunTally {
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let mut tally = Self::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Converted(_) => tally.converted += 1,
                Outcome::SkippedDecode { .. } => tally.skipped += 1,
                Outcome::FailedEncode { .. } => tally.failed += 1,
            }
        }
        tally
    }

    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.failed
    }
}

/// How a run that did not abort ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RunReport {
    /// The source directory held no targets. Nothing was written.
    NothingToDo,
    /// Every target was attempted, in listing order.
    Completed(Vec<Outcome>),
}

impl RunReport {
    pub fn tally(&self) -> RunTally {
        match self {
            RunReport::NothingToDo => RunTally::default(),
            RunReport::Completed(outcomes) => RunTally::from_outcomes(outcomes),
        }
    }
}

/// Run one conversion pass. See the [module docs](self) for the flow.
pub fn run(config: &ConvertConfig, backend: &impl ImageBackend) -> Result<RunReport, RunError> {
    if !config.src.exists() {
        return Err(RunError::SourceNotFound(config.src.clone()));
    }

    let targets = select::collect_targets(&config.src).map_err(|source| RunError::Listing {
        path: config.src.clone(),
        source,
    })?;

    if targets.is_empty() {
        output::print_no_targets();
        return Ok(RunReport::NothingToDo);
    }

    let params = config.encode_params();
    output::print_run_header(targets.len(), &params);
    log::debug!(
        "{} targets from {} into {}",
        targets.len(),
        config.src.display(),
        config.out.display()
    );

    let progress = Progress::new(targets.len(), config.progress);
    let mut outcomes = Vec::with_capacity(targets.len());
    for source in progress.wrap(targets.iter()) {
        if let Some(name) = source.file_name() {
            progress.set_message(name.to_string_lossy());
        }
        let outcome = convert_file(backend, source, &config.out, &params);
        if !matches!(outcome, Outcome::Converted(_)) {
            log::debug!("{}: not converted", outcome.source_name());
        }
        progress.println(&output::format_outcome(&outcome));
        outcomes.push(outcome);
    }
    progress.finish();

    let report = RunReport::Completed(outcomes);
    let tally = report.tally();
    log::debug!(
        "{} of {} targets converted",
        tally.converted,
        tally.total()
    );
    println!("{}", output::format_tally(&tally));
    Ok(report)
}
