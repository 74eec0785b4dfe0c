//! Session driver
//!
//! Reads the case count from the first line, then drives one case per
//! count/values line pair until the declared count is reached or input
//! runs out. Each result is emitted as soon as its case is evaluated, so
//! results for earlier cases survive a failure in a later one.

use crate::case::{Case, count_in_range, parse_count};
use crate::error::InputError;
use std::io::{BufRead, Write};
use tracing::{debug, error, info, warn};

/// What a finished session did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Case count from the first line, as written
    pub declared: i64,
    /// Cases that produced an output line
    pub processed: usize,
    /// Cases whose value count was out of range
    pub skipped: usize,
    /// Input ended before all declared cases were read
    pub exhausted: bool,
}

/// Outcome of one step of the case loop
enum Step {
    Emitted,
    Skipped,
    Exhausted,
}

pub struct Session<R: BufRead> {
    reader: R,
    /// Raw bytes of the line being read
    buf: Vec<u8>,
    /// Index of the case currently being read
    index: usize,
}

impl<R: BufRead> Session<R> {
    pub fn new(reader: R) -> Self {
        Session {
            reader,
            buf: Vec::new(),
            index: 0,
        }
    }

    /// Run the session, writing one decimal line per evaluated case to `out`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Summary, InputError> {
        let summary = self.run_with(|total| {
            writeln!(out, "{}", total)?;
            Ok(())
        })?;
        out.flush()?;
        Ok(summary)
    }

    /// Run the session, handing each case total to `emit`.
    pub fn run_with<F>(&mut self, mut emit: F) -> Result<Summary, InputError>
    where
        F: FnMut(i64) -> Result<(), InputError>,
    {
        let header = self
            .next_line()
            .ok_or_else(|| InputError::invalid_data("missing case count line"))?;
        let declared = parse_count(&header)?;

        let mut summary = Summary {
            declared,
            ..Summary::default()
        };

        if !count_in_range(declared) {
            warn!(declared, "case count out of range, no cases processed");
            return Ok(summary);
        }

        info!(declared, "processing cases");
        while (self.index as i64) < declared {
            match self.step(&mut emit)? {
                Step::Emitted => summary.processed += 1,
                Step::Skipped => summary.skipped += 1,
                Step::Exhausted => {
                    debug!(case = self.index, "input exhausted");
                    summary.exhausted = true;
                    break;
                }
            }
            self.index += 1;
        }

        info!(
            processed = summary.processed,
            skipped = summary.skipped,
            "session finished"
        );
        Ok(summary)
    }

    fn step<F>(&mut self, emit: &mut F) -> Result<Step, InputError>
    where
        F: FnMut(i64) -> Result<(), InputError>,
    {
        let Some(count_line) = self.next_line() else {
            return Ok(Step::Exhausted);
        };
        let count = parse_count(&count_line)?;

        // An out-of-range count consumes no values line but still uses up a case
        if !count_in_range(count) {
            warn!(case = self.index, count, "value count out of range, case skipped");
            return Ok(Step::Skipped);
        }

        let Some(values) = self.next_line() else {
            return Ok(Step::Exhausted);
        };
        let total = Case::new(count as usize, values).evaluate()?;
        debug!(case = self.index, count, total, "case done");
        emit(total)?;
        Ok(Step::Emitted)
    }

    /// Next input line, or None at end of input or on a read error.
    ///
    /// Lines are read as bytes and decoded lossily: invalid UTF-8 turns into
    /// replacement characters, which then fail integer parsing like any
    /// other bad token.
    fn next_line(&mut self) -> Option<String> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(String::from_utf8_lossy(&self.buf).into_owned())
            }
            Err(e) => {
                error!("failed to read input: {}", e);
                None
            }
        }
    }
}

/// Error from [`evaluate`], with the totals produced before it.
#[derive(Debug)]
pub struct Failure {
    pub error: InputError,
    pub completed: Vec<i64>,
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (after {} completed cases)",
            self.error,
            self.completed.len()
        )
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Evaluate a whole input document and collect the case totals.
pub fn evaluate(input: &str) -> Result<Vec<i64>, Failure> {
    let mut completed = Vec::new();
    let result = Session::new(input.as_bytes()).run_with(|total| {
        completed.push(total);
        Ok(())
    });
    match result {
        Ok(_) => Ok(completed),
        Err(error) => Err(Failure { error, completed }),
    }
}
