//! Squaresum Library
//!
//! Evaluates batches of integer cases read from line-oriented text and
//! reports, per case, the sum of squares of its positive values.

pub mod case;
pub mod error;
pub mod session;

pub use case::{Case, sum_of_squares};
pub use error::{ErrorKind, InputError};
pub use session::{Failure, Session, Summary, evaluate};

use std::io::{BufRead, Write};

/// Run every case in `input`, writing one result line per case to `output`
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<Summary, InputError> {
    Session::new(input).run(output)
}
