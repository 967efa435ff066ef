//! Line-oriented "parse and validate, retry on failure" input.
//!
//! Nothing here touches the real console: callers pass any `BufRead` and
//! `Write`, so the retry loops can be driven from in-memory input in tests.

use crate::error::{InputError, NearMissError, NmResult};
use crate::searcher::types::{MAX_EXPONENT, MIN_EXPONENT, MIN_LIMIT_EXCLUSIVE};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::debug;

/// Text shown for one interactive field.
#[derive(Debug, Clone, Copy)]
pub struct FieldPrompt {
    pub name: &'static str,
    pub prompt: &'static str,
    pub not_a_number: &'static str,
    pub out_of_range: &'static str,
}

impl FieldPrompt {
    pub fn retry_message(&self, err: InputError) -> &'static str {
        match err {
            InputError::NotANumber => self.not_a_number,
            InputError::OutOfRange => self.out_of_range,
        }
    }
}

pub const EXPONENT_FIELD: FieldPrompt = FieldPrompt {
    name: "exponent n",
    prompt: "Enter the exponent n (an integer between 3 and 11, inclusive): ",
    not_a_number: "Invalid input. Please enter a whole number between 3 and 11.",
    out_of_range: "Out of range. n must be between 3 and 11 (inclusive). Please try again.",
};

pub const LIMIT_FIELD: FieldPrompt = FieldPrompt {
    name: "upper limit k",
    prompt: "Enter the upper limit k for x and y (an integer greater than 10): ",
    not_a_number: "Invalid input. Please enter a whole number greater than 10.",
    out_of_range: "Out of range. k must be greater than 10. Please try again.",
};

/// Parses a signed whole number. Numbers too large for `i128` count as out of range.
pub fn parse_whole(raw: &str) -> Result<i128, InputError> {
    raw.trim().parse::<i128>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::OutOfRange,
        _ => InputError::NotANumber,
    })
}

pub fn parse_exponent_value(n: i128) -> Result<u32, InputError> {
    if (MIN_EXPONENT as i128..=MAX_EXPONENT as i128).contains(&n) {
        Ok(n as u32)
    } else {
        Err(InputError::OutOfRange)
    }
}

pub fn parse_limit_value(k: i128) -> Result<u64, InputError> {
    if k > MIN_LIMIT_EXCLUSIVE as i128 {
        u64::try_from(k).map_err(|_| InputError::OutOfRange)
    } else {
        Err(InputError::OutOfRange)
    }
}

/// Exponent validator, also used as the clap value parser for `--exponent`.
pub fn parse_exponent(raw: &str) -> Result<u32, InputError> {
    parse_exponent_value(parse_whole(raw)?)
}

/// Limit validator, also used as the clap value parser for `--limit`.
pub fn parse_limit(raw: &str) -> Result<u64, InputError> {
    parse_limit_value(parse_whole(raw)?)
}

/// Prompts until `validate` accepts a line.
///
/// Each rejected line prints the field's retry message followed by a blank
/// line. End of input is an error rather than an endless loop.
pub fn read_validated<T, R, W, V>(
    input: &mut R,
    output: &mut W,
    field: &FieldPrompt,
    validate: V,
) -> NmResult<T>
where
    R: BufRead,
    W: Write,
    V: Fn(&str) -> Result<T, InputError>,
{
    let mut line = String::new();
    loop {
        write!(output, "{}", field.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(NearMissError::InputClosed(field.name));
        }

        match validate(&line) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!(field = field.name, input = line.trim(), error = %e, "Rejected input");
                writeln!(output, "{}\n", field.retry_message(e))?;
            }
        }
    }
}

pub fn read_exponent<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> NmResult<u32> {
    read_validated(input, output, &EXPONENT_FIELD, parse_exponent)
}

pub fn read_limit<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> NmResult<u64> {
    read_validated(input, output, &LIMIT_FIELD, parse_limit)
}
