use thiserror::Error;

/// Rejection reasons for a single line of user input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("not a whole number")]
    NotANumber,

    #[error("outside the allowed range")]
    OutOfRange,
}

#[derive(Error, Debug)]
pub enum NearMissError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Input closed while waiting for {0}")]
    InputClosed(&'static str),

    #[error("Missing Argument: {0} is required with --format json")]
    MissingArgument(&'static str),

    #[error("Overflow: x^{n} + y^{n} for values up to k = {k} does not fit in 128 bits")]
    Overflow { n: u32, k: u64 },

    #[error("Empty Domain: no pairs with 10 <= x, y <= {k}")]
    EmptyDomain { k: u64 },
}

pub type NmResult<T> = Result<T, NearMissError>;
