use crate::error::InputError;
use crate::prompt::{self, FieldPrompt, EXPONENT_FIELD, LIMIT_FIELD};
use clap::Args;
use std::time::Duration;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchArgs,
    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Exponent n (3..=11). Prompted for when omitted, except with `--format json`.
    #[arg(short = 'n', long, value_parser = exponent_arg, required_if_eq("format", "json"))]
    pub exponent: Option<u32>,

    /// Upper bound k for x and y (> 10). Prompted for when omitted, except with `--format json`.
    #[arg(short = 'k', long, value_parser = limit_arg, required_if_eq("format", "json"))]
    pub limit: Option<u64>,

    /// Stop the scan after this many seconds and report the best so far.
    #[arg(short = 'T', long)]
    pub max_time: Option<u64>,
}

impl SearchArgs {
    pub fn max_duration(&self) -> Option<Duration> {
        self.max_time.map(Duration::from_secs)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputOptions {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skip the closing "Press Enter" acknowledgment.
    #[arg(long, default_value_t = false)]
    pub no_pause: bool,
}

#[derive(
    clap::ValueEnum, Debug, Clone, Copy, Default, EnumIter, EnumString, Display, PartialEq, Eq,
)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    /// Labelled text blocks.
    #[default]
    Text,
    /// Text blocks during the scan, a table for the final result.
    Table,
    /// One JSON object per line.
    Json,
}

impl OutputFormat {
    /// Banner, echo and pause text only make sense for human readers.
    pub fn is_interactive(&self) -> bool {
        !matches!(self, Self::Json)
    }
}

fn flag_error(field: &FieldPrompt, err: InputError) -> String {
    field.retry_message(err).to_string()
}

fn exponent_arg(raw: &str) -> Result<u32, String> {
    prompt::parse_exponent(raw).map_err(|e| flag_error(&EXPONENT_FIELD, e))
}

fn limit_arg(raw: &str) -> Result<u64, String> {
    prompt::parse_limit(raw).map_err(|e| flag_error(&LIMIT_FIELD, e))
}
