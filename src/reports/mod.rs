use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use near_miss::config::OutputFormat;
use near_miss::error::NmResult;
use near_miss::searcher::{Candidate, SearchObserver, SearchOutcome};
use serde::Serialize;
use std::io::{self, Write};
use std::time::Instant;
use tracing::{error, warn};

/// How many pairs pass between clock reads when a time limit is set.
const DEADLINE_POLL_INTERVAL: u64 = 4096;

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum ReportEvent<'a> {
    NewBest { candidate: &'a Candidate },
    Final { outcome: &'a SearchOutcome },
    NoResult,
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "=== Fermat's Last Theorem Near Miss Search ===")?;
    writeln!(out, "This program searches for 'near misses' of the equation:")?;
    writeln!(out, "    x^n + y^n = z^n  (for n > 2)")?;
    writeln!(out, "It checks integer pairs (x, y) and finds z that makes the")?;
    writeln!(out, "left-hand side as close as possible to some z^n.\n")
}

pub fn write_echo<W: Write>(out: &mut W, n: u32, k: u64) -> io::Result<()> {
    writeln!(out, "\nYou entered:")?;
    writeln!(out, "  Exponent n = {}", n)?;
    writeln!(out, "  Upper limit k = {}\n", k)?;
    writeln!(
        out,
        "Searching for near misses... (this may take some time for large k)\n"
    )
}

/// The labelled lines shared by the progress and final blocks.
pub fn write_candidate_lines<W: Write>(out: &mut W, c: &Candidate) -> io::Result<()> {
    writeln!(out, "  x = {}, y = {}, z = {}, n = {}", c.x, c.y, c.z, c.n)?;
    writeln!(out, "  x^n + y^n = {}", c.sum_powers)?;
    writeln!(out, "  Closest z^n (or (z+1)^n) = {}", c.closest_power)?;
    writeln!(out, "  Absolute miss = {}", c.miss)?;
    write!(
        out,
        "  Relative miss = {:.8} ({:.6}%)",
        c.relative_miss,
        c.relative_miss_percent()
    )
}

pub fn write_new_best<W: Write>(
    out: &mut W,
    format: OutputFormat,
    c: &Candidate,
) -> NmResult<()> {
    match format {
        OutputFormat::Text | OutputFormat::Table => {
            writeln!(out, "New best near miss found:")?;
            write_candidate_lines(out, c)?;
            writeln!(out, "\n")?;
        }
        OutputFormat::Json => write_json_line(out, &ReportEvent::NewBest { candidate: c })?,
    }
    Ok(())
}

pub fn write_final<W: Write>(
    out: &mut W,
    format: OutputFormat,
    outcome: &SearchOutcome,
) -> NmResult<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "=== Final / Best Near Miss Found ===")?;
            write_candidate_lines(out, &outcome.best)?;
            writeln!(out)?;
            writeln!(
                out,
                "  (This is the smallest relative miss found for the given n and k.)"
            )?;
            write_partial_notice(out, outcome)?;
        }
        OutputFormat::Table => {
            writeln!(out, "=== Final / Best Near Miss Found ===")?;
            writeln!(out, "{}", candidate_table(&outcome.best))?;
            write_partial_notice(out, outcome)?;
        }
        OutputFormat::Json => write_json_line(out, &ReportEvent::Final { outcome })?,
    }
    Ok(())
}

pub fn write_no_result<W: Write>(out: &mut W, format: OutputFormat) -> NmResult<()> {
    match format {
        OutputFormat::Json => write_json_line(out, &ReportEvent::NoResult)?,
        _ => writeln!(
            out,
            "No near miss was found (this should not normally occur for these ranges)."
        )?,
    }
    Ok(())
}

fn write_partial_notice<W: Write>(out: &mut W, outcome: &SearchOutcome) -> io::Result<()> {
    if !outcome.complete {
        writeln!(
            out,
            "  (Scan stopped early after {} of {} pairs.)",
            outcome.pairs_scanned, outcome.pairs_total
        )?;
    }
    Ok(())
}

fn write_json_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> NmResult<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn candidate_table(c: &Candidate) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Field").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    let rows: [(&str, String); 8] = [
        ("x", c.x.to_string()),
        ("y", c.y.to_string()),
        ("z", c.z.to_string()),
        ("n", c.n.to_string()),
        ("x^n + y^n", c.sum_powers.to_string()),
        ("Closest power", c.closest_power.to_string()),
        ("Absolute miss", c.miss.to_string()),
        (
            "Relative miss",
            format!(
                "{:.8} ({:.6}%)",
                c.relative_miss,
                c.relative_miss_percent()
            ),
        ),
    ];
    for (label, value) in rows {
        let value_cell = Cell::new(value).set_alignment(CellAlignment::Right);
        let value_cell = if label == "Relative miss" {
            value_cell.fg(Color::Green)
        } else {
            value_cell
        };
        table.add_row(vec![Cell::new(label), value_cell]);
    }
    table
}

/// Writes every new best as it arrives and enforces the optional deadline.
///
/// A write failure stops the scan; `finish` hands the error back.
pub struct ConsoleObserver<'a, W: Write> {
    out: &'a mut W,
    format: OutputFormat,
    deadline: Option<Instant>,
    polls: u64,
    failure: Option<near_miss::error::NearMissError>,
}

impl<'a, W: Write> ConsoleObserver<'a, W> {
    pub fn new(out: &'a mut W, format: OutputFormat, deadline: Option<Instant>) -> Self {
        Self {
            out,
            format,
            deadline,
            polls: 0,
            failure: None,
        }
    }

    pub fn finish(self) -> NmResult<()> {
        match self.failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<W: Write> SearchObserver for ConsoleObserver<'_, W> {
    fn on_new_best(&mut self, candidate: &Candidate) {
        if self.failure.is_some() {
            return;
        }
        if let Err(e) = write_new_best(&mut *self.out, self.format, candidate) {
            error!("Failed to write progress: {}", e);
            self.failure = Some(e);
        }
    }

    fn keep_going(&mut self) -> bool {
        if self.failure.is_some() {
            return false;
        }
        self.polls += 1;
        if self.polls % DEADLINE_POLL_INTERVAL != 0 {
            return true;
        }
        match self.deadline {
            Some(d) if Instant::now() >= d => {
                warn!(pairs = self.polls, "Time limit reached, stopping scan");
                false
            }
            _ => true,
        }
    }
}
