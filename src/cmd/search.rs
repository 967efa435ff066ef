use crate::reports::{self, ConsoleObserver};
use near_miss::config::Config;
use near_miss::error::{NearMissError, NmResult};
use near_miss::prompt;
use near_miss::searcher::{NearMissSearcher, SearchParameters};
use std::io::{self, BufRead, BufWriter, Write};
use std::time::Instant;
use tracing::{info, warn};

pub fn run(config: &Config) -> NmResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = BufWriter::new(io::stdout().lock());
    run_with(config, &mut input, &mut out)
}

/// Full session: banner, prompts for anything not given on the command line,
/// the scan itself, the final report and the closing pause.
pub fn run_with<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> NmResult<()> {
    let format = config.output.format;
    let interactive = format.is_interactive();

    if interactive {
        reports::write_banner(out)?;
    }

    let n = match config.search.exponent {
        Some(n) => n,
        None if interactive => prompt::read_exponent(input, out)?,
        None => return Err(NearMissError::MissingArgument("--exponent")),
    };
    let k = match config.search.limit {
        Some(k) => k,
        None if interactive => prompt::read_limit(input, out)?,
        None => return Err(NearMissError::MissingArgument("--limit")),
    };
    let params = SearchParameters::validated(n.into(), k.into())?;

    if interactive {
        reports::write_echo(out, params.n, params.k)?;
    }
    out.flush()?;

    info!("🔎 Searching n = {}, k = {} ({})", params.n, params.k, format);
    let started = Instant::now();
    let deadline = config.search.max_duration().map(|d| started + d);

    let searcher = NearMissSearcher::new(params);
    let mut observer = ConsoleObserver::new(&mut *out, format, deadline);
    let result = searcher.search(&mut observer);
    observer.finish()?;

    match result {
        Ok(outcome) => {
            info!(
                "⏱️  {} pairs in {:.2?}",
                outcome.pairs_scanned,
                started.elapsed()
            );
            reports::write_final(out, format, &outcome)?;
        }
        Err(NearMissError::EmptyDomain { k }) => {
            warn!("No pairs to scan for k = {}", k);
            reports::write_no_result(out, format)?;
        }
        Err(e) => return Err(e),
    }

    if interactive && !config.output.no_pause {
        write!(out, "\nPress Enter to exit...")?;
        out.flush()?;
        let mut ack = String::new();
        input.read_line(&mut ack)?;
    }

    out.flush()?;
    Ok(())
}
