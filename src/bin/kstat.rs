//! Order-statistic driver.
//!
//! Reads `n` followed by `n` pairs `key k` from stdin. A non-negative key is
//! inserted, a negative key deletes one copy of its absolute value; after each
//! step the `k`-th smallest stored key is written to stdout, followed by a space.
//!
//! Diagnostics go to stderr and are filtered by `RUST_LOG` (default `warn`).

use std::io::{self, BufWriter, Read, Write};
use std::process::ExitCode;
use std::str::{FromStr, SplitWhitespace};

use kstat_tree::OSAvlTree;
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Upper bound on the up-front node reservation, whatever `n` claims.
const MAX_PREALLOCATED: usize = 1 << 16;

#[derive(Debug, Error)]
enum DriverError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("input ended before the {what}")]
    MissingToken { what: &'static str },

    #[error("invalid {what}: {token:?}")]
    InvalidToken { what: &'static str, token: String },

    #[error("rank {rank} out of range for {len} keys")]
    RankOutOfRange { rank: usize, len: usize },
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn parse<T: FromStr>(&mut self, what: &'static str) -> Result<T, DriverError> {
        let token = self.inner.next().ok_or(DriverError::MissingToken { what })?;
        token.parse().map_err(|_| DriverError::InvalidToken {
            what,
            token: token.to_owned(),
        })
    }
}

/// Replays the operations in `input`, writing one statistic per step to `output`.
/// Returns the number of steps applied.
fn run<R: Read, W: Write>(mut input: R, output: &mut W) -> Result<usize, DriverError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let mut tokens = Tokens::new(&text);

    let steps: usize = tokens.parse("operation count")?;
    let mut tree: OSAvlTree<u64> = OSAvlTree::with_capacity(steps.min(MAX_PREALLOCATED));

    for step in 0..steps {
        let key: i64 = tokens.parse("key")?;
        let rank: usize = tokens.parse("rank")?;

        if key < 0 {
            tree.delete(&key.unsigned_abs());
        } else {
            tree.insert(key.unsigned_abs());
        }

        let stat = *tree.get_by_rank(rank).ok_or(DriverError::RankOutOfRange {
            rank,
            len: tree.len(),
        })?;
        debug!(step, key, rank, stat, len = tree.len(), "applied operation");
        write!(output, "{stat} ")?;
    }

    writeln!(output)?;
    Ok(steps)
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let mut stdout = BufWriter::new(io::stdout().lock());
    let outcome = run(io::stdin().lock(), &mut stdout);
    let flushed = stdout.flush().map_err(DriverError::from);

    match outcome.and_then(|steps| flushed.map(|()| steps)) {
        Ok(steps) => {
            info!(steps, "finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "kstat failed");
            ExitCode::FAILURE
        }
    }
}
