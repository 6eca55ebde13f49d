//! Demo commands.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, info};
use uid11::{Uid11, XidSequence, LENGTH};

use crate::output::{print_rows, OutputFormat};

/// uid11 demo - generate and inspect 11-character base58 identifiers.
#[derive(Debug, Parser)]
#[command(name = "uid11-demo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Log level when RUST_LOG is unset (overrides UID11_LOG_LEVEL).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON (also enabled by UID11_LOG_JSON=1).
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate fully random identifiers.
    Random(CountArgs),

    /// Generate time+random identifiers.
    Xid(XidArgs),

    /// Generate strictly increasing time+sequence identifiers.
    Sequence(CountArgs),

    /// Decode identifiers and show their payload, bits and timestamp.
    Decode(DecodeArgs),

    /// Decode every prefix of an identifier.
    Prefixes(PrefixArgs),

    /// Show the smallest and largest identifiers.
    Bounds,
}

#[derive(Debug, Args)]
struct CountArgs {
    /// Number of identifiers to generate.
    #[arg(short = 'n', long, default_value = "11")]
    count: usize,
}

#[derive(Debug, Args)]
struct XidArgs {
    #[command(flatten)]
    count: CountArgs,

    /// Pause between identifiers, in milliseconds.
    #[arg(long, default_value = "0")]
    interval_ms: u64,
}

#[derive(Debug, Args)]
struct DecodeArgs {
    /// Identifiers to decode.
    #[arg(required = true)]
    ids: Vec<String>,
}

#[derive(Debug, Args)]
struct PrefixArgs {
    /// Identifier (or prefix) to expand.
    id: String,
}

/// A generated identifier.
#[derive(Debug, Serialize, Tabled)]
struct IdRow {
    id: String,
    payload: u64,
    timestamp: String,
}

/// A decoded identifier.
#[derive(Debug, Serialize, Tabled)]
struct DecodeRow {
    id: String,
    payload: u64,
    bits: String,
    timestamp: String,
}

/// The smallest identifier starting with a prefix.
#[derive(Debug, Serialize, Tabled)]
struct PrefixRow {
    length: usize,
    prefix: String,
    lower: String,
    upper: String,
    timestamp: String,
}

impl Cli {
    /// Run the selected command.
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Random(args) => {
                let rows = (0..args.count)
                    .map(|_| Uid11::random().map(id_row))
                    .collect::<Result<Vec<_>, _>>()
                    .context("failed to generate random identifiers")?;
                print_rows(&rows, self.format);
            }
            Commands::Xid(args) => {
                let rows = xid_rows(args.count.count, Duration::from_millis(args.interval_ms))?;
                print_rows(&rows, self.format);
            }
            Commands::Sequence(args) => {
                let seq = XidSequence::new();
                let rows = (0..args.count)
                    .map(|_| seq.next().map(|p| id_row(Uid11::from_u64(p))))
                    .collect::<Result<Vec<_>, _>>()
                    .context("failed to generate sequence identifiers")?;
                print_rows(&rows, self.format);
            }
            Commands::Decode(args) => {
                let rows = args
                    .ids
                    .iter()
                    .map(|id| decode_row(id))
                    .collect::<Result<Vec<_>>>()?;
                print_rows(&rows, self.format);
            }
            Commands::Prefixes(args) => {
                let rows = prefix_rows(&args.id)?;
                print_rows(&rows, self.format);
            }
            Commands::Bounds => {
                let rows = [id_row(Uid11::MIN), id_row(Uid11::MAX)];
                print_rows(&rows, self.format);
            }
        }
        Ok(())
    }
}

fn id_row(id: Uid11) -> IdRow {
    IdRow {
        id: id.to_string(),
        payload: id.as_u64(),
        timestamp: id.timestamp(),
    }
}

fn xid_rows(count: usize, interval: Duration) -> Result<Vec<IdRow>> {
    let mut rows = Vec::with_capacity(count);
    for i in 0..count {
        if i > 0 && !interval.is_zero() {
            std::thread::sleep(interval);
        }
        let id = Uid11::new().context("failed to generate xid")?;
        debug!(%id, payload = id.as_u64(), "generated xid");
        rows.push(id_row(id));
    }
    info!(count, "generated xids");
    Ok(rows)
}

fn decode_row(id: &str) -> Result<DecodeRow> {
    let uid = Uid11::parse(id).with_context(|| format!("cannot decode {id:?}"))?;
    Ok(DecodeRow {
        id: uid.to_string(),
        payload: uid.as_u64(),
        bits: format!("{:064b}", uid.as_u64()),
        timestamp: uid.timestamp(),
    })
}

fn prefix_rows(id: &str) -> Result<Vec<PrefixRow>> {
    anyhow::ensure!(
        uid11::is_valid_partial(id),
        "{id:?} is not a base58 identifier prefix of at most {LENGTH} characters"
    );

    let mut rows = Vec::with_capacity(id.len() + 1);
    for length in 0..=id.len() {
        let prefix = &id[..length];
        let Some(range) = uid11::prefix_range(prefix) else {
            debug!(prefix, "prefix is beyond the 64-bit range");
            break;
        };
        rows.push(PrefixRow {
            length,
            prefix: prefix.to_string(),
            lower: uid11::encode(*range.start()),
            upper: uid11::encode(*range.end()),
            timestamp: uid11::timestamp(*range.start()),
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["uid11-demo", "--format", "json", "xid", "-n", "3"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Xid(ref a) if a.count.count == 3));
    }

    #[test]
    fn test_cli_decode_requires_ids() {
        assert!(Cli::try_parse_from(["uid11-demo", "decode"]).is_err());
    }

    #[test]
    fn test_decode_row() {
        let row = decode_row("jpXCZedGfVQ").unwrap();
        assert_eq!(row.payload, u64::MAX);
        assert_eq!(row.bits, "1".repeat(64));
        assert_eq!(row.timestamp, "2569-05-02T17:31:55.526Z");
    }

    #[test]
    fn test_decode_row_invalid() {
        let err = decode_row("jpXCZedGfVR").unwrap_err();
        assert!(err.to_string().contains("jpXCZedGfVR"));
        assert_eq!(
            err.downcast_ref::<uid11::Uid11Error>(),
            Some(&uid11::Uid11Error::Overflow)
        );
    }

    #[test]
    fn test_prefix_rows() {
        let rows = prefix_rows("24HZMr9t1qX").unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].lower, "11111111111");
        assert_eq!(rows[0].upper, "jpXCZedGfVQ");
        assert_eq!(rows[3].lower, "24H11111111");
        assert_eq!(rows[3].upper, "24Hzzzzzzzz");
        assert_eq!(rows[11].lower, "24HZMr9t1qX");
        assert_eq!(rows[11].upper, "24HZMr9t1qX");
    }

    #[test]
    fn test_prefix_rows_stop_past_range() {
        let rows = prefix_rows("zz").unwrap();
        assert_eq!(rows.len(), 1);
        assert!(prefix_rows("0").is_err());
    }

    #[test]
    fn test_xid_rows() {
        let rows = xid_rows(5, Duration::ZERO).unwrap();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| uid11::decode(&r.id) == Some(r.payload)));
    }
}
