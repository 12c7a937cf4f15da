//! Command-line configuration for the perf harness.

use clap::Parser;
use leapjoin_core::{Error, Key, Result};

/// Runs the join scenarios over generated relations and reports hit counts
/// and runtimes for each algorithm.
#[derive(Parser, Debug, Clone)]
#[command(name = "perf", version, about = "Leapfrog triejoin vs hash join")]
pub struct Args {
    /// Number of keys in each generated relation
    #[arg(long, default_value_t = 1_000_000)]
    pub table_size: usize,

    /// Largest gap between consecutive keys; gaps are uniform in 1..=max_gap
    #[arg(long, default_value_t = 100)]
    pub max_gap: u32,

    /// Seed for table generation and shuffling
    #[arg(long, default_value_t = 12345)]
    pub seed: u64,

    /// Timed runs per algorithm; the report shows the mean
    #[arg(long, default_value_t = 1)]
    pub iterations: usize,

    /// Relations no larger than this are printed before the scenarios
    #[arg(long, default_value_t = 20)]
    pub print_limit: usize,
}

impl Args {
    /// Checks that the configuration describes a runnable benchmark.
    pub fn validate(&self) -> Result<()> {
        if self.table_size == 0 {
            return Err(Error::invalid_config("table size must be positive"));
        }
        if self.max_gap == 0 {
            return Err(Error::invalid_config("max gap must be positive"));
        }
        if self.iterations == 0 {
            return Err(Error::invalid_config("iterations must be positive"));
        }

        // The largest key a table can reach is (size - 1) * max_gap.
        let fits = Key::try_from(self.table_size - 1)
            .ok()
            .and_then(|n| n.checked_mul(Key::from(self.max_gap)))
            .is_some();
        if !fits {
            return Err(Error::invalid_config(format!(
                "{} keys with gaps up to {} overflow the key type",
                self.table_size, self.max_gap
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("perf").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.table_size, 1_000_000);
        assert_eq!(args.max_gap, 100);
        assert_eq!(args.iterations, 1);
        assert_eq!(args.print_limit, 20);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let args = parse(&["--table-size", "20", "--max-gap", "3", "--seed", "7", "--iterations", "5"]);
        assert_eq!(args.table_size, 20);
        assert_eq!(args.max_gap, 3);
        assert_eq!(args.seed, 7);
        assert_eq!(args.iterations, 5);
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(parse(&["--table-size", "0"]).validate().is_err());
        assert!(parse(&["--max-gap", "0"]).validate().is_err());
        assert!(parse(&["--iterations", "0"]).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_overflow() {
        let args = parse(&["--table-size", &usize::MAX.to_string(), "--max-gap", "100"]);
        match args.validate() {
            Err(Error::InvalidConfig { message }) => assert!(message.contains("overflow")),
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }
}
