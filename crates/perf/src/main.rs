//! Leapjoin perf harness
//!
//! Generates three relations, then runs the join scenarios:
//!
//! 1. Join 2 sorted arrays (hash join and trie join)
//! 2. Join 2 indexed tables (trie join)
//! 3. Join 3 sorted arrays (hash join and trie join)
//! 4. Join 3 indexed tables (trie join)
//! 5. Join 3 unsorted arrays (hash join and trie join with pre-sort)
//!
//! Every algorithm must report the same hit count for the same arity; the
//! process exits with a failure status otherwise.

mod config;
mod datagen;
mod report;
mod scenario;
mod utils;

use clap::Parser;
use config::Args;
use datagen::{generate_table, shuffle, Lcg};
use leapjoin_core::{Key, Result, SortedTable};
use leapjoin_index::KeyIndex;
use report::Report;
use scenario::{standard_scenarios, Dataset};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Number of relations generated; the widest scenario joins all of them.
const RELATIONS: usize = 3;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_dataset(args: &Args) -> Result<Dataset> {
    let mut rng = Lcg::new(args.seed);

    let start = Instant::now();
    let tables = (0..RELATIONS)
        .map(|_| generate_table(args.table_size, args.max_gap, &mut rng))
        .collect::<Result<Vec<SortedTable>>>()?;
    info!(
        relations = RELATIONS,
        size = args.table_size,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "generated tables"
    );

    let start = Instant::now();
    let indexes = tables.iter().map(KeyIndex::from_table).collect();
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "built indexes");

    let shuffled = tables
        .iter()
        .map(|t| {
            let mut keys = t.keys().to_vec();
            shuffle(&mut keys, &mut rng);
            keys
        })
        .collect();

    Ok(Dataset {
        tables,
        indexes,
        shuffled,
    })
}

fn print_table(name: &str, keys: &[Key]) {
    let line = keys
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}: {}", name, line);
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    info!(?args, "starting perf");
    if let Err(e) = args.validate() {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    let data = match build_dataset(&args) {
        Ok(data) => data,
        Err(e) => {
            error!("failed to generate tables: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.table_size <= args.print_limit {
        for (i, table) in data.tables.iter().enumerate() {
            print_table(&format!("Table {}", i + 1), table);
        }
        println!();
    }

    let mut report = Report::new();
    for scenario in standard_scenarios() {
        println!("{}", scenario.title());
        info!(scenario = scenario.number, arity = scenario.arity, layout = %scenario.layout, "running scenario");

        let input_keys = args.table_size * scenario.arity;
        for outcome in scenario::run(&scenario, &data, args.iterations) {
            let algorithm = outcome.algorithm;
            let hits = outcome.hits;
            if !report.add(&scenario, input_keys, outcome) {
                error!(
                    scenario = scenario.number,
                    %algorithm,
                    hits,
                    "hit count disagrees with earlier runs"
                );
            }
        }
        println!();
    }

    report.print_summary();

    if report.all_agreed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
