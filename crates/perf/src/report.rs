//! Performance report generation

use crate::scenario::{Algorithm, Outcome, Scenario};
use crate::utils::{format_duration, format_throughput, BenchResult};
use std::collections::HashMap;

#[derive(Clone)]
pub struct ReportEntry {
    pub scenario: String,
    pub arity: usize,
    pub algorithm: Algorithm,
    pub hits: usize,
    pub result: BenchResult,
    /// Input keys processed per second
    pub throughput: f64,
    /// Whether the hit count matched every other run of the same arity
    pub agreed: bool,
}

/// Collects outcomes, cross-checks hit counts, and prints the summary.
pub struct Report {
    entries: Vec<ReportEntry>,
    /// First hit count seen for each arity; every later run must match it.
    expected_hits: HashMap<usize, usize>,
}

impl Report {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            expected_hits: HashMap::new(),
        }
    }

    /// Records an outcome and returns whether its hit count agrees with
    /// earlier runs of the same arity.
    pub fn add(&mut self, scenario: &Scenario, input_keys: usize, outcome: Outcome) -> bool {
        let expected = *self
            .expected_hits
            .entry(scenario.arity)
            .or_insert(outcome.hits);
        let agreed = outcome.hits == expected;

        println!(
            "{}: size of join = {}, runtime: {:.6}",
            outcome.algorithm,
            outcome.hits,
            outcome.timing.mean.as_secs_f64()
        );

        let throughput = input_keys as f64 / outcome.timing.mean.as_secs_f64().max(f64::EPSILON);
        self.entries.push(ReportEntry {
            scenario: scenario.title(),
            arity: scenario.arity,
            algorithm: outcome.algorithm,
            hits: outcome.hits,
            result: outcome.timing,
            throughput,
            agreed,
        });
        agreed
    }

    #[allow(dead_code)]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Returns true if every recorded hit count agreed.
    pub fn all_agreed(&self) -> bool {
        self.entries.iter().all(|e| e.agreed)
    }

    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════════════════════════╗");
        println!("║                         JOIN SUMMARY                             ║");
        println!("╚══════════════════════════════════════════════════════════════════╝\n");

        let mut current: Option<&str> = None;
        for entry in &self.entries {
            if current != Some(entry.scenario.as_str()) {
                if current.is_some() {
                    println!("└─");
                }
                println!("┌─ {} ─", entry.scenario);
                current = Some(entry.scenario.as_str());
            }

            let status = if entry.agreed { "✓" } else { "✗" };
            println!(
                "│ {} {:<10} hits {:>9}: {:>10} ± {:<10} [min {}, max {}, median {}] ({})",
                status,
                entry.algorithm,
                entry.hits,
                format_duration(entry.result.mean),
                format_duration(entry.result.std_dev),
                format_duration(entry.result.min),
                format_duration(entry.result.max),
                format_duration(entry.result.median),
                format_throughput(entry.throughput)
            );
        }
        if current.is_some() {
            println!("└─");
        }
        println!();

        let total = self.entries.len();
        let failed = self.entries.iter().filter(|e| !e.agreed).count();
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!(
            "  Hit count checks: {} agreed, {} disagreed, {} total",
            total - failed,
            failed,
            total
        );
        if failed > 0 {
            let arities: Vec<_> = self
                .entries
                .iter()
                .filter(|e| !e.agreed)
                .map(|e| e.arity)
                .collect();
            println!("  Status: MISMATCH in {}-way joins", format_arities(&arities));
        } else {
            println!("  Status: ALL ALGORITHMS AGREE ✓");
        }
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

fn format_arities(arities: &[usize]) -> String {
    let mut unique = arities.to_vec();
    unique.sort_unstable();
    unique.dedup();
    unique
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join("/")
}
