//! Join scenarios
//!
//! Each scenario joins the first `arity` generated relations in one physical
//! layout and times every algorithm that applies to that layout.

use crate::utils::{measure, measure_with_setup, BenchResult};
use leapjoin_core::{Key, SortedTable};
use leapjoin_index::KeyIndex;
use leapjoin_join::{
    hash_join_count, leapfrog_count, leapfrog_count_unsorted, IndexCursor, SliceCursor,
};
use std::fmt;

/// Physical layout of the relations handed to the join.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Dense sorted arrays
    Sorted,
    /// Ordered indexes built from the sorted arrays
    Indexed,
    /// The sorted arrays after an in-place shuffle
    Unsorted,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Sorted => write!(f, "sorted arrays"),
            Layout::Indexed => write!(f, "indexed tables"),
            Layout::Unsorted => write!(f, "unsorted arrays"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Hash,
    Leapfrog,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Hash => write!(f, "hash join"),
            Algorithm::Leapfrog => write!(f, "trie join"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    pub number: usize,
    pub arity: usize,
    pub layout: Layout,
    /// Also run the hash-join baseline
    pub with_baseline: bool,
}

impl Scenario {
    pub fn title(&self) -> String {
        format!("TEST {}: Join {} {}", self.number, self.arity, self.layout)
    }

    pub fn algorithms(&self) -> Vec<Algorithm> {
        if self.with_baseline {
            vec![Algorithm::Hash, Algorithm::Leapfrog]
        } else {
            vec![Algorithm::Leapfrog]
        }
    }
}

/// The standard scenario list: 2- and 3-way joins over each layout.
pub fn standard_scenarios() -> Vec<Scenario> {
    let plan = [
        (2, Layout::Sorted, true),
        (2, Layout::Indexed, false),
        (3, Layout::Sorted, true),
        (3, Layout::Indexed, false),
        (3, Layout::Unsorted, true),
    ];
    plan.into_iter()
        .enumerate()
        .map(|(i, (arity, layout, with_baseline))| Scenario {
            number: i + 1,
            arity,
            layout,
            with_baseline,
        })
        .collect()
}

/// Relations shared by all scenarios, in every layout.
pub struct Dataset {
    pub tables: Vec<SortedTable>,
    pub indexes: Vec<KeyIndex>,
    pub shuffled: Vec<Vec<Key>>,
}

impl Dataset {
    /// Largest arity any scenario may request.
    pub fn arity(&self) -> usize {
        self.tables.len()
    }
}

/// Hit count and timing of one algorithm in one scenario.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub algorithm: Algorithm,
    pub hits: usize,
    pub timing: BenchResult,
}

/// Runs every algorithm of `scenario` over `data`.
///
/// # Panics
///
/// Panics if the scenario asks for more relations than `data` holds.
pub fn run(scenario: &Scenario, data: &Dataset, iterations: usize) -> Vec<Outcome> {
    assert!(
        scenario.arity <= data.arity(),
        "scenario needs {} relations, dataset has {}",
        scenario.arity,
        data.arity()
    );
    let n = scenario.arity;

    scenario
        .algorithms()
        .into_iter()
        .map(|algorithm| {
            let measured = match (algorithm, scenario.layout) {
                (Algorithm::Hash, Layout::Sorted | Layout::Indexed) => {
                    measure(iterations, || hash_join_count(&data.tables[..n]))
                }
                (Algorithm::Hash, Layout::Unsorted) => {
                    measure(iterations, || hash_join_count(&data.shuffled[..n]))
                }
                (Algorithm::Leapfrog, Layout::Sorted) => measure(iterations, || {
                    let cursors = data.tables[..n]
                        .iter()
                        .map(|t| SliceCursor::new(t))
                        .collect();
                    leapfrog_count(cursors)
                }),
                (Algorithm::Leapfrog, Layout::Indexed) => measure(iterations, || {
                    let cursors = data.indexes[..n].iter().map(IndexCursor::new).collect();
                    leapfrog_count(cursors)
                }),
                // Sorting is part of the timed work; copying the input is not.
                (Algorithm::Leapfrog, Layout::Unsorted) => measure_with_setup(
                    iterations,
                    || data.shuffled[..n].to_vec(),
                    |mut tables| leapfrog_count_unsorted(&mut tables),
                ),
            };

            tracing::debug!(
                scenario = scenario.number,
                %algorithm,
                hits = measured.output,
                "algorithm finished"
            );
            Outcome {
                algorithm,
                hits: measured.output,
                timing: measured.timing,
            }
        })
        .collect()
}
