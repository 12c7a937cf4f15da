//! Timing and formatting helpers

use std::time::{Duration, Instant};

/// Output of the last timed run, with timings over all runs.
pub struct Measured<R> {
    pub output: R,
    pub timing: BenchResult,
}

/// Measure execution time over `iterations` runs (at least one run happens)
pub fn measure<F, R>(iterations: usize, mut f: F) -> Measured<R>
where
    F: FnMut() -> R,
{
    measure_with_setup(iterations, || (), |()| f())
}

/// Measure with setup function (setup time excluded)
pub fn measure_with_setup<S, F, T, R>(iterations: usize, mut setup: S, mut f: F) -> Measured<R>
where
    S: FnMut() -> T,
    F: FnMut(T) -> R,
{
    let mut times = Vec::with_capacity(iterations.max(1));

    let data = setup();
    let start = Instant::now();
    let mut output = std::hint::black_box(f(data));
    times.push(start.elapsed());

    for _ in 1..iterations {
        let data = setup();
        let start = Instant::now();
        output = std::hint::black_box(f(data));
        times.push(start.elapsed());
    }

    Measured {
        output,
        timing: BenchResult::from_times(&times),
    }
}

#[derive(Clone, Debug)]
pub struct BenchResult {
    pub min: Duration,
    pub max: Duration,
    pub mean: Duration,
    pub median: Duration,
    pub std_dev: Duration,
    pub iterations: usize,
}

impl BenchResult {
    pub fn from_times(times: &[Duration]) -> Self {
        let mut sorted: Vec<_> = times.to_vec();
        sorted.sort();

        let count = sorted.len().max(1);
        let min = sorted.first().copied().unwrap_or_default();
        let max = sorted.last().copied().unwrap_or_default();
        let sum: Duration = sorted.iter().sum();
        let mean = sum / count as u32;
        let median = sorted.get(sorted.len() / 2).copied().unwrap_or_default();

        // Calculate standard deviation
        let mean_nanos = mean.as_nanos() as f64;
        let variance: f64 = sorted
            .iter()
            .map(|t| {
                let diff = t.as_nanos() as f64 - mean_nanos;
                diff * diff
            })
            .sum::<f64>()
            / count as f64;
        let std_dev = Duration::from_nanos(variance.sqrt() as u64);

        Self {
            min,
            max,
            mean,
            median,
            std_dev,
            iterations: times.len(),
        }
    }
}

/// Format duration for display
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos < 1_000 {
        format!("{} ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2} μs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2} ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2} s", nanos as f64 / 1_000_000_000.0)
    }
}

/// Format throughput for display
pub fn format_throughput(ops_per_sec: f64) -> String {
    if ops_per_sec >= 1_000_000.0 {
        format!("{:.2}M keys/s", ops_per_sec / 1_000_000.0)
    } else if ops_per_sec >= 1_000.0 {
        format!("{:.2}K keys/s", ops_per_sec / 1_000.0)
    } else {
        format!("{:.2} keys/s", ops_per_sec)
    }
}
