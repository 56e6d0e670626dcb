//! Pearson correlation over aligned rows.

use atlas_model::{AlignedTable, CorrelationResult};
use tracing::trace;

/// Computes Pearson's r between columns `key_a` and `key_b`.
///
/// - fewer than two rows in the table: coefficient `None`, sample size 0
/// - rows are paired only when both values are finite numbers
/// - no valid pairs, or a zero denominator: coefficient `0.0`
///
/// The coefficient is returned at full precision.
pub fn pearson(table: &AlignedTable, key_a: &str, key_b: &str) -> CorrelationResult {
    if table.len() < 2 {
        return CorrelationResult::insufficient();
    }
    let (Some(xs), Some(ys)) = (table.column(key_a), table.column(key_b)) else {
        return CorrelationResult {
            coefficient: Some(0.0),
            sample_size: 0,
        };
    };

    let mut sums = Sums::default();
    for (x, y) in xs.into_iter().zip(ys) {
        if let (Some(x), Some(y)) = (x, y)
            && x.is_finite()
            && y.is_finite()
        {
            sums.add(x, y);
        }
    }
    trace!(key_a, key_b, pairs = sums.n, "pearson sums accumulated");

    CorrelationResult {
        coefficient: Some(sums.coefficient()),
        sample_size: sums.n,
    }
}

#[derive(Default)]
struct Sums {
    n: usize,
    x: f64,
    y: f64,
    xx: f64,
    yy: f64,
    xy: f64,
}

impl Sums {
    fn add(&mut self, x: f64, y: f64) {
        self.n += 1;
        self.x += x;
        self.y += y;
        self.xx += x * x;
        self.yy += y * y;
        self.xy += x * y;
    }

    fn coefficient(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        let n = self.n as f64;
        let numerator = self.xy - (self.x * self.y) / n;
        let denominator =
            ((self.xx - (self.x * self.x) / n) * (self.yy - (self.y * self.y) / n)).sqrt();
        if denominator == 0.0 || !denominator.is_finite() {
            return 0.0;
        }
        numerator / denominator
    }
}
