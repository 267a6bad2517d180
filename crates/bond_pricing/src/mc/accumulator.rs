//! Per-worker running totals and the final reduction.
//!
//! Each worker owns one [`TrialAccumulator`] for its whole partition. Nothing
//! is shared while trials run; the engine merges the accumulators once, in
//! worker order, after every worker has returned.
//!
//! Besides the two sums the price estimator needs, the accumulator tracks the
//! mean and second moment of the per-trial pair average `(a + b) / 2`
//! (Welford's update, merged with Chan's formula) for the standard error.

/// Running totals for one worker.
///
/// # Examples
///
/// ```rust
/// use bond_pricing::mc::TrialAccumulator;
///
/// let mut left = TrialAccumulator::default();
/// left.add(100.0, 80.0);
/// let mut right = TrialAccumulator::default();
/// right.add(90.0, 110.0);
///
/// let total = left.merge(right);
/// assert_eq!(total.count(), 2);
/// assert_eq!(total.mean(), 95.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrialAccumulator {
    plain_sum: f64,
    second_sum: f64,
    count: u64,
    pair_mean: f64,
    pair_m2: f64,
}

impl TrialAccumulator {
    /// Adds one trial index: the plain sample and its paired second sample.
    #[inline]
    pub fn add(&mut self, plain: f64, second: f64) {
        self.plain_sum += plain;
        self.second_sum += second;
        self.count += 1;

        let pair = 0.5 * (plain + second);
        let delta = pair - self.pair_mean;
        self.pair_mean += delta / self.count as f64;
        self.pair_m2 += delta * (pair - self.pair_mean);
    }

    /// Combines two accumulators.
    pub fn merge(self, other: Self) -> Self {
        if self.count == 0 {
            return other;
        }
        if other.count == 0 {
            return self;
        }

        let count = self.count + other.count;
        let n_a = self.count as f64;
        let n_b = other.count as f64;
        let delta = other.pair_mean - self.pair_mean;

        Self {
            plain_sum: self.plain_sum + other.plain_sum,
            second_sum: self.second_sum + other.second_sum,
            count,
            pair_mean: self.pair_mean + delta * n_b / count as f64,
            pair_m2: self.pair_m2 + other.pair_m2 + delta * delta * n_a * n_b / count as f64,
        }
    }

    /// Number of trial indices accumulated.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of the plain samples.
    #[inline]
    pub fn plain_sum(&self) -> f64 {
        self.plain_sum
    }

    /// Sum of the second (antithetic or independent) samples.
    #[inline]
    pub fn second_sum(&self) -> f64 {
        self.second_sum
    }

    /// Price estimate `(Σ plain + Σ second) / (2n)`.
    ///
    /// Returns NaN for an empty accumulator; the engine never reduces one.
    #[inline]
    pub fn mean(&self) -> f64 {
        (self.plain_sum + self.second_sum) / (2.0 * self.count as f64)
    }

    /// Standard error of [`mean`](Self::mean) from the pair averages.
    ///
    /// Zero for fewer than two trials.
    pub fn std_error(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        let n = self.count as f64;
        let variance = (self.pair_m2 / (n - 1.0)).max(0.0);
        (variance / n).sqrt()
    }
}

/// Reduces per-worker accumulators in order.
pub fn reduce<I>(partials: I) -> TrialAccumulator
where
    I: IntoIterator<Item = TrialAccumulator>,
{
    partials
        .into_iter()
        .fold(TrialAccumulator::default(), TrialAccumulator::merge)
}
