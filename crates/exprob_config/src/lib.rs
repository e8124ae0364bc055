#![deny(unused_imports)]

// f64 cannot tell apart more than 17 significant decimal digits
pub const MIN_APPROX_DIGITS: usize = 1;
pub const MAX_APPROX_DIGITS: usize = 17;
pub const DEFAULT_APPROX_DIGITS: usize = MAX_APPROX_DIGITS;

/// Denominator of the ratios drawn by `random_ratio`.
/// A drawn value is `k / RANDOM_RATIO_DENOM` where `0 <= k <= RANDOM_RATIO_DENOM`.
pub const RANDOM_RATIO_DENOM: u64 = 1 << 32;

/// Controls `Ratio::approximate_value_with`. It never affects exact operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ApproxOption {
    pub significant_digits: usize,
}

impl ApproxOption {
    /// `digits` is clamped to `MIN_APPROX_DIGITS..=MAX_APPROX_DIGITS`.
    pub fn with_digits(digits: usize) -> Self {
        ApproxOption {
            significant_digits: digits.clamp(MIN_APPROX_DIGITS, MAX_APPROX_DIGITS),
        }
    }
}

impl Default for ApproxOption {
    fn default() -> Self {
        ApproxOption {
            significant_digits: DEFAULT_APPROX_DIGITS,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SamplingStrategy {
    /// Binary search over the cumulative distribution. O(log n) comparisons.
    BinarySearch,

    /// Walks the cumulative distribution from the first sample point.
    /// It's slower, but it's so simple that tests use it as an oracle.
    LinearScan,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MeasureOption {
    pub sampling_strategy: SamplingStrategy,
}

impl MeasureOption {
    pub fn binary_search() -> Self {
        MeasureOption {
            sampling_strategy: SamplingStrategy::BinarySearch,
        }
    }

    pub fn linear_scan() -> Self {
        MeasureOption {
            sampling_strategy: SamplingStrategy::LinearScan,
        }
    }
}

impl Default for MeasureOption {
    fn default() -> Self {
        MeasureOption::binary_search()
    }
}
