use crate::{MeasureError, ProbabilityMeasure, SamplePoint};
use exprob_config::{MeasureOption, RANDOM_RATIO_DENOM, SamplingStrategy};
use exprob_error::ErrorContext;
use exprob_ratio::{Ratio, RatioError};
use log::{debug, warn};
use rand::Rng;

impl<S: SamplePoint> ProbabilityMeasure<S> {
    /// `result[i]` is the probability of the first `i + 1` sample points.
    /// The last element is always one (unless the sample space is empty).
    pub fn cumulative_distribution(&self) -> Result<Vec<Ratio>, MeasureError> {
        let total_weight = self.total_weight();
        let mut prefix_weight = Ratio::zero();
        let mut result = Vec::with_capacity(self.len());

        for weight in self.weights.values() {
            prefix_weight = prefix_weight.plus(weight);
            result.push(
                prefix_weight.divided_by(&total_weight).map_err(
                    |e| MeasureError::from_ratio_error(e, ErrorContext::Sampling)
                )?
            );
        }

        Ok(result)
    }

    /// Inverse-CDF sampling: it returns the first sample point (in the enumeration order)
    /// whose cumulative probability is greater than or equal to `random_value`.
    ///
    /// It's a pure function. The same measure and the same `random_value` always
    /// give the same sample point: the randomness comes from the caller.
    ///
    /// `random_value` must be in `[0, 1]`. If it's greater than one, the last sample point is returned.
    pub fn sampling_from(&self, random_value: &Ratio) -> Result<&S, MeasureError> {
        self.sampling_from_with(random_value, &MeasureOption::default())
    }

    pub fn sampling_from_with(&self, random_value: &Ratio, option: &MeasureOption) -> Result<&S, MeasureError> {
        if self.is_empty() {
            return Err(MeasureError::empty_sample_space());
        }

        if random_value.is_greater_than(&Ratio::one()) {
            warn!("exprob_measure::sampling_from(), random value `{random_value}` is greater than one");
        }

        let cumulative = self.cumulative_distribution()?;
        let index = match option.sampling_strategy {
            SamplingStrategy::BinarySearch => binary_search(&cumulative, random_value),
            SamplingStrategy::LinearScan => linear_scan(&cumulative, random_value),
        };

        debug!(
            "exprob_measure::sampling_from(), strategy: {:?}, sample points: {}, random value: {random_value}, index: {index}",
            option.sampling_strategy,
            self.len(),
        );

        match self.weights.get_index(index) {
            Some((sample_point, _)) => Ok(sample_point),
            None => unreachable!(),
        }
    }

    /// Draws a uniform random value from `rng` and samples with it.
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&S, MeasureError> {
        let random_value = random_ratio(rng).map_err(
            |e| MeasureError::from_ratio_error(e, ErrorContext::Sampling)
        )?;

        self.sampling_from(&random_value)
    }
}

/// `k / RANDOM_RATIO_DENOM` where `k` is uniform in `0..=RANDOM_RATIO_DENOM`.
/// Both ends are included: the result is in `[0, 1]`.
pub fn random_ratio<R: Rng + ?Sized>(rng: &mut R) -> Result<Ratio, RatioError> {
    let k = rng.gen_range(0..=RANDOM_RATIO_DENOM);

    Ratio::new(k as i64, RANDOM_RATIO_DENOM as i64)
}

// The answer is the smallest `i` such that `random_value <= cumulative[i]`.
// Invariant: the answer is in `[lo, hi + 1]`.
// When the loop ends, `lo == hi` and the answer is either `lo` or `lo + 1`.
fn binary_search(cumulative: &[Ratio], random_value: &Ratio) -> usize {
    let last_index = cumulative.len() - 1;
    let mut lo = 0;
    let mut hi = last_index;

    while lo < hi {
        let middle = lo + (hi - lo + 1) / 2;

        // An exact hit doesn't end the search. A sample point with a zero weight has
        // the same cumulative probability as its predecessor, so the hit might not be the first one.
        if random_value.is_less_than_or_equal_to(&cumulative[middle]) {
            hi = middle - 1;
        }

        else {
            lo = middle;
        }
    }

    if random_value.is_less_than_or_equal_to(&cumulative[lo]) {
        lo
    }

    else {
        // `random_value` > 1
        (lo + 1).min(last_index)
    }
}

fn linear_scan(cumulative: &[Ratio], random_value: &Ratio) -> usize {
    match cumulative.iter().position(|c| random_value.is_less_than_or_equal_to(c)) {
        Some(index) => index,
        None => cumulative.len() - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::{binary_search, linear_scan};
    use exprob_ratio::Ratio;

    fn r(numer: i64, denom: i64) -> Ratio {
        Ratio::new(numer, denom).unwrap()
    }

    #[test]
    fn binary_search_test() {
        let cumulative = vec![r(1, 4), r(1, 4), r(1, 2), r(1, 2), r(3, 4), r(1, 1)];
        let samples = vec![
            (r(0, 1), 0),
            (r(1, 8), 0),
            (r(1, 4), 0),
            (r(2, 8), 0),
            (r(1, 3), 2),
            (r(1, 2), 2),
            (r(2, 3), 4),
            (r(3, 4), 4),
            (r(4, 5), 5),
            (r(1, 1), 5),
            (r(3, 2), 5),
        ];

        for (random_value, expected) in samples.into_iter() {
            assert_eq!(binary_search(&cumulative, &random_value), expected);
            assert_eq!(linear_scan(&cumulative, &random_value), expected);
        }
    }

    #[test]
    fn single_element_test() {
        let cumulative = vec![r(1, 1)];

        for random_value in [r(0, 1), r(1, 2), r(1, 1), r(2, 1)] {
            assert_eq!(binary_search(&cumulative, &random_value), 0);
            assert_eq!(linear_scan(&cumulative, &random_value), 0);
        }
    }
}
