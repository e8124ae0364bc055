#![deny(unused_imports)]

use exprob_ratio::Ratio;
use indexmap::IndexMap;
use std::fmt::Debug;
use std::hash::Hash;

mod error;
mod fmt;
mod query;
mod sampling;


pub use error::{MeasureError, MeasureErrorKind};
pub use sampling::random_ratio;

/// Anything that can be a key of a `ProbabilityMeasure`.
/// `Debug` is for error messages: `UnknownSamplePoint` shows the key.
pub trait SamplePoint: Clone + Debug + Eq + Hash {}

impl<T: Clone + Debug + Eq + Hash> SamplePoint for T {}

/// A finite sample space, with an unnormalized weight on each sample point.
///
/// Weights don't have to sum to one. Every query divides by the sum of
/// the weights, so `{a: 1, b: 2}` and `{a: 1/3, b: 2/3}` give the same
/// probabilities (but they're not equal measures, see `is_equal_to`).
///
/// The order of the sample points is the insertion order, and it matters:
/// sampling inverts the cumulative distribution in this order.
#[derive(Clone)]
pub struct ProbabilityMeasure<S: SamplePoint> {
    weights: IndexMap<S, Ratio>,
}

impl<S: SamplePoint> ProbabilityMeasure<S> {
    /// It doesn't check whether the weights sum to one.
    pub fn new(weights: IndexMap<S, Ratio>) -> Self {
        ProbabilityMeasure { weights }
    }

    /// Two measures are equal iff they have the same sample points and each
    /// sample point has the same weight. The weights are compared, not the probabilities.
    /// The order of the sample points doesn't matter.
    pub fn is_equal_to(&self, other: &ProbabilityMeasure<S>) -> bool {
        // `this - other` and `other - this` are both empty
        let same_sample_space = self.weights.keys().all(|s| other.weights.contains_key(s))
            && other.weights.keys().all(|s| self.weights.contains_key(s));

        same_sample_space && self.weights.iter().all(
            |(s, weight)| match other.weights.get(s) {
                Some(other_weight) => weight.is_equal_to(other_weight),
                None => false,
            }
        )
    }

    pub fn weight_at(&self, sample_point: &S) -> Option<&Ratio> {
        self.weights.get(sample_point)
    }

    pub fn total_weight(&self) -> Ratio {
        Ratio::sum(self.weights.values())
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn sample_points(&self) -> impl Iterator<Item = &S> {
        self.weights.keys()
    }

    /// `(sample point, weight)` pairs, in the enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Ratio)> {
        self.weights.iter()
    }
}

impl<S: SamplePoint> FromIterator<(S, Ratio)> for ProbabilityMeasure<S> {
    fn from_iter<I: IntoIterator<Item = (S, Ratio)>>(iter: I) -> Self {
        ProbabilityMeasure::new(iter.into_iter().collect())
    }
}

impl<S: SamplePoint> PartialEq for ProbabilityMeasure<S> {
    fn eq(&self, other: &ProbabilityMeasure<S>) -> bool {
        self.is_equal_to(other)
    }
}

impl<S: SamplePoint> Eq for ProbabilityMeasure<S> {}
