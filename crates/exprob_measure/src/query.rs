use crate::{MeasureError, ProbabilityMeasure, SamplePoint};
use exprob_error::ErrorContext;
use exprob_ratio::Ratio;
use log::info;

impl<S: SamplePoint> ProbabilityMeasure<S> {
    /// `weight(sample_point) / total_weight`
    pub fn probability_at(&self, sample_point: &S) -> Result<Ratio, MeasureError> {
        let weight = match self.weights.get(sample_point) {
            Some(weight) => weight,
            None => {
                return Err(MeasureError::unknown_sample_point(sample_point));
            },
        };

        weight.divided_by(&self.total_weight()).map_err(
            |e| MeasureError::from_ratio_error(e, ErrorContext::QueryingProbability)
        )
    }

    /// Probability of the event `{ s | condition(s, weight(s)) }`.
    ///
    /// An event that matches nothing is zero, and an event that matches everything is one.
    pub fn probability_where<F: Fn(&S, &Ratio) -> bool>(&self, condition: F) -> Result<Ratio, MeasureError> {
        let weight_where = Ratio::sum(
            self.weights.iter().filter(
                |(s, weight)| condition(*s, *weight)
            ).map(
                |(_, weight)| weight
            )
        );

        weight_where.divided_by(&self.total_weight()).map_err(
            |e| MeasureError::from_ratio_error(e, ErrorContext::QueryingEvent)
        )
    }

    /// A new measure that only has the sample points where `condition` holds.
    ///
    /// The weights are copied as they are (not renormalized). Queries on the new
    /// measure divide by the new total weight, so it's the conditional probability measure.
    pub fn relative_where<F: Fn(&S, &Ratio) -> bool>(&self, condition: F) -> ProbabilityMeasure<S> {
        let weights = self.weights.iter().filter(
            |(s, weight)| condition(*s, *weight)
        ).map(
            |(s, weight)| (s.clone(), weight.clone())
        ).collect();
        let result = ProbabilityMeasure::new(weights);

        info!(
            "exprob_measure::relative_where(), {} of {} sample points remain",
            result.len(),
            self.len(),
        );

        result
    }

    /// Every sample point with its probability, in the enumeration order.
    pub fn probabilities(&self) -> Result<Vec<(&S, Ratio)>, MeasureError> {
        let total_weight = self.total_weight();
        let mut result = Vec::with_capacity(self.len());

        for (s, weight) in self.weights.iter() {
            let probability = weight.divided_by(&total_weight).map_err(
                |e| MeasureError::from_ratio_error(e, ErrorContext::QueryingProbability)
            )?;

            result.push((s, probability));
        }

        Ok(result)
    }
}
