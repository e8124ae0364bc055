use crate::{MeasureError, ProbabilityMeasure, SamplePoint};
use exprob_error::ExprobError;
use std::fmt;

impl<S: SamplePoint> fmt::Debug for ProbabilityMeasure<S> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            fmt,
            "ProbabilityMeasure {{{}}}",
            self.weights.iter().map(
                |(s, weight)| format!("{s:?}: {weight}")
            ).collect::<Vec<String>>().join(", "),
        )
    }
}

impl fmt::Display for MeasureError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}", self.render_error())
    }
}

impl std::error::Error for MeasureError {}
