use exprob_error::{ErrorContext, ExprobError, ExprobErrorKind};
use exprob_ratio::RatioError;
use std::fmt::Debug;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MeasureError {
    kind: MeasureErrorKind,
    context: ErrorContext,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MeasureErrorKind {
    /// `Debug` representation of the sample point
    UnknownSamplePoint(String),

    /// `sampling_from` on a measure without any sample point
    EmptySampleSpace,

    /// The weights sum to zero, or an exact operation failed in some other way.
    Ratio(RatioError),
}

impl MeasureError {
    pub fn unknown_sample_point<S: Debug>(sample_point: &S) -> Self {
        MeasureError {
            kind: MeasureErrorKind::UnknownSamplePoint(format!("{sample_point:?}")),
            context: ErrorContext::QueryingProbability,
        }
    }

    pub fn empty_sample_space() -> Self {
        MeasureError {
            kind: MeasureErrorKind::EmptySampleSpace,
            context: ErrorContext::Sampling,
        }
    }

    pub fn from_ratio_error(e: RatioError, context: ErrorContext) -> Self {
        MeasureError {
            kind: MeasureErrorKind::Ratio(e),
            context,
        }
    }

    pub fn kind(&self) -> &MeasureErrorKind {
        &self.kind
    }

    pub fn is_unknown_sample_point(&self) -> bool {
        matches!(self.kind, MeasureErrorKind::UnknownSamplePoint(_))
    }

    /// It's an `InvalidRatio` error surfaced from the exact arithmetic.
    pub fn is_invalid_ratio(&self) -> bool {
        match &self.kind {
            MeasureErrorKind::Ratio(e) => e.is_invalid_ratio(),
            _ => false,
        }
    }
}

impl ExprobError<MeasureErrorKind> for MeasureError {
    fn err_kind(&self) -> &MeasureErrorKind {
        &self.kind
    }

    fn context(&self) -> ErrorContext {
        self.context
    }

    fn index(&self) -> u32 {
        2
    }
}

impl ExprobErrorKind for MeasureErrorKind {
    fn msg(&self) -> String {
        match self {
            MeasureErrorKind::UnknownSamplePoint(s) => format!("unknown sample point: `{s}`"),
            MeasureErrorKind::EmptySampleSpace => String::from("cannot sample from an empty sample space"),
            MeasureErrorKind::Ratio(e) => e.err_kind().msg(),
        }
    }

    fn help(&self) -> String {
        match self {
            MeasureErrorKind::UnknownSamplePoint(_) => String::new(),
            MeasureErrorKind::EmptySampleSpace => String::new(),
            MeasureErrorKind::Ratio(e) if e.is_division_by_zero() => String::from(
                "The weights of this measure sum to zero, so no probability is defined.",
            ),
            MeasureErrorKind::Ratio(e) => e.err_kind().help(),
        }
    }

    fn index(&self) -> u32 {
        match self {
            MeasureErrorKind::UnknownSamplePoint(_) => 0,
            MeasureErrorKind::EmptySampleSpace => 1,
            MeasureErrorKind::Ratio(_) => 2,
        }
    }
}
