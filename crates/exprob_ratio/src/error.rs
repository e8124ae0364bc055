use exprob_error::{ErrorContext, ExprobError, ExprobErrorKind};
use hmath::BigInt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RatioError {
    kind: RatioErrorKind,
    context: ErrorContext,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RatioErrorKind {
    /// negative numerator or non-positive denominator
    InvalidRatio {
        numer: String,
        denom: String,
    },

    /// `a.divided_by(b)` where `b` is zero, which would make the denominator zero
    DivisionByZeroRatio {
        dividend: String,
    },
}

impl RatioError {
    pub fn invalid_ratio(numer: &BigInt, denom: &BigInt, context: ErrorContext) -> Self {
        RatioError {
            kind: RatioErrorKind::InvalidRatio {
                numer: numer.to_string(),
                denom: denom.to_string(),
            },
            context,
        }
    }

    pub fn division_by_zero_ratio(dividend: String) -> Self {
        RatioError {
            kind: RatioErrorKind::DivisionByZeroRatio { dividend },
            context: ErrorContext::DividingRatio,
        }
    }

    pub fn kind(&self) -> &RatioErrorKind {
        &self.kind
    }

    /// Division by a zero ratio is a special case of an invalid ratio:
    /// the result would have a zero denominator.
    pub fn is_invalid_ratio(&self) -> bool {
        matches!(
            self.kind,
            RatioErrorKind::InvalidRatio { .. }
            | RatioErrorKind::DivisionByZeroRatio { .. }
        )
    }

    pub fn is_division_by_zero(&self) -> bool {
        matches!(self.kind, RatioErrorKind::DivisionByZeroRatio { .. })
    }
}

impl ExprobError<RatioErrorKind> for RatioError {
    fn err_kind(&self) -> &RatioErrorKind {
        &self.kind
    }

    fn context(&self) -> ErrorContext {
        self.context
    }

    fn index(&self) -> u32 {
        1
    }
}

impl ExprobErrorKind for RatioErrorKind {
    fn msg(&self) -> String {
        match self {
            RatioErrorKind::InvalidRatio { numer, denom } => format!(
                "invalid ratio: `{numer}/{denom}`",
            ),
            RatioErrorKind::DivisionByZeroRatio { dividend } => format!(
                "cannot divide `{dividend}` by a zero ratio",
            ),
        }
    }

    fn help(&self) -> String {
        match self {
            RatioErrorKind::InvalidRatio { .. } => String::from(
                "A ratio must have a non-negative numerator and a positive denominator.",
            ),
            RatioErrorKind::DivisionByZeroRatio { .. } => String::new(),
        }
    }

    fn index(&self) -> u32 {
        match self {
            RatioErrorKind::InvalidRatio { .. } => 0,
            RatioErrorKind::DivisionByZeroRatio { .. } => 1,
        }
    }
}
