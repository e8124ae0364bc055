#![deny(unused_imports)]

use exprob_error::ErrorContext;
use hmath::BigInt;
use log::debug;

mod approx;
mod cmp;
mod convert;
mod error;
mod fmt;
mod op;


pub use error::{RatioError, RatioErrorKind};

/// An exact, non-negative rational number.
///
/// `numer >= 0` and `denom > 0` always hold. The fraction is never
/// reduced: `1/2` and `2/4` are different representations of the same
/// value. Equality and ordering compare them by cross-multiplication,
/// so `Ratio::new(1, 2) == Ratio::new(2, 4)`.
///
/// Both fields are arbitrary-precision integers, so no operation
/// overflows no matter how long `plus`/`divided_by` are chained.
#[derive(Clone)]
pub struct Ratio {
    numer: BigInt,
    denom: BigInt,
}

impl Ratio {
    pub fn new(numer: i64, denom: i64) -> Result<Self, RatioError> {
        Ratio::from_big_ints(BigInt::from(numer), BigInt::from(denom))
    }

    pub fn from_big_ints(numer: BigInt, denom: BigInt) -> Result<Self, RatioError> {
        Ratio::new_with_context(numer, denom, ErrorContext::ConstructingRatio)
    }

    pub(crate) fn new_with_context(numer: BigInt, denom: BigInt, context: ErrorContext) -> Result<Self, RatioError> {
        if numer.is_neg() || denom.is_neg() || denom.is_zero() {
            debug!("exprob_ratio::new_with_context(), rejected `{numer}/{denom}` while {context}");
            return Err(RatioError::invalid_ratio(&numer, &denom, context));
        }

        Ok(Ratio { numer, denom })
    }

    pub fn from_integer(n: i64) -> Result<Self, RatioError> {
        Ratio::new(n, 1)
    }

    pub fn zero() -> Self {
        Ratio {
            numer: BigInt::from(0i64),
            denom: BigInt::from(1i64),
        }
    }

    pub fn one() -> Self {
        Ratio {
            numer: BigInt::from(1i64),
            denom: BigInt::from(1i64),
        }
    }

    /// The raw numerator. It's not reduced.
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// The raw denominator. It's not reduced, and it's always positive.
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}
