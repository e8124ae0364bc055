use crate::{Ratio, RatioError};
use exprob_error::ErrorContext;
use log::debug;
use std::borrow::Borrow;
use std::iter::Sum;

impl Ratio {
    /// `a/b + c/d = (ad + bc)/bd`. The result is not reduced.
    pub fn plus(&self, other: &Ratio) -> Ratio {
        let lhs_numer = self.numer.mul_bi(&other.denom);
        let rhs_numer = self.denom.mul_bi(&other.numer);

        // both operands are valid, so the sum is valid: no need to check again
        Ratio {
            numer: lhs_numer.add_bi(&rhs_numer),
            denom: self.denom.mul_bi(&other.denom),
        }
    }

    /// `(a/b) / (c/d) = ad/bc`. The result is not reduced.
    ///
    /// It fails iff `other` is zero. That's the only way `Ratio` arithmetic can fail.
    pub fn divided_by(&self, other: &Ratio) -> Result<Ratio, RatioError> {
        if other.numer.is_zero() {
            debug!("exprob_ratio::divided_by(), `{self}` divided by a zero ratio `{other}`");
            return Err(RatioError::division_by_zero_ratio(self.to_string()));
        }

        Ratio::new_with_context(
            self.numer.mul_bi(&other.denom),
            self.denom.mul_bi(&other.numer),
            ErrorContext::DividingRatio,
        )
    }

    /// Left fold with `plus`, starting from zero. An empty input is zero.
    pub fn sum<I>(ratios: I) -> Ratio
    where
        I: IntoIterator,
        I::Item: Borrow<Ratio>,
    {
        ratios.into_iter().fold(
            Ratio::zero(),
            |acc, r| acc.plus(r.borrow()),
        )
    }
}

impl Sum for Ratio {
    fn sum<I: Iterator<Item = Ratio>>(iter: I) -> Ratio {
        iter.fold(Ratio::zero(), |acc, r| acc.plus(&r))
    }
}

impl<'a> Sum<&'a Ratio> for Ratio {
    fn sum<I: Iterator<Item = &'a Ratio>>(iter: I) -> Ratio {
        iter.fold(Ratio::zero(), |acc, r| acc.plus(r))
    }
}
