use crate::{Ratio, RatioError};

impl TryFrom<i64> for Ratio {
    type Error = RatioError;

    fn try_from(n: i64) -> Result<Ratio, RatioError> {
        Ratio::from_integer(n)
    }
}

// (numer, denom)
impl TryFrom<(i64, i64)> for Ratio {
    type Error = RatioError;

    fn try_from((numer, denom): (i64, i64)) -> Result<Ratio, RatioError> {
        Ratio::new(numer, denom)
    }
}
