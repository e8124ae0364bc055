use crate::{Ratio, RatioError};
use exprob_error::ExprobError;
use std::fmt;

// It shows the raw fields: `2/4` is not printed as `1/2`.
impl fmt::Display for Ratio {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}/{}", self.numer, self.denom)
    }
}

impl fmt::Debug for Ratio {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "Ratio({}/{})", self.numer, self.denom)
    }
}

impl fmt::Display for RatioError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}", self.render_error())
    }
}

impl std::error::Error for RatioError {}
