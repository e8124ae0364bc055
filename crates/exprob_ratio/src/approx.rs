use crate::Ratio;
use exprob_config::ApproxOption;

impl Ratio {
    /// `numer / denom` as `f64`.
    ///
    /// It's LOSSY. Nothing in this crate uses it for equality or ordering.
    /// Use `is_equal_to`, `is_less_than`, ... for exact comparisons.
    pub fn approximate_value(&self) -> f64 {
        self.approximate_value_with(&ApproxOption::default())
    }

    /// Both fields are arbitrarily large, so they're not converted to `f64` directly
    /// (a 400-digit numerator would be `inf`). Instead, it reads the first few
    /// significant digits of each field and adjusts the exponent.
    pub fn approximate_value_with(&self, option: &ApproxOption) -> f64 {
        if self.is_zero() {
            return 0.0;
        }

        let (numer_mantissa, numer_exp) = leading_digits(&self.numer.to_string(), option.significant_digits);
        let (denom_mantissa, denom_exp) = leading_digits(&self.denom.to_string(), option.significant_digits);

        numer_mantissa / denom_mantissa * 10f64.powi(numer_exp - denom_exp)
    }
}

// `digits` is a decimal representation of a positive integer.
// returns `(m, e)` where `digits ~= m * 10^e`, and `m` has at most `max_len` digits
fn leading_digits(digits: &str, max_len: usize) -> (f64, i32) {
    let digits = digits.as_bytes();
    let len = digits.len().min(max_len);
    let mantissa = digits[..len].iter().fold(
        0.0,
        |acc, d| acc * 10.0 + (*d - b'0') as f64,
    );

    (mantissa, (digits.len() - len) as i32)
}
