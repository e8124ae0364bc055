use crate::Ratio;
use hmath::BigInt;
use std::cmp::Ordering;

// All the comparisons are `a/b ? c/d <=> ad ? bc`.
// It works because both denominators are positive.
impl Ratio {
    pub fn is_equal_to(&self, other: &Ratio) -> bool {
        self.cross_cmp(other) == Ordering::Equal
    }

    pub fn is_greater_than(&self, other: &Ratio) -> bool {
        self.cross_cmp(other) == Ordering::Greater
    }

    pub fn is_greater_than_or_equal_to(&self, other: &Ratio) -> bool {
        self.is_greater_than(other) || self.is_equal_to(other)
    }

    pub fn is_less_than(&self, other: &Ratio) -> bool {
        self.cross_cmp(other) == Ordering::Less
    }

    pub fn is_less_than_or_equal_to(&self, other: &Ratio) -> bool {
        self.is_less_than(other) || self.is_equal_to(other)
    }

    fn cross_cmp(&self, other: &Ratio) -> Ordering {
        cmp_bi(
            &self.numer.mul_bi(&other.denom),
            &self.denom.mul_bi(&other.numer),
        )
    }
}

fn cmp_bi(lhs: &BigInt, rhs: &BigInt) -> Ordering {
    if lhs.lt_bi(rhs) {
        Ordering::Less
    }

    else if lhs.gt_bi(rhs) {
        Ordering::Greater
    }

    else {
        Ordering::Equal
    }
}

// `PartialEq` is not derived: `1/2` and `2/4` have different fields, but they're equal.
impl PartialEq for Ratio {
    fn eq(&self, other: &Ratio) -> bool {
        self.is_equal_to(other)
    }
}

impl Eq for Ratio {}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Ratio) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Ratio) -> Ordering {
        self.cross_cmp(other)
    }
}
