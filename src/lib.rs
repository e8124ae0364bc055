#![deny(unused_imports)]

//! Exact rational arithmetic and discrete probability measures.
//!
//! Nothing here touches floating point numbers, except
//! `Ratio::approximate_value`, which is explicitly lossy.
//!
//! ```text
//! let die = (1..=6).map(|n| (n, Ratio::one())).collect::<ProbabilityMeasure<u8>>();
//! let even = die.relative_where(|n, _| n % 2 == 0);
//!
//! even.probability_at(&4)?;                   // 1/3
//! die.sampling_from(&Ratio::new(1, 2)?)?;     // 3
//! ```

pub use exprob_config::{
    ApproxOption,
    MeasureOption,
    SamplingStrategy,
};
pub use exprob_error::{ErrorContext, ExprobError, ExprobErrorKind, RenderError};
pub use exprob_measure::{
    MeasureError,
    MeasureErrorKind,
    ProbabilityMeasure,
    SamplePoint,
    random_ratio,
};
pub use exprob_ratio::{Ratio, RatioError, RatioErrorKind};


pub const MAJOR_VERSION: u8 = 0;
pub const MINOR_VERSION: u8 = 0;
pub const PATCH_VERSION: u8 = 0;
