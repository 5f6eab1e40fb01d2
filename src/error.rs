use thiserror::Error;

/// Reasons a t-test could not be computed from the supplied input.
///
/// The calculator front end shows one generic warning for all of these, but the
/// library keeps them apart so callers (and the logs) can tell what went wrong.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TTestError {
    #[error("sample input is empty")]
    EmptyInput,

    #[error("token {index} ({token:?}) is not a number")]
    InvalidNumber { index: usize, token: String },

    #[error("value at position {index} is not finite")]
    NonFiniteValue { index: usize },

    #[error("too few observations, got {0}")]
    TooFewObservations(usize),

    #[error("sample has zero variance, the t statistic is undefined")]
    ZeroVariance,

    #[error("{0} is not finite")]
    NumericOverflow(&'static str),

    #[error("hypothesized mean must be finite, got {0}")]
    NonFiniteNullMean(f64),

    #[error("significance level must lie in (0, 1), got {0}")]
    InvalidAlpha(f64),

    #[error("unknown alternative hypothesis {0:?}, expected two-sided, greater or less")]
    UnknownAlternative(String),

    #[error("Student's t distribution with {df} degrees of freedom: {reason}")]
    Distribution { df: f64, reason: String },
}

pub type Result<T> = std::result::Result<T, TTestError>;
