use crate::error::{Result, TTestError};
use std::fmt;
use std::str::FromStr;

pub mod effect;
pub mod inference;

pub mod utils;

/// Direction of the alternative hypothesis relative to the hypothesized mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alternative {
    /// H₁: μ ≠ μ₀
    #[default]
    TwoSided,
    /// H₁: μ > μ₀ (upper-tailed)
    Greater,
    /// H₁: μ < μ₀ (lower-tailed)
    Less,
}

impl Alternative {
    pub const ALL: [Alternative; 3] = [Alternative::TwoSided, Alternative::Greater, Alternative::Less];

    pub fn as_str(&self) -> &'static str {
        match self {
            Alternative::TwoSided => "two-sided",
            Alternative::Greater => "greater",
            Alternative::Less => "less",
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alternative {
    type Err = TTestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two-sided" | "two_sided" | "twosided" => Ok(Alternative::TwoSided),
            "greater" => Ok(Alternative::Greater),
            "less" => Ok(Alternative::Less),
            _ => Err(TTestError::UnknownAlternative(s.to_string())),
        }
    }
}

/// An ordered set of at least two finite observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(TTestError::NonFiniteValue { index });
        }
        if values.len() < 2 {
            return Err(TTestError::TooFewObservations(values.len()));
        }
        Ok(Sample { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never true for a constructed sample.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub const DEFAULT_NULL_MEAN: f64 = 10.0;
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Parameters of a one-sample t-test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestParameters {
    /// Hypothesized population mean (μ₀)
    pub null_mean: f64,
    /// Significance level
    pub alpha: f64,
    pub alternative: Alternative,
}

impl TestParameters {
    /// Create validated parameters: `null_mean` must be finite and `alpha` must lie in (0, 1).
    pub fn new(null_mean: f64, alpha: f64, alternative: Alternative) -> Result<Self> {
        let params = TestParameters {
            null_mean,
            alpha,
            alternative,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.null_mean.is_finite() {
            return Err(TTestError::NonFiniteNullMean(self.null_mean));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(TTestError::InvalidAlpha(self.alpha));
        }
        Ok(())
    }
}

impl Default for TestParameters {
    fn default() -> Self {
        TestParameters {
            null_mean: DEFAULT_NULL_MEAN,
            alpha: DEFAULT_ALPHA,
            alternative: Alternative::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Reject,
    FailToReject,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Reject => f.write_str("Reject H₀"),
            Decision::FailToReject => f.write_str("Fail to Reject H₀"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    /// Number of observations in the sample
    pub sample_size: usize,
    /// Arithmetic mean of the sample
    pub sample_mean: f64,
    /// Bessel-corrected sample standard deviation
    pub sample_std_dev: f64,
    /// Standard error of the mean
    pub standard_error: f64,
    /// The t statistic
    pub t_statistic: f64,
    /// Degrees of freedom, always `sample_size - 1`
    pub degrees_of_freedom: usize,
    /// The p-value under the chosen alternative
    pub p_value: f64,
    /// One-sample Cohen's d
    pub effect_size: f64,
    pub alpha: f64,
    pub alternative: Alternative,
    /// Whether H₀ is rejected at `alpha`
    pub reject: bool,
}

impl TestResult {
    pub fn decision(&self) -> Decision {
        if self.reject {
            Decision::Reject
        } else {
            Decision::FailToReject
        }
    }
}
