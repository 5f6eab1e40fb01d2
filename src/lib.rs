//! # one-sample-ttest
//!
//! A one-sample Student's t-test engine with a small interactive calculator on top.
//!
//! Given a sample, a hypothesized population mean μ₀, a significance level α and the direction
//! of the alternative hypothesis, the engine computes the sample mean, the Bessel-corrected
//! standard deviation, the t statistic, the degrees of freedom, the p-value and whether H₀ is
//! rejected.
//!
//! ## Quick Start
//!
//! ```
//! use one_sample_ttest::testing::{Alternative, Sample, TestParameters};
//! use one_sample_ttest::testing::inference::parametric::one_sample_t_test;
//!
//! let sample: Sample = "10, 12, 9, 11, 10, 13, 12".parse().unwrap();
//! let params = TestParameters::new(10.0, 0.05, Alternative::TwoSided).unwrap();
//! let result = one_sample_t_test(&sample, &params).unwrap();
//! assert_eq!(result.degrees_of_freedom, 6);
//! assert!(!result.reject);
//! ```
//!
//! Raw slices and one-dimensional `ndarray` arrays can be tested directly through the
//! [`SampleStatTests`](testing::inference::SampleStatTests) trait.
//!
//! ## Module Organization
//!
//! - **[`testing`]**: Descriptive statistics, the t-test, p-values and effect sizes
//! - **[`input`]**: Parsing of the calculator's text fields
//! - **[`report`]**: Text rendering of results
//! - **[`form`]**: The interactive calculator form
//! - **[`error`]**: Classified input and computation failures

pub mod error;
pub mod form;
pub mod input;
pub mod report;
pub mod testing;

pub use error::TTestError;
