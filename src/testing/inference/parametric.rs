//! Parametric one-sample inference.
//!
//! The one-sample Student's t-test compares the mean of a sample against a hypothesized
//! population mean μ₀. Summary statistics are computed once and the p-value is read from the
//! Student's t distribution with n - 1 degrees of freedom.

use crate::error::{Result, TTestError};
use crate::testing::effect::cohens_d_one_sample;
use crate::testing::utils::{is_constant, sample_mean, sample_std_dev};
use crate::testing::{Alternative, Sample, TestParameters, TestResult};
use log::debug;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Perform a one-sample t-test of `sample` against `params.null_mean`.
///
/// # Arguments
///
/// * `sample` - Validated sample with at least two finite observations
/// * `params` - Hypothesized mean, significance level and alternative hypothesis
///
/// # Returns
///
/// `TestResult` with descriptive statistics, the t statistic, p-value and decision.
/// A constant sample yields `TTestError::ZeroVariance`; the t statistic is undefined there.
pub fn one_sample_t_test(sample: &Sample, params: &TestParameters) -> Result<TestResult> {
    params.validate()?;

    let values = sample.values();
    if is_constant(values) {
        return Err(TTestError::ZeroVariance);
    }

    let mean = sample_mean(values).ok_or(TTestError::NumericOverflow("sample mean"))?;
    let sd = sample_std_dev(values, mean).ok_or(TTestError::NumericOverflow("standard deviation"))?;

    t_test_from_summary(values.len(), mean, sd, params)
}

/// Perform a one-sample t-test using precomputed summary statistics.
///
/// Useful when the raw observations are no longer available, only their count, mean and
/// Bessel-corrected standard deviation.
pub fn t_test_from_summary(
    n: usize,
    mean: f64,
    std_dev: f64,
    params: &TestParameters,
) -> Result<TestResult> {
    params.validate()?;

    if n < 2 {
        return Err(TTestError::TooFewObservations(n));
    }
    if !mean.is_finite() {
        return Err(TTestError::NumericOverflow("sample mean"));
    }
    if !std_dev.is_finite() {
        return Err(TTestError::NumericOverflow("standard deviation"));
    }
    // A spread below the mean's rounding error is noise from a constant sample
    if std_dev <= f64::EPSILON * mean.abs() {
        return Err(TTestError::ZeroVariance);
    }

    let n_f = n as f64;
    let standard_error = std_dev / n_f.sqrt();
    let t_statistic = (mean - params.null_mean) / standard_error;
    if !t_statistic.is_finite() {
        return Err(TTestError::NumericOverflow("t statistic"));
    }

    let degrees_of_freedom = n - 1;
    let p_value = t_test_p_value(t_statistic, degrees_of_freedom as f64, params.alternative)?;
    let reject = p_value < params.alpha;

    debug!(
        "one-sample t-test: n={}, mean={}, sd={}, t={}, df={}, p={} ({})",
        n, mean, std_dev, t_statistic, degrees_of_freedom, p_value, params.alternative
    );

    Ok(TestResult {
        sample_size: n,
        sample_mean: mean,
        sample_std_dev: std_dev,
        standard_error,
        t_statistic,
        degrees_of_freedom,
        p_value,
        effect_size: cohens_d_one_sample(mean, std_dev, params.null_mean),
        alpha: params.alpha,
        alternative: params.alternative,
        reject,
    })
}

/// P-value of a t statistic under the Student's t distribution with `df` degrees of freedom.
///
/// Upper tails use the survival function rather than `1 - cdf`, which keeps precision for
/// large statistics. The result is clamped to [0, 1].
pub fn t_test_p_value(t_stat: f64, df: f64, alternative: Alternative) -> Result<f64> {
    if t_stat.is_nan() {
        return Err(TTestError::NumericOverflow("t statistic"));
    }

    let t_dist = StudentsT::new(0.0, 1.0, df).map_err(|e| TTestError::Distribution {
        df,
        reason: e.to_string(),
    })?;

    let p = match alternative {
        Alternative::TwoSided => 2.0 * upper_tail(&t_dist, t_stat.abs()),
        Alternative::Greater => upper_tail(&t_dist, t_stat),
        Alternative::Less => lower_tail(&t_dist, t_stat),
    };

    Ok(p.clamp(0.0, 1.0))
}

#[inline]
fn upper_tail(t_dist: &StudentsT, t_stat: f64) -> f64 {
    if t_stat.is_infinite() {
        return if t_stat > 0.0 { 0.0 } else { 1.0 };
    }
    t_dist.sf(t_stat)
}

#[inline]
fn lower_tail(t_dist: &StudentsT, t_stat: f64) -> f64 {
    if t_stat.is_infinite() {
        return if t_stat > 0.0 { 1.0 } else { 0.0 };
    }
    t_dist.cdf(t_stat)
}
