use crate::error::{Result, TTestError};
use crate::testing::utils::{is_constant, sample_mean, sample_std_dev};
use single_utilities::traits::FloatOps;

/// One-sample Cohen's d from summary statistics: the distance of the sample mean from the
/// hypothesized mean, in units of the sample standard deviation.
pub fn cohens_d_one_sample(mean: f64, std_dev: f64, null_mean: f64) -> f64 {
    (mean - null_mean) / std_dev
}

/// Calculate one-sample Cohen's d directly from raw observations
pub fn calculate_cohens_d<T>(values: &[T], null_mean: f64) -> Result<f64>
where
    T: FloatOps,
{
    if values.len() < 2 {
        return Err(TTestError::TooFewObservations(values.len()));
    }

    if is_constant(values) {
        return Err(TTestError::ZeroVariance);
    }

    let mean = sample_mean(values).ok_or(TTestError::NumericOverflow("sample mean"))?;
    let sd = sample_std_dev(values, mean).ok_or(TTestError::NumericOverflow("standard deviation"))?;

    Ok(cohens_d_one_sample(mean, sd, null_mean))
}

/// Calculate Hedges' g, Cohen's d scaled by the small-sample correction factor J
///
/// Needs at least 3 observations: with df = 1 the factor J is 0.
pub fn calculate_hedges_g<T>(values: &[T], null_mean: f64) -> Result<f64>
where
    T: FloatOps,
{
    if values.len() < 3 {
        return Err(TTestError::TooFewObservations(values.len()));
    }

    let d = calculate_cohens_d(values, null_mean)?;

    // J = 1 - 3 / (4 df - 1) with df = n - 1
    let df = (values.len() - 1) as f64;
    let j = 1.0 - 3.0 / (4.0 * df - 1.0);

    Ok(j * d)
}
