use crate::error::{Result, TTestError};
use crate::testing::{Alternative, Sample, TestParameters, TestResult};
use ndarray::{ArrayBase, Data, Ix1};
use single_utilities::traits::FloatOps;

pub mod parametric;

/// One-sample tests on raw numeric containers.
pub trait SampleStatTests {
    fn t_test(&self, null_mean: f64, alpha: f64, alternative: Alternative) -> Result<TestResult>;
}

impl<T> SampleStatTests for [T]
where
    T: FloatOps,
{
    fn t_test(&self, null_mean: f64, alpha: f64, alternative: Alternative) -> Result<TestResult> {
        let sample = collect_sample(self.iter().copied())?;
        let params = TestParameters::new(null_mean, alpha, alternative)?;
        parametric::one_sample_t_test(&sample, &params)
    }
}

impl<T, S> SampleStatTests for ArrayBase<S, Ix1>
where
    T: FloatOps,
    S: Data<Elem = T>,
{
    fn t_test(&self, null_mean: f64, alpha: f64, alternative: Alternative) -> Result<TestResult> {
        let sample = collect_sample(self.iter().copied())?;
        let params = TestParameters::new(null_mean, alpha, alternative)?;
        parametric::one_sample_t_test(&sample, &params)
    }
}

fn collect_sample<T, I>(values: I) -> Result<Sample>
where
    T: FloatOps,
    I: Iterator<Item = T>,
{
    let values = values
        .enumerate()
        .map(|(index, v)| v.to_f64().ok_or(TTestError::NonFiniteValue { index }))
        .collect::<Result<Vec<f64>>>()?;
    Sample::new(values)
}
