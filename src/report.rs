//! Text rendering of test results for the calculator.

use crate::error::TTestError;
use crate::testing::TestResult;

/// Shown for every failed calculation, whatever the underlying reason.
pub const INVALID_INPUT_WARNING: &str = "Please enter valid numeric values separated by commas.";

pub fn render(result: &TestResult) -> String {
    format!(
        "Results\n\
         Sample Mean (x̄): {:.4}\n\
         Sample Std Dev (s): {:.4}\n\
         T Statistic: {:.4}\n\
         Degrees of Freedom: {}\n\
         P-value: {:.6}\n\
         Decision: {}\n",
        result.sample_mean,
        result.sample_std_dev,
        result.t_statistic,
        result.degrees_of_freedom,
        result.p_value,
        result.decision(),
    )
}

/// Render a finished calculation, collapsing any failure into the generic warning.
pub fn render_outcome(outcome: &Result<TestResult, TTestError>) -> String {
    match outcome {
        Ok(result) => render(result),
        Err(_) => format!("{INVALID_INPUT_WARNING}\n"),
    }
}
