//! Interactive calculator form.
//!
//! `Form` owns every piece of mutable UI state: the current text of each field. The engine
//! only ever sees the parsed values passed in on a Calculate action.

use crate::error::Result;
use crate::input::{self, DEFAULT_SAMPLE};
use crate::report;
use crate::testing::inference::parametric::one_sample_t_test;
use crate::testing::{
    Alternative, DEFAULT_ALPHA, DEFAULT_NULL_MEAN, Sample, TestParameters, TestResult,
};
use log::warn;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub data: String,
    pub null_mean: f64,
    pub alpha: f64,
    pub alternative: Alternative,
}

impl Default for Form {
    fn default() -> Self {
        Form {
            data: DEFAULT_SAMPLE.to_string(),
            null_mean: DEFAULT_NULL_MEAN,
            alpha: DEFAULT_ALPHA,
            alternative: Alternative::default(),
        }
    }
}

impl Form {
    /// The Calculate action: parse the current fields and run the test.
    pub fn calculate(&self) -> Result<TestResult> {
        let outcome = self
            .data
            .parse::<Sample>()
            .and_then(|sample| {
                let params = TestParameters::new(self.null_mean, self.alpha, self.alternative)?;
                one_sample_t_test(&sample, &params)
            });

        if let Err(e) = &outcome {
            warn!("calculation rejected: {}", e);
        }
        outcome
    }

    /// Run the form until the user quits or `input` is exhausted.
    ///
    /// Each round prompts for every field (an empty line keeps the current value), then waits
    /// for the Calculate trigger: an empty line calculates, `q` quits.
    pub fn run<R, W>(&mut self, input: R, mut out: W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut lines = input.lines();

        writeln!(out, "One Sample T-Test Calculator")?;
        writeln!(out, "Enter sample values separated by commas")?;

        loop {
            writeln!(out)?;

            let Some(line) = prompt(&mut out, &mut lines, "Sample Data", &self.data)? else {
                return Ok(());
            };
            if !line.is_empty() {
                self.data = line;
            }

            let current = self.null_mean.to_string();
            let Some(line) = prompt(&mut out, &mut lines, "Null Hypothesis Mean (μ₀)", &current)? else {
                return Ok(());
            };
            if !line.is_empty() {
                match input::parse_null_mean(&line) {
                    Ok(mean) => self.null_mean = mean,
                    Err(msg) => writeln!(out, "{msg}; keeping {}", self.null_mean)?,
                }
            }

            let current = self.alpha.to_string();
            let Some(line) = prompt(&mut out, &mut lines, "Significance Level (α)", &current)? else {
                return Ok(());
            };
            if !line.is_empty() {
                match input::parse_alpha(&line) {
                    Ok(alpha) => self.alpha = alpha,
                    Err(msg) => writeln!(out, "{msg}; keeping {}", self.alpha)?,
                }
            }

            let label = format!(
                "Alternative Hypothesis ({})",
                Alternative::ALL.map(|a| a.as_str()).join(" / ")
            );
            let Some(line) = prompt(&mut out, &mut lines, &label, self.alternative.as_str())? else {
                return Ok(());
            };
            if !line.is_empty() {
                match line.parse::<Alternative>() {
                    Ok(alternative) => self.alternative = alternative,
                    Err(e) => writeln!(out, "{e}; keeping {}", self.alternative)?,
                }
            }

            write!(out, "Press Enter to calculate, q to quit: ")?;
            out.flush()?;
            let Some(line) = lines.next().transpose()? else {
                return Ok(());
            };
            if line.trim().eq_ignore_ascii_case("q") {
                return Ok(());
            }

            writeln!(out)?;
            write!(out, "{}", report::render_outcome(&self.calculate()))?;
        }
    }
}

fn prompt<W, I>(out: &mut W, lines: &mut I, label: &str, current: &str) -> io::Result<Option<String>>
where
    W: Write,
    I: Iterator<Item = io::Result<String>>,
{
    write!(out, "{label} [{current}]: ")?;
    out.flush()?;
    Ok(lines.next().transpose()?.map(|line| line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TTestError;
    use std::io::Cursor;

    fn session(form: &mut Form, input: &str) -> String {
        let mut out = Vec::new();
        form.run(Cursor::new(input.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_calculate_defaults() {
        let result = Form::default().calculate().unwrap();
        assert_eq!(result.degrees_of_freedom, 6);
        assert!(!result.reject);
    }

    #[test]
    fn test_calculate_bad_data() {
        let form = Form {
            data: "a, b, c".to_string(),
            ..Form::default()
        };
        assert!(matches!(form.calculate(), Err(TTestError::InvalidNumber { .. })));
    }

    #[test]
    fn test_calculate_constant_fractional_data() {
        for null_mean in [0.1, 0.0] {
            let form = Form {
                data: "0.1, 0.1, 0.1".to_string(),
                null_mean,
                ..Form::default()
            };
            assert_eq!(form.calculate(), Err(TTestError::ZeroVariance));
        }
    }

    #[test]
    fn test_session_with_defaults() {
        let mut form = Form::default();
        let out = session(&mut form, "\n\n\n\n\n");
        assert!(out.contains("P-value: 0.110552"));
        assert!(out.contains("Decision: Fail to Reject H₀"));
        assert_eq!(form, Form::default());
    }

    #[test]
    fn test_session_updates_fields() {
        let mut form = Form::default();
        let out = session(&mut form, "5, 6, 7, 8\n5\n0.1\ngreater\n\n");
        assert_eq!(form.data, "5, 6, 7, 8");
        assert_eq!(form.null_mean, 5.0);
        assert_eq!(form.alpha, 0.1);
        assert_eq!(form.alternative, Alternative::Greater);
        assert!(out.contains("Degrees of Freedom: 3"));
        assert!(out.contains("Decision: Reject H₀"));
    }

    #[test]
    fn test_session_keeps_state_after_failure() {
        let mut form = Form::default();
        let out = session(&mut form, "x, y\n\n\n\n\n10, 11, 12\n\n\n\n\n");
        assert!(out.contains(report::INVALID_INPUT_WARNING));
        assert!(out.contains("Degrees of Freedom: 2"));
        assert_eq!(form.data, "10, 11, 12");
    }

    #[test]
    fn test_session_rejects_out_of_range_alpha() {
        let mut form = Form::default();
        let out = session(&mut form, "\n\n0.5\nsideways\nq\n");
        assert!(out.contains("keeping 0.05"));
        assert!(out.contains("keeping two-sided"));
        assert_eq!(form.alpha, 0.05);
        assert!(!out.contains("Results"));
    }
}
