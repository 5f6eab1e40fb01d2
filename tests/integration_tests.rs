// End-to-end checks: raw text fields through parsing, the engine and the rendered report.

#[cfg(test)]
mod integration_tests {
    use one_sample_ttest::form::Form;
    use one_sample_ttest::report::{self, INVALID_INPUT_WARNING};
    use one_sample_ttest::testing::Alternative;
    use one_sample_ttest::TTestError;
    use std::io::Cursor;

    fn form(data: &str, null_mean: f64, alpha: f64, alternative: Alternative) -> Form {
        Form {
            data: data.to_string(),
            null_mean,
            alpha,
            alternative,
        }
    }

    #[test]
    fn test_default_form_report() {
        let rendered = report::render_outcome(&Form::default().calculate());
        assert_eq!(
            rendered,
            "Results\n\
             Sample Mean (x̄): 11.0000\n\
             Sample Std Dev (s): 1.4142\n\
             T Statistic: 1.8708\n\
             Degrees of Freedom: 6\n\
             P-value: 0.110552\n\
             Decision: Fail to Reject H₀\n"
        );
    }

    #[test]
    fn test_non_numeric_input_is_classified() {
        let outcome = form("a, b, c", 10.0, 0.05, Alternative::TwoSided).calculate();
        assert!(matches!(outcome, Err(TTestError::InvalidNumber { index: 0, .. })));
        assert_eq!(report::render_outcome(&outcome), format!("{INVALID_INPUT_WARNING}\n"));
    }

    #[test]
    fn test_single_value_is_classified() {
        let outcome = form("42", 10.0, 0.05, Alternative::TwoSided).calculate();
        assert_eq!(outcome, Err(TTestError::TooFewObservations(1)));
        assert_eq!(report::render_outcome(&outcome), format!("{INVALID_INPUT_WARNING}\n"));
    }

    #[test]
    fn test_every_failure_renders_the_same_warning() {
        let failures = [
            form("", 10.0, 0.05, Alternative::TwoSided),
            form("1, 2,", 10.0, 0.05, Alternative::TwoSided),
            form("3, 3, 3", 10.0, 0.05, Alternative::Less),
            form("0.1, 0.1, 0.1", 0.1, 0.05, Alternative::TwoSided),
            form("0.1, 0.1, 0.1", 0.0, 0.05, Alternative::TwoSided),
            form("1, 2, 3", f64::NAN, 0.05, Alternative::Greater),
            form("1, 2, 3", 0.0, 0.0, Alternative::TwoSided),
        ];
        for f in failures {
            let outcome = f.calculate();
            assert!(outcome.is_err(), "expected failure for {:?}", f);
            assert_eq!(report::render_outcome(&outcome), format!("{INVALID_INPUT_WARNING}\n"));
        }
    }

    #[test]
    fn test_interactive_session_round_trip() {
        let mut form = Form::default();
        let input = "\n\n\n\n\n1, 2, 3, 4, 5\n3\n\nless\n\n";
        let mut out = Vec::new();
        form.run(Cursor::new(input), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        println!("{out}");

        assert!(out.starts_with("One Sample T-Test Calculator\n"));
        assert_eq!(out.matches("Results").count(), 2);
        assert!(out.contains("Sample Mean (x̄): 3.0000"));
        assert!(out.contains("T Statistic: 0.0000"));
        assert!(out.contains("P-value: 0.500000"));
        assert_eq!(form.alternative, Alternative::Less);
        assert_eq!(form.null_mean, 3.0);
    }

    #[test]
    fn test_session_ends_on_eof_mid_form() {
        let mut form = Form::default();
        let mut out = Vec::new();
        form.run(Cursor::new("9, 10\n"), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(!out.contains("Results"));
        assert_eq!(form.data, "9, 10");
    }
}
