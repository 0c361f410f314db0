use std::iter;

use crate::{
    factorial::{FactorialError, factorial, steps},
    summary::{Summary, group_digits},
};

/// Determines what is printed for each computed value
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Print every multiplication step before the result
    pub trace: bool,
    /// Print the grouped value, digit count and trailing zeros after the
    /// result
    pub summary: bool,
}

impl Report {
    /// Output for `n`, one entry per line.
    ///
    /// Negative input is rejected before anything is produced. The lines
    /// are generated as they are consumed, so a long trace is never held in
    /// memory. With both switches off this is just the value.
    pub fn lines(
        &self,
        n: i64,
    ) -> Result<impl Iterator<Item = String> + use<>, FactorialError> {
        let trace = steps(n)?;
        let trace = self
            .trace
            .then_some(trace)
            .into_iter()
            .flatten()
            .map(|step| format!("i = {}, result = {}", step.i, step.partial));

        let summary = self.summary;
        let result = iter::once_with(move || result_lines(n, summary)).flatten();

        Ok(trace.chain(result))
    }
}

/// The lines following the trace. `n` has already been checked.
fn result_lines(n: i64, summary: bool) -> Vec<String> {
    let lines = if summary {
        Summary::compute(n).map(|summary| {
            vec![
                summary.value.to_string(),
                format!("grouped: {}", group_digits(summary.value)),
                summary.to_string(),
            ]
        })
    } else {
        factorial(n).map(|value| vec![value.to_string()])
    };

    lines.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(report: Report, n: i64) -> Vec<String> {
        report.lines(n).unwrap().collect()
    }

    #[test]
    fn test_plain() {
        let report = Report::default();

        assert_eq!(collect(report, 5), vec!["120"]);
        assert_eq!(collect(report, 0), vec!["1"]);
    }

    #[test]
    fn test_trace() {
        let report = Report {
            trace: true,
            summary: false,
        };

        assert_eq!(
            collect(report, 3),
            vec![
                "i = 0, result = 1",
                "i = 1, result = 1",
                "i = 2, result = 2",
                "i = 3, result = 6",
                "6",
            ]
        );
    }

    #[test]
    fn test_summary() {
        let report = Report {
            trace: false,
            summary: true,
        };

        assert_eq!(
            collect(report, 10),
            vec![
                "3628800",
                "grouped: 3,628,800",
                "digits: 7, trailing zeros of n!: 2",
            ]
        );
    }

    #[test]
    fn test_trace_is_streamed() {
        let report = Report {
            trace: true,
            summary: false,
        };

        // Producing every step up front would never finish for this input
        let mut lines = report.lines(i64::MAX).unwrap();

        assert_eq!(lines.next().as_deref(), Some("i = 0, result = 1"));
        assert_eq!(lines.next().as_deref(), Some("i = 1, result = 1"));
        assert_eq!(lines.next().as_deref(), Some("i = 2, result = 2"));

        let mut lines = report.lines(2_000_000).unwrap();
        assert_eq!(lines.nth(10).as_deref(), Some("i = 10, result = 3628800"));
    }

    #[test]
    fn test_negative_produces_no_lines() {
        let report = Report {
            trace: true,
            summary: true,
        };

        assert!(matches!(
            report.lines(-1),
            Err(FactorialError::InvalidArgument(-1))
        ));
    }
}
