use std::{error::Error, fmt};

/// Errors returned by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorialError {
    /// The input was negative. Carries the rejected value.
    InvalidArgument(i64),
}

impl fmt::Display for FactorialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorialError::InvalidArgument(n) => {
                write!(f, "n must be non-negative, got {n}")
            }
        }
    }
}

impl Error for FactorialError {}

/// n! = 1 * 2 * ... * n, with 0! = 1! = 1
///
/// The product is accumulated in a `u64` and wraps on overflow. No range
/// check is performed: results are exact up to 20! and meaningless above.
pub fn factorial(n: i64) -> Result<u64, FactorialError> {
    if n < 0 {
        return Err(FactorialError::InvalidArgument(n));
    }

    if n == 0 || n == 1 {
        return Ok(1);
    }

    let mut result: u64 = 1;
    for i in 2..=n as u64 {
        result = result.wrapping_mul(i);
    }

    Ok(result)
}

/// One step of the accumulation: the running product after `i` was
/// multiplied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub i: u64,
    pub partial: u64,
}

/// Iterator over the steps of a factorial computation, from `i = 0` up to
/// and including `i = n`.
#[derive(Debug, Clone)]
pub struct Steps {
    next: u64,
    last: u64,
    partial: u64,
}

impl Iterator for Steps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.next > self.last {
            return None;
        }

        let i = self.next;
        // Steps 0 and 1 both hold the empty product
        if i >= 2 {
            self.partial = self.partial.wrapping_mul(i);
        }
        self.next += 1;

        Some(Step {
            i,
            partial: self.partial,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last + 1).saturating_sub(self.next);

        match usize::try_from(remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Returns the steps taken while computing `n!`. The final step carries
/// the same value `factorial(n)` returns.
pub fn steps(n: i64) -> Result<Steps, FactorialError> {
    if n < 0 {
        return Err(FactorialError::InvalidArgument(n));
    }

    Ok(Steps {
        next: 0,
        last: n as u64,
        partial: 1,
    })
}
