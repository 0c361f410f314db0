use std::fmt;

use crate::factorial::{FactorialError, factorial};

/// A computed factorial together with a few facts about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub value: u64,
    /// Number of decimal digits of `value`
    pub digits: u32,
    /// Number of trailing zeros of n!, counted from n itself
    pub trailing_zeros: u64,
}

impl Summary {
    pub fn compute(n: i64) -> Result<Self, FactorialError> {
        let value = factorial(n)?;

        Ok(Summary {
            value,
            digits: digit_count(value),
            trailing_zeros: trailing_zeros(n)?,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "digits: {}, trailing zeros of n!: {}",
            self.digits, self.trailing_zeros
        )
    }
}

/// Number of trailing zeros of n! (Legendre's formula for the prime 5).
///
/// This does not look at the product, so it stays exact for inputs whose
/// factorial no longer fits in 64 bits.
pub fn trailing_zeros(n: i64) -> Result<u64, FactorialError> {
    if n < 0 {
        return Err(FactorialError::InvalidArgument(n));
    }

    let n = n as u64;
    let mut count = 0;
    let mut power: u64 = 5;

    while power <= n {
        count += n / power;

        match power.checked_mul(5) {
            Some(next) => power = next,
            None => break,
        }
    }

    Ok(count)
}

/// Formats `value` with a comma between each group of three digits
/// ("3,628,800").
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// Number of decimal digits needed to print `value`.
pub fn digit_count(value: u64) -> u32 {
    match value.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}
