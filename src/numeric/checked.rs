// ============================================================================
// Checked Arithmetic
// Overflow-reporting i64 primitives shared by fractions and operations
// ============================================================================

use super::errors::{OperationError, OperationResult};

/// Checked addition.
///
/// # Errors
/// Returns `OperationOverflowed` if the sum leaves the i64 range.
#[inline]
pub fn checked_add(a: i64, b: i64) -> OperationResult<i64> {
    a.checked_add(b).ok_or(OperationError::OperationOverflowed)
}

/// Checked subtraction.
///
/// # Errors
/// Returns `OperationOverflowed` if the difference leaves the i64 range.
#[inline]
pub fn checked_sub(a: i64, b: i64) -> OperationResult<i64> {
    a.checked_sub(b).ok_or(OperationError::OperationOverflowed)
}

/// Checked multiplication.
///
/// # Errors
/// Returns `OperationOverflowed` if the product leaves the i64 range.
#[inline]
pub fn checked_mul(a: i64, b: i64) -> OperationResult<i64> {
    a.checked_mul(b).ok_or(OperationError::OperationOverflowed)
}

/// Greatest common divisor (Euclid). `gcd(0, n) == n`.
#[inline]
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple as `a / gcd(a, b) * b`.
///
/// The sign follows the product of the inputs. Zero if either input is zero.
///
/// # Errors
/// Returns `OperationOverflowed` if the multiple leaves the i64 range.
pub fn lcm(a: i64, b: i64) -> OperationResult<i64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }

    let divisor = gcd(a.unsigned_abs(), b.unsigned_abs());
    // divisor can only be 2^63 when a == b == i64::MIN
    let divisor = i64::try_from(divisor).map_err(|_| OperationError::OperationOverflowed)?;

    checked_mul(a / divisor, b)
}


#[cfg(test)]
mod quickchecks {
    use super::*;
    use quickcheck::quickcheck;

    quickcheck! {
        fn gcd_divides_both(a: u64, b: u64) -> bool {
            match gcd(a, b) {
                0 => a == 0 && b == 0,
                g => a % g == 0 && b % g == 0,
            }
        }

        fn gcd_is_symmetric(a: u64, b: u64) -> bool {
            gcd(a, b) == gcd(b, a)
        }

        fn checked_add_matches_wide_sum(a: i64, b: i64) -> bool {
            let wide = i128::from(a) + i128::from(b);
            match checked_add(a, b) {
                Ok(sum) => i128::from(sum) == wide,
                Err(_) => wide > i128::from(i64::MAX) || wide < i128::from(i64::MIN),
            }
        }
    }
}
