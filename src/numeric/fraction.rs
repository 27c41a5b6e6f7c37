// ============================================================================
// Fraction
// Exact rational value over i64 with mixed-number parsing and display
// ============================================================================

use super::checked::{checked_mul, gcd, lcm};
use super::errors::{
    FractionError, FractionResult, NumericComponent, OperationError, OperationResult,
};
use std::fmt;
use std::str::FromStr;

/// Exact rational number `numerator / denominator`.
///
/// The sign lives in the numerator for every value produced by parsing or
/// [`simplify`](Fraction::simplify). Values are immutable: every operation
/// returns a new `Fraction`.
///
/// # Literal Grammar
/// - `W`     whole number, e.g. `-3`
/// - `N/D`   proper or improper fraction, e.g. `7/2`
/// - `W_N/D` mixed number, e.g. `-1_2/3` (the whole part's sign covers the
///   fractional part)
///
/// # Example
/// ```
/// use fraction_calculator::numeric::Fraction;
///
/// let x: Fraction = "1_2/3".parse().unwrap();
/// assert_eq!(x, Fraction::new(5, 3));
/// assert_eq!(x.to_string(), "1_2/3");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Zero (0/1)
    pub const ZERO: Self = Self::new(0, 1);

    /// One (1/1)
    pub const ONE: Self = Self::new(1, 1);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw numerator and denominator.
    ///
    /// No validation or reduction happens here; use [`try_new`](Self::try_new)
    /// for values coming from outside the crate.
    #[inline]
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Create from numerator and denominator, rejecting a zero denominator.
    ///
    /// # Errors
    /// Returns `Invalid(Denominator)` if `denominator` is zero.
    #[inline]
    pub fn try_new(numerator: i64, denominator: i64) -> FractionResult<Self> {
        if denominator == 0 {
            return Err(FractionError::Invalid(NumericComponent::Denominator));
        }
        Ok(Self::new(numerator, denominator))
    }

    /// Create a whole number (`value/1`).
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self::new(value, 1)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    #[inline]
    pub const fn denominator(self) -> i64 {
        self.denominator
    }

    /// Integer part, truncated toward zero.
    ///
    /// `None` for a zero denominator or when the quotient is not
    /// representable (`i64::MIN / -1`).
    #[inline]
    pub const fn whole_part(self) -> Option<i64> {
        self.numerator.checked_div(self.denominator)
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.numerator == 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.numerator != 0 && ((self.numerator < 0) != (self.denominator < 0))
    }

    /// Swap numerator and denominator.
    #[inline]
    pub const fn reciprocal(self) -> Self {
        Self::new(self.denominator, self.numerator)
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    /// Reduce to lowest terms.
    ///
    /// Divides both parts by their greatest common divisor and moves a
    /// negative denominator's sign onto the numerator. `0/0` is returned
    /// unchanged.
    pub fn simplify(self) -> Self {
        let divisor = gcd(self.numerator.unsigned_abs(), self.denominator.unsigned_abs());
        if divisor == 0 {
            return self;
        }

        // i128 because the divisor reaches 2^63 when both parts are i64::MIN or zero
        let divisor = i128::from(divisor);
        let numerator = i128::from(self.numerator) / divisor;
        let denominator = i128::from(self.denominator) / divisor;

        let (signed_numerator, signed_denominator) = if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        match (
            i64::try_from(signed_numerator),
            i64::try_from(signed_denominator),
        ) {
            (Ok(n), Ok(d)) => Self::new(n, d),
            // i64::MIN over a negative denominator keeps its signs; the reduced
            // pair always fits since division never grows a magnitude
            _ => Self::new(numerator as i64, denominator as i64),
        }
    }

    /// Convert both fractions to their least common denominator.
    ///
    /// Returns the inputs unchanged when the denominators already match. A
    /// zero denominator on one side becomes a zero numerator over the other
    /// side's denominator.
    ///
    /// # Errors
    /// Returns `OperationOverflowed` if the common denominator or a scaled
    /// numerator leaves the i64 range.
    pub fn commonify(self, other: Self) -> OperationResult<(Self, Self)> {
        if self.denominator == other.denominator {
            return Ok((self, other));
        }
        if self.denominator == 0 {
            return Ok((Self::new(0, other.denominator), other));
        }
        if other.denominator == 0 {
            return Ok((self, Self::new(0, self.denominator)));
        }

        let common = lcm(self.denominator, other.denominator)?;
        Ok((self.scale_to(common)?, other.scale_to(common)?))
    }

    fn scale_to(self, denominator: i64) -> OperationResult<Self> {
        let factor = denominator
            .checked_div(self.denominator)
            .ok_or(OperationError::OperationOverflowed)?;
        Ok(Self::new(checked_mul(self.numerator, factor)?, denominator))
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render as an improper fraction (`n/d`, or `n` when `d == 1`).
    ///
    /// The mixed-number form is the `Display` implementation.
    pub fn to_improper_string(self) -> String {
        if self.denominator == 1 {
            self.numerator.to_string()
        } else {
            format!("{}/{}", self.numerator, self.denominator)
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Fraction {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Fraction {
    /// Mixed-number form: `-1_2/3`, `1/2`, `4`, `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numerator = self.numerator.unsigned_abs();
        let denominator = self.denominator.unsigned_abs();

        if numerator == 0 {
            return write!(f, "0");
        }
        if self.is_negative() {
            write!(f, "-")?;
        }
        if denominator == 0 {
            return write!(f, "{}/0", numerator);
        }

        let whole = numerator / denominator;
        let remainder = numerator % denominator;

        if whole != 0 {
            write!(f, "{}", whole)?;
            if remainder != 0 {
                write!(f, "_")?;
            }
        }
        if remainder != 0 {
            write!(f, "{}/{}", remainder, denominator)?;
        }
        Ok(())
    }
}

// ============================================================================
// String Parsing
// ============================================================================

/// Parse one `-?\d+` component of a literal.
fn parse_component(token: &str, component: NumericComponent) -> FractionResult<i64> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FractionError::Invalid(component));
    }

    token
        .parse()
        .map_err(|_| FractionError::OutOfBounds(component))
}

fn parse_denominator(token: &str) -> FractionResult<i64> {
    match parse_component(token, NumericComponent::Denominator)? {
        0 => Err(FractionError::Invalid(NumericComponent::Denominator)),
        denominator => Ok(denominator),
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    /// Parse from a `W`, `N/D` or `W_N/D` literal.
    ///
    /// # Examples
    /// - "3" -> 3/1
    /// - "-1/2" -> -1/2
    /// - "-1_2/3" -> -5/3
    ///
    /// # Panics
    /// If the literal has more than two `_`/`/` separators. Callers hand in
    /// single whitespace-free operands, for which this cannot happen.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FractionError::EmptyString);
        }

        let parts: Vec<&str> = s.split(|c: char| c == '_' || c == '/').collect();

        match parts.as_slice() {
            [whole] => Ok(Self::from_integer(parse_component(
                whole,
                NumericComponent::Whole,
            )?)),
            [numerator, denominator] => {
                let numerator = parse_component(numerator, NumericComponent::Numerator)?;
                let denominator = parse_denominator(denominator)?;
                Ok(Self::new(numerator, denominator))
            },
            [whole_token, numerator, denominator] => {
                let whole = parse_component(whole_token, NumericComponent::Whole)?;
                let numerator = parse_component(numerator, NumericComponent::Numerator)?;
                let denominator = parse_denominator(denominator)?;

                let out_of_bounds = FractionError::OutOfBounds(NumericComponent::Whole);
                let scaled = whole.checked_mul(denominator).ok_or(out_of_bounds)?;

                // "-0_1/2" keeps its sign even though the scaled whole part is zero
                let negative = scaled < 0 || (scaled == 0 && whole_token.starts_with('-'));
                let combined = if negative {
                    scaled.checked_sub(numerator)
                } else {
                    scaled.checked_add(numerator)
                };

                Ok(Self::new(combined.ok_or(out_of_bounds)?, denominator))
            },
            _ => unreachable!(
                "fraction literal {:?} split into {} parts, expected 1, 2 or 3",
                s,
                parts.len()
            ),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
