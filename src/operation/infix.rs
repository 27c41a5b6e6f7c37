// ============================================================================
// Infix Operation
// One binary operator applied to two fractions
// ============================================================================

use crate::numeric::checked::{checked_add, checked_mul, checked_sub};
use crate::numeric::{Fraction, OperationError, OperationResult};
use std::fmt;

/// Binary operator accepted between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Look up an operator from its token.
    ///
    /// # Errors
    /// - `EmptyString` if the token is empty
    /// - `InvalidOperator` for anything other than `+ - * /`
    pub fn from_token(token: &str) -> OperationResult<Self> {
        match token {
            "" => Err(OperationError::EmptyString),
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            other => Err(OperationError::InvalidOperator(other.to_string())),
        }
    }

    /// The token this operator is written as.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single `left op right` computation.
///
/// Evaluation never mutates the operands and does not simplify its result.
///
/// # Example
/// ```
/// use fraction_calculator::numeric::Fraction;
/// use fraction_calculator::operation::InfixOperation;
///
/// let op = InfixOperation::operation_for("+", Fraction::new(1, 2), Fraction::new(1, 3)).unwrap();
/// assert_eq!(op.evaluate().unwrap(), Fraction::new(5, 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfixOperation {
    Addition(Fraction, Fraction),
    Subtraction(Fraction, Fraction),
    Multiplication(Fraction, Fraction),
    Division(Fraction, Fraction),
}

impl InfixOperation {
    /// Build the operation named by `token`.
    ///
    /// # Errors
    /// - `EmptyString` if the token is empty
    /// - `InvalidOperator` (carrying the token) for anything other than `+ - * /`
    pub fn operation_for(token: &str, left: Fraction, right: Fraction) -> OperationResult<Self> {
        Ok(Self::new(Operator::from_token(token)?, left, right))
    }

    pub const fn new(operator: Operator, left: Fraction, right: Fraction) -> Self {
        match operator {
            Operator::Add => InfixOperation::Addition(left, right),
            Operator::Subtract => InfixOperation::Subtraction(left, right),
            Operator::Multiply => InfixOperation::Multiplication(left, right),
            Operator::Divide => InfixOperation::Division(left, right),
        }
    }

    pub const fn operator(&self) -> Operator {
        match self {
            InfixOperation::Addition(..) => Operator::Add,
            InfixOperation::Subtraction(..) => Operator::Subtract,
            InfixOperation::Multiplication(..) => Operator::Multiply,
            InfixOperation::Division(..) => Operator::Divide,
        }
    }

    /// Left and right operands.
    pub const fn operands(&self) -> (Fraction, Fraction) {
        match *self {
            InfixOperation::Addition(left, right)
            | InfixOperation::Subtraction(left, right)
            | InfixOperation::Multiplication(left, right)
            | InfixOperation::Division(left, right) => (left, right),
        }
    }

    /// Compute the result.
    ///
    /// # Errors
    /// - `OperationOverflowed` if any intermediate value leaves the i64 range
    /// - `DivisionByZero` if the divisor's numerator is zero
    pub fn evaluate(&self) -> OperationResult<Fraction> {
        match *self {
            InfixOperation::Addition(left, right) => add(left, right),
            InfixOperation::Subtraction(left, right) => subtract(left, right),
            InfixOperation::Multiplication(left, right) => multiply(left, right),
            InfixOperation::Division(left, right) => divide(left, right),
        }
    }
}

impl fmt::Display for InfixOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = self.operands();
        write!(f, "{} {} {}", left, self.operator(), right)
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

fn add(left: Fraction, right: Fraction) -> OperationResult<Fraction> {
    let (left, right) = left.commonify(right)?;
    let numerator = checked_add(left.numerator(), right.numerator())?;
    Ok(Fraction::new(numerator, left.denominator()))
}

fn subtract(left: Fraction, right: Fraction) -> OperationResult<Fraction> {
    let (left, right) = left.commonify(right)?;
    let numerator = checked_sub(left.numerator(), right.numerator())?;
    Ok(Fraction::new(numerator, left.denominator()))
}

fn multiply(left: Fraction, right: Fraction) -> OperationResult<Fraction> {
    let numerator = checked_mul(left.numerator(), right.numerator())?;
    let denominator = checked_mul(left.denominator(), right.denominator())?;
    Ok(Fraction::new(numerator, denominator))
}

fn divide(left: Fraction, right: Fraction) -> OperationResult<Fraction> {
    if right.is_zero() {
        return Err(OperationError::DivisionByZero);
    }
    multiply(left, right.reciprocal())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn f(numerator: i64, denominator: i64) -> Fraction {
        Fraction::new(numerator, denominator)
    }

    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    #[test]
    fn test_empty_operator() {
        let one = f(1, 1);
        assert_eq!(
            InfixOperation::operation_for("", one, one),
            Err(OperationError::EmptyString)
        );
    }

    #[test]
    fn test_invalid_operator() {
        let one = f(1, 1);
        assert_eq!(
            InfixOperation::operation_for("?", one, one),
            Err(OperationError::InvalidOperator("?".to_string()))
        );
        assert_eq!(
            InfixOperation::operation_for("++", one, one),
            Err(OperationError::InvalidOperator("++".to_string()))
        );
    }

    #[test]
    fn test_operator_lookup() {
        let one = f(1, 1);
        let half = f(1, 2);

        assert_eq!(
            InfixOperation::operation_for("+", one, half),
            Ok(InfixOperation::Addition(one, half))
        );
        assert_eq!(
            InfixOperation::operation_for("-", one, half),
            Ok(InfixOperation::Subtraction(one, half))
        );
        assert_eq!(
            InfixOperation::operation_for("*", one, half),
            Ok(InfixOperation::Multiplication(one, half))
        );
        assert_eq!(
            InfixOperation::operation_for("/", one, half),
            Ok(InfixOperation::Division(one, half))
        );
    }

    #[test]
    fn test_operator_and_operands() {
        let op = InfixOperation::Division(f(1, 2), f(3, 4));
        assert_eq!(op.operator(), Operator::Divide);
        assert_eq!(op.operands(), (f(1, 2), f(3, 4)));
        assert_eq!(op.to_string(), "1/2 / 3/4");

        let op = InfixOperation::new(Operator::Subtract, f(-5, 3), f(1, 1));
        assert_eq!(op, InfixOperation::Subtraction(f(-5, 3), f(1, 1)));
        assert_eq!(op.to_string(), "-1_2/3 - 1");
    }

    // ------------------------------------------------------------------------
    // Addition
    // ------------------------------------------------------------------------

    #[test]
    fn test_addition() {
        let op = InfixOperation::Addition(f(1, 1), f(1, 2));
        assert_eq!(op.evaluate(), Ok(f(3, 2)));

        let op = InfixOperation::Addition(f(1, 2), f(1, 3));
        assert_eq!(op.evaluate(), Ok(f(5, 6)));
    }

    #[test]
    fn test_addition_with_negatives() {
        let op = InfixOperation::Addition(f(1, 1), f(-1, 2));
        assert_eq!(op.evaluate(), Ok(f(1, 2)));

        let op = InfixOperation::Addition(f(-1, 1), f(-1, 2));
        assert_eq!(op.evaluate(), Ok(f(-3, 2)));
    }

    #[test]
    fn test_addition_overflow() {
        let op = InfixOperation::Addition(f(i64::MAX, 1), f(1, 1));
        assert_eq!(op.evaluate(), Err(OperationError::OperationOverflowed));

        let op = InfixOperation::Addition(f(i64::MIN, 1), f(-1, 1));
        assert_eq!(op.evaluate(), Err(OperationError::OperationOverflowed));
    }

    #[test]
    fn test_addition_commonify_overflow() {
        let op = InfixOperation::Addition(f(i64::MAX, 2), f(1, 3));
        assert_eq!(op.evaluate(), Err(OperationError::OperationOverflowed));
    }

    // ------------------------------------------------------------------------
    // Subtraction
    // ------------------------------------------------------------------------

    #[test]
    fn test_subtraction() {
        let op = InfixOperation::Subtraction(f(2, 1), f(1, 2));
        assert_eq!(op.evaluate(), Ok(f(3, 2)));

        let op = InfixOperation::Subtraction(f(2, 1), f(-1, 2));
        assert_eq!(op.evaluate(), Ok(f(5, 2)));

        let op = InfixOperation::Subtraction(f(5, 3), f(5, 2));
        assert_eq!(op.evaluate(), Ok(f(-5, 6)));
    }

    #[test]
    fn test_subtraction_overflow() {
        let op = InfixOperation::Subtraction(f(i64::MAX, 1), f(-1, 1));
        assert_eq!(op.evaluate(), Err(OperationError::OperationOverflowed));

        let op = InfixOperation::Subtraction(f(i64::MIN, 1), f(1, 1));
        assert_eq!(op.evaluate(), Err(OperationError::OperationOverflowed));
    }

    // ------------------------------------------------------------------------
    // Multiplication
    // ------------------------------------------------------------------------

    #[test]
    fn test_multiplication() {
        let op = InfixOperation::Multiplication(f(3, 1), f(1, 2));
        assert_eq!(op.evaluate(), Ok(f(3, 2)));

        let op = InfixOperation::Multiplication(f(-2, 3), f(3, 4));
        assert_eq!(op.evaluate(), Ok(f(-6, 12)));
    }

    #[test]
    fn test_multiplication_overflow() {
        let op = InfixOperation::Multiplication(f(i64::MAX, 1), f(2, 1));
        assert_eq!(op.evaluate(), Err(OperationError::OperationOverflowed));

        let op = InfixOperation::Multiplication(f(1, i64::MAX), f(1, 2));
        assert_eq!(op.evaluate(), Err(OperationError::OperationOverflowed));
    }

    // ------------------------------------------------------------------------
    // Division
    // ------------------------------------------------------------------------

    #[test]
    fn test_division() {
        let op = InfixOperation::Division(f(1, 2), f(1, 4));
        assert_eq!(op.evaluate(), Ok(f(4, 2)));

        let op = InfixOperation::Division(f(1, 2), f(-1, 4));
        assert_eq!(op.evaluate(), Ok(f(4, -2)));
        assert_eq!(op.evaluate().map(Fraction::simplify), Ok(f(-2, 1)));
    }

    #[test]
    fn test_division_by_zero() {
        let op = InfixOperation::Division(f(1, 1), f(0, 1));
        assert_eq!(op.evaluate(), Err(OperationError::DivisionByZero));

        let op = InfixOperation::Division(f(1, 1), f(0, -7));
        assert_eq!(op.evaluate(), Err(OperationError::DivisionByZero));
    }

    #[test]
    fn test_division_overflow() {
        let op = InfixOperation::Division(f(i64::MAX, 1), f(1, 2));
        assert_eq!(op.evaluate(), Err(OperationError::OperationOverflowed));
    }

    #[test]
    fn test_evaluate_does_not_consume_operands() {
        let op = InfixOperation::Addition(f(1, 2), f(1, 2));
        assert_eq!(op.evaluate(), Ok(f(2, 2)));
        assert_eq!(op.evaluate(), Ok(f(2, 2)));
        assert_eq!(op.operands(), (f(1, 2), f(1, 2)));
    }
}
