use crate::{CoreError, Operation};

use std::str::FromStr;

#[test]
fn test_operation_as_str() {
    assert_eq!(Operation::Add.as_str(), "add");
    assert_eq!(Operation::Subtract.as_str(), "subtract");
    assert_eq!(Operation::Multiply.as_str(), "multiply");
    assert_eq!(Operation::Divide.as_str(), "divide");
}

#[test]
fn test_operation_from_str() {
    assert_eq!(Operation::from_str("add").unwrap(), Operation::Add);
    assert_eq!(
        Operation::from_str("subtract").unwrap(),
        Operation::Subtract
    );
    assert_eq!(
        Operation::from_str("multiply").unwrap(),
        Operation::Multiply
    );
    assert_eq!(Operation::from_str("divide").unwrap(), Operation::Divide);
}

#[test]
fn test_operation_from_str_rejects_unknown_names() {
    assert!(matches!(
        Operation::from_str("square_root"),
        Err(CoreError::InvalidOperation { .. })
    ));
    // Names are exact: no case folding, no aliases
    assert!(Operation::from_str("Add").is_err());
    assert!(Operation::from_str("").is_err());
}

#[test]
fn test_apply_arithmetic() {
    assert_eq!(Operation::Add.apply(10.0, 20.0).unwrap(), 30.0);
    assert_eq!(Operation::Subtract.apply(10.0, 5.0).unwrap(), 5.0);
    assert_eq!(Operation::Multiply.apply(2.5, 4.0).unwrap(), 10.0);
    assert_eq!(Operation::Divide.apply(10.0, 4.0).unwrap(), 2.5);
}

#[test]
fn test_divide_by_exact_zero_is_an_error() {
    assert!(matches!(
        Operation::Divide.apply(10.0, 0.0),
        Err(CoreError::DivisionByZero { .. })
    ));
    // Negative zero compares equal to zero for f64
    assert!(Operation::Divide.apply(10.0, -0.0).is_err());
}

#[test]
fn test_divide_by_near_zero_is_not_an_error() {
    // Only an exactly-zero divisor triggers the dedicated error
    let result = Operation::Divide.apply(1.0, f64::MIN_POSITIVE).unwrap();
    assert!(result.is_finite());
    assert!(Operation::Divide.apply(1.0, 1e-300).is_ok());
}
