use crate::{Calculation, CoreError, Operation};

#[test]
fn test_new_computes_result() {
    let calc = Calculation::new(Operation::Add, 10.0, 20.0).unwrap();
    assert_eq!(calc.result, 30.0);
    assert_eq!(calc.operation, Operation::Add);
    assert_eq!(calc.created_at, calc.updated_at);
}

#[test]
fn test_new_divide_by_zero_creates_nothing() {
    assert!(matches!(
        Calculation::new(Operation::Divide, 10.0, 0.0),
        Err(CoreError::DivisionByZero { .. })
    ));
}

#[test]
fn test_replace_recomputes_result() {
    let mut calc = Calculation::new(Operation::Add, 1.0, 2.0).unwrap();
    calc.replace(Operation::Multiply, 3.0, 4.0).unwrap();

    assert_eq!(calc.operation, Operation::Multiply);
    assert_eq!(calc.a, 3.0);
    assert_eq!(calc.b, 4.0);
    assert_eq!(calc.result, 12.0);
    assert!(calc.updated_at >= calc.created_at);
}

#[test]
fn test_replace_failure_leaves_record_unchanged() {
    let mut calc = Calculation::new(Operation::Add, 1.0, 2.0).unwrap();
    let before = calc.clone();

    assert!(calc.replace(Operation::Divide, 5.0, 0.0).is_err());
    assert_eq!(calc, before);
}
