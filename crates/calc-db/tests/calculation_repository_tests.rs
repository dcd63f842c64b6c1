//! Integration tests for CalculationRepository

mod common;

use crate::common::create_test_pool;

use calc_core::{Calculation, Operation};
use calc_db::CalculationRepository;

use uuid::Uuid;

#[tokio::test]
async fn test_create_and_find_by_id() {
    let pool = create_test_pool().await;
    let repo = CalculationRepository::new(pool);

    let calc = Calculation::new(Operation::Add, 10.0, 20.0).unwrap();
    repo.create(&calc).await.unwrap();

    let found = repo.find_by_id(calc.id).await.unwrap().unwrap();
    assert_eq!(found.operation, Operation::Add);
    assert_eq!(found.a, 10.0);
    assert_eq!(found.b, 20.0);
    assert_eq!(found.result, 30.0);
}

#[tokio::test]
async fn test_find_by_unknown_id_is_none() {
    let pool = create_test_pool().await;
    let repo = CalculationRepository::new(pool);

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_all_returns_every_record() {
    let pool = create_test_pool().await;
    let repo = CalculationRepository::new(pool);

    repo.create(&Calculation::new(Operation::Add, 1.0, 2.0).unwrap())
        .await
        .unwrap();
    repo.create(&Calculation::new(Operation::Subtract, 10.0, 5.0).unwrap())
        .await
        .unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let pool = create_test_pool().await;
    let repo = CalculationRepository::new(pool);

    let mut calc = Calculation::new(Operation::Add, 1.0, 2.0).unwrap();
    repo.create(&calc).await.unwrap();

    calc.replace(Operation::Divide, 10.0, 4.0).unwrap();
    repo.update(&calc).await.unwrap();

    let found = repo.find_by_id(calc.id).await.unwrap().unwrap();
    assert_eq!(found.operation, Operation::Divide);
    assert_eq!(found.a, 10.0);
    assert_eq!(found.b, 4.0);
    assert_eq!(found.result, 2.5);
}

#[tokio::test]
async fn test_delete_reports_missing_rows() {
    let pool = create_test_pool().await;
    let repo = CalculationRepository::new(pool);

    let calc = Calculation::new(Operation::Multiply, 3.0, 4.0).unwrap();
    repo.create(&calc).await.unwrap();

    assert!(repo.delete(calc.id).await.unwrap());
    assert!(repo.find_by_id(calc.id).await.unwrap().is_none());

    // Second delete finds nothing
    assert!(!repo.delete(calc.id).await.unwrap());
}

#[tokio::test]
async fn test_round_trip_preserves_float_operands() {
    let pool = create_test_pool().await;
    let repo = CalculationRepository::new(pool);

    let calc = Calculation::new(Operation::Divide, 1.5, 0.3).unwrap();
    repo.create(&calc).await.unwrap();

    let found = repo.find_by_id(calc.id).await.unwrap().unwrap();
    assert_eq!(found.a, 1.5);
    assert_eq!(found.b, 0.3);
    assert_eq!(found.result, calc.result);
}
