//! End-to-end properties of the filtered search against a real store.

mod common;

use std::collections::HashSet;

use uuid::Uuid;

use common::{seed, test_service};
use customers_info::domain::filter::CustomerFilterInput;

#[tokio::test]
async fn empty_filter_returns_every_customer() {
    let svc = test_service().await;
    seed(&svc, "Joanna", "Reyes", "joanna@example.com", true).await;
    seed(&svc, "Hannah", "Smith", "hannah@example.com", false).await;
    seed(&svc, "ANNIE", "Stone", "annie@example.com", true).await;

    let found = svc
        .search_customers(CustomerFilterInput::default())
        .await
        .unwrap();

    assert_eq!(found.len(), 3);
}

#[tokio::test]
async fn active_filter_returns_exactly_the_matching_subset() {
    let svc = test_service().await;
    let a = seed(&svc, "Joanna", "Reyes", "joanna@example.com", true).await;
    seed(&svc, "Hannah", "Smith", "hannah@example.com", false).await;
    let c = seed(&svc, "ANNIE", "Stone", "annie@example.com", true).await;

    let found = svc
        .search_customers(CustomerFilterInput {
            active: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();

    let ids: HashSet<Uuid> = found.iter().map(|c| c.id).collect();
    assert_eq!(ids, HashSet::from([a.id, c.id]));
}

#[tokio::test]
async fn active_false_is_a_real_constraint() {
    let svc = test_service().await;
    seed(&svc, "Joanna", "Reyes", "joanna@example.com", true).await;
    let b = seed(&svc, "Hannah", "Smith", "hannah@example.com", false).await;

    let found = svc
        .search_customers(CustomerFilterInput {
            active: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, b.id);
}

#[tokio::test]
async fn full_name_filter_is_a_case_sensitive_substring_match() {
    let svc = test_service().await;
    let joanna = seed(&svc, "Joanna", "Reyes", "joanna@example.com", true).await;
    let hannah = seed(&svc, "Hannah", "Smith", "hannah@example.com", true).await;
    // Upper-case: must not match a lower-case needle
    seed(&svc, "ANNIE", "Stone", "annie@example.com", true).await;

    let found = svc
        .search_customers(CustomerFilterInput {
            full_name: Some("ann".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let ids: HashSet<Uuid> = found.iter().map(|c| c.id).collect();
    assert_eq!(ids, HashSet::from([joanna.id, hannah.id]));
}

#[tokio::test]
async fn id_filter_matches_exactly_one_customer() {
    let svc = test_service().await;
    seed(&svc, "Joanna", "Reyes", "joanna@example.com", true).await;
    let b = seed(&svc, "Hannah", "Smith", "hannah@example.com", true).await;

    let found = svc
        .search_customers(CustomerFilterInput {
            id: Some(b.id),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0], b);

    let none = svc
        .search_customers(CustomerFilterInput {
            id: Some(Uuid::new_v4()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn last_name_and_active_scenario() {
    // A(lastName="Smithson", active=false), B(lastName="Smith", active=true),
    // C(lastName="Smith", active=false) with filter {lastName: "Smith",
    // active: false}. "Smithson" contains "Smith" as a substring, so the
    // active flag is what excludes A's companions, not the name alone.
    let svc = test_service().await;
    let a = seed(&svc, "Arthur", "Smithson", "arthur@example.com", false).await;
    seed(&svc, "Bella", "Smith", "bella@example.com", true).await;
    let c = seed(&svc, "Carla", "Smith", "carla@example.com", false).await;

    let found = svc
        .search_customers(CustomerFilterInput {
            last_name: Some("Smith".to_string()),
            active: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();

    let ids: HashSet<Uuid> = found.iter().map(|c| c.id).collect();
    assert_eq!(ids, HashSet::from([a.id, c.id]));
}

#[tokio::test]
async fn exact_last_name_and_active_returns_single_row() {
    // Same population, but an email filter narrows to one record.
    let svc = test_service().await;
    seed(&svc, "Arthur", "Smithson", "arthur@example.com", false).await;
    seed(&svc, "Bella", "Smith", "bella@example.com", true).await;
    let c = seed(&svc, "Carla", "Smith", "carla@example.com", false).await;

    let found = svc
        .search_customers(CustomerFilterInput {
            last_name: Some("Smith".to_string()),
            email: Some("carla".to_string()),
            active: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, c.id);
}

#[tokio::test]
async fn conjunction_equals_intersection_of_single_field_results() {
    let svc = test_service().await;
    seed(&svc, "Joanna", "Smith", "joanna@example.com", true).await;
    seed(&svc, "Hannah", "Smith", "hannah@example.com", false).await;
    seed(&svc, "ANNIE", "Smithson", "annie@example.com", false).await;
    seed(&svc, "Brian", "Jones", "brian@example.com", false).await;

    let by_last_name: HashSet<Uuid> = svc
        .search_customers(CustomerFilterInput {
            last_name: Some("Smith".to_string()),
            ..Default::default()
        })
        .await
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();

    let by_active: HashSet<Uuid> = svc
        .search_customers(CustomerFilterInput {
            active: Some(false),
            ..Default::default()
        })
        .await
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();

    let combined: HashSet<Uuid> = svc
        .search_customers(CustomerFilterInput {
            last_name: Some("Smith".to_string()),
            active: Some(false),
            ..Default::default()
        })
        .await
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();

    let intersection: HashSet<Uuid> = by_last_name.intersection(&by_active).copied().collect();
    assert_eq!(combined, intersection);
    assert_eq!(combined.len(), 2);
}
