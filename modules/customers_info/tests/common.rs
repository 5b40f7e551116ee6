#![allow(dead_code)] // each test binary uses a different subset of helpers

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;

use customers_info::contract::model::{Customer, NewCustomer};
use customers_info::domain::service::{Service, ServiceConfig};
use customers_info::infra::storage::{self, migrations::Migrator, sea_orm_repo::SeaOrmCustomersRepository};

/// Fresh in-memory database with migrations applied, wrapped in a service.
pub async fn test_service() -> Arc<Service> {
    test_service_with_config(ServiceConfig::default()).await
}

pub async fn test_service_with_config(config: ServiceConfig) -> Arc<Service> {
    let db = storage::connect("sqlite::memory:")
        .await
        .expect("failed to connect to test database");
    Migrator::up(&db, None).await.expect("failed to run migrations");

    let repo = Arc::new(SeaOrmCustomersRepository::new(db));
    Arc::new(Service::new(repo, config))
}

pub fn new_customer(full_name: &str, last_name: &str, email: &str) -> NewCustomer {
    NewCustomer {
        full_name: full_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        active: None,
    }
}

pub async fn seed(
    svc: &Service,
    full_name: &str,
    last_name: &str,
    email: &str,
    active: bool,
) -> Customer {
    svc.create_customer(NewCustomer {
        full_name: full_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        active: Some(active),
    })
    .await
    .expect("seed customer")
}
