use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::CustomersApi,
    error::CustomersInfoError,
    model::{Customer, CustomerPatch, NewCustomer},
};
use crate::domain::filter::CustomerFilterInput;
use crate::domain::{error::DomainError, service::Service};

/// Local implementation of the CustomersApi trait that delegates to the
/// domain service
pub struct CustomersLocalClient {
    service: Arc<Service>,
}

impl CustomersLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CustomersApi for CustomersLocalClient {
    async fn get_customer(&self, id: Uuid) -> anyhow::Result<Customer> {
        self.service
            .get_customer(id)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn list_customers(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> anyhow::Result<Vec<Customer>> {
        self.service
            .list_customers(limit, offset)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn search_customers(&self, input: CustomerFilterInput) -> anyhow::Result<Vec<Customer>> {
        self.service
            .search_customers(input)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn create_customer(&self, new_customer: NewCustomer) -> anyhow::Result<Customer> {
        self.service
            .create_customer(new_customer)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn update_customer(&self, id: Uuid, patch: CustomerPatch) -> anyhow::Result<Customer> {
        self.service
            .update_customer(id, patch)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn delete_customer(&self, id: Uuid) -> anyhow::Result<()> {
        self.service
            .delete_customer(id)
            .await
            .map_err(map_domain_error_to_anyhow)
    }
}

/// Map domain errors to contract errors wrapped in anyhow
fn map_domain_error_to_anyhow(domain_error: DomainError) -> anyhow::Error {
    let contract_error = match domain_error {
        DomainError::CustomerNotFound { id } => CustomersInfoError::not_found(id),
        DomainError::EmailAlreadyExists { email } => CustomersInfoError::conflict(email),
        DomainError::Validation { violations } => {
            CustomersInfoError::validation(violations.iter().map(|v| v.to_string()).collect())
        }
        DomainError::Storage { .. } => CustomersInfoError::internal(),
    };

    anyhow::Error::new(contract_error)
}
