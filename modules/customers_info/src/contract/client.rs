use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::{Customer, CustomerFilterInput, CustomerPatch, NewCustomer};

/// Public API trait for the customers_info module that other modules can use
#[async_trait]
pub trait CustomersApi: Send + Sync {
    /// Get a customer by ID
    async fn get_customer(&self, id: Uuid) -> anyhow::Result<Customer>;

    /// List customers with optional pagination
    async fn list_customers(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> anyhow::Result<Vec<Customer>>;

    /// Search customers matching every supplied filter field.
    ///
    /// An input with no fields set matches every customer.
    async fn search_customers(&self, input: CustomerFilterInput) -> anyhow::Result<Vec<Customer>>;

    /// Create a new customer
    async fn create_customer(&self, new_customer: NewCustomer) -> anyhow::Result<Customer>;

    /// Update a customer with partial data
    async fn update_customer(&self, id: Uuid, patch: CustomerPatch) -> anyhow::Result<Customer>;

    /// Delete a customer by ID
    async fn delete_customer(&self, id: Uuid) -> anyhow::Result<()>;
}
