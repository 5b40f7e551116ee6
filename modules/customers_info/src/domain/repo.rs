use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::Customer;
use crate::domain::filter::CustomerFilter;

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait CustomersRepository: Send + Sync {
    /// Load a customer by id.
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Customer>>;
    /// Check uniqueness by email.
    async fn email_exists(&self, email: &str) -> anyhow::Result<bool>;
    /// Insert a fully-formed domain customer.
    ///
    /// Service computes id/created_at/defaults/validation; repo persists.
    async fn insert(&self, c: Customer) -> anyhow::Result<()>;
    /// Update an existing customer (by primary key in `c.id`).
    async fn update(&self, c: Customer) -> anyhow::Result<()>;
    /// Delete by id. Returns true if a row was deleted.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
    /// List with limit/offset pagination, ordered by creation date.
    async fn list(&self, limit: u32, offset: u32) -> anyhow::Result<Vec<Customer>>;
    /// Return every customer satisfying all of the filter's predicates.
    /// An empty filter matches every customer.
    async fn find_by_filter(&self, filter: &CustomerFilter) -> anyhow::Result<Vec<Customer>>;
}
