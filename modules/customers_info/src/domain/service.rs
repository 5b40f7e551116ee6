use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{Customer, CustomerPatch, NewCustomer};
use crate::domain::error::{DomainError, Violation};
use crate::domain::filter::{CustomerFilter, CustomerFilterInput};
use crate::domain::repo::CustomersRepository;

/// Domain service with business rules for customer management.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn CustomersRepository>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub full_name_min_len: usize,
    pub full_name_max_len: usize,
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            full_name_min_len: 5,
            full_name_max_len: 10,
            default_page_size: 50,
            max_page_size: 1000,
        }
    }
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(repo: Arc<dyn CustomersRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    /// Page size actually applied to a list request, after defaulting and
    /// clamping against the configured maximum.
    pub fn effective_page_size(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.config.default_page_size)
            .min(self.config.max_page_size)
    }

    #[instrument(name = "customers_info.service.get_customer", skip(self), fields(customer_id = %id))]
    pub async fn get_customer(&self, id: Uuid) -> Result<Customer, DomainError> {
        debug!("Getting customer by id");

        let customer = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::storage("load", e))?
            .ok_or_else(|| DomainError::customer_not_found(id))?;
        debug!("Successfully retrieved customer");
        Ok(customer)
    }

    /// List customers with limit/offset pagination.
    #[instrument(name = "customers_info.service.list_customers", skip(self))]
    pub async fn list_customers(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Customer>, DomainError> {
        debug!("Listing customers");

        let limit = self.effective_page_size(limit);
        let customers = self
            .repo
            .list(limit, offset.unwrap_or(0))
            .await
            .map_err(|e| DomainError::storage("load", e))?;

        debug!("Successfully listed {} customers", customers.len());
        Ok(customers)
    }

    /// Search customers matching every supplied filter field.
    ///
    /// Raw inputs are normalized into a [`CustomerFilter`] first; the storage
    /// layer conjoins one predicate per present field. No fields supplied
    /// means no constraints: the full customer set comes back.
    #[instrument(name = "customers_info.service.search_customers", skip(self, input))]
    pub async fn search_customers(
        &self,
        input: CustomerFilterInput,
    ) -> Result<Vec<Customer>, DomainError> {
        let filter = CustomerFilter::normalize(input);
        debug!(
            predicates = filter.predicates().len(),
            "Searching customers"
        );

        let customers = self
            .repo
            .find_by_filter(&filter)
            .await
            .map_err(|e| DomainError::storage("search", e))?;

        debug!("Search matched {} customers", customers.len());
        Ok(customers)
    }

    #[instrument(
        name = "customers_info.service.create_customer",
        skip(self),
        fields(email = %new_customer.email)
    )]
    pub async fn create_customer(
        &self,
        new_customer: NewCustomer,
    ) -> Result<Customer, DomainError> {
        info!("Creating new customer");

        // Validate input
        let violations = self.validate_new_customer(&new_customer);
        if !violations.is_empty() {
            return Err(DomainError::validation(violations));
        }

        // Check uniqueness; the unique index on email remains the authority
        // under concurrent creates.
        if self
            .repo
            .email_exists(&new_customer.email)
            .await
            .map_err(|e| DomainError::storage("load", e))?
        {
            return Err(DomainError::email_already_exists(new_customer.email));
        }

        let customer = Customer {
            id: Uuid::new_v4(),
            full_name: new_customer.full_name,
            last_name: new_customer.last_name,
            email: new_customer.email,
            created_at: Utc::now().date_naive(),
            active: new_customer.active.unwrap_or(true),
        };

        self.repo
            .insert(customer.clone())
            .await
            .map_err(|e| DomainError::storage("insert", e))?;

        info!("Successfully created customer with id={}", customer.id);
        Ok(customer)
    }

    #[instrument(
        name = "customers_info.service.update_customer",
        skip(self),
        fields(customer_id = %id)
    )]
    pub async fn update_customer(
        &self,
        id: Uuid,
        patch: CustomerPatch,
    ) -> Result<Customer, DomainError> {
        info!("Updating customer");

        // Validate patch
        let violations = self.validate_customer_patch(&patch);
        if !violations.is_empty() {
            return Err(DomainError::validation(violations));
        }

        // Load current
        let mut current = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::storage("load", e))?
            .ok_or_else(|| DomainError::customer_not_found(id))?;

        // Uniqueness for email change
        if let Some(ref new_email) = patch.email {
            if new_email != &current.email
                && self
                    .repo
                    .email_exists(new_email)
                    .await
                    .map_err(|e| DomainError::storage("load", e))?
            {
                return Err(DomainError::email_already_exists(new_email.clone()));
            }
        }

        // Apply patch
        if let Some(full_name) = patch.full_name {
            current.full_name = full_name;
        }
        if let Some(last_name) = patch.last_name {
            current.last_name = last_name;
        }
        if let Some(email) = patch.email {
            current.email = email;
        }
        if let Some(created_at) = patch.created_at {
            current.created_at = created_at;
        }
        if let Some(active) = patch.active {
            current.active = active;
        }

        // Persist
        self.repo
            .update(current.clone())
            .await
            .map_err(|e| DomainError::storage("update", e))?;

        info!("Successfully updated customer");
        Ok(current)
    }

    #[instrument(
        name = "customers_info.service.delete_customer",
        skip(self),
        fields(customer_id = %id)
    )]
    pub async fn delete_customer(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting customer");

        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DomainError::storage("delete", e))?;

        // A delete that removed nothing is an error, never a silent success.
        if !deleted {
            return Err(DomainError::customer_not_found(id));
        }

        info!("Successfully deleted customer");
        Ok(())
    }

    // --- validation helpers ---
    //
    // Each helper collects every field violation instead of stopping at the
    // first, so callers can report the complete list.

    fn validate_new_customer(&self, new_customer: &NewCustomer) -> Vec<Violation> {
        let mut violations = Vec::new();
        self.check_full_name(&new_customer.full_name, &mut violations);
        self.check_last_name(&new_customer.last_name, &mut violations);
        self.check_email(&new_customer.email, &mut violations);
        violations
    }

    fn validate_customer_patch(&self, patch: &CustomerPatch) -> Vec<Violation> {
        let mut violations = Vec::new();
        if let Some(ref full_name) = patch.full_name {
            self.check_full_name(full_name, &mut violations);
        }
        if let Some(ref last_name) = patch.last_name {
            self.check_last_name(last_name, &mut violations);
        }
        if let Some(ref email) = patch.email {
            self.check_email(email, &mut violations);
        }
        violations
    }

    fn check_full_name(&self, full_name: &str, violations: &mut Vec<Violation>) {
        if full_name.trim().is_empty() {
            violations.push(Violation::new("full_name", "must not be empty"));
            return;
        }
        let len = full_name.chars().count();
        if len < self.config.full_name_min_len || len > self.config.full_name_max_len {
            violations.push(Violation::new(
                "full_name",
                format!(
                    "must be between {} and {} characters",
                    self.config.full_name_min_len, self.config.full_name_max_len
                ),
            ));
        }
    }

    fn check_last_name(&self, last_name: &str, violations: &mut Vec<Violation>) {
        if last_name.trim().is_empty() {
            violations.push(Violation::new("last_name", "must not be empty"));
        }
    }

    fn check_email(&self, email: &str, violations: &mut Vec<Violation>) {
        if email.trim().is_empty() {
            violations.push(Violation::new("email", "must not be empty"));
        } else if !email.contains('@') || !email.contains('.') {
            violations.push(Violation::new(
                "email",
                "must be a well-formed email address",
            ));
        }
    }
}
