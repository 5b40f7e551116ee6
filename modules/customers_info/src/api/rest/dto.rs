use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contract::model::{Customer, CustomerPatch, NewCustomer};
use crate::domain::filter::CustomerFilterInput;

/// REST DTO for customer representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: Uuid,
    pub full_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: NaiveDate,
    pub active: bool,
}

/// REST DTO for creating a new customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCustomerReq {
    pub full_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub active: Option<bool>,
}

/// REST DTO for updating a customer (partial)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateCustomerReq {
    pub full_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<NaiveDate>,
    pub active: Option<bool>,
}

/// REST DTO for customer list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerListDto {
    pub customers: Vec<CustomerDto>,
    pub total: usize,
    pub limit: u32,
    pub offset: u32,
}

/// REST DTO for list query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ListCustomersQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// REST DTO for search query parameters.
///
/// Every field is optional; parameters with names not listed here are
/// ignored by deserialization, so an unrecognized filter field is a no-op.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchCustomersQuery {
    pub id: Option<Uuid>,
    pub full_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
}

// Conversion implementations between REST DTOs and contract/domain models

impl From<Customer> for CustomerDto {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            full_name: c.full_name,
            last_name: c.last_name,
            email: c.email,
            created_at: c.created_at,
            active: c.active,
        }
    }
}

impl From<CreateCustomerReq> for NewCustomer {
    fn from(req: CreateCustomerReq) -> Self {
        Self {
            full_name: req.full_name,
            last_name: req.last_name,
            email: req.email,
            active: req.active,
        }
    }
}

impl From<UpdateCustomerReq> for CustomerPatch {
    fn from(req: UpdateCustomerReq) -> Self {
        Self {
            full_name: req.full_name,
            last_name: req.last_name,
            email: req.email,
            created_at: req.created_at,
            active: req.active,
        }
    }
}

impl From<SearchCustomersQuery> for CustomerFilterInput {
    fn from(q: SearchCustomersQuery) -> Self {
        Self {
            id: q.id,
            full_name: q.full_name,
            last_name: q.last_name,
            email: q.email,
            active: q.active,
        }
    }
}
