use chrono::NaiveDate;
use uuid::Uuid;

/// Pure customer model for inter-module communication (no serde)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: Uuid,
    pub full_name: String,
    pub last_name: String,
    pub email: String,
    /// Creation date; set once at creation, changed only by an explicit update.
    pub created_at: NaiveDate,
    pub active: bool,
}

/// Data for creating a new customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub full_name: String,
    pub last_name: String,
    pub email: String,
    /// `None` means "use the default" (`true`), not "inactive".
    pub active: Option<bool>,
}

/// Partial update data for a customer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerPatch {
    pub full_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<NaiveDate>,
    pub active: Option<bool>,
}

/// Raw, optionally-present search inputs as they arrive from the caller.
///
/// `active: Some(false)` is a real constraint ("only inactive customers"),
/// distinct from `None` ("no constraint on the flag"). An input with no
/// fields set matches every customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilterInput {
    pub id: Option<Uuid>,
    pub full_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
}
