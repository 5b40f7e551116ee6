pub mod client;
pub mod error;
pub mod model;

pub use client::CustomersApi;
pub use error::CustomersInfoError;
pub use model::{Customer, CustomerFilterInput, CustomerPatch, NewCustomer};
