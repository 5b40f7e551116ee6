pub mod error;
pub mod filter;
pub mod repo;
pub mod service;
