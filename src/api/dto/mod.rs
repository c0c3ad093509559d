//! Data Transfer Objects for API responses.

pub mod blog;
pub mod health;
