//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence.
//!
//! # Modules
//!
//! - [`data_context`] - Storage backends (PostgreSQL and named in-memory stores)
//! - [`persistence`] - Repository implementations on top of a data context

pub mod data_context;
pub mod persistence;
