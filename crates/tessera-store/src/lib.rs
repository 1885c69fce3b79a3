//! Tessera Store
//!
//! Box-office persistence layer providing:
//! - Domain entities for payment notifications, staff accounts, ticket type
//!   groups, authentication tokens, accounting subjects, and ownership records
//! - MongoDB repositories with index management
//! - A typed query-condition model compiled to BSON filters at the
//!   repository boundary

pub mod connection;
pub mod domain;
pub mod error;
pub mod query;
pub mod repository;

pub use connection::connect;
pub use domain::*;
pub use error::StoreError;
pub use query::Filter;
