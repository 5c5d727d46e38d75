//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//!
//! ## Feature Flags
//!
//! - `mongo` (default) - MongoDB document store via the official driver
//! - `minimal` - No external dependencies, in-memory store only

pub mod auth;
pub mod database;

pub use auth::StaticTokenService;
pub use database::InMemoryPostRepository;

#[cfg(feature = "mongo")]
pub use database::{ConnectionMode, MongoConfig, MongoConnector, MongoPostRepository};
