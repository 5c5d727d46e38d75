//! Post storage backends and store connection management.

mod memory;

#[cfg(feature = "mongo")]
mod connections;
#[cfg(feature = "mongo")]
pub mod document;
#[cfg(feature = "mongo")]
mod mongo_repo;

pub use memory::InMemoryPostRepository;

#[cfg(feature = "mongo")]
pub use connections::{ConnectionMode, MongoConfig, MongoConnector};
#[cfg(feature = "mongo")]
pub use mongo_repo::MongoPostRepository;

/// Collection holding post documents.
pub const POST_COLLECTION: &str = "post";
