//! # Postboard Core
//!
//! The domain layer of Postboard.
//! This crate contains the post entity, the CRUD service and the ports that
//! storage backends implement. It has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use service::PostService;
