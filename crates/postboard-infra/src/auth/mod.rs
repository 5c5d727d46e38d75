//! Authorization implementations.

mod static_token;

pub use static_token::{DEMO_BEARER_TOKEN, StaticTokenService};
