//! Reqwest-backed [`xylene_core::LocationDirectory`] implementation against
//! the admin console's REST API.

mod client;
mod error;
mod types;

pub use client::DirectoryClient;
pub use error::DirectoryApiError;
pub use types::ListResponse;
