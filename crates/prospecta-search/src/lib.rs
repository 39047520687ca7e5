//! Outbound API clients for the prospecting pipeline.
//!
//! [`SearchClient`] wraps the web-search API that discovers
//! candidate company pages; [`RegistryClient`] looks companies up in the
//! public French company registry to attach SIREN/NAF codes.

pub mod client;
pub mod error;
pub mod registry;
pub mod types;

pub use client::{SearchClient, MAX_PAGE_SIZE};
pub use error::SearchError;
pub use registry::{RegistryClient, RegistryMatch};
