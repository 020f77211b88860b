//! Search engine module
//!
//! The remote OpenSearch cluster is reached through the [`SearchBackend`]
//! trait; [`OpenSearchClient`] is the HTTP implementation.

mod index_config;
#[cfg(test)]
pub(crate) mod mock;
mod opensearch;
mod traits;

pub use index_config::{index_body, AUTOCOMPLETE_ANALYZER};
pub use opensearch::OpenSearchClient;
pub use traits::*;
