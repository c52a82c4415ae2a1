//! Infrastructure adapters: the HTTP API client and local credential storage.

#![forbid(unsafe_code)]

mod file_credential_store;
mod http_api_client;

pub use file_credential_store::FileCredentialStore;
pub use http_api_client::{HttpApiClient, Resource, DEFAULT_REQUEST_TIMEOUT};
