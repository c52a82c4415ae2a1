//! Application services and ports.

#![forbid(unsafe_code)]

mod session;
mod session_ports;
mod session_service;

pub use session::Session;
pub use session_ports::{AuthGateway, AuthGrant, CredentialStore, SignupRequest, StoredCredentials};
pub use session_service::SessionService;
