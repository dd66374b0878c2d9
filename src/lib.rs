//! Rust client library for the OrdinalsBot inscription and marketplace APIs.
//!
//! Public API layers:
//! - [`InscriptionClient`]: inscription, collection, runes, and referral
//!   endpoints, against the production or testnet deployment.
//! - [`MarketplaceClient`]: marketplace endpoints (listings, offers, padding
//!   outputs).
//! - [`Transport`]: the shared JSON transport, exposed for direct requests.
//! - [`ApiError`]: unified error type used by all clients.
//!
//! Every call resolves to the response payload with its `{"data": ...}`
//! envelope already unwrapped; every failure is normalized into [`ApiError`],
//! with transport failures carrying the HTTP status when one was received.

mod env;
mod error;
mod form;
mod inscription;
mod marketplace;
mod transport;
pub mod types;

/// Error type returned by all client operations.
pub use error::ApiError;
/// Environment selector for the inscription API.
pub use env::InscriptionEnv;
/// Typed client for the inscription API.
pub use inscription::{InscriptionClient, REQUEST_TIMEOUT};
/// Typed client for the marketplace API.
pub use marketplace::{MARKETPLACE_BASE_URL, MarketplaceClient};
/// Configured JSON transport shared by the clients.
pub use transport::{Transport, user_agent};
