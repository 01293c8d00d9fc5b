//! Typed Rust client for the TeleSign REST API.
//!
//! The crate is split into a domain layer of strong types, an auth layer that
//! signs each request (`Authorization: TSA <customer-id>:<HMAC-SHA256>`), a
//! transport layer for wire-format details, and a small client layer
//! orchestrating requests. Every operation exists in an async form and, under
//! [`blocking`], a blocking form sharing the same signing path.
//!
//! ```rust,no_run
//! use telesign::{Credentials, PhoneIdClient, PhoneIdOptions, PhoneNumber};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), telesign::TelesignError> {
//!     let credentials = Credentials::new("FFFFFFFF-EEEE-DDDD-1234-AB1234567890", "...base64...")?;
//!     let client = PhoneIdClient::new(credentials);
//!     let phone = PhoneNumber::new("15555555555")?;
//!     let response = client.phone_id(&phone, &PhoneIdOptions::default()).await?;
//!     println!("{} {}", response.status_code, response.body);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod auth;
pub mod client;
pub mod domain;
mod transport;

pub use auth::{AuthHeaders, Clock, NonceSource, RequestSigner, SigningContext, SigningError};
pub use client::{
    AppVerifyClient, DEFAULT_BASE_URL, HttpRequest, HttpResponse, HttpTransport, PhoneIdClient,
    RestClient, RestClientBuilder, TelesignError, blocking,
};
pub use domain::{
    AccountLifecycleEvent, ApiKey, ContentType, Credentials, CustomerId, ExternalId, KeyError,
    Method, PhoneIdAddon, PhoneIdOptions, PhoneNumber, TelesignResponse, ValidationError,
};
pub use transport::RequestBody;
