//! Request authentication: TeleSign `TSA` HMAC-SHA256 signatures.
//!
//! Every request carries:
//!
//! ```text
//! Authorization: TSA <customer-id>:<base64 signature>
//! x-ts-auth-method: HMAC-SHA256
//! x-ts-nonce: <uuid v4>
//! Date: <RFC 2616 date>
//! Content-Type: <mime type>        (only when a body is sent)
//! ```
//!
//! See [`canonical`] for the exact string that is signed.

pub mod canonical;
mod source;

use std::fmt;
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::{ContentType, Credentials, Method};

pub use source::{Clock, NonceSource, RandomNonce, SystemClock};

pub const AUTHORIZATION: &str = "Authorization";
pub const X_TS_AUTH_METHOD: &str = "x-ts-auth-method";
pub const X_TS_NONCE: &str = "x-ts-nonce";
pub const DATE: &str = "Date";
pub const CONTENT_TYPE: &str = "Content-Type";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// A request could not be signed. Indicates a caller bug, never bad key material.
pub enum SigningError {
    /// Only GET, POST, PUT and DELETE are signed.
    #[error("unsupported HTTP method: {method}")]
    UnsupportedMethod { method: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything the signature covers for one request.
pub struct SigningContext<'a> {
    pub method: Method,
    /// Path only, no scheme or host (`/v1/phoneid/15555555555`).
    pub resource: &'a str,
    pub content_type: Option<ContentType>,
    /// Already formatted per RFC 2616.
    pub date: String,
    pub nonce: Uuid,
    pub body: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Authentication headers for exactly one request.
///
/// The header set is fixed; there is no way to add, drop or duplicate a key.
pub struct AuthHeaders {
    authorization: String,
    nonce: Uuid,
    date: String,
    content_type: Option<ContentType>,
}

impl AuthHeaders {
    /// `TSA <customer-id>:<signature>`.
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// Always `HMAC-SHA256`.
    pub fn auth_method(&self) -> &'static str {
        canonical::AUTH_METHOD
    }

    pub fn nonce(&self) -> Uuid {
        self.nonce
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn content_type(&self) -> Option<ContentType> {
        self.content_type
    }

    /// Header name/value pairs in a stable order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            (AUTHORIZATION, self.authorization.clone()),
            (X_TS_AUTH_METHOD, canonical::AUTH_METHOD.to_owned()),
            (X_TS_NONCE, self.nonce.hyphenated().to_string()),
            (DATE, self.date.clone()),
        ];
        if let Some(content_type) = self.content_type {
            pairs.push((CONTENT_TYPE, content_type.as_str().to_owned()));
        }
        pairs
    }
}

#[derive(Clone)]
/// Produces [`AuthHeaders`] for outbound requests.
///
/// Holds only immutable state, so one signer can be shared across threads.
pub struct RequestSigner {
    credentials: Credentials,
    clock: Arc<dyn Clock>,
    nonces: Arc<dyn NonceSource>,
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("customer_id", self.credentials.customer_id())
            .finish_non_exhaustive()
    }
}

impl RequestSigner {
    /// Signer using the system clock and random UUID v4 nonces.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_sources(credentials, Arc::new(SystemClock), Arc::new(RandomNonce))
    }

    /// Signer with explicit clock and nonce sources.
    pub fn with_sources(
        credentials: Credentials,
        clock: Arc<dyn Clock>,
        nonces: Arc<dyn NonceSource>,
    ) -> Self {
        Self {
            credentials,
            clock,
            nonces,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Sign a request with a fresh nonce and the current time.
    ///
    /// `content_type` must be `None` exactly when `body` is empty.
    pub fn sign(
        &self,
        method: Method,
        resource: &str,
        content_type: Option<ContentType>,
        body: &str,
    ) -> AuthHeaders {
        let ctx = SigningContext {
            method,
            resource,
            content_type,
            date: canonical::format_rfc2616(self.clock.now()),
            nonce: self.nonces.next_nonce(),
            body,
        };
        self.sign_context(&ctx)
    }

    /// Sign a fully specified context. Pure: same context, same headers.
    pub fn sign_context(&self, ctx: &SigningContext<'_>) -> AuthHeaders {
        let string_to_sign = canonical::string_to_sign(ctx);
        let signature =
            canonical::compute_signature(self.credentials.api_key().as_bytes(), &string_to_sign);

        debug!(
            method = %ctx.method,
            resource = ctx.resource,
            nonce = %ctx.nonce,
            "signed request"
        );

        AuthHeaders {
            authorization: format!(
                "TSA {}:{signature}",
                self.credentials.customer_id().as_str()
            ),
            nonce: ctx.nonce,
            date: ctx.date.clone(),
            content_type: ctx.content_type,
        }
    }
}
