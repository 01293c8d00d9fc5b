//! Clock and nonce sources feeding the signer.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Wall clock used for the `Date` header.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of per-request nonces (`x-ts-nonce`).
///
/// Implementations must not hand out the same value twice.
pub trait NonceSource: Send + Sync {
    fn next_nonce(&self) -> Uuid;
}

#[derive(Debug, Clone, Copy, Default)]
/// System UTC clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Random UUID v4 nonces.
pub struct RandomNonce;

impl NonceSource for RandomNonce {
    fn next_nonce(&self) -> Uuid {
        Uuid::new_v4()
    }
}
