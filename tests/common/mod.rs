//! Shared fixtures for tests running against a local mock endpoint.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use telesign::{Clock, Credentials, NonceSource, RestClient};
use uuid::Uuid;
use wiremock::{MockServer, Request};

pub const CUSTOMER_ID: &str = "FFFFFFFF-EEEE-DDDD-1234-AB1234567890";
pub const API_KEY: &str =
    "EXAMPLETE8sTgg45yusumoN6BYsBVkh+yRJ5czgsnCehZaOYldPJdmFh6NeX8kunZ2zU1YWaUw/0wV6xfw==";

pub fn credentials() -> Credentials {
    Credentials::new(CUSTOMER_ID, API_KEY).unwrap()
}

pub fn client_for(server: &MockServer) -> RestClient {
    RestClient::builder(credentials())
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[derive(Debug)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }
}

#[derive(Debug)]
pub struct FixedNonce;

impl NonceSource for FixedNonce {
    fn next_nonce(&self) -> Uuid {
        Uuid::parse_str("3f2504e0-4f89-41d3-9a0c-0305e82c3301").unwrap()
    }
}

pub fn deterministic_client_for(server: &MockServer) -> RestClient {
    RestClient::builder(credentials())
        .base_url(server.uri())
        .clock(Arc::new(FixedClock))
        .nonce_source(Arc::new(FixedNonce))
        .build()
        .unwrap()
}

pub fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
}

/// Header checks every signed request must pass.
pub fn assert_signed(request: &Request) {
    assert_eq!(header(request, "x-ts-auth-method"), Some("HMAC-SHA256"));

    let nonce = header(request, "x-ts-nonce").expect("x-ts-nonce header missing");
    assert!(
        Uuid::parse_str(nonce).is_ok(),
        "x-ts-nonce is not a valid UUID: {nonce}"
    );

    let date = header(request, "Date").expect("Date header missing");
    assert!(
        DateTime::parse_from_rfc2822(date).is_ok(),
        "Date is not RFC 2616: {date}"
    );

    let authorization = header(request, "Authorization").expect("Authorization header missing");
    let signature = authorization
        .strip_prefix(&format!("TSA {CUSTOMER_ID}:"))
        .expect("Authorization is not TSA <customer>:<signature>");
    assert!(!signature.is_empty());
}

/// Headers and body that the signer controls, for byte-level comparisons.
pub fn signed_parts(request: &Request) -> (Vec<Option<String>>, Vec<u8>) {
    let headers = [
        "Authorization",
        "x-ts-auth-method",
        "x-ts-nonce",
        "Date",
        "Content-Type",
    ]
    .iter()
    .map(|name| header(request, name).map(str::to_owned))
    .collect();
    (headers, request.body.clone())
}
