use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use phonenumber::country;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// TeleSign customer (account) identifier, usually a UUID.
///
/// Invariant: non-empty after trimming, visible ASCII only and no `:`, since it
/// is placed verbatim in the `Authorization` header before the separator.
pub struct CustomerId(String);

impl CustomerId {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "customer_id";

    /// Create a validated [`CustomerId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.bytes().all(|b| b.is_ascii_graphic() && b != b':') {
            return Err(ValidationError::InvalidCustomerId {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
/// Key material rejected while building an [`ApiKey`].
pub enum KeyError {
    /// The key text was empty after trimming.
    #[error("api key must not be empty")]
    Empty,

    /// The key text is not valid standard base64.
    #[error("api key is not valid base64: {0}")]
    NotBase64(#[from] base64::DecodeError),
}

#[derive(Clone, PartialEq, Eq)]
/// Decoded TeleSign API secret.
///
/// The base64 text is decoded once, at construction, so signing a request can
/// never fail because of the key format. The bytes are never printed.
pub struct ApiKey(Vec<u8>);

impl ApiKey {
    /// Decode a base64-encoded API key.
    pub fn new(value: impl AsRef<str>) -> Result<Self, KeyError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(KeyError::Empty);
        }
        Ok(Self(BASE64.decode(trimmed)?))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[derive(Debug, Clone)]
/// Account identifier plus secret key used to sign every request.
pub struct Credentials {
    customer_id: CustomerId,
    api_key: ApiKey,
}

impl Credentials {
    /// Validate the customer id and decode the base64 API key.
    pub fn new(
        customer_id: impl Into<String>,
        api_key: impl AsRef<str>,
    ) -> Result<Self, crate::TelesignError> {
        Ok(Self {
            customer_id: CustomerId::new(customer_id)?,
            api_key: ApiKey::new(api_key)?,
        })
    }

    /// Combine already validated parts.
    pub fn from_parts(customer_id: CustomerId, api_key: ApiKey) -> Self {
        Self {
            customer_id,
            api_key,
        }
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub(crate) fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number in the digits-only international form TeleSign expects in
/// resource paths (`15555555555`).
///
/// Invariant: non-empty, ASCII digits only.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "phone_number";

    /// Accept a number that already carries its country code.
    ///
    /// A leading `+`, spaces, dashes, dots and parentheses are stripped; anything
    /// else that is not a digit is rejected.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let without_plus = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let mut digits = String::with_capacity(without_plus.len());
        for ch in without_plus.chars() {
            match ch {
                '0'..='9' => digits.push(ch),
                ' ' | '-' | '.' | '(' | ')' => {}
                _ => {
                    return Err(ValidationError::InvalidPhoneNumber {
                        input: trimmed.to_owned(),
                    });
                }
            }
        }

        if digits.is_empty() {
            return Err(ValidationError::InvalidPhoneNumber {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(digits))
    }

    /// Parse a possibly national-format number and normalize it through E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        Self::new(e164)
    }

    /// Digits as placed in the resource path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Caller-supplied handle correlating an app verification with its status check.
///
/// Invariant: non-empty and made of URL-unreserved characters only, so the path
/// that gets signed is exactly the path that goes on the wire.
pub struct ExternalId(String);

impl ExternalId {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "external_id";

    /// Create a validated [`ExternalId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let unreserved = trimmed
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~'));
        if !unreserved {
            return Err(ValidationError::InvalidExternalId {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
