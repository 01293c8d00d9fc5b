//! String-to-sign construction and HMAC-SHA256 signature computation.
//!
//! ```text
//! StringToSign = HTTP-Verb + "\n" +
//!                Content-MD5 + "\n" +          (always empty)
//!                Content-Type + "\n" +         (empty without a body)
//!                Date + "\n" +
//!                "x-ts-auth-method:HMAC-SHA256" + "\n" +
//!                "x-ts-nonce:" + Nonce + "\n" +
//!                [Body + "\n"] +               (only when non-empty)
//!                Resource
//! ```

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::SigningContext;

type HmacSha256 = Hmac<Sha256>;

/// Value of the `x-ts-auth-method` header and its canonical line.
pub const AUTH_METHOD: &str = "HMAC-SHA256";

/// `Date` header layout (RFC 2616, section 3.3.1).
const RFC2616_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Format a timestamp the way the `Date` header carries it.
pub fn format_rfc2616(at: DateTime<Utc>) -> String {
    at.format(RFC2616_FORMAT).to_string()
}

/// Build the string to sign for one request.
pub fn string_to_sign(ctx: &SigningContext<'_>) -> String {
    let method = ctx.method.as_str();
    let content_type = ctx.content_type.map(|ct| ct.as_str()).unwrap_or("");
    let date = &ctx.date;
    let nonce = ctx.nonce.hyphenated();

    let mut out = format!(
        "{method}\n\n{content_type}\n{date}\nx-ts-auth-method:{AUTH_METHOD}\nx-ts-nonce:{nonce}\n"
    );
    if !ctx.body.is_empty() {
        out.push_str(ctx.body);
        out.push('\n');
    }
    out.push_str(ctx.resource);
    out
}

/// Base64(HMAC-SHA256(key, string_to_sign)).
pub fn compute_signature(key: &[u8], string_to_sign: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can accept any key length");
    mac.update(string_to_sign.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}
