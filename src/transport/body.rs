use serde::Serialize;
use url::form_urlencoded;

use crate::domain::ContentType;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request body, already encoded exactly as it will be signed and sent.
pub struct RequestBody {
    content_type: ContentType,
    encoded: String,
}

impl RequestBody {
    /// Serialize `value` as a JSON body (`application/json`).
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            content_type: ContentType::Json,
            encoded: serde_json::to_string(value)?,
        })
    }

    /// Encode key/value pairs as a form body (`application/x-www-form-urlencoded`).
    pub fn form<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        Self {
            content_type: ContentType::FormUrlEncoded,
            encoded,
        }
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// The exact bytes placed on the wire.
    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}
