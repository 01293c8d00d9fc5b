use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq)]
/// Response returned for every request that reached the server, whatever its status.
///
/// TeleSign reports failures as structured JSON bodies on 4xx/5xx, so the status
/// is kept as data and never turned into an error by the client.
pub struct TelesignResponse {
    pub status_code: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
    /// Parsed body, when it is valid JSON.
    pub json: Option<serde_json::Value>,
}

impl TelesignResponse {
    /// `true` for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status_code)
    }

    /// First header value matching `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Decode the raw body into a caller-chosen type.
    pub fn json_as<T: DeserializeOwned>(&self) -> Result<T, crate::TelesignError> {
        serde_json::from_str(&self.body).map_err(|err| crate::TelesignError::Parse(Box::new(err)))
    }
}
