//! Client layer: signs requests, dispatches them and hands back the response.

mod app_verify;
pub mod blocking;
mod http;
mod phone_id;

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument};

use crate::auth::{Clock, NonceSource, RandomNonce, RequestSigner, SigningError, SystemClock};
use crate::domain::{Credentials, KeyError, Method, TelesignResponse, ValidationError};
use crate::transport::RequestBody;

pub use app_verify::AppVerifyClient;
pub use http::{BoxFuture, HttpRequest, HttpResponse, HttpTransport, TransportError};
pub use phone_id::PhoneIdClient;

use http::ReqwestTransport;

/// Production REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://rest-api.telesign.com";

const DEFAULT_USER_AGENT: &str = concat!("telesign-rust/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
/// Errors returned by the TeleSign clients.
///
/// HTTP status codes are not errors: any response that arrives is returned as a
/// [`TelesignResponse`].
pub enum TelesignError {
    /// The API key is empty or not valid base64. Raised before any request is made.
    #[error("invalid api key: {0}")]
    InvalidKey(#[from] KeyError),

    /// A request could not be signed (for example an unsupported HTTP method).
    #[error("signing error: {0}")]
    Signing(#[from] SigningError),

    /// Connection, DNS, TLS or timeout failure. Not retried by this crate.
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    /// The request body could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] Box<dyn StdError + Send + Sync>),

    /// The response body could not be decoded into the requested type.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The blocking runtime could not be started.
    #[error("runtime error: {0}")]
    Runtime(#[source] std::io::Error),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Clone)]
/// Builder for [`RestClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent, or
/// inject the clock, nonce source or transport.
pub struct RestClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    clock: Arc<dyn Clock>,
    nonces: Arc<dyn NonceSource>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl fmt::Debug for RestClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClientBuilder")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl RestClientBuilder {
    /// Create a builder with the production endpoint, system clock and random nonces.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            clock: Arc::new(SystemClock),
            nonces: Arc::new(RandomNonce),
            transport: None,
        }
    }

    /// Override the endpoint, e.g. `http://localhost:8080` for a local test server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Clock used for the `Date` header.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Source of `x-ts-nonce` values.
    pub fn nonce_source(mut self, nonces: Arc<dyn NonceSource>) -> Self {
        self.nonces = nonces;
        self
    }

    /// Replace the reqwest-based transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`RestClient`].
    pub fn build(self) -> Result<RestClient, TelesignError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                let client = builder
                    .build()
                    .map_err(|err| TelesignError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport {
                    client,
                    user_agent: self
                        .user_agent
                        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
                })
            }
        };

        Ok(RestClient {
            signer: RequestSigner::with_sources(self.credentials, self.clock, self.nonces),
            base_url,
            http,
        })
    }
}

#[derive(Clone)]
/// Authenticated TeleSign REST client shared by the service clients.
///
/// Every call builds the URL, signs the request with fresh `x-ts-nonce` and
/// `Date` values, dispatches it and returns whatever status the server sent.
pub struct RestClient {
    signer: RequestSigner,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("signer", &self.signer)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl RestClient {
    /// Create a client for the production endpoint.
    ///
    /// For more customization, use [`RestClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            signer: RequestSigner::new(credentials),
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
                user_agent: DEFAULT_USER_AGENT.to_owned(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> RestClientBuilder {
        RestClientBuilder::new(credentials)
    }

    /// Endpoint requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sign and send a request to `path` (e.g. `/v1/phoneid/15555555555`).
    ///
    /// With `body == None` no `Content-Type` header is sent.
    ///
    /// Errors:
    /// - [`TelesignError::Validation`] when `path` does not start with `/`,
    /// - [`TelesignError::Transport`] when no response was received.
    #[instrument(skip(self, body))]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<TelesignResponse, TelesignError> {
        let request = self.prepare(method, path, body.as_ref())?;

        let response = self
            .http
            .send(request)
            .await
            .map_err(TelesignError::Transport)?;
        debug!(status = response.status, "received response");

        Ok(crate::transport::decode_response(response))
    }

    pub async fn get(&self, path: &str) -> Result<TelesignResponse, TelesignError> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        body: RequestBody,
    ) -> Result<TelesignResponse, TelesignError> {
        self.request(Method::Post, path, Some(body)).await
    }

    pub async fn put(
        &self,
        path: &str,
        body: RequestBody,
    ) -> Result<TelesignResponse, TelesignError> {
        self.request(Method::Put, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<TelesignResponse, TelesignError> {
        self.request(Method::Delete, path, None).await
    }

    fn prepare(
        &self,
        method: Method,
        path: &str,
        body: Option<&RequestBody>,
    ) -> Result<HttpRequest, TelesignError> {
        if !path.starts_with('/') {
            return Err(ValidationError::InvalidResourcePath {
                input: path.to_owned(),
            }
            .into());
        }

        let body = body.filter(|b| !b.as_str().is_empty());
        let content_type = body.map(RequestBody::content_type);
        let payload = body.map(RequestBody::as_str).unwrap_or("");
        let headers = self.signer.sign(method, path, content_type, payload);

        Ok(HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: headers.to_pairs(),
            body: body.map(|b| b.as_str().to_owned()),
        })
    }
}

fn normalize_base_url(input: &str) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidBaseUrl {
        input: input.to_owned(),
    };
    let parsed = url::Url::parse(input.trim()).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https")
        || parsed.query().is_some()
        || parsed.fragment().is_some()
    {
        return Err(invalid());
    }
    Ok(parsed.as_str().trim_end_matches('/').to_owned())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::auth::tests::{FixedClock, FixedNonce, credentials, fixed_nonce, fixed_time};

    #[derive(Debug, Clone)]
    pub(crate) struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<HttpRequest>,
        response_status: u16,
        response_body: String,
        fail: bool,
    }

    impl FakeTransport {
        pub(crate) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                    fail: false,
                })),
            }
        }

        pub(crate) fn failing() -> Self {
            let transport = Self::new(0, "");
            transport.state.lock().unwrap().fail = true;
            transport
        }

        pub(crate) fn requests(&self) -> Vec<HttpRequest> {
            self.state.lock().unwrap().requests.clone()
        }

        pub(crate) fn last_request(&self) -> HttpRequest {
            self.requests().pop().expect("no request recorded")
        }
    }

    impl HttpTransport for FakeTransport {
        fn send(
            &self,
            request: HttpRequest,
        ) -> BoxFuture<'_, Result<HttpResponse, TransportError>> {
            Box::pin(async move {
                let (fail, status, body) = {
                    let mut state = self.state.lock().unwrap();
                    state.requests.push(request);
                    (
                        state.fail,
                        state.response_status,
                        state.response_body.clone(),
                    )
                };
                if fail {
                    let err: TransportError = "connection refused".into();
                    return Err(err);
                }
                Ok(HttpResponse {
                    status,
                    headers: Vec::new(),
                    body,
                })
            })
        }
    }

    pub(crate) fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
        request
            .headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn make_client(transport: FakeTransport) -> RestClient {
        RestClient::builder(credentials())
            .base_url("https://example.invalid/")
            .clock(Arc::new(FixedClock(fixed_time())))
            .nonce_source(Arc::new(FixedNonce(fixed_nonce())))
            .transport(Arc::new(transport))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn get_sends_signed_headers_without_content_type() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        let response = client.get("/v1/some/resource").await.unwrap();
        assert_eq!(response.status_code, 200);

        let request = transport.last_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "https://example.invalid/v1/some/resource");
        assert_eq!(request.body, None);
        assert_eq!(header(&request, "Content-Type"), None);
        assert_eq!(header(&request, "x-ts-auth-method"), Some("HMAC-SHA256"));
        assert_eq!(
            header(&request, "x-ts-nonce"),
            Some("9c7a6f3e-2b1d-4c5e-8f90-123456789abc")
        );
        assert_eq!(
            header(&request, "Date"),
            Some("Tue, 15 Nov 1994 08:12:31 GMT")
        );
        assert!(
            header(&request, "Authorization")
                .unwrap()
                .starts_with("TSA FFFFFFFF-EEEE-DDDD-1234-AB1234567890:")
        );
    }

    #[tokio::test]
    async fn post_form_sends_body_and_content_type() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        client
            .post(
                "/v1/messaging",
                RequestBody::form([("phone_number", "15555555555")]),
            )
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.body.as_deref(), Some("phone_number=15555555555"));
        assert_eq!(
            header(&request, "Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
    }

    #[tokio::test]
    async fn empty_body_is_sent_as_bodyless_request() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        client
            .post("/v1/x", RequestBody::form(Vec::<(String, String)>::new()))
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.body, None);
        assert_eq!(header(&request, "Content-Type"), None);

        let bodyless = make_client(FakeTransport::new(200, "{}"))
            .signer
            .sign(Method::Post, "/v1/x", None, "");
        assert_eq!(
            header(&request, "Authorization"),
            Some(bodyless.authorization())
        );
    }

    #[tokio::test]
    async fn error_statuses_are_returned_not_raised() {
        let body = r#"{"status":{"code":10000,"description":"Invalid Customer ID"}}"#;
        let transport = FakeTransport::new(401, body);
        let client = make_client(transport);

        let response = client.delete("/v1/some/resource").await.unwrap();
        assert_eq!(response.status_code, 401);
        assert!(!response.is_success());
        assert_eq!(response.body, body);
        assert!(response.json.is_some());
    }

    #[tokio::test]
    async fn transport_failure_maps_to_transport_error() {
        let client = make_client(FakeTransport::failing());
        let err = client.get("/v1/x").await.unwrap_err();
        assert!(matches!(err, TelesignError::Transport(_)));
    }

    #[tokio::test]
    async fn relative_path_is_rejected_before_dispatch() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        let err = client.get("v1/x").await.unwrap_err();
        assert!(matches!(
            err,
            TelesignError::Validation(ValidationError::InvalidResourcePath { .. })
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn put_uses_json_body() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        let body = RequestBody::json(&serde_json::json!({"a": 1})).unwrap();
        client.put("/v1/x", body).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.body.as_deref(), Some(r#"{"a":1}"#));
        assert_eq!(header(&request, "Content-Type"), Some("application/json"));
    }

    #[test]
    fn builder_normalizes_and_validates_base_url() {
        let client = RestClient::builder(credentials())
            .base_url("http://localhost:8080/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");

        let client = RestClient::new(credentials());
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);

        for bad in ["not a url", "ftp://example.com", "https://example.com/?a=1"] {
            let err = RestClient::builder(credentials())
                .base_url(bad)
                .build()
                .unwrap_err();
            assert!(
                matches!(
                    err,
                    TelesignError::Validation(ValidationError::InvalidBaseUrl { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn error_display_is_prefixed_by_kind() {
        let err = TelesignError::from(SigningError::UnsupportedMethod {
            method: "PATCH".to_owned(),
        });
        assert_eq!(
            err.to_string(),
            "signing error: unsupported HTTP method: PATCH"
        );

        let err = TelesignError::from(KeyError::Empty);
        assert_eq!(err.to_string(), "invalid api key: api key must not be empty");
    }
}
