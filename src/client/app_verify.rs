use tracing::instrument;

use super::{RestClient, TelesignError};
use crate::domain::{Credentials, ExternalId, Method, TelesignResponse};

#[derive(Debug, Clone)]
/// App Verify: status of out-of-band, app-based verifications.
pub struct AppVerifyClient {
    rest: RestClient,
}

impl AppVerifyClient {
    /// Client for the production endpoint.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            rest: RestClient::new(credentials),
        }
    }

    /// Underlying authenticated client.
    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// Fetch the verification status via
    /// `GET /v1/mobile/verification/status/{external_id}`.
    ///
    /// Sent without a body, hence without `Content-Type`.
    #[instrument(skip_all)]
    pub async fn status(
        &self,
        external_id: &ExternalId,
    ) -> Result<TelesignResponse, TelesignError> {
        self.rest
            .request(Method::Get, &status_path(external_id), None)
            .await
    }
}

impl From<RestClient> for AppVerifyClient {
    fn from(rest: RestClient) -> Self {
        Self { rest }
    }
}

fn status_path(external_id: &ExternalId) -> String {
    format!("/v1/mobile/verification/status/{}", external_id.as_str())
}
