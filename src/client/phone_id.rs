use tracing::instrument;

use super::{RestClient, TelesignError};
use crate::domain::{Credentials, Method, PhoneIdOptions, PhoneNumber, TelesignResponse};

#[derive(Debug, Clone)]
/// Phone ID: carrier, number type, location and risk data for a phone number.
pub struct PhoneIdClient {
    rest: RestClient,
}

impl PhoneIdClient {
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

    /// Look up `phone_number` via `POST /v1/phoneid/{phone_number}`.
    ///
    /// The body is always JSON (`{}` when no option is set). Any HTTP status is
    /// returned as a [`TelesignResponse`].
    #[instrument(skip_all)]
    pub async fn phone_id(
        &self,
        phone_number: &PhoneNumber,
        options: &PhoneIdOptions,
    ) -> Result<TelesignResponse, TelesignError> {
        let body = crate::transport::encode_phone_id_body(options)
            .map_err(|err| TelesignError::Encode(Box::new(err)))?;
        self.rest
            .request(Method::Post, &phone_id_path(phone_number), Some(body))
            .await
    }
}

impl From<RestClient> for PhoneIdClient {
    fn from(rest: RestClient) -> Self {
        Self { rest }
    }
}

fn phone_id_path(phone_number: &PhoneNumber) -> String {
    format!("/v1/phoneid/{}", phone_number.as_str())
}
