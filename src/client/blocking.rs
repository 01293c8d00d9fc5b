//! Blocking wrappers over the async clients.
//!
//! Each call drives the async implementation to completion on a private
//! current-thread tokio runtime, so request construction and signing are shared
//! with the async path. Do not call these from inside an async runtime; the
//! runtime refuses to block there and panics.

use std::sync::Arc;

use tokio::runtime::Runtime;

use super::TelesignError;
use crate::domain::{Credentials, ExternalId, Method, PhoneIdOptions, PhoneNumber, TelesignResponse};
use crate::transport::RequestBody;

fn new_runtime() -> Result<Arc<Runtime>, TelesignError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map(Arc::new)
        .map_err(TelesignError::Runtime)
}

#[derive(Debug, Clone)]
/// Blocking counterpart of [`super::RestClient`].
pub struct RestClient {
    inner: super::RestClient,
    runtime: Arc<Runtime>,
}

impl RestClient {
    /// Client for the production endpoint.
    pub fn new(credentials: Credentials) -> Result<Self, TelesignError> {
        Self::from_async(super::RestClient::new(credentials))
    }

    /// Wrap an already configured async client.
    pub fn from_async(inner: super::RestClient) -> Result<Self, TelesignError> {
        Ok(Self {
            inner,
            runtime: new_runtime()?,
        })
    }

    pub fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<TelesignResponse, TelesignError> {
        self.runtime.block_on(self.inner.request(method, path, body))
    }

    pub fn get(&self, path: &str) -> Result<TelesignResponse, TelesignError> {
        self.runtime.block_on(self.inner.get(path))
    }

    pub fn post(&self, path: &str, body: RequestBody) -> Result<TelesignResponse, TelesignError> {
        self.runtime.block_on(self.inner.post(path, body))
    }

    pub fn put(&self, path: &str, body: RequestBody) -> Result<TelesignResponse, TelesignError> {
        self.runtime.block_on(self.inner.put(path, body))
    }

    pub fn delete(&self, path: &str) -> Result<TelesignResponse, TelesignError> {
        self.runtime.block_on(self.inner.delete(path))
    }
}

#[derive(Debug, Clone)]
/// Blocking counterpart of [`super::PhoneIdClient`].
pub struct PhoneIdClient {
    inner: super::PhoneIdClient,
    runtime: Arc<Runtime>,
}

impl PhoneIdClient {
    pub fn new(credentials: Credentials) -> Result<Self, TelesignError> {
        Self::from_async(super::PhoneIdClient::new(credentials))
    }

    pub fn from_async(inner: super::PhoneIdClient) -> Result<Self, TelesignError> {
        Ok(Self {
            inner,
            runtime: new_runtime()?,
        })
    }

    /// See [`super::PhoneIdClient::phone_id`].
    pub fn phone_id(
        &self,
        phone_number: &PhoneNumber,
        options: &PhoneIdOptions,
    ) -> Result<TelesignResponse, TelesignError> {
        self.runtime.block_on(self.inner.phone_id(phone_number, options))
    }
}

#[derive(Debug, Clone)]
/// Blocking counterpart of [`super::AppVerifyClient`].
pub struct AppVerifyClient {
    inner: super::AppVerifyClient,
    runtime: Arc<Runtime>,
}

impl AppVerifyClient {
    pub fn new(credentials: Credentials) -> Result<Self, TelesignError> {
        Self::from_async(super::AppVerifyClient::new(credentials))
    }

    pub fn from_async(inner: super::AppVerifyClient) -> Result<Self, TelesignError> {
        Ok(Self {
            inner,
            runtime: new_runtime()?,
        })
    }

    /// See [`super::AppVerifyClient::status`].
    pub fn status(&self, external_id: &ExternalId) -> Result<TelesignResponse, TelesignError> {
        self.runtime.block_on(self.inner.status(external_id))
    }
}
