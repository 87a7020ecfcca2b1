//! Client-set facade
//!
//! A [`ClientSet`] bundles one transport with a typed client per resource
//! family. Every resource client shares the transport, so they share the
//! session token, the connection pool and the login lock.

use std::sync::Arc;

use osc_core::{ClientConfig, Error, Result};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::alert_policies::AlertPoliciesClient;
use crate::buckets::Buckets;
use crate::client::{RemoteCaller, TransportClient, auth};
use crate::crr::Crr;
use crate::object_user::ObjectUser;
use crate::objmt::Objmt;
use crate::service_provider::ServiceProviderClient;
use crate::status::Status;
use crate::tenants::Tenants;

#[derive(Clone)]
pub struct ClientSet {
    transport: TransportClient,
    caller: Arc<dyn RemoteCaller>,
}

impl std::fmt::Debug for ClientSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSet")
            .field("transport", &self.transport)
            .finish()
    }
}

impl ClientSet {
    pub fn new(transport: TransportClient) -> Self {
        Self {
            caller: Arc::new(transport.clone()),
            transport,
        }
    }

    /// Build the HTTP client, authenticator and transport described by
    /// `config`
    ///
    /// # Errors
    ///
    /// Fails when the configuration is invalid or the HTTP client cannot
    /// be constructed.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(config.insecure_skip_verify)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        let mut builder = TransportClient::builder()
            .endpoint(&config.endpoint)
            .http_client(http)
            .override_header(config.override_header)
            .retry(config.retry());
        if let Some(auth_config) = &config.auth {
            builder = builder.authenticator(auth::from_config(auth_config));
        }

        debug!(
            endpoint = %config.endpoint,
            authenticated = config.auth.is_some(),
            "Created client set"
        );
        Ok(Self::new(builder.build()?))
    }

    /// A set whose calls are aborted once `token` is cancelled
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self::new(self.transport.with_cancellation(token))
    }

    /// The underlying transport, for calls no resource client covers
    pub fn client(&self) -> &TransportClient {
        &self.transport
    }

    pub fn buckets(&self) -> Buckets {
        Buckets::new(Arc::clone(&self.caller))
    }

    pub fn tenants(&self) -> Tenants {
        Tenants::new(Arc::clone(&self.caller))
    }

    pub fn object_user(&self) -> ObjectUser {
        ObjectUser::new(Arc::clone(&self.caller))
    }

    pub fn alert_policies(&self) -> AlertPoliciesClient {
        AlertPoliciesClient::new(Arc::clone(&self.caller))
    }

    pub fn objmt(&self) -> Objmt {
        Objmt::new(Arc::clone(&self.caller))
    }

    pub fn crr(&self) -> Crr {
        Crr::new(Arc::clone(&self.caller))
    }

    pub fn status(&self) -> Status {
        Status::new(Arc::clone(&self.caller))
    }

    pub fn service_provider(&self) -> ServiceProviderClient {
        ServiceProviderClient::new(Arc::clone(&self.caller))
    }
}
