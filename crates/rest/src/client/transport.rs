//! Remote-call executor
//!
//! [`TransportClient`] turns a [`Request`] into an HTTP exchange with the
//! management endpoint: it attaches the session token, logs in when needed,
//! repeats the request after a 401 and classifies the response.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use http::header::{ACCEPT, CONTENT_TYPE};
use osc_core::{Error, Result, RetryConfig, retry_with_reauth};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, trace};

use super::RemoteCaller;
use super::auth::{AUTH_TOKEN_HEADER, Authenticator};
use super::request::{CONTENT_TYPE_XML, ContentType, Request};
use super::response::{Payload, validate_response};

/// Header asking the server to bypass its own throttling checks
pub const OVERRIDE_HEADER: &str = "X-EMC-Override";

struct Inner {
    endpoint: String,
    authenticator: Option<Arc<dyn Authenticator>>,
    http: reqwest::Client,
    override_header: bool,
    retry: RetryConfig,
    login_lock: Mutex<()>,
}

/// HTTP transport for the management API
///
/// Cloning is cheap and clones share the authenticator, the HTTP
/// connection pool and the login lock.
#[derive(Clone)]
pub struct TransportClient {
    inner: Arc<Inner>,
    cancel: Option<CancellationToken>,
}

impl std::fmt::Debug for TransportClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportClient")
            .field("endpoint", &self.inner.endpoint)
            .field("authenticated", &self.inner.authenticator.is_some())
            .field("override_header", &self.inner.override_header)
            .field("retry", &self.inner.retry)
            .finish()
    }
}

impl TransportClient {
    pub fn builder() -> TransportClientBuilder {
        TransportClientBuilder::default()
    }

    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    pub fn authenticator(&self) -> Option<&Arc<dyn Authenticator>> {
        self.inner.authenticator.as_ref()
    }

    /// A handle whose calls are aborted once `token` is cancelled
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            cancel: Some(token),
        }
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.cancel {
            Some(token) if token.is_cancelled() => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }

    async fn cancellable<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match &self.cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => Err(Error::Cancelled),
                result = fut => result,
            },
            None => fut.await,
        }
    }

    /// Log in unless a concurrent call already did
    async fn ensure_login(&self, auth: &Arc<dyn Authenticator>) -> Result<()> {
        self.check_cancelled()?;
        let _guard = self.cancellable(async { Ok(self.inner.login_lock.lock().await) }).await?;
        if auth.is_authenticated() {
            return Ok(());
        }
        self.cancellable(auth.login(&self.inner.http)).await
    }

    /// One request/response exchange
    async fn attempt(
        &self,
        request: &Request,
        url: &url::Url,
        content_type: ContentType,
        attempt: u32,
    ) -> Result<Payload> {
        self.check_cancelled()?;

        let mut builder = self
            .inner
            .http
            .request(request.method().clone(), url.clone())
            .header(ACCEPT, content_type.as_str())
            .header(ACCEPT, CONTENT_TYPE_XML)
            .header(CONTENT_TYPE, content_type.as_str());

        let sent_token = match &self.inner.authenticator {
            Some(auth) => {
                let token = auth.token();
                builder = builder.header(AUTH_TOKEN_HEADER, token.as_str());
                Some(token)
            }
            None => None,
        };
        if self.inner.override_header {
            builder = builder.header(OVERRIDE_HEADER, "true");
        }
        if let Some(body) = request.payload() {
            builder = builder.body(body.bytes());
        }

        debug!(method = %request.method(), url = %url, attempt, "Sending request");

        let response = self
            .cancellable(async { builder.send().await.map_err(Error::transport) })
            .await?;

        let status = response.status();
        let response_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(ContentType::from_media_type)
            .unwrap_or(content_type);
        let body = self
            .cancellable(async { response.bytes().await.map_err(Error::transport) })
            .await?;

        debug!(status = %status, content_length = body.len(), "Received response");
        trace!(body = %String::from_utf8_lossy(&body), "Response body");

        if status == http::StatusCode::UNAUTHORIZED {
            if let (Some(auth), Some(sent)) = (&self.inner.authenticator, sent_token)
                && auth.token() == sent
            {
                auth.invalidate();
            }
            return Err(Error::Unauthorized);
        }

        validate_response(status, response_type, &body)?;
        Ok(Payload::new(response_type, body))
    }
}

#[async_trait]
impl RemoteCaller for TransportClient {
    #[instrument(skip_all, fields(method = %request.method(), path = %request.path()))]
    async fn make_remote_call(&self, request: Request) -> Result<Payload> {
        let content_type = request.validate()?;
        let url = request.url(&self.inner.endpoint)?;

        let Some(auth) = &self.inner.authenticator else {
            return self.attempt(&request, &url, content_type, 1).await;
        };

        if !auth.is_authenticated() {
            self.ensure_login(auth).await.map_err(|e| match e {
                Error::Cancelled => Error::Cancelled,
                e => Error::Authorization(format!("login: {e}")),
            })?;
        }

        retry_with_reauth(
            &self.inner.retry,
            |attempt| self.attempt(&request, &url, content_type, attempt),
            || self.ensure_login(auth),
        )
        .await
    }
}

/// Builder for [`TransportClient`]
#[derive(Default)]
pub struct TransportClientBuilder {
    endpoint: Option<String>,
    authenticator: Option<Arc<dyn Authenticator>>,
    http: Option<reqwest::Client>,
    override_header: bool,
    retry: RetryConfig,
    cancel: Option<CancellationToken>,
}

impl TransportClientBuilder {
    /// Base URL of the management API, e.g. `https://objectscale:4443`
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Without an authenticator no token is sent and a 401 is final
    pub fn authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    /// HTTP client shared with the authenticator's logins
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn override_header(mut self, enabled: bool) -> Self {
        self.override_header = enabled;
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn build(self) -> Result<TransportClient> {
        let endpoint = self
            .endpoint
            .filter(|e| !e.is_empty())
            .ok_or_else(|| Error::InvalidRequest("endpoint is required".to_string()))?;

        Ok(TransportClient {
            inner: Arc::new(Inner {
                endpoint,
                authenticator: self.authenticator,
                http: self.http.unwrap_or_default(),
                override_header: self.override_header,
                retry: self.retry,
                login_lock: Mutex::new(()),
            }),
            cancel: self.cancel,
        })
    }
}
