//! Authenticators
//!
//! An [`Authenticator`] obtains the token sent in `X-SDS-AUTH-TOKEN` and
//! keeps it until it is invalidated. Three login protocols exist:
//!
//! - [`ServiceAuthenticator`]: workload login signed with a shared secret
//!   (`GET /mgmt/serviceLogin`)
//! - [`UserAuthenticator`]: JSON token login (`POST /mgmt/auth/login`) with
//!   a fallback to basic-auth login
//! - [`LegacyAuthenticator`]: basic-auth login only (`GET /mgmt/login`)

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use jiff::Timestamp;
use osc_core::model::{RkeLoginRequest, RkeLoginResponse};
use osc_core::{AuthConfig, Error, Result};
use sha2::Sha256;
use tracing::{debug, instrument, warn};
use url::Url;

use super::request::{CONTENT_TYPE_JSON, ContentType};
use super::response::handle_response;

/// Header carrying the session token, both in login responses and requests
pub const AUTH_TOKEN_HEADER: &str = "X-SDS-AUTH-TOKEN";

pub const SERVICE_LOGIN_PATH: &str = "/mgmt/serviceLogin";
pub const RKE_LOGIN_PATH: &str = "/mgmt/auth/login";
pub const LEGACY_LOGIN_PATH: &str = "/mgmt/login";

/// Service login signatures are valid for a 30 second window
const TIME_WINDOW_MS: i64 = 30_000;

type HmacSha256 = Hmac<Sha256>;

/// Obtains and holds a session token
///
/// Implementations keep the token behind a lock; all methods take `&self`
/// so one authenticator can be shared by concurrent calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// True once a non-empty token has been obtained
    fn is_authenticated(&self) -> bool;

    /// Perform one login round-trip and store the token
    async fn login(&self, http: &reqwest::Client) -> Result<()>;

    /// Current token, empty when unauthenticated
    fn token(&self) -> String;

    /// Forget the current token
    fn invalidate(&self);
}

/// Lock-guarded token storage shared by the authenticators
#[derive(Default)]
struct TokenCell(RwLock<String>);

impl TokenCell {
    fn get(&self) -> String {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, token: String) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    fn clear(&self) {
        self.0.write().unwrap_or_else(PoisonError::into_inner).clear();
    }

    fn is_set(&self) -> bool {
        !self.0.read().unwrap_or_else(PoisonError::into_inner).is_empty()
    }
}

impl std::fmt::Debug for TokenCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.is_set() { "<set>" } else { "<empty>" })
    }
}

fn login_url(gateway: &str, path: &str) -> Result<Url> {
    let mut url = Url::parse(gateway)?;
    url.set_path(path);
    Ok(url)
}

/// Validate a login response and return its header token
async fn header_token(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let token = response
        .headers()
        .get(AUTH_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let content_type = response_content_type(&response);
    let body = response.bytes().await.map_err(Error::transport)?;

    handle_response(status, content_type, &body)?;

    if token.is_empty() {
        return Err(Error::Server("login failed".to_string()));
    }
    Ok(token)
}

fn response_content_type(response: &reqwest::Response) -> Option<ContentType> {
    response
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(ContentType::from_media_type)
}

async fn basic_auth_login(
    http: &reqwest::Client,
    gateway: &str,
    path: &str,
    username: &str,
    password: &str,
) -> Result<String> {
    let url = login_url(gateway, path)?;
    debug!(url = %url, "Sending basic-auth login");

    let response = http
        .get(url)
        .basic_auth(username, Some(password))
        .send()
        .await
        .map_err(Error::transport)?;

    header_token(response).await
}

/// Round to the nearest 30 second boundary, in epoch milliseconds
///
/// Halfway values round up.
pub(crate) fn time_factor(now: Timestamp) -> i64 {
    let millis = now.as_millisecond();
    (millis + TIME_WINDOW_MS / 2).div_euclid(TIME_WINDOW_MS) * TIME_WINDOW_MS
}

/// Login for a workload identified by pod, namespace and ObjectScale id
///
/// The password is an HMAC-SHA256 signature of the service URN and the
/// current 30 second time window, keyed by the shared secret.
#[derive(Debug)]
pub struct ServiceAuthenticator {
    gateway: String,
    shared_secret: Secret,
    pod_name: String,
    namespace: String,
    object_scale_id: String,
    token: TokenCell,
}

impl ServiceAuthenticator {
    pub fn new(
        gateway: impl Into<String>,
        shared_secret: impl Into<String>,
        pod_name: impl Into<String>,
        namespace: impl Into<String>,
        object_scale_id: impl Into<String>,
    ) -> Self {
        Self {
            gateway: gateway.into(),
            shared_secret: Secret(shared_secret.into()),
            pod_name: pod_name.into(),
            namespace: namespace.into(),
            object_scale_id: object_scale_id.into(),
            token: TokenCell::default(),
        }
    }

    /// `urn:osc:{id}::service/{pod}`; the object store segment is empty
    pub fn service_urn(&self) -> String {
        format!("urn:osc:{}::service/{}", self.object_scale_id, self.pod_name)
    }

    /// `B64-` followed by base64 of `{id},,{namespace},{pod}`
    pub fn username(&self) -> String {
        let raw = format!(
            "{},,{},{}",
            self.object_scale_id, self.namespace, self.pod_name
        );
        format!("B64-{}", STANDARD.encode(raw))
    }

    /// Signed password for the time window containing `now`
    pub(crate) fn password(&self, now: Timestamp) -> Result<String> {
        let data = format!("{}{}", self.service_urn(), time_factor(now));
        let mut mac = HmacSha256::new_from_slice(self.shared_secret.0.as_bytes())
            .map_err(|e| Error::Server(format!("problem computing hmac sha256: {e}")))?;
        mac.update(data.as_bytes());
        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }
}

#[async_trait]
impl Authenticator for ServiceAuthenticator {
    fn is_authenticated(&self) -> bool {
        self.token.is_set()
    }

    #[instrument(skip_all, fields(gateway = %self.gateway, pod = %self.pod_name))]
    async fn login(&self, http: &reqwest::Client) -> Result<()> {
        let password = self.password(Timestamp::now())?;
        let token = basic_auth_login(
            http,
            &self.gateway,
            SERVICE_LOGIN_PATH,
            &self.username(),
            &password,
        )
        .await?;

        self.token.set(token);
        debug!("Service login succeeded");
        Ok(())
    }

    fn token(&self) -> String {
        self.token.get()
    }

    fn invalidate(&self) {
        self.token.clear();
    }
}

/// Login for an operator account
///
/// Tries the JSON token login first and falls back to basic-auth login when
/// it fails for any reason.
#[derive(Debug)]
pub struct UserAuthenticator {
    gateway: String,
    username: String,
    password: Secret,
    token: TokenCell,
}

impl UserAuthenticator {
    pub fn new(
        gateway: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            gateway: gateway.into(),
            username: username.into(),
            password: Secret(password.into()),
            token: TokenCell::default(),
        }
    }

    async fn login_rke(&self, http: &reqwest::Client) -> Result<String> {
        let url = login_url(&self.gateway, RKE_LOGIN_PATH)?;
        let body = RkeLoginRequest {
            username: self.username.clone(),
            password: self.password.0.clone(),
        };
        debug!(url = %url, "Sending token login");

        let response = http
            .post(url)
            .header(http::header::CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(http::header::ACCEPT, CONTENT_TYPE_JSON)
            .json(&body)
            .send()
            .await
            .map_err(Error::transport)?;

        let status = response.status();
        let content_type = response_content_type(&response).or(Some(ContentType::Json));
        let bytes = response.bytes().await.map_err(Error::transport)?;
        handle_response(status, content_type, &bytes)?;

        let login: RkeLoginResponse =
            serde_json::from_slice(&bytes).map_err(|e| Error::decode("json", e))?;
        if login.access_token.is_empty() {
            return Err(Error::Server("login failed".to_string()));
        }
        Ok(login.access_token)
    }
}

#[async_trait]
impl Authenticator for UserAuthenticator {
    fn is_authenticated(&self) -> bool {
        self.token.is_set()
    }

    #[instrument(skip_all, fields(gateway = %self.gateway, username = %self.username))]
    async fn login(&self, http: &reqwest::Client) -> Result<()> {
        let token = match self.login_rke(http).await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Token login failed, trying basic-auth login");
                basic_auth_login(
                    http,
                    &self.gateway,
                    LEGACY_LOGIN_PATH,
                    &self.username,
                    &self.password.0,
                )
                .await?
            }
        };

        self.token.set(token);
        debug!("User login succeeded");
        Ok(())
    }

    fn token(&self) -> String {
        self.token.get()
    }

    fn invalidate(&self) {
        self.token.clear();
    }
}

/// Basic-auth login against `/mgmt/login` only
#[derive(Debug)]
pub struct LegacyAuthenticator {
    gateway: String,
    username: String,
    password: Secret,
    token: TokenCell,
}

impl LegacyAuthenticator {
    pub fn new(
        gateway: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            gateway: gateway.into(),
            username: username.into(),
            password: Secret(password.into()),
            token: TokenCell::default(),
        }
    }
}

#[async_trait]
impl Authenticator for LegacyAuthenticator {
    fn is_authenticated(&self) -> bool {
        self.token.is_set()
    }

    #[instrument(skip_all, fields(gateway = %self.gateway, username = %self.username))]
    async fn login(&self, http: &reqwest::Client) -> Result<()> {
        let token = basic_auth_login(
            http,
            &self.gateway,
            LEGACY_LOGIN_PATH,
            &self.username,
            &self.password.0,
        )
        .await?;

        self.token.set(token);
        debug!("Basic-auth login succeeded");
        Ok(())
    }

    fn token(&self) -> String {
        self.token.get()
    }

    fn invalidate(&self) {
        self.token.clear();
    }
}

/// Credential that never shows up in `Debug` output
struct Secret(String);

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Build the authenticator described by `config`
pub fn from_config(config: &AuthConfig) -> Arc<dyn Authenticator> {
    match config {
        AuthConfig::User {
            gateway,
            username,
            password,
        } => Arc::new(UserAuthenticator::new(gateway, username, password)),
        AuthConfig::Service {
            gateway,
            shared_secret,
            pod_name,
            namespace,
            object_scale_id,
        } => Arc::new(ServiceAuthenticator::new(
            gateway,
            shared_secret,
            pod_name,
            namespace,
            object_scale_id,
        )),
        AuthConfig::Legacy {
            gateway,
            username,
            password,
        } => Arc::new(LegacyAuthenticator::new(gateway, username, password)),
    }
}
