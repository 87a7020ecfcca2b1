use serde::{Deserialize, Serialize};

/// Body of a JSON token login
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RkeLoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for RkeLoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RkeLoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token payload returned by a JSON token login
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RkeLoginResponse {
    pub access_token: String,

    /// Access token lifetime in seconds
    #[serde(rename = "expires_in")]
    pub access_expires_in: i64,

    pub refresh_token: String,

    /// Refresh token lifetime in seconds
    pub refresh_expires_in: i64,
}

impl std::fmt::Debug for RkeLoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RkeLoginResponse")
            .field("access_expires_in", &self.access_expires_in)
            .field("refresh_expires_in", &self.refresh_expires_in)
            .finish_non_exhaustive()
    }
}
