//! Authentication retry policy
//!
//! Only authorization failures are retried: a 401 answer makes the caller
//! log in again and repeat the request, up to a fixed number of attempts.
//! Every other error is returned to the caller on first sight.

use crate::error::{Error, Result};

/// Default ceiling on request attempts per remote call
pub const AUTH_RETRIES_MAX: u32 = 3;

/// Retry configuration for authentication failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum request attempts, initial attempt included
    pub max_attempts: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: AUTH_RETRIES_MAX,
        }
    }
}

/// Run `operation` until it succeeds, retrying after re-authentication
///
/// `operation` receives the 1-based attempt number. When it fails with an
/// error for which [`is_reauth_error`] holds and another attempt remains,
/// `reauthenticate` runs before the next attempt. A failed re-login ends
/// the loop with `authorization: retry login: ...`; running out of
/// attempts ends it with `authorization: exhausted authentication tries`.
///
/// # Example
/// ```ignore
/// let payload = retry_with_reauth(
///     &config,
///     |attempt| transport.attempt(&request, attempt),
///     || transport.relogin(),
/// ).await?;
/// ```
pub async fn retry_with_reauth<T, F, Fut, R, RFut>(
    config: &RetryConfig,
    mut operation: F,
    mut reauthenticate: R,
) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
    R: FnMut() -> RFut,
    RFut: std::future::Future<Output = Result<()>>,
{
    for attempt in 1..=config.max_attempts {
        match operation(attempt).await {
            Ok(result) => return Ok(result),
            Err(e) if is_reauth_error(&e) => {
                if attempt >= config.max_attempts {
                    break;
                }

                tracing::warn!(
                    attempt = attempt,
                    max_attempts = config.max_attempts,
                    "Request unauthorized, logging in again"
                );

                reauthenticate().await.map_err(|e| match e {
                    Error::Cancelled => Error::Cancelled,
                    e => Error::Authorization(format!("retry login: {e}")),
                })?;
            }
            Err(e) => return Err(e),
        }
    }

    Err(Error::Authorization(
        "exhausted authentication tries".to_string(),
    ))
}

/// Check if an error should trigger a re-login and another attempt
pub fn is_reauth_error(error: &Error) -> bool {
    error.is_unauthorized()
}

/// Retry configuration builder
#[derive(Debug, Clone)]
pub struct RetryBuilder {
    max_attempts: u32,
}

impl RetryBuilder {
    pub fn new() -> Self {
        Self {
            max_attempts: AUTH_RETRIES_MAX,
        }
    }

    pub fn max_attempts(mut self, n: u32) -> Self {
        self.max_attempts = n;
        self
    }

    pub fn build(self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.max_attempts,
        }
    }
}

impl Default for RetryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    #[test]
    fn test_is_reauth_error() {
        assert!(is_reauth_error(&Error::Unauthorized));
        assert!(!is_reauth_error(&Error::Authorization(
            "login: server error: login failed".to_string()
        )));
        assert!(!is_reauth_error(&Error::Server("not found".to_string())));
        assert!(!is_reauth_error(&Error::Cancelled));
    }

    #[test]
    fn test_retry_builder() {
        let config = RetryBuilder::new().max_attempts(5).build();
        assert_eq!(config.max_attempts, 5);
        assert_eq!(RetryBuilder::default().build(), RetryConfig::default());
        assert_eq!(RetryConfig::default().max_attempts, AUTH_RETRIES_MAX);
    }

    #[tokio::test]
    async fn test_retry_success_first_attempt() {
        let config = RetryConfig::default();
        let mut calls = 0;
        let mut logins = 0;

        let result = retry_with_reauth(
            &config,
            |_| {
                calls += 1;
                async { Ok::<_, Error>(42) }
            },
            || {
                logins += 1;
                async { Ok(()) }
            },
        )
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls, 1);
        assert_eq!(logins, 0);
    }

    #[tokio::test]
    async fn test_retry_success_after_reauth() {
        let config = RetryConfig::default();
        let calls = Arc::new(AtomicU32::new(0));
        let logins = Arc::new(AtomicU32::new(0));

        let result = retry_with_reauth(
            &config,
            |attempt| {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    if attempt < 2 {
                        Err(Error::Unauthorized)
                    } else {
                        Ok(attempt)
                    }
                }
            },
            || {
                let logins = logins.clone();
                async move {
                    logins.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            },
        )
        .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(logins.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_exhausted() {
        let config = RetryBuilder::new().max_attempts(3).build();
        let mut calls = 0;
        let mut logins = 0;

        let result: Result<()> = retry_with_reauth(
            &config,
            |_| {
                calls += 1;
                async { Err(Error::Unauthorized) }
            },
            || {
                logins += 1;
                async { Ok(()) }
            },
        )
        .await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "authorization: exhausted authentication tries"
        );
        assert_eq!(calls, 3);
        // No re-login after the final attempt
        assert_eq!(logins, 2);
    }

    #[tokio::test]
    async fn test_retry_login_failure() {
        let config = RetryConfig::default();
        let mut calls = 0;

        let result: Result<()> = retry_with_reauth(
            &config,
            |_| {
                calls += 1;
                async { Err(Error::Unauthorized) }
            },
            || async { Err(Error::Server("login failed".to_string())) },
        )
        .await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "authorization: retry login: server error: login failed"
        );
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_retry_cancelled_during_login() {
        let result: Result<()> = retry_with_reauth(
            &RetryConfig::default(),
            |_| async { Err(Error::Unauthorized) },
            || async { Err(Error::Cancelled) },
        )
        .await;

        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn test_retry_non_auth_error() {
        let mut calls = 0;

        let result: Result<()> = retry_with_reauth(
            &RetryConfig::default(),
            |_| {
                calls += 1;
                async { Err(Error::Server("not found".to_string())) }
            },
            || async { Ok(()) },
        )
        .await;

        assert!(result.unwrap_err().is_not_found());
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_retry_zero_attempts() {
        let config = RetryBuilder::new().max_attempts(0).build();
        let mut calls = 0;

        let result: Result<()> = retry_with_reauth(
            &config,
            |_| {
                calls += 1;
                async { Ok(()) }
            },
            || async { Ok(()) },
        )
        .await;

        assert!(result.is_err());
        assert_eq!(calls, 0);
    }
}
