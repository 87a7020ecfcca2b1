//! osc-core: Core library for the ObjectScale management client
//!
//! This crate provides the backend-independent parts of the client:
//! - Error taxonomy and the structured `ApiError` returned by the server
//! - Resource models mirroring the management API's XML and JSON schema
//! - Resource API traits implemented by the HTTP adapter
//! - The authentication retry policy
//! - Client configuration loading
//!
//! The HTTP transport, authenticators and resource clients live in
//! `osc-rest`.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod retry;

pub use api::{
    AlertPoliciesApi, BucketsApi, CrrApi, ObjectUserApi, ObjmtApi, Params, ServiceProviderApi,
    StatusApi, TenantsApi,
};
pub use config::{AuthConfig, ClientConfig, ConfigManager};
pub use error::{Error, ErrorKind, Result};
pub use model::{ApiError, NOT_FOUND_CODE};
pub use retry::{AUTH_RETRIES_MAX, RetryBuilder, RetryConfig, is_reauth_error, retry_with_reauth};
