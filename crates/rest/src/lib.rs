//! osc-rest: HTTP client for the ObjectScale management API
//!
//! This crate implements the resource traits of `osc-core` over HTTP:
//! - [`client`]: request values, authenticators and the transport executor
//! - one resource client per API family (buckets, tenants, ...)
//! - [`ClientSet`]: a facade sharing one transport between all of them
//!
//! ```no_run
//! use osc_core::{AuthConfig, BucketsApi, ClientConfig, Params};
//! use osc_rest::ClientSet;
//!
//! # async fn run() -> osc_core::Result<()> {
//! let config = ClientConfig::new("https://objectscale.local:4443").with_auth(AuthConfig::User {
//!     gateway: "https://objectscale.local:443".to_string(),
//!     username: "root".to_string(),
//!     password: "secret".to_string(),
//! });
//! let clientset = ClientSet::from_config(&config)?;
//!
//! let mut params = Params::new();
//! params.insert("namespace".to_string(), "ns1".to_string());
//! for bucket in clientset.buckets().list(&params).await?.items {
//!     println!("{}", bucket.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod alert_policies;
pub mod buckets;
pub mod client;
pub mod clientset;
pub mod crr;
pub mod object_user;
pub mod objmt;
pub mod service_provider;
pub mod status;
pub mod tenants;

pub use alert_policies::AlertPoliciesClient;
pub use buckets::Buckets;
pub use client::{
    Authenticator, Body, ContentType, LegacyAuthenticator, Payload, RemoteCaller,
    RemoteCallerExt, Request, ServiceAuthenticator, TransportClient, UserAuthenticator,
};
pub use clientset::ClientSet;
pub use crr::Crr;
pub use object_user::ObjectUser;
pub use objmt::Objmt;
pub use service_provider::ServiceProviderClient;
pub use status::Status;
pub use tenants::Tenants;
