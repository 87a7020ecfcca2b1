//! Transport layer for the management API
//!
//! Resource clients describe a call as a [`Request`] and hand it to a
//! [`RemoteCaller`]. [`TransportClient`] is the HTTP implementation;
//! anything else implementing the trait (a recorder, an in-process fake)
//! can stand in for it.

pub mod auth;
mod request;
mod response;
mod transport;

use async_trait::async_trait;
use osc_core::Result;
use serde::de::DeserializeOwned;

pub use auth::{
    AUTH_TOKEN_HEADER, Authenticator, LegacyAuthenticator, ServiceAuthenticator,
    UserAuthenticator,
};
pub use request::{Body, CONTENT_TYPE_JSON, CONTENT_TYPE_XML, ContentType, Request, path_join};
pub use response::{Payload, decode_api_error, handle_response};
pub use transport::{OVERRIDE_HEADER, TransportClient, TransportClientBuilder};

/// Executes one logical call against the management API
#[async_trait]
pub trait RemoteCaller: Send + Sync {
    /// Send `request` and return the buffered body of a successful response
    async fn make_remote_call(&self, request: Request) -> Result<Payload>;
}

/// Decoding helpers over [`RemoteCaller`]
#[async_trait]
pub trait RemoteCallerExt: RemoteCaller {
    /// Make the call and decode the body; an empty body yields `T::default()`
    async fn call_into<T>(&self, request: Request) -> Result<T>
    where
        T: DeserializeOwned + Default + Send,
    {
        self.make_remote_call(request).await?.decode()
    }

    /// Make the call and discard the body
    async fn call(&self, request: Request) -> Result<()> {
        self.make_remote_call(request).await.map(|_| ())
    }
}

impl<C: RemoteCaller + ?Sized> RemoteCallerExt for C {}
