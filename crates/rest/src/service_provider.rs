//! Service provider (identity federation) client

use std::sync::Arc;

use async_trait::async_trait;
use osc_core::model::{ServiceProvider, ServiceProviderCreate};
use osc_core::{Params, Result, ServiceProviderApi};

use crate::client::{Body, RemoteCaller, RemoteCallerExt, Request};

const SERVICE_PROVIDER_PATH: &str = "/ecs-service-provider";

#[derive(Clone)]
pub struct ServiceProviderClient {
    caller: Arc<dyn RemoteCaller>,
}

impl ServiceProviderClient {
    pub fn new(caller: Arc<dyn RemoteCaller>) -> Self {
        Self { caller }
    }
}

#[async_trait]
impl ServiceProviderApi for ServiceProviderClient {
    async fn get(&self, params: &Params) -> Result<ServiceProvider> {
        self.caller
            .call_into(Request::get(SERVICE_PROVIDER_PATH).params(params))
            .await
    }

    async fn create(&self, payload: &ServiceProviderCreate) -> Result<ServiceProvider> {
        let request = Request::post(SERVICE_PROVIDER_PATH).body(Body::xml(payload)?);
        self.caller.call_into(request).await
    }

    async fn delete(&self) -> Result<()> {
        self.caller.call(Request::delete(SERVICE_PROVIDER_PATH)).await
    }
}
