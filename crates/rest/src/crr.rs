//! Cross-region replication control client

use std::sync::Arc;

use async_trait::async_trait;
use osc_core::model::CrrConfig;
use osc_core::{CrrApi, Params, Result};

use crate::client::{RemoteCaller, RemoteCallerExt, Request, path_join};

#[derive(Clone)]
pub struct Crr {
    caller: Arc<dyn RemoteCaller>,
}

impl Crr {
    pub fn new(caller: Arc<dyn RemoteCaller>) -> Self {
        Self { caller }
    }

    async fn control(
        &self,
        dest_scale: &str,
        dest_store: &str,
        action: &str,
        params: &Params,
    ) -> Result<()> {
        let path = path_join(["replication", "control", dest_scale, dest_store, action]);
        self.caller.call(Request::post(path).params(params)).await
    }
}

#[async_trait]
impl CrrApi for Crr {
    async fn pause(&self, dest_scale: &str, dest_store: &str, params: &Params) -> Result<()> {
        self.control(dest_scale, dest_store, "pause", params).await
    }

    async fn suspend(&self, dest_scale: &str, dest_store: &str, params: &Params) -> Result<()> {
        self.control(dest_scale, dest_store, "suspend", params).await
    }

    async fn resume(&self, dest_scale: &str, dest_store: &str, params: &Params) -> Result<()> {
        self.control(dest_scale, dest_store, "resume", params).await
    }

    async fn throttle(&self, dest_scale: &str, dest_store: &str, params: &Params) -> Result<()> {
        self.control(dest_scale, dest_store, "throttle", params).await
    }

    async fn unthrottle(&self, dest_scale: &str, dest_store: &str, params: &Params) -> Result<()> {
        self.control(dest_scale, dest_store, "unthrottle", params).await
    }

    async fn get(&self, dest_scale: &str, dest_store: &str, params: &Params) -> Result<CrrConfig> {
        let path = path_join(["replication", "control", dest_scale, dest_store]);
        self.caller
            .call_into(Request::get(path).params(params))
            .await
    }
}
