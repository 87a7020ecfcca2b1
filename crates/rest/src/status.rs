//! Device rebuild status client

use std::sync::Arc;

use async_trait::async_trait;
use osc_core::model::RebuildInfo;
use osc_core::{Params, Result, StatusApi};

use crate::client::{RemoteCaller, RemoteCallerExt, Request, path_join};

#[derive(Clone)]
pub struct Status {
    caller: Arc<dyn RemoteCaller>,
}

impl Status {
    pub fn new(caller: Arc<dyn RemoteCaller>) -> Self {
        Self { caller }
    }
}

/// Cluster DNS name of a storage server pod
fn device_name(store: &str, pod: &str, pod_namespace: &str) -> String {
    format!("{pod}.{store}-ss.{pod_namespace}.svc.cluster.local")
}

#[async_trait]
impl StatusApi for Status {
    async fn get_rebuild_status(
        &self,
        store: &str,
        pod: &str,
        pod_namespace: &str,
        level: &str,
        params: &Params,
    ) -> Result<RebuildInfo> {
        let device = device_name(store, pod, pod_namespace);
        let path = path_join([
            "vdc",
            "recovery-status",
            "devices",
            device.as_str(),
            "levels",
            level,
        ]);
        self.caller
            .call_into(Request::get(path).json().params(params))
            .await
    }
}
