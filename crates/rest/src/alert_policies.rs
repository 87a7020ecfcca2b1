//! Alert policy resource client (JSON)

use std::sync::Arc;

use async_trait::async_trait;
use osc_core::model::{AlertPolicies, AlertPolicy};
use osc_core::{AlertPoliciesApi, Error, Params, Result};

use crate::client::{Body, RemoteCaller, RemoteCallerExt, Request, path_join};

#[derive(Clone)]
pub struct AlertPoliciesClient {
    caller: Arc<dyn RemoteCaller>,
}

impl AlertPoliciesClient {
    pub fn new(caller: Arc<dyn RemoteCaller>) -> Self {
        Self { caller }
    }
}

fn policy_path(name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(Error::InvalidRequest("alert policy name is required".to_string()));
    }
    Ok(path_join(["vdc", "alertpolicy", name]))
}

#[async_trait]
impl AlertPoliciesApi for AlertPoliciesClient {
    async fn list(&self, params: &Params) -> Result<AlertPolicies> {
        self.caller
            .call_into(Request::get("/vdc/alertpolicy/list").json().params(params))
            .await
    }

    async fn get(&self, name: &str) -> Result<AlertPolicy> {
        self.caller
            .call_into(Request::get(policy_path(name)?).json())
            .await
    }

    async fn create(&self, policy: &AlertPolicy) -> Result<AlertPolicy> {
        let request = Request::post("/vdc/alertpolicy")
            .json()
            .body(Body::json(policy)?);
        self.caller.call_into(request).await
    }

    async fn update(&self, policy: &AlertPolicy, name: &str) -> Result<AlertPolicy> {
        let request = Request::put(policy_path(name)?)
            .json()
            .body(Body::json(policy)?);
        self.caller.call_into(request).await
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.caller
            .call(Request::delete(policy_path(name)?).json())
            .await
    }
}
