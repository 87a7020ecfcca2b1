//! Tenant resource client

use std::sync::Arc;

use async_trait::async_trait;
use osc_core::model::{Tenant, TenantCreate, TenantList, TenantQuota, TenantQuotaSet, TenantUpdate};
use osc_core::{Params, Result, TenantsApi};

use crate::client::{Body, RemoteCaller, RemoteCallerExt, Request, path_join};

#[derive(Clone)]
pub struct Tenants {
    caller: Arc<dyn RemoteCaller>,
}

impl Tenants {
    pub fn new(caller: Arc<dyn RemoteCaller>) -> Self {
        Self { caller }
    }
}

fn tenant_path<'a>(id: &'a str, rest: &[&'a str]) -> String {
    path_join(["object", "tenants", "tenant", id].iter().chain(rest))
}

#[async_trait]
impl TenantsApi for Tenants {
    async fn list(&self, params: &Params) -> Result<TenantList> {
        self.caller
            .call_into(Request::get("/object/tenants").params(params))
            .await
    }

    async fn get(&self, id: &str, params: &Params) -> Result<Tenant> {
        self.caller
            .call_into(Request::get(tenant_path(id, &[])).params(params))
            .await
    }

    async fn create(&self, payload: &TenantCreate) -> Result<Tenant> {
        let request = Request::post("/object/tenants/tenant").body(Body::xml(payload)?);
        self.caller.call_into(request).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.caller
            .call(Request::post(tenant_path(id, &["delete"])))
            .await
    }

    async fn update(&self, payload: &TenantUpdate, id: &str) -> Result<()> {
        let request = Request::post(tenant_path(id, &[])).body(Body::xml(payload)?);
        self.caller.call(request).await
    }

    async fn get_quota(&self, id: &str, params: &Params) -> Result<TenantQuota> {
        self.caller
            .call_into(Request::get(tenant_path(id, &["quota"])).params(params))
            .await
    }

    async fn set_quota(&self, id: &str, payload: &TenantQuotaSet) -> Result<()> {
        let request = Request::put(tenant_path(id, &["quota"])).body(Body::xml(payload)?);
        self.caller.call(request).await
    }

    async fn delete_quota(&self, id: &str) -> Result<()> {
        self.caller
            .call(Request::delete(tenant_path(id, &["quota"])))
            .await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::TransportClient;

    const TENANT_ID: &str = "10d9817c-3696-4625-854e-82b6a4ab8ea2";

    fn tenants(server: &MockServer) -> Tenants {
        let transport = TransportClient::builder()
            .endpoint(server.uri())
            .build()
            .unwrap();
        Tenants::new(Arc::new(transport))
    }

    #[test]
    fn test_tenant_path() {
        assert_eq!(
            tenant_path("t 1", &["quota"]),
            "/object/tenants/tenant/t%201/quota"
        );
        assert_eq!(tenant_path("t1", &[]), "/object/tenants/tenant/t1");
    }

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/object/tenants"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                format!(
                    "<tenants><tenant><id>{TENANT_ID}</id></tenant>\
                     <tenant><id>other</id></tenant></tenants>"
                ),
                "application/xml",
            ))
            .mount(&server)
            .await;

        let list = tenants(&server).list(&Params::new()).await.unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].id, TENANT_ID);
    }

    #[tokio::test]
    async fn test_create_and_delete() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/object/tenants/tenant"))
            .and(body_string_contains("<tenant_create>"))
            .and(body_string_contains(format!("<account_id>{TENANT_ID}</account_id>")))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                format!("<tenant><id>{TENANT_ID}</id></tenant>"),
                "application/xml",
            ))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(format!("/object/tenants/tenant/{TENANT_ID}/delete")))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = tenants(&server);
        let tenant = client
            .create(&TenantCreate {
                account_id: TENANT_ID.to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(tenant.id, TENANT_ID);

        client.delete(TENANT_ID).await.unwrap();
    }

    #[tokio::test]
    async fn test_quota() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/object/tenants/tenant/{TENANT_ID}/quota")))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                format!(
                    "<tenant_quota_details><blockSize>5</blockSize>\
                     <notificationSize>4</notificationSize><id>{TENANT_ID}</id>\
                     </tenant_quota_details>"
                ),
                "application/xml",
            ))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path(format!("/object/tenants/tenant/{TENANT_ID}/quota")))
            .and(body_string_contains("<tenant_quota_update>"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(format!("/object/tenants/tenant/{TENANT_ID}/quota")))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = tenants(&server);
        let quota = client.get_quota(TENANT_ID, &Params::new()).await.unwrap();
        assert_eq!(quota.block_size, "5");
        assert_eq!(quota.id, TENANT_ID);

        client
            .set_quota(
                TENANT_ID,
                &TenantQuotaSet {
                    block_size: "10".to_string(),
                    notification_size: "8".to_string(),
                },
            )
            .await
            .unwrap();
        client.delete_quota(TENANT_ID).await.unwrap();
    }
}
