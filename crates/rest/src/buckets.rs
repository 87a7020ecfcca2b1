//! Bucket resource client

use std::sync::Arc;

use async_trait::async_trait;
use osc_core::model::{Bucket, BucketList, BucketQuotaInfo, BucketQuotaUpdate};
use osc_core::{BucketsApi, Error, Params, Result};

use crate::client::{Body, RemoteCaller, RemoteCallerExt, Request, path_join};

/// Buckets of an object store
#[derive(Clone)]
pub struct Buckets {
    caller: Arc<dyn RemoteCaller>,
}

impl Buckets {
    pub fn new(caller: Arc<dyn RemoteCaller>) -> Self {
        Self { caller }
    }
}

/// Root element of the creation document; the body carries a whole bucket
const CREATE_ROOT: &str = "object_bucket_create";

fn bucket_path(name: &str, suffix: &str) -> Result<String> {
    if name.is_empty() {
        return Err(Error::InvalidRequest("bucket name is required".to_string()));
    }
    Ok(path_join(["object", "bucket", name, suffix]))
}

#[async_trait]
impl BucketsApi for Buckets {
    async fn list(&self, params: &Params) -> Result<BucketList> {
        self.caller
            .call_into(Request::get("/object/bucket").params(params))
            .await
    }

    async fn get(&self, name: &str, params: &Params) -> Result<Bucket> {
        self.caller
            .call_into(Request::get(bucket_path(name, "info")?).params(params))
            .await
    }

    async fn create(&self, bucket: &Bucket) -> Result<Bucket> {
        let body = Body::xml_with_root(CREATE_ROOT, bucket)?;
        self.caller
            .call_into(Request::post("/object/bucket").body(body))
            .await
    }

    async fn delete(&self, name: &str, namespace: &str, empty_bucket: bool) -> Result<()> {
        let mut request = Request::post(bucket_path(name, "deactivate")?)
            .json()
            .param("namespace", namespace);
        if empty_bucket {
            request = request.param("emptyBucket", "true");
        }
        self.caller.call(request).await
    }

    async fn get_policy(&self, name: &str, params: &Params) -> Result<String> {
        let payload = self
            .caller
            .make_remote_call(Request::get(bucket_path(name, "policy")?).json().params(params))
            .await?;
        payload.text()
    }

    async fn update_policy(&self, name: &str, policy: &str, params: &Params) -> Result<()> {
        let request = Request::put(bucket_path(name, "policy")?)
            .json()
            .params(params)
            .body(Body::raw_json(policy));
        self.caller.call(request).await
    }

    async fn delete_policy(&self, name: &str, params: &Params) -> Result<()> {
        self.caller
            .call(Request::delete(bucket_path(name, "policy")?).json().params(params))
            .await
    }

    async fn get_quota(&self, name: &str, namespace: &str) -> Result<BucketQuotaInfo> {
        self.caller
            .call_into(Request::get(bucket_path(name, "quota")?).param("namespace", namespace))
            .await
    }

    async fn update_quota(&self, quota: &BucketQuotaUpdate) -> Result<()> {
        let request =
            Request::put(bucket_path(&quota.bucket_name, "quota")?).body(Body::xml(quota)?);
        self.caller.call(request).await
    }

    async fn delete_quota(&self, name: &str, namespace: &str) -> Result<()> {
        self.caller
            .call(Request::delete(bucket_path(name, "quota")?).param("namespace", namespace))
            .await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_string, body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::TransportClient;

    fn buckets(server: &MockServer) -> Buckets {
        let transport = TransportClient::builder()
            .endpoint(server.uri())
            .build()
            .unwrap();
        Buckets::new(Arc::new(transport))
    }

    fn namespace(ns: &str) -> Params {
        Params::from([("namespace".to_string(), ns.to_string())])
    }

    #[tokio::test]
    async fn test_get_bucket() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/object/bucket/testbucket/info"))
            .and(query_param("namespace", "ns1"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                "<object_bucket><name>testbucket</name><namespace>ns1</namespace>\
                 <is_encryption_enabled>true</is_encryption_enabled></object_bucket>",
                "application/xml",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let bucket = buckets(&server).get("testbucket", &namespace("ns1")).await.unwrap();
        assert_eq!(bucket.name, "testbucket");
        assert_eq!(bucket.namespace, "ns1");
        assert!(bucket.encryption_enabled);
    }

    #[tokio::test]
    async fn test_create_sends_create_document() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/object/bucket"))
            .and(body_string_contains("<object_bucket_create>"))
            .and(body_string_contains("<name>testbucket</name>"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                "<object_bucket><name>testbucket</name></object_bucket>",
                "application/xml",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let bucket = Bucket {
            name: "testbucket".to_string(),
            namespace: "ns1".to_string(),
            ..Default::default()
        };
        let created = buckets(&server).create(&bucket).await.unwrap();
        assert_eq!(created.name, "testbucket");
    }

    #[tokio::test]
    async fn test_delete_with_empty_bucket() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/object/bucket/testbucket/deactivate"))
            .and(query_param("namespace", "ns1"))
            .and(query_param("emptyBucket", "true"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        buckets(&server).delete("testbucket", "ns1", true).await.unwrap();
    }

    #[tokio::test]
    async fn test_policy_round_trip() {
        let policy = r#"{"Version":"2012-10-17","Statement":[]}"#;

        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/object/bucket/testbucket/policy"))
            .and(body_string(policy))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/object/bucket/testbucket/policy"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(policy, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = buckets(&server);
        let params = namespace("ns1");
        client.update_policy("testbucket", policy, &params).await.unwrap();
        assert_eq!(client.get_policy("testbucket", &params).await.unwrap(), policy);
    }

    #[tokio::test]
    async fn test_quota() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/object/bucket/testbucket/quota"))
            .and(query_param("namespace", "ns1"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                "<bucket_quota_details><bucketname>testbucket</bucketname>\
                 <namespace>ns1</namespace><blockSize>10</blockSize>\
                 <notificationSize>8</notificationSize></bucket_quota_details>",
                "application/xml",
            ))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/object/bucket/testbucket/quota"))
            .and(body_string_contains("<blockSize>20</blockSize>"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = buckets(&server);
        let quota = client.get_quota("testbucket", "ns1").await.unwrap();
        assert_eq!(quota.block_size, 10);
        assert_eq!(quota.notification_size, 8);

        client
            .update_quota(&BucketQuotaUpdate {
                bucket_name: "testbucket".to_string(),
                namespace: "ns1".to_string(),
                block_size: 20,
                notification_size: 15,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_bucket_name_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = buckets(&server);
        let err = client.get("", &Params::new()).await.unwrap_err();
        assert_eq!(err.kind(), osc_core::ErrorKind::Validation);
        assert!(client.delete("", "ns1", false).await.is_err());
        assert!(client.get_quota("", "ns1").await.is_err());
    }

    #[tokio::test]
    async fn test_get_missing_bucket() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_raw(
                "<error><code>1004</code><description>Unable to find entity</description></error>",
                "application/xml",
            ))
            .mount(&server)
            .await;

        let err = buckets(&server)
            .get("missing", &Params::new())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
