//! Billing and metering (objmt) resource client
//!
//! Queries select accounts, buckets or stores by id; the ids travel as an
//! XML list in the request body even for read-only queries.

use std::sync::Arc;

use async_trait::async_trait;
use osc_core::model::{
    AccountBillingInfoList, AccountBillingSampleList, BucketBillingInfoList,
    BucketBillingSampleList, BucketPerfDataList, BucketReplicationInfoList,
    BucketReplicationSampleList, StoreBillingInfoList, StoreBillingSampleList,
    StoreReplicationData,
};
use osc_core::{ObjmtApi, Params, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::{Body, RemoteCaller, RemoteCallerExt, Request, path_join};

#[derive(Serialize)]
struct IdList<'a> {
    #[serde(rename = "id")]
    ids: &'a [String],
}

#[derive(Serialize)]
struct ReplicationIds<'a> {
    src: &'a str,
    dest: &'a str,
}

#[derive(Serialize)]
struct ReplicationList<'a> {
    replication: Vec<ReplicationIds<'a>>,
}

fn id_list(root: &str, ids: &[String]) -> Result<Body> {
    Body::xml_with_root(root, &IdList { ids })
}

fn replication_list(pairs: &[(String, String)]) -> Result<Body> {
    let list = ReplicationList {
        replication: pairs
            .iter()
            .map(|(src, dest)| ReplicationIds { src, dest })
            .collect(),
    };
    Body::xml_with_root("replication_list", &list)
}

fn account_path(account: &str, rest: [&str; 2]) -> String {
    path_join(["object", "mt", "account", account, rest[0], rest[1]])
}

#[derive(Clone)]
pub struct Objmt {
    caller: Arc<dyn RemoteCaller>,
}

impl Objmt {
    pub fn new(caller: Arc<dyn RemoteCaller>) -> Self {
        Self { caller }
    }

    async fn post<T>(&self, path: impl Into<String>, body: Body, params: &Params) -> Result<T>
    where
        T: DeserializeOwned + Default + Send,
    {
        self.caller
            .call_into(Request::post(path).params(params).body(body))
            .await
    }
}

#[async_trait]
impl ObjmtApi for Objmt {
    async fn get_account_billing_info(
        &self,
        ids: &[String],
        params: &Params,
    ) -> Result<AccountBillingInfoList> {
        self.post("/object/mt/account/info", id_list("account_list", ids)?, params)
            .await
    }

    async fn get_account_billing_sample(
        &self,
        ids: &[String],
        params: &Params,
    ) -> Result<AccountBillingSampleList> {
        self.post("/object/mt/account/sample", id_list("account_list", ids)?, params)
            .await
    }

    async fn get_bucket_billing_info(
        &self,
        account: &str,
        ids: &[String],
        params: &Params,
    ) -> Result<BucketBillingInfoList> {
        self.post(
            account_path(account, ["bucket", "info"]),
            id_list("bucket_list", ids)?,
            params,
        )
        .await
    }

    async fn get_bucket_billing_sample(
        &self,
        account: &str,
        ids: &[String],
        params: &Params,
    ) -> Result<BucketBillingSampleList> {
        self.post(
            account_path(account, ["bucket", "sample"]),
            id_list("bucket_list", ids)?,
            params,
        )
        .await
    }

    async fn get_bucket_billing_perf(
        &self,
        account: &str,
        ids: &[String],
        params: &Params,
    ) -> Result<BucketPerfDataList> {
        self.post(
            account_path(account, ["bucket", "perf"]),
            id_list("bucket_list", ids)?,
            params,
        )
        .await
    }

    async fn get_replication_info(
        &self,
        account: &str,
        pairs: &[(String, String)],
        params: &Params,
    ) -> Result<BucketReplicationInfoList> {
        self.post(
            account_path(account, ["replication", "info"]),
            replication_list(pairs)?,
            params,
        )
        .await
    }

    async fn get_replication_sample(
        &self,
        account: &str,
        pairs: &[(String, String)],
        params: &Params,
    ) -> Result<BucketReplicationSampleList> {
        self.post(
            account_path(account, ["replication", "sample"]),
            replication_list(pairs)?,
            params,
        )
        .await
    }

    async fn get_store_billing_info(&self, params: &Params) -> Result<StoreBillingInfoList> {
        self.caller
            .call_into(Request::get("/object/mt/store/info").params(params))
            .await
    }

    async fn get_store_billing_sample(&self, params: &Params) -> Result<StoreBillingSampleList> {
        self.caller
            .call_into(Request::get("/object/mt/store/sample").params(params))
            .await
    }

    async fn get_store_replication_data(
        &self,
        ids: &[String],
        params: &Params,
    ) -> Result<StoreReplicationData> {
        self.post("/object/mt/store/replication", id_list("store_list", ids)?, params)
            .await
    }
}
