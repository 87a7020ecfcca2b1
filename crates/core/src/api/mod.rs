//! Resource API traits
//!
//! One trait per resource family of the management API. The HTTP
//! implementations live in `osc-rest`; callers depend on these traits so a
//! different backend (or a test double) can be substituted.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{
    AccountBillingInfoList, AccountBillingSampleList, AlertPolicies, AlertPolicy, Bucket,
    BucketBillingInfoList, BucketBillingSampleList, BucketList, BucketPerfDataList,
    BucketQuotaInfo, BucketQuotaUpdate, BucketReplicationInfoList, BucketReplicationSampleList,
    CrrConfig, ObjectUserInfo, ObjectUserList, ObjectUserSecret, ObjectUserSecretKeyCreateReq,
    ObjectUserSecretKeyCreateRes, ObjectUserSecretKeyDeleteReq, RebuildInfo, ServiceProvider,
    ServiceProviderCreate, StoreBillingInfoList, StoreBillingSampleList, StoreReplicationData,
    Tenant, TenantCreate, TenantList, TenantQuota, TenantQuotaSet, TenantUpdate,
};

/// Query parameters passed through verbatim to the management API
pub type Params = BTreeMap<String, String>;

/// Bucket operations
#[async_trait]
pub trait BucketsApi: Send + Sync {
    /// List buckets; `namespace` is usually required by the server
    async fn list(&self, params: &Params) -> Result<BucketList>;

    async fn get(&self, name: &str, params: &Params) -> Result<Bucket>;

    /// Create a bucket from the creation-relevant fields of `bucket`
    async fn create(&self, bucket: &Bucket) -> Result<Bucket>;

    /// Deactivate a bucket, optionally removing its objects first
    async fn delete(&self, name: &str, namespace: &str, empty_bucket: bool) -> Result<()>;

    /// Bucket policy as a raw JSON document
    async fn get_policy(&self, name: &str, params: &Params) -> Result<String>;

    async fn update_policy(&self, name: &str, policy: &str, params: &Params) -> Result<()>;

    async fn delete_policy(&self, name: &str, params: &Params) -> Result<()>;

    async fn get_quota(&self, name: &str, namespace: &str) -> Result<BucketQuotaInfo>;

    async fn update_quota(&self, quota: &BucketQuotaUpdate) -> Result<()>;

    async fn delete_quota(&self, name: &str, namespace: &str) -> Result<()>;
}

/// Tenant operations
#[async_trait]
pub trait TenantsApi: Send + Sync {
    async fn list(&self, params: &Params) -> Result<TenantList>;

    async fn get(&self, id: &str, params: &Params) -> Result<Tenant>;

    async fn create(&self, payload: &TenantCreate) -> Result<Tenant>;

    async fn delete(&self, id: &str) -> Result<()>;

    async fn update(&self, payload: &TenantUpdate, id: &str) -> Result<()>;

    async fn get_quota(&self, id: &str, params: &Params) -> Result<TenantQuota>;

    async fn set_quota(&self, id: &str, payload: &TenantQuotaSet) -> Result<()>;

    async fn delete_quota(&self, id: &str) -> Result<()>;
}

/// Object user and secret key operations
#[async_trait]
pub trait ObjectUserApi: Send + Sync {
    async fn list(&self, params: &Params) -> Result<ObjectUserList>;

    async fn get_info(&self, uid: &str, params: &Params) -> Result<ObjectUserInfo>;

    async fn get_secret(&self, uid: &str, params: &Params) -> Result<ObjectUserSecret>;

    async fn create_secret(
        &self,
        uid: &str,
        req: &ObjectUserSecretKeyCreateReq,
        params: &Params,
    ) -> Result<ObjectUserSecretKeyCreateRes>;

    async fn delete_secret(
        &self,
        uid: &str,
        req: &ObjectUserSecretKeyDeleteReq,
        params: &Params,
    ) -> Result<()>;
}

/// Alert policy operations
#[async_trait]
pub trait AlertPoliciesApi: Send + Sync {
    async fn list(&self, params: &Params) -> Result<AlertPolicies>;

    async fn get(&self, name: &str) -> Result<AlertPolicy>;

    async fn create(&self, policy: &AlertPolicy) -> Result<AlertPolicy>;

    async fn update(&self, policy: &AlertPolicy, name: &str) -> Result<AlertPolicy>;

    async fn delete(&self, name: &str) -> Result<()>;
}

/// Billing and metering queries
///
/// Replication pairs are `(source bucket, destination bucket ARN)`.
#[async_trait]
pub trait ObjmtApi: Send + Sync {
    async fn get_account_billing_info(
        &self,
        ids: &[String],
        params: &Params,
    ) -> Result<AccountBillingInfoList>;

    async fn get_account_billing_sample(
        &self,
        ids: &[String],
        params: &Params,
    ) -> Result<AccountBillingSampleList>;

    async fn get_bucket_billing_info(
        &self,
        account: &str,
        ids: &[String],
        params: &Params,
    ) -> Result<BucketBillingInfoList>;

    async fn get_bucket_billing_sample(
        &self,
        account: &str,
        ids: &[String],
        params: &Params,
    ) -> Result<BucketBillingSampleList>;

    async fn get_bucket_billing_perf(
        &self,
        account: &str,
        ids: &[String],
        params: &Params,
    ) -> Result<BucketPerfDataList>;

    async fn get_replication_info(
        &self,
        account: &str,
        pairs: &[(String, String)],
        params: &Params,
    ) -> Result<BucketReplicationInfoList>;

    async fn get_replication_sample(
        &self,
        account: &str,
        pairs: &[(String, String)],
        params: &Params,
    ) -> Result<BucketReplicationSampleList>;

    async fn get_store_billing_info(&self, params: &Params) -> Result<StoreBillingInfoList>;

    async fn get_store_billing_sample(&self, params: &Params) -> Result<StoreBillingSampleList>;

    async fn get_store_replication_data(
        &self,
        ids: &[String],
        params: &Params,
    ) -> Result<StoreReplicationData>;
}

/// Cross-region replication control towards a destination object store
#[async_trait]
pub trait CrrApi: Send + Sync {
    async fn pause(&self, dest_scale: &str, dest_store: &str, params: &Params) -> Result<()>;

    async fn suspend(&self, dest_scale: &str, dest_store: &str, params: &Params) -> Result<()>;

    async fn resume(&self, dest_scale: &str, dest_store: &str, params: &Params) -> Result<()>;

    async fn throttle(&self, dest_scale: &str, dest_store: &str, params: &Params) -> Result<()>;

    async fn unthrottle(&self, dest_scale: &str, dest_store: &str, params: &Params)
    -> Result<()>;

    async fn get(&self, dest_scale: &str, dest_store: &str, params: &Params) -> Result<CrrConfig>;
}

#[async_trait]
pub trait StatusApi: Send + Sync {
    /// Rebuild progress of one storage server device at the given level
    async fn get_rebuild_status(
        &self,
        store: &str,
        pod: &str,
        pod_namespace: &str,
        level: &str,
        params: &Params,
    ) -> Result<RebuildInfo>;
}

#[async_trait]
pub trait ServiceProviderApi: Send + Sync {
    async fn get(&self, params: &Params) -> Result<ServiceProvider>;

    async fn create(&self, payload: &ServiceProviderCreate) -> Result<ServiceProvider>;

    async fn delete(&self) -> Result<()>;
}
