//! Data-transfer records mirroring the management API's XML and JSON schema
//!
//! Every record derives `Default` and tolerates missing fields, so an empty
//! or partial response body decodes into a usable value.

mod alert_policy;
mod auth;
mod bucket;
mod crr;
mod error;
mod object_user;
mod objmt;
mod service_provider;
mod status;
mod tenant;

use serde::{Deserialize, Serialize};

pub use alert_policy::{AlertPolicies, AlertPolicy, Condition};
pub use auth::{RkeLoginRequest, RkeLoginResponse};
pub use bucket::{
    Bucket, BucketList, BucketQuotaInfo, BucketQuotaUpdate, Metadata,
    MinMaxGovernor, SearchMetadata, Tag, TagSet,
};
pub use crr::CrrConfig;
pub use error::{ApiError, NOT_FOUND_CODE};
pub use object_user::{
    BlobUser, ObjectUserInfo, ObjectUserList, ObjectUserSecret, ObjectUserSecretKeyCreateReq,
    ObjectUserSecretKeyCreateRes, ObjectUserSecretKeyDeleteReq,
};
pub use objmt::{
    AccountBillingInfo, AccountBillingInfoList, AccountBillingSample, AccountBillingSampleList,
    BucketBillingInfo, BucketBillingInfoList, BucketBillingSample, BucketBillingSampleList,
    BucketBillingTag, BucketPerfDataList, BucketPerfSample, BucketReplicationInfoList,
    BucketReplicationSample, BucketReplicationSampleList, CountSize, ReplicationBillingInfo,
    ReplicationPair, StorageClassBasedCountSize, StorageClassCounts, StoreBillingInfo,
    StoreBillingInfoList, StoreBillingSample, StoreBillingSampleList, StoreReplicationData,
    StoreReplicationThroughputRto, TopNBucket, TopNBuckets,
};
pub use service_provider::{ServiceProvider, ServiceProviderCreate};
pub use status::RebuildInfo;
pub use tenant::{Tenant, TenantCreate, TenantList, TenantQuota, TenantQuotaSet, TenantUpdate};

/// Hyperlink to a resource
///
/// The XML form carries `rel` and `href` as attributes, the JSON form as
/// plain fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(alias = "@rel")]
    pub rel: String,

    #[serde(alias = "@href")]
    pub href: String,
}
