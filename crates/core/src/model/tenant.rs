//! Tenant data-transfer types

use serde::{Deserialize, Serialize};

fn is_zero(n: &i64) -> bool {
    *n == 0
}

/// A tenant (account) of the object store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "tenant", default)]
pub struct Tenant {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(rename = "is_encryption_enabled")]
    pub encryption_enabled: bool,

    #[serde(rename = "is_compliance_enabled")]
    pub compliance_enabled: bool,

    /// Default replication group for buckets of this tenant
    #[serde(
        rename = "default_data_services_vpool",
        skip_serializing_if = "String::is_empty"
    )]
    pub replication_group: String,

    /// Default block size for new buckets
    #[serde(rename = "default_bucket_block_size", skip_serializing_if = "is_zero")]
    pub bucket_block_size: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "tenants", default)]
pub struct TenantList {
    #[serde(rename = "tenant")]
    pub items: Vec<Tenant>,
}

/// Request body for tenant creation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "tenant_create", default)]
pub struct TenantCreate {
    /// Account the tenant is created for
    pub account_id: String,

    #[serde(rename = "is_encryption_enabled")]
    pub encryption_enabled: bool,

    #[serde(rename = "is_compliance_enabled")]
    pub compliance_enabled: bool,

    #[serde(
        rename = "default_data_services_vpool",
        skip_serializing_if = "String::is_empty"
    )]
    pub replication_group: String,

    #[serde(rename = "default_bucket_block_size", skip_serializing_if = "is_zero")]
    pub bucket_block_size: i64,
}

/// Request body for a tenant update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "tenant_update", default)]
pub struct TenantUpdate {
    #[serde(rename = "default_bucket_block_size")]
    pub bucket_block_size: i64,

    #[serde(
        rename = "default_data_services_vpool",
        skip_serializing_if = "String::is_empty"
    )]
    pub replication_group: String,
}

/// Quota applied to a tenant; sizes are in GB, `-1` when unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "tenant_quota_details", default)]
pub struct TenantQuota {
    #[serde(rename = "blockSize")]
    pub block_size: String,

    #[serde(rename = "notificationSize")]
    pub notification_size: String,

    pub id: String,
}

/// Request body for a tenant quota update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "tenant_quota_update", default)]
pub struct TenantQuotaSet {
    #[serde(rename = "blockSize")]
    pub block_size: String,

    #[serde(rename = "notificationSize")]
    pub notification_size: String,
}
