//! Billing and metering (objmt) data-transfer types
//!
//! The metering service reports usage per storage class. Every metric is a
//! list of `storage_class_counts` entries nested one level below the metric
//! element, modelled here by [`StorageClassCounts`].

use serde::{Deserialize, Serialize};

/// Object count and sizes for one storage class
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountSize {
    pub counts: i64,
    pub logical_size: i64,
    pub create_logical_size: i64,
    pub delete_logical_size: i64,
    pub physical_size: i64,
    pub create_physical_size: i64,
    pub delete_physical_size: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "storage_class_counts", default)]
pub struct StorageClassBasedCountSize {
    pub storage_class: String,
    pub count_size: CountSize,
}

/// A metric broken down by storage class
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageClassCounts {
    #[serde(rename = "storage_class_counts")]
    pub items: Vec<StorageClassBasedCountSize>,
}

impl StorageClassCounts {
    /// Sum of object counts across storage classes
    pub fn total_counts(&self) -> i64 {
        self.items.iter().map(|c| c.count_size.counts).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "account_billing_objmt_infos", default)]
pub struct AccountBillingInfoList {
    pub status: String,
    pub size_unit: String,
    pub date_time: String,

    #[serde(rename = "account_billing_objmt_info")]
    pub info: Vec<AccountBillingInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "account_billing_objmt_info", default)]
pub struct AccountBillingInfo {
    pub account_id: String,
    pub consistent_time: i64,
    pub total_user_object_metric: StorageClassCounts,
    pub total_mpu_metric: StorageClassCounts,
    pub total_replica_object_metric: StorageClassCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "account_billing_objmt_samples", default)]
pub struct AccountBillingSampleList {
    pub status: String,
    pub size_unit: String,
    pub date_time: String,
    pub start_time: String,
    pub end_time: String,

    #[serde(rename = "account_billing_objmt_sample")]
    pub samples: Vec<AccountBillingSample>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "account_billing_objmt_sample", default)]
pub struct AccountBillingSample {
    pub account_id: String,
    pub start_time: String,
    pub end_time: String,
    pub sample_time_range: i64,
    pub consistent_time: i64,

    #[serde(rename = "account_billing_objmt_info")]
    pub account_billing_info: AccountBillingInfo,

    pub user_creation_delta: StorageClassCounts,
    pub user_deletion_delta: StorageClassCounts,
    pub mpu_create_delta: StorageClassCounts,
    pub mpu_delete_delta: StorageClassCounts,
    pub replica_creation_delta: StorageClassCounts,
    pub replica_deletion_delta: StorageClassCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "bucket_billing_objmt_infos", default)]
pub struct BucketBillingInfoList {
    pub status: String,
    pub size_unit: String,
    pub date_time: String,

    #[serde(rename = "bucket_billing_objmt_info")]
    pub info: Vec<BucketBillingInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "bucket_billing_objmt_info", default)]
pub struct BucketBillingInfo {
    pub bucket_name: String,
    pub compression_ratio: f64,
    pub consistent_time: i64,
    pub total_user_object_metric: StorageClassCounts,
    pub total_mpu_metric: StorageClassCounts,
    pub total_replica_object_metric: StorageClassCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "bucket_billing_objmt_samples", default)]
pub struct BucketBillingSampleList {
    pub status: String,
    pub size_unit: String,
    pub date_time: String,
    pub start_time: String,
    pub end_time: String,

    #[serde(rename = "bucket_billing_objmt_sample")]
    pub samples: Vec<BucketBillingSample>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "bucket_billing_objmt_sample", default)]
pub struct BucketBillingSample {
    pub bucket_name: String,
    pub sample_time_range: i64,
    pub consistent_time: i64,

    #[serde(rename = "bucket_billing_objmt_info")]
    pub bucket_billing_info: BucketBillingInfo,

    #[serde(rename = "bucket_billing_tag")]
    pub bucket_billing_tags: Vec<BucketBillingTag>,

    pub user_creation_delta: StorageClassCounts,
    pub user_deletion_delta: StorageClassCounts,
    pub mpu_create_delta: StorageClassCounts,
    pub mpu_delete_delta: StorageClassCounts,
    pub replica_creation_delta: StorageClassCounts,
    pub replica_deletion_delta: StorageClassCounts,
}

/// Traffic of one bucket during a sample
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "bucket_billing_tag", default)]
pub struct BucketBillingTag {
    pub bucket_name: String,
    pub ingress: i64,
    pub egress: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "bucket_perf_samples", default)]
pub struct BucketPerfDataList {
    pub status: String,
    pub size_unit: String,
    pub date_time: String,
    pub start_time: String,
    pub end_time: String,

    #[serde(rename = "bucket_perf_sample")]
    pub samples: Vec<BucketPerfSample>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "bucket_perf_sample", default)]
pub struct BucketPerfSample {
    pub bucket_name: String,
    pub sample_time_range: i64,
    pub consistent_time: i64,
    pub ingress_latency: i64,
    pub ingress_bytes: i64,
    pub ingress_counts: i64,
    pub egress_bytes: i64,
    pub egress_counts: i64,
}

/// Source bucket and destination bucket ARN of a replication rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplicationPair {
    pub source_bucket: String,

    #[serde(rename = "destination_bucket_arn")]
    pub destination_bucket: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "bucket_replication_samples", default)]
pub struct BucketReplicationSampleList {
    pub status: String,
    pub size_unit: String,
    pub date_time: String,
    pub start_time: String,
    pub end_time: String,

    #[serde(rename = "bucket_replication_sample")]
    pub samples: Vec<BucketReplicationSample>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "bucket_replication_sample", default)]
pub struct BucketReplicationSample {
    #[serde(rename = "replication_source_destination")]
    pub pair: ReplicationPair,

    pub sample_time_range: i64,
    pub consistent_time: i64,

    #[serde(rename = "replication_billing_info")]
    pub replication_billing_info: ReplicationBillingInfo,

    pub pending_to_replicate_delta: StorageClassCounts,
    pub replicated_delta: StorageClassCounts,
    pub replicated_failure_delta: StorageClassCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "replication_info_list", default)]
pub struct BucketReplicationInfoList {
    pub status: String,
    pub size_unit: String,
    pub date_time: String,

    #[serde(rename = "replication_billing_info")]
    pub info: Vec<ReplicationBillingInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "replication_billing_info", default)]
pub struct ReplicationBillingInfo {
    #[serde(rename = "replication_source_destination")]
    pub pair: ReplicationPair,

    pub consistent_time: i64,

    pub pending_to_replicate: StorageClassCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "store_billing_info_list", default)]
pub struct StoreBillingInfoList {
    pub status: String,
    pub size_unit: String,
    pub date_time: String,

    #[serde(rename = "store_billing_info")]
    pub info: StoreBillingInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "store_billing_info", default)]
pub struct StoreBillingInfo {
    pub compression_ratio: f64,
    pub consistent_time: i64,

    pub total_user_object_metric: StorageClassCounts,
    pub total_mpu_metric: StorageClassCounts,
    pub total_replica_object_metric: StorageClassCounts,

    #[serde(rename = "top_n_buckets_by_object_count")]
    pub top_buckets_by_object_count: TopNBuckets,

    #[serde(rename = "top_n_buckets_by_object_size")]
    pub top_buckets_by_object_size: TopNBuckets,
}

/// Ranked buckets for one metric
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopNBuckets {
    #[serde(rename = "top_n_bucket")]
    pub items: Vec<TopNBucket>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "top_n_bucket", default)]
pub struct TopNBucket {
    pub bucket_name: String,
    pub metric_number: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "store_billing_samples", default)]
pub struct StoreBillingSampleList {
    pub status: String,
    pub size_unit: String,
    pub date_time: String,
    pub start_time: String,
    pub end_time: String,

    #[serde(rename = "store_billing_sample")]
    pub samples: Vec<StoreBillingSample>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "store_billing_sample", default)]
pub struct StoreBillingSample {
    pub sample_time_range: i64,
    pub consistent_time: i64,

    #[serde(rename = "store_billing_info")]
    pub info: StoreBillingInfo,

    pub user_creation_delta: StorageClassCounts,
    pub user_deletion_delta: StorageClassCounts,
    pub mpu_create_delta: StorageClassCounts,
    pub mpu_delete_delta: StorageClassCounts,
    pub replica_creation_delta: StorageClassCounts,
    pub replica_deletion_delta: StorageClassCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "store_replication_list", default)]
pub struct StoreReplicationData {
    pub status: String,
    pub size_unit: String,
    pub date_time: String,
    pub start_time: String,
    pub end_time: String,

    #[serde(rename = "store_replication_throughput_rto")]
    pub samples: Vec<StoreReplicationThroughputRto>,
}

/// Replication throughput and recovery time objective towards one store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "store_replication_throughput_rto", default)]
pub struct StoreReplicationThroughputRto {
    pub sample_time_range: i64,
    pub consistent_time: i64,
    pub destination_store: String,
    pub throughput: i64,
    pub rto: i64,
    pub pending_to_replicate: StorageClassCounts,
    pub replicated_delta: StorageClassCounts,
}
