//! Bucket data-transfer types

use serde::{Deserialize, Serialize};

use super::Link;

/// A bucket in an object store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "object_bucket", default)]
pub struct Bucket {
    /// Object API type used by the bucket
    pub api_type: String,

    /// Time to retain deletion audit entries
    pub audit_delete_expiration: i64,

    /// Creation date and time
    pub created: String,

    /// Bucket id scoped to the cluster instance
    pub id: String,

    pub name: String,

    /// Whether the bucket is encrypted at rest
    #[serde(rename = "is_encryption_enabled")]
    pub encryption_enabled: bool,

    /// Warning quota level
    pub softquota: String,

    /// Whether file-system access is enabled
    #[serde(rename = "fs_access_enabled")]
    pub fs_enabled: bool,

    pub locked: bool,

    /// Replication group id
    #[serde(rename = "vpool")]
    pub replication_group: String,

    pub namespace: String,

    /// S3 object user owning the bucket
    pub owner: String,

    /// Whether access is allowed during an outage
    #[serde(rename = "is_stale_allowed")]
    pub stale_allowed: bool,

    #[serde(rename = "is_tso_read_only")]
    pub tso_read_only: bool,

    /// Default retention period for objects
    pub default_retention: i64,

    /// Size at which new object creation is blocked
    pub block_size: i64,

    /// Size at which users are notified
    pub notification_size: i64,

    #[serde(rename = "TagSet")]
    pub tags: TagSet,

    pub retention: i64,

    pub default_group_file_read_permission: bool,
    pub default_group_file_write_permission: bool,
    pub default_group_file_execute_permission: bool,
    pub default_group_dir_read_permission: bool,
    pub default_group_dir_write_permission: bool,
    pub default_group_dir_execute_permission: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub default_group: String,

    pub search_metadata: SearchMetadata,

    /// Minimum and maximum retention enforced for objects
    pub min_max_govenor: MinMaxGovernor,
}

/// Bucket tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagSet {
    #[serde(rename = "Tag")]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(rename = "Key")]
    pub key: String,

    #[serde(rename = "Value")]
    pub value: String,
}

/// Custom metadata enabled for querying on a bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchMetadata {
    #[serde(rename = "isEnabled")]
    pub enabled: bool,

    #[serde(rename = "maxKeys")]
    pub max_keys: i64,

    #[serde(rename = "metadata")]
    pub metadata: Vec<Metadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(rename = "type")]
    pub kind: String,

    pub name: String,

    pub datatype: String,
}

/// Retention bounds for bucket objects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinMaxGovernor {
    pub enforce_retention: bool,
    pub minimum_fixed_retention: i64,
    pub minimum_variable_retention: i64,
    pub maximum_fixed_retention: i64,
    pub maximum_variable_retention: i64,
}

/// A page of buckets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "object_buckets", default)]
pub struct BucketList {
    #[serde(rename = "object_bucket")]
    pub items: Vec<Bucket>,

    /// Maximum number of buckets requested in the listing
    pub max_buckets: i64,

    /// Marker to request the next page
    pub next_marker: String,

    #[serde(rename = "Filter")]
    pub filter: String,

    pub next_page_link: String,
}

/// Quota currently applied to a bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "bucket_quota_details", default)]
pub struct BucketQuotaInfo {
    #[serde(rename = "bucketname")]
    pub bucket_name: String,

    pub namespace: String,

    #[serde(rename = "blockSize")]
    pub block_size: i64,

    #[serde(rename = "notificationSize")]
    pub notification_size: i64,

    pub link: Link,
}

/// Request body for a bucket quota update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "bucket_quota_param", default)]
pub struct BucketQuotaUpdate {
    /// Bucket the quota applies to; carried in the request path
    #[serde(skip)]
    pub bucket_name: String,

    pub namespace: String,

    #[serde(rename = "blockSize")]
    pub block_size: i64,

    #[serde(rename = "notificationSize")]
    pub notification_size: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_list_from_xml() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
            <object_buckets>
              <object_bucket>
                <name>Files</name><namespace>130820808912778549</namespace>
                <vpool>urn:storageos:ReplicationGroupInfo:1:global</vpool>
                <locked>false</locked><is_stale_allowed>true</is_stale_allowed>
                <TagSet><Tag><Key>team</Key><Value>storage</Value></Tag></TagSet>
              </object_bucket>
              <object_bucket><name>Logs</name></object_bucket>
              <max_buckets>1000</max_buckets>
            </object_buckets>"#;
        let list: BucketList = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].name, "Files");
        assert!(list.items[0].stale_allowed);
        assert_eq!(
            list.items[0].replication_group,
            "urn:storageos:ReplicationGroupInfo:1:global"
        );
        assert_eq!(list.items[0].tags.tags[0].key, "team");
        assert_eq!(list.max_buckets, 1000);
    }

    #[test]
    fn test_bucket_create_document_keeps_every_field() {
        let bucket = Bucket {
            name: "testbucket1".to_string(),
            namespace: "ns1".to_string(),
            replication_group: "rg1".to_string(),
            fs_enabled: true,
            default_retention: 3600,
            audit_delete_expiration: 60,
            softquota: "5".to_string(),
            block_size: 10,
            default_group: "staff".to_string(),
            default_group_dir_read_permission: true,
            tags: TagSet {
                tags: vec![Tag {
                    key: "team".to_string(),
                    value: "storage".to_string(),
                }],
            },
            search_metadata: SearchMetadata {
                enabled: true,
                max_keys: 2,
                metadata: vec![Metadata {
                    kind: "User".to_string(),
                    name: "x-amz-meta-owner".to_string(),
                    datatype: "string".to_string(),
                }],
            },
            min_max_govenor: MinMaxGovernor {
                enforce_retention: true,
                minimum_fixed_retention: 1,
                ..Default::default()
            },
            ..Default::default()
        };

        let xml = quick_xml::se::to_string_with_root("object_bucket_create", &bucket).unwrap();
        assert!(xml.starts_with("<object_bucket_create>"));
        assert!(xml.contains("<vpool>rg1</vpool>"));
        assert!(xml.contains("<fs_access_enabled>true</fs_access_enabled>"));
        assert!(xml.contains("<TagSet><Tag><Key>team</Key><Value>storage</Value></Tag></TagSet>"));

        let decoded: Bucket = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(decoded, bucket);
    }

    #[test]
    fn test_bucket_quota_json() {
        let quota: BucketQuotaInfo =
            serde_json::from_str(r#"{"bucketname":"b1","namespace":"ns","blockSize":-1,"notificationSize":-1}"#)
                .unwrap();
        assert_eq!(quota.bucket_name, "b1");
        assert_eq!(quota.block_size, -1);
    }
}
