//! Object user data-transfer types (JSON only)

use serde::{Deserialize, Serialize};

use super::Link;

/// An object user and its namespace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobUser {
    #[serde(rename = "userid")]
    pub user_id: String,

    pub namespace: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectUserList {
    #[serde(rename = "blobuser")]
    pub blob_user: Vec<BlobUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectUserInfo {
    pub namespace: String,
    pub name: String,
    pub locked: bool,
    pub created: String,
    pub tags: Vec<String>,
}

/// Secret keys of an object user; a user holds at most two
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectUserSecret {
    #[serde(rename = "secret_key_1")]
    pub secret_key1: String,

    #[serde(rename = "key_timestamp_1")]
    pub key_timestamp1: String,

    #[serde(rename = "key_expiry_timestamp_1")]
    pub key_expiry_timestamp1: String,

    #[serde(rename = "secret_key_2")]
    pub secret_key2: String,

    #[serde(rename = "key_timestamp_2")]
    pub key_timestamp2: String,

    #[serde(rename = "key_expiry_timestamp_2")]
    pub key_expiry_timestamp2: String,

    pub link: Link,
}

impl std::fmt::Debug for ObjectUserSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectUserSecret")
            .field("key_timestamp1", &self.key_timestamp1)
            .field("key_expiry_timestamp1", &self.key_expiry_timestamp1)
            .field("key_timestamp2", &self.key_timestamp2)
            .field("key_expiry_timestamp2", &self.key_expiry_timestamp2)
            .field("link", &self.link)
            .finish_non_exhaustive()
    }
}

/// Request body for adding a secret key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectUserSecretKeyCreateReq {
    /// Key to install; the server generates one when empty
    #[serde(rename = "secretkey")]
    pub secret_key: String,

    pub namespace: String,

    /// Minutes until the previous key expires
    #[serde(
        rename = "existing_key_expiry_time_mins",
        skip_serializing_if = "String::is_empty"
    )]
    pub existing_key_exp_time: String,
}

/// Request body for deactivating a secret key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectUserSecretKeyDeleteReq {
    pub secret_key: String,
    pub namespace: String,
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectUserSecretKeyCreateRes {
    pub secret_key: String,

    #[serde(rename = "key_timestamp")]
    pub key_time_stamp: String,

    pub key_expiry_timestamp: String,

    pub link: Link,
}

impl std::fmt::Debug for ObjectUserSecretKeyCreateRes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectUserSecretKeyCreateRes")
            .field("key_time_stamp", &self.key_time_stamp)
            .field("key_expiry_timestamp", &self.key_expiry_timestamp)
            .field("link", &self.link)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_list_json() {
        let list: ObjectUserList = serde_json::from_str(
            r#"{"blobuser":[{"userid":"u1","namespace":"ns1"},{"userid":"u2","namespace":"ns1"}],"Filter":"namespace=ns1"}"#,
        )
        .unwrap();
        assert_eq!(list.blob_user.len(), 2);
        assert_eq!(list.blob_user[1].user_id, "u2");
    }

    #[test]
    fn test_secret_json_and_debug() {
        let secret: ObjectUserSecret = serde_json::from_str(
            r#"{"secret_key_1":"s3cr3t","key_timestamp_1":"2023-01-01 00:00:00.000","link":{"rel":"self","href":"/object/user-secret-keys/u1"}}"#,
        )
        .unwrap();
        assert_eq!(secret.secret_key1, "s3cr3t");
        assert_eq!(secret.link.href, "/object/user-secret-keys/u1");
        assert!(!format!("{secret:?}").contains("s3cr3t"));
    }

    #[test]
    fn test_create_req_omits_expiry() {
        let req = ObjectUserSecretKeyCreateReq {
            namespace: "ns1".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"secretkey":"","namespace":"ns1"}"#);
    }
}
