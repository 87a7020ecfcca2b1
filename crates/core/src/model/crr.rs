use serde::{Deserialize, Serialize};

/// Replication control state between this object store and a destination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "ReplicationAdminConfiguration", rename_all = "PascalCase", default)]
pub struct CrrConfig {
    #[serde(rename = "DestinationObjectScale")]
    pub dest_object_scale: String,

    #[serde(rename = "DestinationObjectStore")]
    pub dest_object_store: String,

    /// Pause window start, epoch milliseconds
    pub pause_start_mills: i64,

    /// Pause window end, epoch milliseconds
    pub pause_end_mills: i64,

    pub suspend_start_mills: i64,

    /// Bandwidth cap, zero when unthrottled
    pub throttle_bandwidth: i64,
}
