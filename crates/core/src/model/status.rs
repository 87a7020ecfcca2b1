use serde::{Deserialize, Serialize};

/// Rebuild progress of a storage device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RebuildInfo {
    pub total_bytes: i64,
    pub remaining_bytes: i64,
    pub level: i64,
}

impl RebuildInfo {
    /// True once no bytes remain to be rebuilt
    pub fn is_complete(&self) -> bool {
        self.remaining_bytes == 0
    }
}
