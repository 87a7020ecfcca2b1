use serde::{Deserialize, Serialize};

/// Identity provider configuration of the object store
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "service_provider", default)]
pub struct ServiceProvider {
    pub create_time: String,
    pub dns: String,
    pub etag: String,
    pub java_keystore: String,
    pub key_alias: String,
    pub key_password: String,
    pub unique_id: String,
    pub uuid: String,
}

impl std::fmt::Debug for ServiceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceProvider")
            .field("create_time", &self.create_time)
            .field("dns", &self.dns)
            .field("etag", &self.etag)
            .field("key_alias", &self.key_alias)
            .field("unique_id", &self.unique_id)
            .field("uuid", &self.uuid)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "service_provider_create", default)]
pub struct ServiceProviderCreate {
    pub service_provider: ServiceProvider,
}
