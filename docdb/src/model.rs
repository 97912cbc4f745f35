//! JSON shapes exchanged with the service.

use serde::{Deserialize, Serialize};

/// Properties the service returns for every resource.
///
/// Only `id` is guaranteed; system properties are kept when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceInfo {
    /// User supplied id.
    pub id: String,
    /// Service generated resource id.
    #[serde(rename = "_rid", default, skip_serializing_if = "Option::is_none")]
    pub rid: Option<String>,
    /// Addressable link of the resource.
    #[serde(rename = "_self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Entity tag of the current version.
    #[serde(rename = "_etag", default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Last update, seconds since the unix epoch.
    #[serde(rename = "_ts", default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<u64>,
}

impl ResourceInfo {
    pub(crate) fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Response of listing databases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DatabaseList {
    /// The databases in the account.
    #[serde(rename = "Databases")]
    pub databases: Vec<ResourceInfo>,
    /// Number of entries as reported by the service.
    #[serde(rename = "_count", default)]
    pub count: Option<u64>,
}

/// Response of listing collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CollectionList {
    /// The collections in the database.
    #[serde(rename = "DocumentCollections")]
    pub collections: Vec<ResourceInfo>,
    /// Number of entries as reported by the service.
    #[serde(rename = "_count", default)]
    pub count: Option<u64>,
}

/// Body of a create collection request.
#[derive(Debug, Serialize)]
pub(crate) struct CreateCollection<'a> {
    pub id: &'a str,
}
