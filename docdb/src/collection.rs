use docdb_core::Result;

use crate::model::ResourceInfo;
use crate::{Database, ResourceDescriptor};

/// Collection is a handle on one collection of a database.
#[derive(Debug, Clone)]
pub struct Collection {
    info: ResourceInfo,
    database: Database,
}

impl Collection {
    /// Create a handle on the collection `id` within `database`.
    pub fn new(database: Database, id: impl Into<String>) -> Self {
        Self::from_info(database, ResourceInfo::with_id(id))
    }

    pub(crate) fn from_info(database: Database, info: ResourceInfo) -> Self {
        Self { info, database }
    }

    /// Collection id.
    pub fn id(&self) -> &str {
        &self.info.id
    }

    /// Properties returned by the service.
    pub fn info(&self) -> &ResourceInfo {
        &self.info
    }

    /// Database this collection belongs to.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Descriptor this collection is signed with.
    ///
    /// Fails when the database or collection id can't be used in a path.
    pub fn descriptor(&self) -> Result<ResourceDescriptor> {
        ResourceDescriptor::collection(self.database.id(), self.id())
    }
}
