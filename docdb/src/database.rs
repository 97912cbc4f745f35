use bytes::Bytes;
use docdb_core::{Error, Result};
use http::Method;

use crate::model::{CollectionList, CreateCollection, ResourceInfo};
use crate::resource::check_id;
use crate::{Collection, ResourceDescriptor, Session};

/// Database is a handle on one database of the account.
///
/// It carries the session it came from, so collection operations
/// authenticate without supplying the key again.
#[derive(Debug, Clone)]
pub struct Database {
    info: ResourceInfo,
    session: Session,
}

impl Database {
    /// Create a handle on the database `id` within `session`.
    pub fn new(session: Session, id: impl Into<String>) -> Self {
        Self::from_info(session, ResourceInfo::with_id(id))
    }

    pub(crate) fn from_info(session: Session, info: ResourceInfo) -> Self {
        Self { info, session }
    }

    /// Database id.
    pub fn id(&self) -> &str {
        &self.info.id
    }

    /// Properties returned by the service. Only `id` is set on handles
    /// built with [`Database::new`].
    pub fn info(&self) -> &ResourceInfo {
        &self.info
    }

    /// Session this database belongs to.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// A handle on a collection of this database, without checking that it exists.
    pub fn collection(&self, id: impl Into<String>) -> Collection {
        Collection::new(self.clone(), id)
    }

    /// List the collections of this database.
    pub async fn list_collections(&self) -> Result<Vec<Collection>> {
        let list: CollectionList = self
            .session
            .send(
                "list collections",
                Method::GET,
                &ResourceDescriptor::collections(self.id())?,
                None,
            )
            .await?;

        Ok(list
            .collections
            .into_iter()
            .map(|info| Collection::from_info(self.clone(), info))
            .collect())
    }

    /// Fetch a collection of this database by id.
    pub async fn get_collection(&self, id: &str) -> Result<Collection> {
        let info: ResourceInfo = self
            .session
            .send(
                &format!("get collection {id}"),
                Method::GET,
                &ResourceDescriptor::collection(self.id(), id)?,
                None,
            )
            .await?;

        Ok(Collection::from_info(self.clone(), info))
    }

    /// Create a collection in this database.
    pub async fn create_collection(&self, id: &str) -> Result<Collection> {
        let resource = ResourceDescriptor::collections(self.id())?;
        check_id(id)?;

        let body = serde_json::to_vec(&CreateCollection { id }).map_err(|e| {
            Error::unexpected("failed to encode create collection body").with_source(e)
        })?;

        let info: ResourceInfo = self
            .session
            .send(
                &format!("create collection {id}"),
                Method::POST,
                &resource,
                Some(Bytes::from(body)),
            )
            .await?;

        Ok(Collection::from_info(self.clone(), info))
    }
}
