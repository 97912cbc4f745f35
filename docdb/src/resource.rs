use std::fmt::{Display, Formatter};
use std::str::FromStr;

use docdb_core::{Error, Result};
use percent_encoding::utf8_percent_encode;

use crate::constants::DOCDB_PATH_SEGMENT_ENCODE_SET;

/// The kinds of resources this client can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    /// `dbs`
    Databases,
    /// `colls`
    Collections,
}

impl ResourceType {
    /// The path segment and signing name of this resource type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Databases => "dbs",
            ResourceType::Collections => "colls",
        }
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dbs" => Ok(ResourceType::Databases),
            "colls" => Ok(ResourceType::Collections),
            v => Err(Error::request_invalid(format!(
                "unsupported resource type: {v}"
            ))),
        }
    }
}

/// Ids are single path segments: the service rejects these characters in them.
const FORBIDDEN_ID_CHARS: [char; 4] = ['/', '\\', '?', '#'];

pub(crate) fn check_id(id: &str) -> Result<&str> {
    if id.is_empty() || id.contains(&FORBIDDEN_ID_CHARS[..]) {
        return Err(Error::request_invalid(format!(
            "invalid resource id `{id}`: must be non-empty and not contain '/', '\\', '?' or '#'"
        )));
    }
    Ok(id)
}

/// ResourceDescriptor names the resource a request is signed for.
///
/// `resource_id` is the hierarchical id of the addressed resource, or of the
/// parent when addressing a feed:
///
/// | request             | type    | id                 |
/// |---------------------|---------|--------------------|
/// | `GET /dbs`          | `dbs`   | ``                 |
/// | `GET /dbs/a`        | `dbs`   | `dbs/a`            |
/// | `GET /dbs/a/colls`  | `colls` | `dbs/a`            |
/// | `GET /dbs/a/colls/b`| `colls` | `dbs/a/colls/b`    |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    resource_type: ResourceType,
    resource_id: String,
}

impl ResourceDescriptor {
    /// Create a descriptor from its raw parts.
    pub fn new(resource_type: ResourceType, resource_id: impl Into<String>) -> Self {
        Self {
            resource_type,
            resource_id: resource_id.into(),
        }
    }

    /// The account's database feed.
    ///
    /// The id is always empty: the service validates the string to sign
    /// exactly, so anything else here breaks the signature.
    pub fn databases() -> Self {
        Self::new(ResourceType::Databases, "")
    }

    /// A single database.
    pub fn database(db: &str) -> Result<Self> {
        Ok(Self::new(
            ResourceType::Databases,
            format!("dbs/{}", check_id(db)?),
        ))
    }

    /// The collection feed of a database.
    pub fn collections(db: &str) -> Result<Self> {
        Ok(Self::new(
            ResourceType::Collections,
            format!("dbs/{}", check_id(db)?),
        ))
    }

    /// A single collection.
    pub fn collection(db: &str, coll: &str) -> Result<Self> {
        Ok(Self::new(
            ResourceType::Collections,
            format!("dbs/{}/colls/{}", check_id(db)?, check_id(coll)?),
        ))
    }

    /// Resource type used in the string to sign.
    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// Resource id used in the string to sign, case preserved.
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// Whether this descriptor addresses a single resource rather than a feed.
    pub fn is_entity(&self) -> bool {
        let segments: Vec<&str> = self.resource_id.split('/').collect();
        segments.len() >= 2
            && segments.len() % 2 == 0
            && segments[segments.len() - 2] == self.resource_type.as_str()
    }

    /// The percent-encoded request path, starting with `/`.
    pub fn uri_path(&self) -> String {
        let mut path = String::with_capacity(self.resource_id.len() + 8);

        if !self.resource_id.is_empty() {
            for segment in self.resource_id.split('/') {
                path.push('/');
                path.extend(utf8_percent_encode(
                    segment,
                    &DOCDB_PATH_SEGMENT_ENCODE_SET,
                ));
            }
        }

        if !self.is_entity() {
            path.push('/');
            path.push_str(self.resource_type.as_str());
        }

        path
    }

    /// Derive the descriptor from a decoded request path.
    ///
    /// An odd number of segments addresses a feed: the last segment is the
    /// type and the rest is the parent id. An even number addresses a single
    /// resource: the second-to-last segment is the type and the whole path is
    /// the id.
    pub fn from_path(path: &str) -> Result<Self> {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Err(Error::request_invalid(format!(
                "request path `{path}` addresses no resource"
            )));
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(Error::request_invalid(format!(
                "request path `{path}` contains an empty segment"
            )));
        }

        if segments.len() % 2 == 1 {
            let (parent, ty) = segments.split_at(segments.len() - 1);
            Ok(Self::new(ty[0].parse()?, parent.join("/")))
        } else {
            let ty = segments[segments.len() - 2];
            Ok(Self::new(ty.parse()?, trimmed))
        }
    }
}
