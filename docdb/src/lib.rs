//! Signed HTTP access to DocumentDB databases and collections.
//!
//! Every request is authenticated with a master key token: an HMAC-SHA256
//! over the verb, resource type, resource id and request date, sent in the
//! `authorization` header next to the `x-ms-date` it was computed for.
//!
//! # Example
//!
//! ```rust,no_run
//! use docdb::Session;
//!
//! #[tokio::main]
//! async fn main() -> docdb::Result<()> {
//!     let session = Session::from_connection_string(
//!         "AccountEndpoint=https://myaccount.documents.azure.com:443/;AccountKey=bXkta2V5;",
//!     )?;
//!
//!     for db in session.list_databases().await? {
//!         println!("database: {}", db.id());
//!         for coll in db.list_collections().await? {
//!             println!("  collection: {}", coll.id());
//!         }
//!     }
//!
//!     let db = session.get_database("mydb").await?;
//!     let coll = db.create_collection("events").await?;
//!     println!("created {}", coll.id());
//!     Ok(())
//! }
//! ```
//!
//! Tokens can also be generated without a session:
//!
//! ```
//! let token = docdb::generate_auth_token("GET", "dbs/mydb", "colls", "bXkta2V5")?;
//! assert!(token.token.starts_with("type%3Dmaster%26ver%3D1.0%26sig%3D"));
//! # Ok::<(), docdb::Error>(())
//! ```

mod constants;
pub use constants::{
    DOCDB_API_VERSION, DOCDB_CONNECTION_STRING, DOCDB_ENDPOINT, DOCDB_MASTER_KEY,
};

mod connection_string;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod resource;
pub use resource::{ResourceDescriptor, ResourceType};

mod token;
pub use token::{generate_auth_token, generate_auth_token_at, AuthToken};

mod sign_request;
pub use sign_request::RequestSigner;

mod model;
pub use model::{CollectionList, DatabaseList, ResourceInfo};

mod session;
pub use session::Session;
mod database;
pub use database::Database;
mod collection;
pub use collection::Collection;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{context_with_client, default_context};

pub use docdb_core::{Context, Error, ErrorKind, Result};
