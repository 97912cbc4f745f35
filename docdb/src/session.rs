use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use bytes::Bytes;
use docdb_core::{Context, Error, Result, Signer};
use http::{header, Method, Uri};
use log::debug;
use serde::de::DeserializeOwned;

use crate::constants::CONTENT_TYPE_QUERY_JSON;
use crate::model::{DatabaseList, ResourceInfo};
use crate::{Config, Credential, Database, RequestSigner, ResourceDescriptor};

/// Session is an authenticated handle on one DocumentDB account.
///
/// A session never changes after it's built. Cloning it is cheap and every
/// clone shares the same HTTP client, so sessions can be handed to other
/// tasks freely. Databases and collections obtained from a session carry a
/// clone of it and authenticate with the same key.
#[derive(Clone)]
pub struct Session {
    endpoint: Arc<str>,
    signer: Signer<Credential>,
}

impl Debug for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("endpoint", &self.endpoint)
            .field("credential", self.signer.credential())
            .finish()
    }
}

impl Session {
    /// Open a session from a connection string of the form
    /// `AccountEndpoint=<uri>;AccountKey=<key>;`.
    pub fn new(ctx: Context, conn_str: &str) -> Result<Self> {
        Self::from_config(ctx, &Config::default().with_connection_string(conn_str))
    }

    /// Open a session from a [`Config`].
    pub fn from_config(ctx: Context, config: &Config) -> Result<Self> {
        let (endpoint, credential) = config.resolve()?;

        let uri: Uri = endpoint.parse().map_err(|e| {
            Error::config_invalid(format!("endpoint `{endpoint}` is not a valid uri")).with_source(e)
        })?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(Error::config_invalid(format!(
                "endpoint `{endpoint}` must be an absolute uri"
            )));
        }

        Ok(Self::with_signer(
            endpoint,
            Signer::new(ctx, credential, RequestSigner::new()),
        ))
    }

    /// Build a session around an existing signer.
    ///
    /// Useful to pin the signing time in tests.
    pub fn with_signer(endpoint: impl Into<String>, signer: Signer<Credential>) -> Self {
        let endpoint: String = endpoint.into();
        Self {
            endpoint: Arc::from(endpoint.trim_end_matches('/')),
            signer,
        }
    }

    /// Open a session with the default context from a connection string.
    #[cfg(feature = "default-context")]
    pub fn from_connection_string(conn_str: &str) -> Result<Self> {
        Self::new(crate::default_context(), conn_str)
    }

    /// Open a session with the default context, configured from the environment.
    ///
    /// See [`Config::from_env`] for the variables read.
    #[cfg(feature = "default-context")]
    pub fn from_env() -> Result<Self> {
        let ctx = crate::default_context();
        let config = Config::default().from_env(&ctx);
        Self::from_config(ctx, &config)
    }

    /// Account endpoint without trailing `/`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Credential used to sign requests.
    pub fn credential(&self) -> &Credential {
        self.signer.credential()
    }

    /// Context shared by every request of this session.
    pub fn context(&self) -> &Context {
        self.signer.context()
    }

    /// A handle on a database, without checking that it exists.
    pub fn database(&self, id: impl Into<String>) -> Database {
        Database::new(self.clone(), id)
    }

    /// List the databases of the account.
    pub async fn list_databases(&self) -> Result<Vec<Database>> {
        let list: DatabaseList = self
            .send(
                "list databases",
                Method::GET,
                &ResourceDescriptor::databases(),
                None,
            )
            .await?;

        Ok(list
            .databases
            .into_iter()
            .map(|info| Database::from_info(self.clone(), info))
            .collect())
    }

    /// Fetch a database by id.
    pub async fn get_database(&self, id: &str) -> Result<Database> {
        let info: ResourceInfo = self
            .send(
                &format!("get database {id}"),
                Method::GET,
                &ResourceDescriptor::database(id)?,
                None,
            )
            .await?;

        Ok(Database::from_info(self.clone(), info))
    }

    /// Sign and send one request, then decode its JSON response.
    ///
    /// Any non-success status fails with [`ErrorKind::Request`](docdb_core::ErrorKind::Request)
    /// carrying the raw response body.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        operation: &str,
        method: Method,
        resource: &ResourceDescriptor,
        body: Option<Bytes>,
    ) -> Result<T> {
        let path = resource.uri_path();

        let mut req = http::Request::builder()
            .method(method.clone())
            .uri(format!("{}{}", self.endpoint, path))
            .extension(resource.clone());
        if body.is_some() {
            req = req.header(header::CONTENT_TYPE, CONTENT_TYPE_QUERY_JSON);
        }
        let (mut parts, body) = req.body(body.unwrap_or_default())?.into_parts();

        self.signer.sign(&mut parts).await?;
        let req = http::Request::from_parts(parts, body);

        let resp = self.context().http_send(req).await?;
        let status = resp.status();
        debug!("{operation}: {method} {path} returned {status}");

        if !status.is_success() {
            return Err(Error::request(format!(
                "request to {operation} failed: {method} {path} returned {status}, json returned was: {}",
                String::from_utf8_lossy(resp.body())
            )));
        }

        serde_json::from_slice(resp.body()).map_err(|e| {
            Error::decode(format!("failed to decode response of {operation}: {e}")).with_source(e)
        })
    }
}
