use docdb_core::utils::Redact;
use docdb_core::{Context, Error, Result};

use crate::constants::*;
use crate::{connection_string, Credential};

/// Config carries everything needed to open a [`Session`](crate::Session).
#[derive(Clone, Default)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Config {
    /// `connection_string` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`DOCDB_CONNECTION_STRING`]
    ///
    /// Only used when `endpoint` or `master_key` is missing.
    pub connection_string: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`DOCDB_ENDPOINT`]
    pub endpoint: Option<String>,
    /// `master_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`DOCDB_MASTER_KEY`]
    pub master_key: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field(
                "connection_string",
                &self.connection_string.as_ref().map(Redact::from),
            )
            .field("endpoint", &self.endpoint)
            .field("master_key", &self.master_key.as_ref().map(Redact::from))
            .finish()
    }
}

impl Config {
    /// Load config from env.
    ///
    /// Values already set on the config are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if self.connection_string.is_none() {
            self.connection_string = ctx.env_var(DOCDB_CONNECTION_STRING);
        }
        if self.endpoint.is_none() {
            self.endpoint = ctx.env_var(DOCDB_ENDPOINT);
        }
        if self.master_key.is_none() {
            self.master_key = ctx.env_var(DOCDB_MASTER_KEY);
        }

        self
    }

    /// Set the connection string.
    pub fn with_connection_string(mut self, conn_str: impl Into<String>) -> Self {
        self.connection_string = Some(conn_str.into());
        self
    }

    /// Set the account endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the base64 master key.
    pub fn with_master_key(mut self, key: impl Into<String>) -> Self {
        self.master_key = Some(key.into());
        self
    }

    /// Resolve the endpoint and credential to use.
    ///
    /// An explicit endpoint and key pair wins over the connection string.
    pub(crate) fn resolve(&self) -> Result<(String, Credential)> {
        if let (Some(endpoint), Some(key)) = (&self.endpoint, &self.master_key) {
            let endpoint = endpoint.trim().trim_end_matches('/');
            if endpoint.is_empty() || key.is_empty() {
                return Err(Error::config_invalid(
                    "endpoint and master key must not be empty",
                ));
            }
            return Ok((endpoint.to_string(), Credential::new(key)));
        }

        let Some(conn_str) = &self.connection_string else {
            return Err(Error::config_invalid(format!(
                "neither {DOCDB_CONNECTION_STRING} nor both {DOCDB_ENDPOINT} and {DOCDB_MASTER_KEY} are set"
            )));
        };

        let parsed = connection_string::parse(conn_str)?;
        match (parsed.endpoint, parsed.master_key) {
            (Some(endpoint), Some(key)) => Ok((endpoint, Credential::new(key))),
            _ => Err(Error::connection_string_invalid(
                "connection string is missing endpoint or key",
            )),
        }
    }
}
