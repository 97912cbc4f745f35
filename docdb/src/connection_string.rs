use docdb_core::{Error, Result};

use crate::constants::{ACCOUNT_ENDPOINT, ACCOUNT_KEY};
use crate::Config;

/// Parses a DocumentDB connection string.
///
/// The expected form is `AccountEndpoint=<uri>;AccountKey=<base64-key>;`. The
/// string is split on the literal `AccountKey=`; the endpoint loses its
/// `AccountEndpoint=` prefix and any `/` or `;` at either end, the key loses
/// any `;` at either end.
pub(crate) fn parse(conn_str: &str) -> Result<Config> {
    let conn_str = conn_str.trim();

    let (endpoint, key) = conn_str.split_once(ACCOUNT_KEY).ok_or_else(|| {
        Error::connection_string_invalid(format!(
            "connection string must contain `{ACCOUNT_KEY}`"
        ))
    })?;

    let endpoint = endpoint.trim();
    let endpoint = endpoint
        .strip_prefix(ACCOUNT_ENDPOINT)
        .unwrap_or(endpoint)
        .trim_matches(|c| c == '/' || c == ';');
    let key = key.trim().trim_matches(';');

    if endpoint.is_empty() {
        return Err(Error::connection_string_invalid(format!(
            "connection string has no `{ACCOUNT_ENDPOINT}` value"
        )));
    }
    if key.is_empty() {
        return Err(Error::connection_string_invalid(format!(
            "connection string has no `{ACCOUNT_KEY}` value"
        )));
    }

    Ok(Config {
        endpoint: Some(endpoint.to_string()),
        master_key: Some(key.to_string()),
        ..Default::default()
    })
}
