use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

// Headers used by DocumentDB.
pub const X_MS_DATE: &str = "x-ms-date";
pub const X_MS_VERSION: &str = "x-ms-version";

/// REST API version sent as `x-ms-version` with every request.
pub const DOCDB_API_VERSION: &str = "2015-12-16";

pub const CONTENT_TYPE_QUERY_JSON: &str = "application/query+json";

// Master key token.
pub const TOKEN_TYPE_MASTER: &str = "master";
pub const TOKEN_VERSION: &str = "1.0";

// Connection string fields.
pub const ACCOUNT_ENDPOINT: &str = "AccountEndpoint=";
pub const ACCOUNT_KEY: &str = "AccountKey=";

/// Env value holding a full connection string.
pub const DOCDB_CONNECTION_STRING: &str = "DOCDB_CONNECTION_STRING";
/// Env value holding the account endpoint.
pub const DOCDB_ENDPOINT: &str = "DOCDB_ENDPOINT";
/// Env value holding the base64 master key.
pub const DOCDB_MASTER_KEY: &str = "DOCDB_MASTER_KEY";

/// AsciiSet for a single resource id inside the request path.
///
/// `/` is encoded too: it separates resources and can't appear inside an id.
pub static DOCDB_PATH_SEGMENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
