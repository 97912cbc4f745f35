//! Master key authorization tokens.
//!
//! - [Access control on DocumentDB resources](https://learn.microsoft.com/en-us/rest/api/cosmos-db/access-control-on-cosmosdb-resources)

use docdb_core::hash::{base64_decode, base64_hmac_sha256};
use docdb_core::time::{format_http_date, now, DateTime};
use docdb_core::utils::Redact;
use docdb_core::Result;
use log::debug;
use std::fmt::{Debug, Formatter};

use crate::constants::{TOKEN_TYPE_MASTER, TOKEN_VERSION};

/// AuthToken is a signed authorization token and the date it was signed for.
///
/// The signature covers `date`, so it must be sent as `x-ms-date` unchanged.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    /// URL-escaped `type=master&ver=1.0&sig=<signature>`.
    pub token: String,
    /// RFC 1123 date in GMT, e.g. `Mon, 02 Jan 2006 15:04:05 GMT`.
    pub date: String,
}

impl Debug for AuthToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("token", &Redact::from(&self.token))
            .field("date", &self.date)
            .finish()
    }
}

/// Generate a master key token for the current time.
///
/// `resource_id` must be empty when listing databases.
pub fn generate_auth_token(
    verb: &str,
    resource_id: &str,
    resource_type: &str,
    master_key: &str,
) -> Result<AuthToken> {
    generate_auth_token_at(verb, resource_id, resource_type, master_key, now())
}

/// Generate a master key token for the given time.
///
/// The same inputs and time always produce the same token.
pub fn generate_auth_token_at(
    verb: &str,
    resource_id: &str,
    resource_type: &str,
    master_key: &str,
    time: DateTime,
) -> Result<AuthToken> {
    let date = format_http_date(time);
    let string_to_sign = string_to_sign(verb, resource_type, resource_id, &date);
    debug!("string to sign: {:?}", &string_to_sign);

    let key = base64_decode(master_key)?;
    let signature = base64_hmac_sha256(&key, string_to_sign.as_bytes());

    let token = form_urlencoded::byte_serialize(
        format!("type={TOKEN_TYPE_MASTER}&ver={TOKEN_VERSION}&sig={signature}").as_bytes(),
    )
    .collect::<String>();

    Ok(AuthToken { token, date })
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// lowercase(Verb) + "\n" +
/// lowercase(ResourceType) + "\n" +
/// ResourceId + "\n" +
/// lowercase(Date) + "\n" +
/// "" + "\n"
/// ```
pub(crate) fn string_to_sign(
    verb: &str,
    resource_type: &str,
    resource_id: &str,
    date: &str,
) -> String {
    format!(
        "{}\n{}\n{}\n{}\n\n",
        verb.to_lowercase(),
        resource_type.to_lowercase(),
        resource_id,
        date.to_lowercase()
    )
}
