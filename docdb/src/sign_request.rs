use crate::constants::*;
use crate::token::generate_auth_token_at;
use crate::{Credential, ResourceDescriptor};
use async_trait::async_trait;
use docdb_core::time::{now, DateTime};
use docdb_core::{Context, Error, Result, SignRequest, SigningRequest};
use http::header::{self, HeaderName};
use http::request::Parts;
use log::debug;

/// RequestSigner that implements DocumentDB master key authorization.
///
/// The verb comes from the request method. The resource type and id come from
/// a [`ResourceDescriptor`] stored in the request extensions, or are derived
/// from the request path when there is none. Endpoints behind a path prefix
/// (`https://gw.example.com/cosmos/`) need the extension. `authorization`,
/// `x-ms-date` and `x-ms-version` are always set.
#[derive(Debug)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for DocumentDB.
    pub fn new() -> Self {
        Self { time: None }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid("credential is required"));
        };

        let described = req.extensions.get::<ResourceDescriptor>().cloned();
        let mut ctx = SigningRequest::build(req)?;
        let resource = match described {
            Some(resource) => resource,
            None => ResourceDescriptor::from_path(&ctx.path_percent_decoded())?,
        };

        // Date and signature come from the same instant.
        let token = generate_auth_token_at(
            ctx.method.as_str(),
            resource.resource_id(),
            resource.resource_type().as_str(),
            cred.master_key(),
            self.time.unwrap_or_else(now),
        )?;
        debug!(
            "signed {} {} for {} `{}`",
            ctx.method,
            ctx.path,
            resource.resource_type(),
            resource.resource_id()
        );

        ctx.header_insert(header::AUTHORIZATION, &token.token, true)?;
        ctx.header_insert(HeaderName::from_static(X_MS_DATE), &token.date, false)?;
        ctx.header_insert(
            HeaderName::from_static(X_MS_VERSION),
            DOCDB_API_VERSION,
            false,
        )?;

        ctx.apply(req)
    }
}
