use crate::{Context, Error, Result, SignRequest, SigningCredential};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Signer binds a credential to a request signer.
///
/// A signer is immutable once built. Cloning it shares the context and the
/// request signer.
#[derive(Clone)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    credential: K,
    builder: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Debug for Signer<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("ctx", &self.ctx)
            .field("credential", &self.credential)
            .field("builder", &self.builder)
            .finish()
    }
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(ctx: Context, credential: K, builder: impl SignRequest<Credential = K>) -> Self {
        Self {
            ctx,
            credential,
            builder: Arc::new(builder),
        }
    }

    /// The context this signer was built with.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// The credential used to sign requests.
    pub fn credential(&self) -> &K {
        &self.credential
    }

    /// Signing request.
    pub async fn sign(&self, req: &mut http::request::Parts) -> Result<()> {
        if !self.credential.is_valid() {
            return Err(Error::credential_invalid(
                "credential is not valid for signing",
            ));
        }

        self.builder
            .sign_request(&self.ctx, req, Some(&self.credential))
            .await
    }
}
