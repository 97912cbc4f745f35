use docdb_core::utils::Redact;
use docdb_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential holds the account master key.
#[derive(Clone)]
pub struct Credential {
    master_key: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("master_key", &Redact::from(&self.master_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.master_key.is_empty()
    }
}

impl Credential {
    /// Create a new credential from a base64 master key.
    ///
    /// The key is not decoded here; an invalid key surfaces as
    /// [`ErrorKind::KeyDecode`](docdb_core::ErrorKind::KeyDecode) on first use.
    pub fn new(master_key: impl Into<String>) -> Self {
        Self {
            master_key: master_key.into(),
        }
    }

    /// The base64 master key as supplied.
    pub fn master_key(&self) -> &str {
        &self.master_key
    }
}
