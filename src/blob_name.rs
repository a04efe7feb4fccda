use std::fmt;

use uuid::Uuid;

/// Path segment every uploaded blob is placed under.
pub const BLOB_PREFIX: &str = "azure-auth-on-prem-sp";

const EXTENSION: &str = "txt";

/// Name of the uploaded blob: `{BLOB_PREFIX}/{uuid}.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobName(String);

impl BlobName {
    /// Generates a fresh name from a random v4 UUID.
    #[must_use]
    pub fn generate() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    #[must_use]
    pub fn with_id(id: Uuid) -> Self {
        Self(format!("{BLOB_PREFIX}/{}.{EXTENSION}", id.hyphenated()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BlobName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<BlobName> for String {
    fn from(name: BlobName) -> Self {
        name.0
    }
}
