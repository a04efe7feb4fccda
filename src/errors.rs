#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("Resource not found")]
    ResourceNotFound,

    #[error("The blob name is empty or too long")]
    InvalidBlobName,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("the credential is not authorized for this operation")]
    Unauthorized,

    #[error("network error")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("storage service responded with status {status}")]
    Service { status: u16, code: Option<String> },

    #[error(transparent)]
    Any(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("failed to acquire a token for {scope}")]
    Authentication {
        scope: &'static str,
        #[source]
        source: azure_core::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("storage client could not be configured")]
    Configuration(#[source] DriverError),

    #[error(transparent)]
    Authentication(#[from] CredentialError),

    #[error("upload failed")]
    Upload(#[source] DriverError),
}

pub type DriverResult<T> = std::result::Result<T, DriverError>;
pub type RunResult<T> = std::result::Result<T, RunError>;
