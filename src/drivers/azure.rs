use std::sync::Arc;

use azure_core::{auth::TokenCredential, error::ErrorKind};
use azure_storage::prelude::*;
use azure_storage_blobs::prelude::*;
use dyn_clone::DynClone;
use tracing::debug;

use super::{check_blob_name, Driver, DriverError};
use crate::errors::DriverResult;

// Define a trait for Azure Storage client builders
#[async_trait::async_trait]
pub trait ClientBuilderTrait: DynClone + Sync + Send {
    fn url(&self) -> azure_core::Result<String>;

    async fn put_block_blob(
        &self,
        container: &str,
        path: &str,
        content: Vec<u8>,
    ) -> azure_core::Result<()>;

    async fn content_length(&self, container: &str, path: &str) -> azure_core::Result<u64>;
}

#[derive(Clone)]
struct Client {
    client_builder: ClientBuilder,
}

#[async_trait::async_trait]
impl ClientBuilderTrait for Client {
    fn url(&self) -> azure_core::Result<String> {
        let url = self.client_builder.clone().blob_service_client().url()?;
        Ok(url.as_str().trim_end_matches('/').to_string())
    }

    async fn put_block_blob(
        &self,
        container: &str,
        path: &str,
        content: Vec<u8>,
    ) -> azure_core::Result<()> {
        let response = self
            .client_builder
            .clone()
            .blob_client(container.to_string(), path)
            .put_block_blob(content)
            .await?;
        debug!(request_id = %response.request_id, "block blob stored");
        Ok(())
    }

    async fn content_length(&self, container: &str, path: &str) -> azure_core::Result<u64> {
        let properties = self
            .client_builder
            .clone()
            .blob_client(container.to_string(), path)
            .get_properties()
            .await?;

        Ok(properties.blob.properties.content_length)
    }
}

#[derive(Clone)]
pub struct Config {
    pub account: String,
    pub credentials: ClientCredentials,
}

#[derive(Clone)]
pub enum ClientCredentials {
    /// An Entra ID token credential, such as the chain returned by
    /// [`crate::credential::resolve`].
    Token(Arc<dyn TokenCredential>),
}

#[allow(clippy::module_name_repetitions)]
pub struct AzureDriver {
    client: Box<dyn ClientBuilderTrait>,
}

impl Clone for AzureDriver {
    fn clone(&self) -> Self {
        Self {
            client: dyn_clone::clone_box(&*self.client),
        }
    }
}

impl AzureDriver {
    /// Create a new instance of [`AzureDriver`] with the provided
    /// configuration.
    ///
    /// No request is sent until the first operation.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let storage_credentials = match config.credentials {
            ClientCredentials::Token(credential) => StorageCredentials::token_credential(credential),
        };

        let client = Box::new(Client {
            client_builder: ClientBuilder::new(config.account, storage_credentials),
        });
        Self { client }
    }

    /// Creates a new [`AzureDriver`] instance with the provided azure client.
    #[must_use]
    pub fn with_client(client: Box<dyn ClientBuilderTrait>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Driver for AzureDriver {
    fn url(&self) -> DriverResult<String> {
        self.client.url().map_err(DriverError::from)
    }

    /// Uploads `content` as a block blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or the service rejects the
    /// request. Nothing is retried.
    async fn write(&self, container: &str, name: &str, content: Vec<u8>) -> DriverResult<()> {
        self.client
            .put_block_blob(container, check_blob_name(name)?, content)
            .await
            .map_err(DriverError::from)
    }

    /// Reads the stored size of a blob from its properties.
    ///
    /// # Errors
    ///
    /// If the blob does not exist, the error variant
    /// `DriverError::ResourceNotFound` is returned.
    async fn content_length(&self, container: &str, name: &str) -> DriverResult<u64> {
        self.client
            .content_length(container, check_blob_name(name)?)
            .await
            .map_err(DriverError::from)
    }
}

impl From<azure_core::Error> for DriverError {
    fn from(error: azure_core::Error) -> Self {
        match error.kind() {
            ErrorKind::HttpResponse { status, error_code } => {
                match error_code.as_ref().map(String::as_str) {
                    Some("ContainerNotFound" | "BlobNotFound") => Self::ResourceNotFound,
                    Some("AuthenticationFailed" | "InvalidAuthenticationInfo") => {
                        Self::AuthenticationFailed
                    }
                    Some(
                        "AuthorizationFailure"
                        | "AuthorizationPermissionMismatch"
                        | "InsufficientAccountPermissions",
                    ) => Self::Unauthorized,
                    _ => Self::Service {
                        status: *status as u16,
                        code: error_code.clone(),
                    },
                }
            }
            ErrorKind::Credential => Self::AuthenticationFailed,
            ErrorKind::Io => Self::Network(Box::new(error)),
            _ => Self::Any(Box::new(error)),
        }
    }
}
