//! # Credential Resolution
//!
//! Builds the token credential chain from the ambient environment and
//! authorizes it against Azure Storage before any storage request is made.

use std::sync::Arc;

use azure_core::auth::TokenCredential;
use tracing::{debug, info};

use crate::errors::CredentialError;

/// OAuth scope requested for blob storage access.
pub const STORAGE_SCOPE: &str = "https://storage.azure.com/.default";

/// Builds the `DefaultAzureCredential` chain.
///
/// The environment source comes first, so a service principal read from
/// `AZURE_TENANT_ID`, `AZURE_CLIENT_ID` and `AZURE_CLIENT_SECRET` is used
/// when set. Sources are only consulted on the first token request.
#[must_use]
pub fn resolve() -> Arc<dyn TokenCredential> {
    debug!("credential chain resolved");
    Arc::new(azure_identity::DefaultAzureCredential::default())
}

/// Requests a storage token, proving the credential can authorize requests.
///
/// # Errors
///
/// Returns [`CredentialError::Authentication`] when no source in the chain
/// could issue a token.
pub async fn authorize(credential: &dyn TokenCredential) -> Result<(), CredentialError> {
    let token = credential
        .get_token(&[STORAGE_SCOPE])
        .await
        .map_err(|source| CredentialError::Authentication {
            scope: STORAGE_SCOPE,
            source,
        })?;

    info!(expires_on = %token.expires_on, "credential authorized");
    Ok(())
}
