#![cfg(all(feature = "inmem", feature = "azure"))]
#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use azure_core::{
    auth::{AccessToken, Secret, TokenCredential},
    error::{Error, ErrorKind},
    StatusCode,
};
use sp_blob_upload::{
    config,
    drivers::{azure, inmem::InMemoryDriver, Driver},
};
use time::OffsetDateTime;

pub const ACCOUNT: &str = "sptestaccount";
pub const CONTAINER_NAME: &str = "test-container";

/// Issues a token for any scope and counts the requests.
#[derive(Debug, Default)]
pub struct FakeCredential {
    pub requests: AtomicUsize,
}

#[async_trait::async_trait]
impl TokenCredential for FakeCredential {
    async fn get_token(&self, _scopes: &[&str]) -> azure_core::Result<AccessToken> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        Ok(AccessToken::new(
            Secret::new("fake-token"),
            OffsetDateTime::now_utc() + time::Duration::hours(1),
        ))
    }

    async fn clear_cache(&self) -> azure_core::Result<()> {
        Ok(())
    }
}

/// Behaves like a credential chain with no usable source.
#[derive(Debug)]
pub struct MissingCredential;

#[async_trait::async_trait]
impl TokenCredential for MissingCredential {
    async fn get_token(&self, _scopes: &[&str]) -> azure_core::Result<AccessToken> {
        Err(Error::message(
            ErrorKind::Credential,
            "Multiple errors were encountered while attempting to authenticate",
        ))
    }

    async fn clear_cache(&self) -> azure_core::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    /// The endpoint cannot be built from the account.
    InvalidEndpoint,
    /// The account host does not resolve.
    Unreachable,
    /// The principal lacks a data role on the account.
    Forbidden,
}

#[derive(Clone)]
pub struct MockClient {
    pub inner: InMemoryDriver,
    pub failure: Option<Failure>,
}

impl MockClient {
    pub fn new() -> Self {
        Self {
            inner: InMemoryDriver::new(ACCOUNT),
            failure: None,
        }
    }

    pub fn failing(failure: Failure) -> Self {
        Self {
            inner: InMemoryDriver::new(ACCOUNT),
            failure: Some(failure),
        }
    }

    fn check(&self) -> azure_core::Result<()> {
        match self.failure {
            None | Some(Failure::InvalidEndpoint) => Ok(()),
            Some(Failure::Unreachable) => Err(Error::message(
                ErrorKind::Io,
                "error trying to connect: dns error: failed to lookup address information",
            )),
            Some(Failure::Forbidden) => Err(Error::message(
                ErrorKind::HttpResponse {
                    status: StatusCode::Forbidden,
                    error_code: Some("AuthorizationPermissionMismatch".to_string()),
                },
                "",
            )),
        }
    }
}

#[async_trait::async_trait]
impl azure::ClientBuilderTrait for MockClient {
    fn url(&self) -> azure_core::Result<String> {
        match self.failure {
            Some(Failure::InvalidEndpoint) => Err(Error::message(
                ErrorKind::DataConversion,
                "empty host",
            )),
            _ => Ok(config::account_url(ACCOUNT)),
        }
    }

    async fn put_block_blob(
        &self,
        container: &str,
        path: &str,
        content: Vec<u8>,
    ) -> azure_core::Result<()> {
        assert_eq!(container, CONTAINER_NAME);
        self.check()?;

        self.inner
            .write(container, path, content)
            .await
            .map_err(|err| Error::new(ErrorKind::Other, err))
    }

    async fn content_length(&self, container: &str, path: &str) -> azure_core::Result<u64> {
        assert_eq!(container, CONTAINER_NAME);
        self.check()?;

        (self.inner.content_length(container, path).await).map_err(|_| {
            Error::message(
                ErrorKind::HttpResponse {
                    status: StatusCode::NotFound,
                    error_code: Some("BlobNotFound".to_string()),
                },
                "",
            )
        })
    }
}
