//! # Storage Driver Module
//!
//! The `drivers` module defines the [`Driver`] trait that a blob storage
//! backend implements to receive uploads.
//!
use dyn_clone::DynClone;

use crate::errors::{DriverError, DriverResult};

#[cfg(feature = "inmem")]
pub mod inmem;

#[cfg(feature = "azure")]
pub mod azure;

/// Longest blob name the blob service accepts.
const MAX_BLOB_NAME_LEN: usize = 1024;

#[async_trait::async_trait]
pub trait Driver: DynClone + Sync + Send {
    /// The blob service endpoint this driver talks to.
    fn url(&self) -> DriverResult<String>;

    async fn write(&self, container: &str, name: &str, content: Vec<u8>) -> DriverResult<()>;

    async fn content_length(&self, container: &str, name: &str) -> DriverResult<u64>;
}

pub(crate) fn check_blob_name(name: &str) -> DriverResult<&str> {
    if name.is_empty() || name.len() > MAX_BLOB_NAME_LEN {
        return Err(DriverError::InvalidBlobName);
    }
    Ok(name)
}
