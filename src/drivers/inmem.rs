use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use super::{check_blob_name, Driver, DriverError};
use crate::{config, errors::DriverResult};

type Containers = BTreeMap<String, BTreeMap<String, Vec<u8>>>;

/// Keeps blobs in memory, grouped by container.
///
/// Clones share the same blobs, so a clone handed to a [`crate::store::Store`]
/// can be inspected after an upload.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDriver {
    account: String,
    containers: Arc<Mutex<Containers>>,
}

impl InMemoryDriver {
    #[must_use]
    pub fn new(account: &str) -> Self {
        Self {
            account: account.to_string(),
            containers: Arc::default(),
        }
    }

    /// Returns a copy of the blob content, if present.
    #[must_use]
    pub fn get(&self, container: &str, name: &str) -> Option<Vec<u8>> {
        self.containers()
            .get(container)
            .and_then(|blobs| blobs.get(name))
            .cloned()
    }

    /// Names of all blobs stored in `container`.
    #[must_use]
    pub fn blob_names(&self, container: &str) -> Vec<String> {
        self.containers()
            .get(container)
            .map(|blobs| blobs.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn containers(&self) -> std::sync::MutexGuard<'_, Containers> {
        self.containers
            .lock()
            .expect("inmem store failed getting a lock")
    }
}

#[async_trait::async_trait]
impl Driver for InMemoryDriver {
    fn url(&self) -> DriverResult<String> {
        Ok(config::account_url(&self.account))
    }

    async fn write(&self, container: &str, name: &str, content: Vec<u8>) -> DriverResult<()> {
        let name = check_blob_name(name)?;
        self.containers()
            .entry(container.to_string())
            .or_default()
            .insert(name.to_string(), content);
        Ok(())
    }

    async fn content_length(&self, container: &str, name: &str) -> DriverResult<u64> {
        let name = check_blob_name(name)?;
        self.containers()
            .get(container)
            .and_then(|blobs| blobs.get(name))
            .map(|content| content.len() as u64)
            .ok_or(DriverError::ResourceNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn validate_store() {
        let driver = InMemoryDriver::new("devstoreaccount1");

        assert!(driver.write("foo", "file-1.txt", b"one".to_vec()).await.is_ok());
        assert!(driver.write("foo", "file-2.txt", b"two!".to_vec()).await.is_ok());
        assert!(driver.write("bar", "file-1.txt", Vec::new()).await.is_ok());

        assert_eq!(driver.blob_names("foo"), vec!["file-1.txt", "file-2.txt"]);
        assert_eq!(driver.blob_names("bar"), vec!["file-1.txt"]);
        assert!(driver.blob_names("baz").is_empty());

        assert_eq!(driver.content_length("foo", "file-2.txt").await.unwrap(), 4);
        assert_eq!(driver.content_length("bar", "file-1.txt").await.unwrap(), 0);
        assert_eq!(driver.get("foo", "file-1.txt"), Some(b"one".to_vec()));
    }

    #[tokio::test]
    async fn clones_share_blobs() {
        let driver = InMemoryDriver::new("devstoreaccount1");
        let clone = driver.clone();

        clone.write("foo", "file.txt", b"content".to_vec()).await.unwrap();

        assert_eq!(driver.get("foo", "file.txt"), Some(b"content".to_vec()));
    }

    #[tokio::test]
    async fn rejects_invalid_names() {
        let driver = InMemoryDriver::new("devstoreaccount1");

        assert!(matches!(
            driver.write("foo", "", b"content".to_vec()).await,
            Err(DriverError::InvalidBlobName)
        ));
        assert!(matches!(
            driver
                .write("foo", &"a".repeat(1025), b"content".to_vec())
                .await,
            Err(DriverError::InvalidBlobName)
        ));
    }

    #[test]
    fn url_uses_account() {
        assert_eq!(
            InMemoryDriver::new("devstoreaccount1").url().unwrap(),
            "https://devstoreaccount1.blob.core.windows.net"
        );
    }
}
