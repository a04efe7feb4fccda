use crate::{drivers::Driver, errors::DriverResult};

pub struct Store {
    driver: Box<dyn Driver>,
}

impl Clone for Store {
    fn clone(&self) -> Self {
        Self {
            driver: dyn_clone::clone_box(&*self.driver),
        }
    }
}

impl Store {
    #[must_use]
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self { driver }
    }

    /// The blob service endpoint of the underlying driver.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver cannot build a valid endpoint from its
    /// configuration.
    pub fn url(&self) -> DriverResult<String> {
        self.driver.url()
    }

    /// Returns a handle scoped to `name`. No request is sent.
    #[must_use]
    pub fn container(&self, name: &str) -> ContainerHandle<'_> {
        ContainerHandle {
            driver: self.driver.as_ref(),
            name: name.to_string(),
        }
    }
}

pub struct ContainerHandle<'a> {
    driver: &'a dyn Driver,
    name: String,
}

impl<'a> ContainerHandle<'a> {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a handle to the blob `name` inside this container. No request
    /// is sent.
    #[must_use]
    pub fn blob<N: AsRef<str>>(&self, name: N) -> BlobHandle<'a> {
        BlobHandle {
            driver: self.driver,
            container: self.name.clone(),
            name: name.as_ref().to_string(),
        }
    }
}

pub struct BlobHandle<'a> {
    driver: &'a dyn Driver,
    container: String,
    name: String,
}

impl BlobHandle<'_> {
    #[must_use]
    pub fn container_name(&self) -> &str {
        &self.container
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Uploads `content` as this blob.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sp_blob_upload::StoreConfig;
    ///
    /// #[tokio::main]
    /// async fn main() {
    /// # #[cfg(feature = "inmem")] {
    ///     let store = StoreConfig::InMem("devstoreaccount1".to_string()).build();
    ///     let container = store.container("uploads");
    ///     let blob = container.blob("hello.txt");
    ///     assert!(blob.upload("Hello, World!").await.is_ok());
    ///     assert_eq!(blob.size().await.unwrap(), 13);
    /// # }
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying `Driver` fails to store the blob.
    pub async fn upload<C: AsRef<[u8]> + Send>(&self, content: C) -> DriverResult<()> {
        self.driver
            .write(&self.container, &self.name, content.as_ref().to_vec())
            .await
    }

    /// Size in bytes of the stored blob.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::DriverError::ResourceNotFound`] when the blob
    /// does not exist.
    pub async fn size(&self) -> DriverResult<u64> {
        self.driver.content_length(&self.container, &self.name).await
    }
}
