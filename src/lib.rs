//! # sp-blob-upload
//!
//! Authenticates against Azure Blob Storage with ambient credentials (a
//! service principal read from the environment, or anything else the
//! `azure_identity` chain finds) and uploads a single `"Hello, World!"` blob
//! named `azure-auth-on-prem-sp/{uuid}.txt`.
//!
//! The run is a linear [`workflow::Workflow`]: load [`config::Config`],
//! authorize the [`credential`], connect a [`store::Store`], upload, wait a
//! short drain delay and shut down. Storage backends implement
//! [`drivers::Driver`]; an in-memory driver is available for tests.
//!
//! ## Example
//!
//! ```rust
//! use sp_blob_upload::{blob_name::BlobName, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() {
//! # #[cfg(feature = "inmem")] {
//!     let store = StoreConfig::InMem("devstoreaccount1".to_string()).build();
//!     let name = BlobName::generate();
//!     store.container("uploads").blob(&name).upload("Hello, World!").await.unwrap();
//! # }
//! }
//! ```

pub mod blob_name;
pub mod config;
pub mod credential;
pub mod drivers;
pub mod errors;
pub mod store;
pub mod workflow;

/// The [`StoreConfig`] enum selects the storage backend a [`store::Store`]
/// is built on. The availability of each variant depends on compile-time
/// feature flags.
///
/// ## Enum Variants
///
/// - `InMem`: In-memory storage for the given account name. Available when
///   the `inmem` feature is enabled.
///
/// - `Azure`: Azure Blob Storage. Available when the `azure` feature is
///   enabled. It includes a configuration parameter.
pub enum StoreConfig {
    #[cfg(feature = "inmem")]
    InMem(String),
    #[cfg(feature = "azure")]
    Azure(drivers::azure::Config),
}

impl StoreConfig {
    /// Builds a [`store::Store`] instance based on the configured storage type.
    ///
    /// Building does not perform any network I/O.
    #[must_use]
    pub fn build(self) -> store::Store {
        let driver = match self {
            #[cfg(feature = "inmem")]
            Self::InMem(account) => {
                Box::new(drivers::inmem::InMemoryDriver::new(&account)) as Box<dyn drivers::Driver>
            }
            #[cfg(feature = "azure")]
            Self::Azure(config) => {
                Box::new(drivers::azure::AzureDriver::new(config)) as Box<dyn drivers::Driver>
            }
        };

        store::Store::new(driver)
    }

    /// Creates a [`store::Store`] instance with the provided storage driver.
    #[must_use]
    pub fn with_driver(driver: Box<dyn drivers::Driver>) -> store::Store {
        store::Store::new(driver)
    }
}
