//! # Upload Workflow
//!
//! Sequences a single run: authorize the credential, connect the store,
//! upload [`PAYLOAD`] under a fresh [`BlobName`], then wait [`DRAIN_DELAY`]
//! before shutting down. Nothing is retried; the first error ends the run.

use std::{sync::Arc, time::Duration};

use azure_core::auth::TokenCredential;
use tracing::{debug, error, info};

use crate::{
    blob_name::BlobName,
    config::Config,
    credential,
    errors::{RunError, RunResult},
    store::Store,
};

/// Content of the uploaded blob.
pub const PAYLOAD: &[u8] = b"Hello, World!";

/// Time waited after a successful upload before shutting down.
pub const DRAIN_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Init,
    ConfigLoaded,
    CredentialResolved,
    ClientReady,
    Uploading,
    Uploaded,
    Draining,
    Terminated,
    Failed,
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub url: String,
    pub container: String,
    pub blob_name: BlobName,
    pub bytes: usize,
}

pub struct Workflow {
    config: Config,
    credential: Arc<dyn TokenCredential>,
    drain: Duration,
    state: State,
    failed_at: Option<State>,
}

impl Workflow {
    #[must_use]
    pub fn new(config: Config, credential: Arc<dyn TokenCredential>) -> Self {
        Self {
            config,
            credential,
            drain: DRAIN_DELAY,
            state: State::Init,
            failed_at: None,
        }
    }

    /// Overrides [`DRAIN_DELAY`].
    #[must_use]
    pub fn with_drain(mut self, drain: Duration) -> Self {
        self.drain = drain;
        self
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// The stage that was running when the run failed.
    #[must_use]
    pub fn failed_at(&self) -> Option<State> {
        self.failed_at
    }

    /// Runs every stage once, in order.
    ///
    /// `connect` builds the store from the configuration and the credential;
    /// it is only called once the credential has been authorized.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage's error and leaves the workflow in
    /// [`State::Failed`]. The error is logged here, once.
    pub async fn run<F>(&mut self, connect: F) -> RunResult<Report>
    where
        F: FnOnce(&Config, Arc<dyn TokenCredential>) -> Store + Send,
    {
        match self.execute(connect).await {
            Ok(report) => Ok(report),
            Err(err) => {
                error!(stage = ?self.state, error = %err, "run failed");
                self.failed_at = Some(self.state);
                self.state = State::Failed;
                Err(err)
            }
        }
    }

    async fn execute<F>(&mut self, connect: F) -> RunResult<Report>
    where
        F: FnOnce(&Config, Arc<dyn TokenCredential>) -> Store + Send,
    {
        debug!(
            account = %self.config.account,
            container = %self.config.container,
            "configuration loaded"
        );
        self.advance(State::ConfigLoaded);

        credential::authorize(self.credential.as_ref()).await?;
        self.advance(State::CredentialResolved);

        let store = connect(&self.config, Arc::clone(&self.credential));
        let url = store.url().map_err(RunError::Configuration)?;
        self.advance(State::ClientReady);
        info!("Blob Storage client initialized: {url}");

        let blob_name = BlobName::generate();
        let container = store.container(&self.config.container);
        let blob = container.blob(&blob_name);
        info!(
            "Sending a blob to Blob Storage - Container: {}, Name: {}",
            blob.container_name(),
            blob.name()
        );

        self.advance(State::Uploading);
        blob.upload(PAYLOAD).await.map_err(RunError::Upload)?;
        self.advance(State::Uploaded);
        info!("Success!");

        self.advance(State::Draining);
        tokio::time::sleep(self.drain).await;
        self.advance(State::Terminated);
        info!("Shutdown");

        Ok(Report {
            url,
            container: self.config.container.clone(),
            blob_name,
            bytes: PAYLOAD.len(),
        })
    }

    fn advance(&mut self, next: State) {
        debug!(from = ?self.state, to = ?next, "state transition");
        self.state = next;
    }
}
