//! Random contact retrieval.
//!
//! [`ContactFetcher`] issues a single GET to the configured endpoint and turns
//! the response into an unsaved [`Contact`]. At most one request is in flight
//! per fetcher; a call made while busy is rejected, not queued. There is no
//! retry and no caching: the caller decides whether to try again.

mod parse;

use std::sync::atomic::{AtomicBool, Ordering};

use log::{info, warn};
use reqwest::header::CONTENT_TYPE;
use tokio::sync::broadcast;

use crate::config::{Config, EVENT_CHANNEL_CAPACITY};
use crate::error_handling::{FetchError, InitializationError};
use crate::initialization::init_client;
use crate::models::Contact;

pub use parse::parse_contact;

/// Notifications published by [`ContactFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent {
    /// A request was accepted and is about to be sent.
    Started,
    /// The request completed, successfully or not; the fetcher is idle again.
    Finished,
    Fetched(Contact),
    Error(String),
}

/// Clears the busy flag when the request completes or its future is dropped.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Fetches one randomly generated contact from a web API.
pub struct ContactFetcher {
    client: reqwest::Client,
    api_url: String,
    busy: AtomicBool,
    events: broadcast::Sender<FetchEvent>,
}

impl ContactFetcher {
    /// Builds a fetcher with its own HTTP client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    /// Builds a fetcher around an existing client.
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            client,
            api_url: api_url.into(),
            busy: AtomicBool::new(false),
            events,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Subscribes to fetch notifications emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<FetchEvent> {
        self.events.subscribe()
    }

    /// Requests one random contact.
    ///
    /// While another call is in flight this returns `FetchError::Busy` at once,
    /// without sending a request or publishing any event. Otherwise it
    /// publishes `Started`, then `Finished` once the busy flag is cleared, then
    /// either `Fetched` or `Error`.
    ///
    /// Dropping the returned future before completion clears the busy flag
    /// but publishes no further events.
    pub async fn fetch_one(&self) -> Result<Contact, FetchError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("Network request already in progress");
            return Err(FetchError::Busy);
        }
        let guard = BusyGuard(&self.busy);
        self.emit(FetchEvent::Started);

        info!("Fetching random contact from {}", self.api_url);
        let outcome = match self.request().await {
            Ok(body) => parse_contact(&body),
            Err(e) => Err(e),
        };

        drop(guard);
        self.emit(FetchEvent::Finished);

        match &outcome {
            Ok(contact) => {
                info!("Successfully fetched contact: {}", contact.full_name());
                self.emit(FetchEvent::Fetched(contact.clone()));
            }
            Err(e) => {
                warn!("{e}");
                self.emit(FetchEvent::Error(e.to_string()));
            }
        }
        outcome
    }

    async fn request(&self) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(&self.api_url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(network_error)?;

        let body = response.bytes().await.map_err(network_error)?;
        Ok(body.to_vec())
    }

    fn emit(&self, event: FetchEvent) {
        let _ = self.events.send(event);
    }
}

fn network_error(error: reqwest::Error) -> FetchError {
    FetchError::Network(error.to_string())
}
