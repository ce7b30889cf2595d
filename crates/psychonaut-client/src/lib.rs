//! Typed client for the PsychonautWiki GraphQL API
//!
//! Two operations are supported: listing every substance name and fetching the full record of
//! one substance. The free functions below talk to the public endpoint with default settings;
//! build a [`Client`] from a [`ClientConfig`] to change the endpoint or timeout.
//!
//! ```no_run
//! # async fn run() -> Result<(), psychonaut_client::Error> {
//! let names = psychonaut_client::list_substance_names().await?;
//! let caffeine = psychonaut_client::fetch_substance_detail("caffeine").await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
pub mod errors;
pub mod model;
pub mod queries;

pub use client::Client;
pub use config::ClientConfig;
pub use errors::Error;
pub use model::Substance;

/// List every substance name known to the API, in server order
pub async fn list_substance_names() -> Result<Vec<String>, Error> {
    Client::new(ClientConfig::default())?
        .list_substance_names()
        .await
}

/// Fetch the first substance matching `query`
///
/// Fails with [`Error::EmptyResult`] when nothing matches.
pub async fn fetch_substance_detail(query: &str) -> Result<Substance, Error> {
    Client::new(ClientConfig::default())?
        .fetch_substance_detail(query)
        .await
}
