/// An error from a PsychonautWiki request
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid endpoint URL: {0}")]
    UrlConstruction(#[from] url::ParseError),

    #[error("Failed to send GraphQL request: {0}")]
    Transport(reqwest::Error),

    #[error("Failed to decode GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Error in response: {0}")]
    Response(String),

    #[error("No substance matched the query {query:?}")]
    EmptyResult { query: String },
}
