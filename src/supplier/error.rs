use crate::core::LengthRange;
use reqwest::{StatusCode, Url};

/// A request to the word API did not produce usable data
#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: Url, status: StatusCode },
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },
}

/// Why no target word could be supplied
#[derive(thiserror::Error, Debug)]
pub enum SupplyError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error("no words of length {range} in category '{category}'")]
    NoWordsAvailable { category: String, range: LengthRange },
}

impl SupplyError {
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
