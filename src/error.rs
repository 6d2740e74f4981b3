// Typed failures of the upstream fetch. The engine never sees a failed batch.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("upstream payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}
