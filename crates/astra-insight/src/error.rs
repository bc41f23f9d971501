use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("no API credentials configured")]
    MissingCredentials,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("empty response from provider")]
    EmptyResponse,

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
