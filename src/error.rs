/// All errors that can occur while talking to the IPL API.
#[derive(thiserror::Error, Debug)]
pub enum IplError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body was not valid JSON.
    #[error("invalid json from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error,
    },

    /// The body was valid JSON but did not match the expected payload shape.
    #[error("unexpected payload shape from {url}: {source}")]
    Shape {
        url: String,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, IplError>;
