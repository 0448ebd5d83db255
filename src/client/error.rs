use reqwest::StatusCode;
use thiserror::Error;

/// Convenient result alias returning [`ClientError`] failures.
pub type ClientResult<T> = Result<T, ClientError>;

/// Failures talking to the results API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Builder {
        #[source]
        source: reqwest::Error,
    },
    /// The request never produced a response.
    #[error("request to `{url}` failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("`{url}` answered {status}: {message}")]
    Status {
        url: String,
        status: StatusCode,
        message: String,
    },
    /// The response body did not match the expected shape.
    #[error("failed to decode response from `{url}`")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
