use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

const GENERIC_SERVER_ERROR: &str = "An error occurred with the API";

/// One normalized error per failed call. Precedence: a server-supplied
/// detail message, then "no response", then a local request failure.
/// The `Display` form is what views show to the user.
#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("{detail}")]
    Server { status: StatusCode, detail: String },

    #[error("No response received from server")]
    NoResponse,

    #[error("{0}")]
    Request(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl ApiClientError {
    /// Build the `Server` variant from a non-2xx response, pulling the
    /// backend's `detail` field out of the body when present.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let detail = match response.json::<ErrorBody>().await {
            Ok(ErrorBody { detail: Some(d) }) => d,
            _ => GENERIC_SERVER_ERROR.to_string(),
        };
        warn!("API responded {}: {}", status, detail);
        ApiClientError::Server { status, detail }
    }
}

impl From<reqwest::Error> for ApiClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() || err.is_decode() {
            ApiClientError::Request(err.to_string())
        } else {
            // Request went out, nothing came back: timeout, refused
            // connection, dropped socket.
            warn!("No response from API: {}", err);
            ApiClientError::NoResponse
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_response_message_matches_contract() {
        assert_eq!(
            ApiClientError::NoResponse.to_string(),
            "No response received from server"
        );
    }

    #[test]
    fn server_error_displays_its_detail() {
        let err = ApiClientError::Server {
            status: StatusCode::NOT_FOUND,
            detail: "Patient not found".to_string(),
        };
        assert_eq!(err.to_string(), "Patient not found");
    }
}
