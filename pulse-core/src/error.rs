use thiserror::Error;

/// Why a single fetch produced no data.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Short, user-facing explanation suitable for a one-line notice.
    pub fn summary(&self) -> String {
        match self {
            FetchError::Transport { source, .. } if source.is_timeout() => {
                "request timed out".to_string()
            }
            FetchError::Transport { .. } => "network unavailable".to_string(),
            FetchError::Status { status, .. } if *status == reqwest::StatusCode::NOT_FOUND => {
                "place not found".to_string()
            }
            FetchError::Status { status, .. } if *status == reqwest::StatusCode::UNAUTHORIZED => {
                "API key rejected".to_string()
            }
            FetchError::Status { status, .. } => format!("server answered {status}"),
            FetchError::Decode { .. } => "unexpected response".to_string(),
        }
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
