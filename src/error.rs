//! Colormix error types

/// Colormix error types.
///
/// Every variant maps onto exactly one HTTP status via
/// [`ColormixError::status_code`], which is how failures leave the
/// request handlers.
#[derive(Debug, thiserror::Error)]
pub enum ColormixError {
    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    // Request errors
    #[error("invalid request: {0}")]
    Validation(String),

    // Upstream errors
    /// The upstream could not be reached at the transport level.
    #[error("service unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The upstream answered with a non-success status.
    #[error("upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// The upstream body was empty, null, or did not match the expected shape.
    #[error("could not process response from {source_name}: {reason}")]
    Deserialization { source_name: String, reason: String },

    // Client-side errors (talking to a colormix server)
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ColormixError {
    /// HTTP status code this error is surfaced with.
    ///
    /// Upstream failures relay the upstream status verbatim; a status
    /// outside the valid range degrades to 502.
    pub fn status_code(&self) -> u16 {
        match self {
            ColormixError::Validation(_) => 400,
            ColormixError::UpstreamUnavailable(_) => 503,
            ColormixError::Upstream { status, .. } => {
                if (100..=999).contains(status) {
                    *status
                } else {
                    502
                }
            }
            ColormixError::Configuration(_)
            | ColormixError::Deserialization { .. }
            | ColormixError::Http(_)
            | ColormixError::Json(_) => 500,
        }
    }

    /// Whether the caller is at fault (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for ColormixError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status_code())
            .unwrap_or(axum::http::StatusCode::BAD_GATEWAY);

        (status, self.to_string()).into_response()
    }
}

/// Result type alias for colormix operations
pub type Result<T> = std::result::Result<T, ColormixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_client_error() {
        let err = ColormixError::Validation("palette is empty".into());
        assert_eq!(err.status_code(), 400);
        assert!(err.is_client_error());
    }

    #[test]
    fn upstream_status_is_relayed() {
        let err = ColormixError::Upstream {
            status: 418,
            message: "teapot".into(),
        };
        assert_eq!(err.status_code(), 418);
    }

    #[test]
    fn upstream_status_out_of_range_degrades_to_bad_gateway() {
        let err = ColormixError::Upstream {
            status: 42,
            message: "bogus".into(),
        };
        assert_eq!(err.status_code(), 502);
    }

    #[test]
    fn internal_failures_are_500() {
        assert_eq!(ColormixError::Configuration("x".into()).status_code(), 500);
        assert_eq!(
            ColormixError::Deserialization {
                source_name: "catalog store".into(),
                reason: "null body".into(),
            }
            .status_code(),
            500
        );
    }
}
