use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures surfaced by the transport client. There is no retry policy;
/// every call site maps these to its own user-facing message.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid JSON body: {0}")]
    Decode(String),

    #[error("browser API error: {0}")]
    Browser(String),
}

impl ApiError {
    pub(crate) fn from_js(value: JsValue) -> Self {
        ApiError::Browser(format!("{value:?}"))
    }

    /// True when the server rejected the stored credential. The caller is
    /// expected to fall back to an unauthenticated view, not to retry.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_code_and_message() {
        let err = ApiError::Status {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "server returned 500: boom");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn unauthorized_is_distinguished() {
        assert!(ApiError::Unauthorized.is_unauthorized());
    }
}
