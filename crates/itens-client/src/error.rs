//! Error type for [`ItensClient`] operations.
//!
//! The UI collapses every variant into the failing screen's single error
//! state; the variants exist so logs and tests can tell a wrong status from
//! a transport failure.
//!
//! [`ItensClient`]: crate::client::ItensClient

use std::fmt;

/// Errors returned by `ItensClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a status the operation does not accept.
    Status(u16),

    /// The request never completed, or the body could not be decoded.
    Transport(reqwest::Error),

    /// A 201 arrived without a `Location` header to follow.
    MissingLocation,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status(status) => write!(f, "unexpected HTTP status {status}"),
            ApiError::Transport(err) => write!(f, "transport failed: {err}"),
            ApiError::MissingLocation => write!(f, "created response carried no Location header"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err)
    }
}
