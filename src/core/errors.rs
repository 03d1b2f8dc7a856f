//! # Errors and Display Messages
//!
//! Fetch failures are turned into display-ready strings at the controller
//! boundary and never travel further. Formatting is three-tiered:
//!
//! 1. status + server message → `"Error {code}: {message}"`
//! 2. status only             → `"Error {code}: {status_only}"`
//! 3. no status               → `network`
//!
//! The wording of tiers 2 and 3 depends on which operation failed.

use std::fmt;

use crate::data::{FetchError, PostId};

/// Operation-specific wording for the last two tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureWording {
    pub status_only: &'static str,
    pub network: &'static str,
}

pub const LOAD_POSTS_WORDING: FailureWording = FailureWording {
    status_only: "Sadly the page is not available at the moment. Please try again later.",
    network: "Network Error: Sadly the page is not available. Please check your connection and try again.",
};

pub const CREATE_POST_WORDING: FailureWording = FailureWording {
    status_only: "Failed to create post. Please try again.",
    network: "Network Error: Failed to create post. Please check your connection and try again.",
};

pub const POST_DETAILS_FAILED: &str = "Failed to load post details.";
pub const COMMENTS_FAILED: &str = "Failed to load comments.";

/// Formats a fetch failure for display.
pub fn describe_failure(err: &FetchError, wording: FailureWording) -> String {
    match (err.status(), err.server_message()) {
        (Some(code), Some(message)) => format!("Error {code}: {message}"),
        (Some(code), None) => format!("Error {code}: {}", wording.status_only),
        (None, _) => wording.network.to_string(),
    }
}

/// Local, pre-network rejection of a new post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields => write!(f, "Both title and body are required."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Why a `submit_new_post` intent produced no request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    Validation(ValidationError),
    /// The listing has not finished loading (or failed to).
    NotReady,
    /// A create request is already in flight.
    InFlight,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Validation(e) => write!(f, "{e}"),
            SubmitError::NotReady => write!(f, "Posts are still loading. Please wait and try again."),
            SubmitError::InFlight => write!(f, "A post is already being submitted."),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<ValidationError> for SubmitError {
    fn from(e: ValidationError) -> Self {
        SubmitError::Validation(e)
    }
}

/// A broken internal assumption. Never shown to the user; logged as a defect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalInvariantError {
    /// A post id was selected that is not in the loaded collection.
    UnknownPost(PostId),
}

impl fmt::Display for InternalInvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternalInvariantError::UnknownPost(id) => {
                write!(f, "selected post {id} is not in the loaded collection")
            }
        }
    }
}

impl std::error::Error for InternalInvariantError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_message() {
        let err = FetchError::Status {
            status: 503,
            message: Some("Down for maintenance".into()),
        };
        assert_eq!(
            describe_failure(&err, LOAD_POSTS_WORDING),
            "Error 503: Down for maintenance"
        );
        assert_eq!(
            describe_failure(&err, CREATE_POST_WORDING),
            "Error 503: Down for maintenance"
        );
    }

    #[test]
    fn test_status_only_load_wording() {
        let err = FetchError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(
            describe_failure(&err, LOAD_POSTS_WORDING),
            "Error 500: Sadly the page is not available at the moment. Please try again later."
        );
    }

    #[test]
    fn test_status_only_create_wording() {
        let err = FetchError::NotFound { message: None };
        assert_eq!(
            describe_failure(&err, CREATE_POST_WORDING),
            "Error 404: Failed to create post. Please try again."
        );
    }

    #[test]
    fn test_network_tier() {
        let err = FetchError::Network("connection refused".into());
        assert_eq!(
            describe_failure(&err, LOAD_POSTS_WORDING),
            LOAD_POSTS_WORDING.network
        );
        assert_eq!(
            describe_failure(&err, CREATE_POST_WORDING),
            CREATE_POST_WORDING.network
        );
    }

    #[test]
    fn test_decode_failure_uses_network_tier() {
        let err = FetchError::Decode("expected value".into());
        assert_eq!(
            describe_failure(&err, LOAD_POSTS_WORDING),
            LOAD_POSTS_WORDING.network
        );
    }

    #[test]
    fn test_submit_error_messages() {
        assert_eq!(
            SubmitError::from(ValidationError::MissingFields).to_string(),
            "Both title and body are required."
        );
        assert!(SubmitError::NotReady.to_string().contains("still loading"));
    }
}
