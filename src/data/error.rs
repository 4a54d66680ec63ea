//! Error types for fetching and decoding catalog data

use std::fmt;

use thiserror::Error;

/// Errors produced by a single HTTP GET
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failure, timeout, or an unreadable body
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream answered with a status code of 400 or above
    #[error("bad status code in the response: {code}")]
    HttpStatus { code: u16 },
}

/// Which way a caller tried to page through a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Next => write!(f, "next"),
            Direction::Previous => write!(f, "previous"),
        }
    }
}

/// Errors returned by [`Client`](super::Client) operations
///
/// Every variant that can come out of a request names the operation it came
/// from, so the message printed to the user says where things went wrong.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or timed out
    #[error("{operation}: HTTP request failed: {source}")]
    Network {
        operation: &'static str,
        source: reqwest::Error,
    },

    /// Upstream returned an error status
    #[error("{operation}: bad status code in the response: {code}")]
    HttpStatus { operation: &'static str, code: u16 },

    /// The response body was not the expected JSON shape
    #[error("{operation}: failed to decode response: {source}")]
    Decode {
        operation: &'static str,
        source: serde_json::Error,
    },

    /// The caller passed an argument no request could be built from
    #[error("{operation}: invalid input: {reason}")]
    InvalidInput {
        operation: &'static str,
        reason: String,
    },

    /// There is no page in the requested direction
    #[error("no {direction} page of {listing}: you are on the {} page", edge(.direction))]
    PaginationBoundary {
        listing: &'static str,
        direction: Direction,
    },
}

fn edge(direction: &Direction) -> &'static str {
    match direction {
        Direction::Next => "last",
        Direction::Previous => "first",
    }
}

impl ClientError {
    /// Attaches the operation name to a transport error
    pub fn from_fetch(operation: &'static str, error: FetchError) -> Self {
        match error {
            FetchError::Network(source) => ClientError::Network { operation, source },
            FetchError::HttpStatus { code } => ClientError::HttpStatus { operation, code },
        }
    }

    /// The HTTP status code, if upstream rejected the request
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::HttpStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}
