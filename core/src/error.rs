//! Error types for the customer API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because update and delete surface
//! "Customer not found" as a distinct user message. `Transport` covers every
//! network-level failure — timeout, connection refused, DNS — which the
//! interface treats identically. All other non-2xx responses land in `Http`
//! with the raw status code and body for display.
//!
//! Every variant is recovered at the call site and turned into a user-facing
//! message; nothing here is retried or propagated past the interface loop.

use std::fmt;

/// Errors produced while executing or interpreting a customer API call.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure reported by the executing host, including the
    /// bounded-timeout case.
    Transport(String),

    /// The server returned 404 — the requested customer does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::NotFound => write!(f, "customer not found"),
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
