//! Terminal admin interface for the customer API.
//!
//! # Overview
//! The core crate describes every HTTP round-trip as plain data; this crate
//! executes them (ureq, 5-second bound), renders the customer list as a card
//! grid and drives the create/update/delete forms through a modal prompt
//! loop. One user action means one blocking round-trip — there is no
//! background work, no retry and no cancellation path.

pub mod api;
pub mod config;
pub mod screen;
pub mod session;
pub mod transport;

pub use api::CustomerApi;
pub use config::Config;
pub use session::Session;
pub use transport::{Transport, UreqTransport};
