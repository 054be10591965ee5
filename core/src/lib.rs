//! Synchronous API client core for the customer admin interface.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip under a bounded timeout, making the core fully
//! deterministic and testable.
//!
//! # Design
//! - `CustomerClient` is stateless — it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `CustomerStore` owns the single list snapshot and implements the
//!   refetch-after-write protocol: successful fetches replace it wholesale,
//!   failed fetches leave it untouched.
//! - Form and selector logic is pure: presence validation, blank-to-null
//!   normalization, next-id defaulting and delete confirmation gating all
//!   happen before any request is built.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod forms;
pub mod http;
pub mod selector;
pub mod store;
pub mod types;

pub use client::CustomerClient;
pub use error::ApiError;
pub use forms::{CreateForm, DeleteControl, FormError, UpdateForm};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use selector::SelectorEntry;
pub use store::{next_id, CustomerStore, ListState};
pub use types::{Customer, CustomerPayload};
