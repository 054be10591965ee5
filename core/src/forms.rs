//! Form logic for the create, update and delete actions.
//!
//! # Design
//! Forms hold fields as entered text and produce a `CustomerPayload` on
//! submit. Validation is presence-only (`name` and `email`); blank optional
//! fields normalize to `None` so they serialize as `null` rather than `""`.
//! `DeleteControl` gates the DELETE call behind an explicit confirmation
//! step — `take_request` yields the target id only after `confirm` was
//! called, and consumes the confirmation so it cannot be reused.

use std::fmt;

use crate::store::next_id;
use crate::types::{Customer, CustomerPayload};

/// Local validation failures, surfaced before any API call is made.
#[derive(Debug, PartialEq, Eq)]
pub enum FormError {
    /// A required field was left blank.
    MissingField(&'static str),

    /// The id field did not parse as a positive integer.
    InvalidId(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingField(field) => write!(f, "{field} is required"),
            FormError::InvalidId(value) => write!(f, "invalid id: {value:?}"),
        }
    }
}

impl std::error::Error for FormError {}

/// Blank optional fields become `None`; everything else is kept verbatim.
fn normalize_optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn require(field: &'static str, value: &str) -> Result<String, FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

/// Input fields for creating a new customer.
#[derive(Debug, Clone, Default)]
pub struct CreateForm {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl CreateForm {
    /// Blank form with the id pre-populated from the next-id heuristic.
    pub fn with_default_id(customers: &[Customer]) -> Self {
        Self {
            id: next_id(customers).to_string(),
            ..Self::default()
        }
    }

    pub fn payload(&self) -> Result<CustomerPayload, FormError> {
        let id = self
            .id
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidId(self.id.clone()))?;
        Ok(CustomerPayload {
            id,
            name: require("name", &self.name)?,
            email: require("email", &self.email)?,
            phone: normalize_optional(&self.phone),
            address: normalize_optional(&self.address),
        })
    }
}

/// Input fields for updating an existing customer, prefilled from the
/// selected record. The target id is fixed at construction and is not
/// editable.
#[derive(Debug, Clone)]
pub struct UpdateForm {
    id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl UpdateForm {
    pub fn for_customer(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone().unwrap_or_default(),
            address: customer.address.clone().unwrap_or_default(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn payload(&self) -> Result<CustomerPayload, FormError> {
        Ok(CustomerPayload {
            id: self.id,
            name: require("name", &self.name)?,
            email: require("email", &self.email)?,
            phone: normalize_optional(&self.phone),
            address: normalize_optional(&self.address),
        })
    }
}

/// Confirmation gate for the delete action.
///
/// Selecting a target clears any prior confirmation, so confirming always
/// refers to the currently selected customer.
#[derive(Debug, Default)]
pub struct DeleteControl {
    target: Option<u64>,
    confirmed: bool,
}

impl DeleteControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: u64) {
        self.target = Some(id);
        self.confirmed = false;
    }

    pub fn target(&self) -> Option<u64> {
        self.target
    }

    pub fn confirm(&mut self) {
        self.confirmed = true;
    }

    /// The id to delete, only once a target is selected and confirmed.
    /// Consumes the confirmation.
    pub fn take_request(&mut self) -> Option<u64> {
        if !self.confirmed {
            return None;
        }
        self.confirmed = false;
        self.target
    }
}
