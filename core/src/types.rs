//! Domain DTOs for the customer API.
//!
//! # Design
//! `Customer` mirrors the server's schema but is defined independently;
//! integration tests catch any drift between the two crates. Every field
//! carries a serde default because the remote API makes no guarantees about
//! completeness — a record with a missing `id` deserializes as 0 and is
//! handled downstream by the next-id heuristic.
//!
//! `CustomerPayload` is the write-side body for POST and PUT. Blank optional
//! fields are submitted as explicit `null`, never as `""` and never omitted,
//! so the two optional fields deliberately avoid `skip_serializing_if`.

use serde::{Deserialize, Serialize};

/// A single customer record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Request body for creating or replacing a customer.
///
/// The id travels in the body on POST and in both the body and the path on
/// PUT, matching what the server expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerPayload {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_tolerates_missing_fields() {
        let customer: Customer = serde_json::from_str(r#"{"name":"Ann"}"#).unwrap();
        assert_eq!(customer.id, 0);
        assert_eq!(customer.name, "Ann");
        assert_eq!(customer.email, "");
        assert!(customer.phone.is_none());
        assert!(customer.address.is_none());
    }

    #[test]
    fn customer_accepts_null_optionals() {
        let customer: Customer =
            serde_json::from_str(r#"{"id":3,"name":"Ann","email":"a@b.c","phone":null,"address":null}"#)
                .unwrap();
        assert_eq!(customer.id, 3);
        assert!(customer.phone.is_none());
        assert!(customer.address.is_none());
    }

    #[test]
    fn payload_serializes_none_as_null() {
        let payload = CustomerPayload {
            id: 1,
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            phone: None,
            address: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["phone"].is_null());
        assert!(json["address"].is_null());
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn payload_roundtrips_through_json() {
        let payload = CustomerPayload {
            id: 7,
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            phone: Some("555-0100".to_string()),
            address: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        let back: CustomerPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }
}
