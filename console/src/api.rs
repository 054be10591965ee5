//! One-call-per-operation facade over the core client and a transport.
//!
//! Each method performs a single blocking round-trip: build the request,
//! execute it, parse the response. Outcomes are logged here so the session
//! loop stays focused on presentation.

use crm_core::{ApiError, Customer, CustomerClient, CustomerPayload};

use crate::transport::Transport;

/// Blocking customer API bound to a base URL and a transport.
pub struct CustomerApi<T> {
    client: CustomerClient,
    transport: T,
}

impl<T: Transport> CustomerApi<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: CustomerClient::new(base_url),
            transport,
        }
    }

    pub fn list(&self) -> Result<Vec<Customer>, ApiError> {
        let request = self.client.build_list_customers();
        let result = self
            .transport
            .execute(&request)
            .and_then(|response| self.client.parse_list_customers(response));
        match &result {
            Ok(customers) => tracing::info!(count = customers.len(), "fetched customer list"),
            Err(err) => tracing::warn!(error = %err, "customer list fetch failed"),
        }
        result
    }

    pub fn create(&self, payload: &CustomerPayload) -> Result<(), ApiError> {
        let request = self.client.build_create_customer(payload)?;
        let result = self
            .transport
            .execute(&request)
            .and_then(|response| self.client.parse_create_customer(response));
        match &result {
            Ok(()) => tracing::info!(id = payload.id, "customer created"),
            Err(err) => tracing::warn!(id = payload.id, error = %err, "customer create failed"),
        }
        result
    }

    pub fn update(&self, id: u64, payload: &CustomerPayload) -> Result<(), ApiError> {
        let request = self.client.build_update_customer(id, payload)?;
        let result = self
            .transport
            .execute(&request)
            .and_then(|response| self.client.parse_update_customer(response));
        match &result {
            Ok(()) => tracing::info!(id, "customer updated"),
            Err(err) => tracing::warn!(id, error = %err, "customer update failed"),
        }
        result
    }

    pub fn delete(&self, id: u64) -> Result<(), ApiError> {
        let request = self.client.build_delete_customer(id);
        let result = self
            .transport
            .execute(&request)
            .and_then(|response| self.client.parse_delete_customer(response));
        match &result {
            Ok(()) => tracing::info!(id, "customer deleted"),
            Err(err) => tracing::warn!(id, error = %err, "customer delete failed"),
        }
        result
    }
}
