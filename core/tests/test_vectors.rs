//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results or errors. Comparing parsed JSON (not raw
//! strings) avoids false negatives from field-ordering differences.

use crm_core::{ApiError, Customer, CustomerClient, CustomerPayload, HttpMethod, HttpResponse};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> CustomerClient {
    CustomerClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn expected_headers(case: &serde_json::Value) -> Vec<(String, String)> {
    case["expected_request"]["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Check a unit-result parse outcome against `expected_error` (absent means
/// the case expects success).
fn check_outcome(name: &str, case: &serde_json::Value, result: Result<(), ApiError>) {
    match case.get("expected_error") {
        None => result.unwrap_or_else(|e| panic!("{name}: unexpected error {e}")),
        Some(expected) => {
            let err = result.expect_err(name);
            match expected["type"].as_str().unwrap() {
                "not_found" => assert!(matches!(err, ApiError::NotFound), "{name}: {err:?}"),
                "http" => {
                    let expected_status = expected["status"].as_u64().unwrap() as u16;
                    match err {
                        ApiError::Http { status, .. } => {
                            assert_eq!(status, expected_status, "{name}: status")
                        }
                        other => panic!("{name}: unexpected error {other:?}"),
                    }
                }
                other => panic!("{name}: unknown expected_error type {other}"),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        let req = c.build_list_customers();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert!(req.body.is_none(), "{name}: body");
        assert_eq!(req.headers, expected_headers(case), "{name}: headers");

        let result = c.parse_list_customers(simulated_response(case));
        match case.get("expected_error") {
            None => {
                let customers = result.unwrap_or_else(|e| panic!("{name}: unexpected error {e}"));
                let expected: Vec<Customer> =
                    serde_json::from_value(case["expected_result"].clone()).unwrap();
                assert_eq!(customers, expected, "{name}: parsed result");
            }
            Some(_) => check_outcome(name, case, result.map(|_| ())),
        }
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let raw = include_str!("../../test-vectors/create.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: CustomerPayload = serde_json::from_value(case["input"].clone()).unwrap();
        let expected_req = &case["expected_request"];

        let req = c.build_create_customer(&input).unwrap();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert_eq!(req.headers, expected_headers(case), "{name}: headers");

        let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        check_outcome(name, case, c.parse_create_customer(simulated_response(case)));
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let raw = include_str!("../../test-vectors/update.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: CustomerPayload = serde_json::from_value(case["input"].clone()).unwrap();
        let expected_req = &case["expected_request"];

        let req = c.build_update_customer(input.id, &input).unwrap();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert_eq!(req.headers, expected_headers(case), "{name}: headers");

        let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        check_outcome(name, case, c.parse_update_customer(simulated_response(case)));
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let raw = include_str!("../../test-vectors/delete.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input"]["id"].as_u64().unwrap();
        let expected_req = &case["expected_request"];

        let req = c.build_delete_customer(id);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert!(req.body.is_none(), "{name}: body");
        assert_eq!(req.headers, expected_headers(case), "{name}: headers");

        check_outcome(name, case, c.parse_delete_customer(simulated_response(case)));
    }
}
