use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

pub type Db = Arc<RwLock<HashMap<u64, Customer>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route("/customers/{id}", axum::routing::put(update_customer).delete(delete_customer))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_customers(State(db): State<Db>) -> Json<Vec<Customer>> {
    let customers = db.read().await;
    let mut all: Vec<Customer> = customers.values().cloned().collect();
    all.sort_by_key(|c| c.id);
    Json(all)
}

async fn create_customer(
    State(db): State<Db>,
    Json(input): Json<Customer>,
) -> Result<Json<Customer>, (StatusCode, String)> {
    let mut customers = db.write().await;
    if customers.contains_key(&input.id) {
        return Err((
            StatusCode::CONFLICT,
            format!("customer {} already exists", input.id),
        ));
    }
    customers.insert(input.id, input.clone());
    Ok(Json(input))
}

async fn update_customer(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<Customer>,
) -> Result<Json<Customer>, StatusCode> {
    let mut customers = db.write().await;
    let customer = customers.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    *customer = Customer { id, ..input };
    Ok(Json(customer.clone()))
}

async fn delete_customer(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut customers = db.write().await;
    customers.remove(&id).map(|_| StatusCode::OK).ok_or(StatusCode::NOT_FOUND)
}
