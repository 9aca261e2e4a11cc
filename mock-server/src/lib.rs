//! In-memory stand-in for the pizza-order endpoint.
//!
//! Validates incoming drafts the way the production endpoint does and
//! answers every outcome with a JSON body carrying a `message` string:
//! 201 plus a confirmation for a good order, 422 plus the first violation
//! for a bad one. Accepted orders are stored in shared state and exposed
//! via `GET /api/order` so tests can assert exactly what was posted.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub mod config;

/// Topping ids the kitchen knows about.
const MENU: [&str; 5] = ["1", "2", "3", "4", "5"];

/// An order draft as posted by the form.
///
/// Every field is defaulted so a structurally valid JSON object always
/// reaches validation and gets a `message` back, rather than a bare serde
/// rejection.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingOrder {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub toppings: Vec<String>,
}

/// An accepted order, as stored and as listed by `GET /api/order`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredOrder {
    pub id: Uuid,
    pub full_name: String,
    pub size: String,
    pub toppings: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderAccepted {
    order_id: Uuid,
    message: String,
}

#[derive(Serialize)]
struct OrderRejected {
    message: String,
}

pub type Db = Arc<RwLock<HashMap<Uuid, StoredOrder>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/api/order", get(list_orders).post(create_order))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// First violated rule's message, or `Ok` for a shippable order.
fn validate(order: &IncomingOrder) -> Result<(), String> {
    let name = order.full_name.trim();
    if name.is_empty() {
        return Err("fullName is required".to_string());
    }
    let len = name.chars().count();
    if len < 3 {
        return Err("full name must be at least 3 characters".to_string());
    }
    if len > 20 {
        return Err("full name must be at most 20 characters".to_string());
    }
    if order.size.is_empty() {
        return Err("size is required".to_string());
    }
    if !matches!(order.size.as_str(), "S" | "M" | "L") {
        return Err("size must be S or M or L".to_string());
    }
    for id in &order.toppings {
        if !MENU.contains(&id.as_str()) {
            return Err(format!("topping {id} is not on the menu"));
        }
    }
    Ok(())
}

fn confirmation(order: &StoredOrder) -> String {
    let size = match order.size.as_str() {
        "S" => "small",
        "M" => "medium",
        _ => "large",
    };
    let toppings = match order.toppings.len() {
        0 => "no toppings".to_string(),
        1 => "1 topping".to_string(),
        n => format!("{n} toppings"),
    };
    format!(
        "Thanks for your order, {}! Your {size} pizza with {toppings} is on the way.",
        order.full_name.trim()
    )
}

async fn list_orders(State(db): State<Db>) -> Json<Vec<StoredOrder>> {
    let orders = db.read().await;
    Json(orders.values().cloned().collect())
}

async fn create_order(
    State(db): State<Db>,
    Json(input): Json<IncomingOrder>,
) -> Result<(StatusCode, Json<OrderAccepted>), (StatusCode, Json<OrderRejected>)> {
    if let Err(message) = validate(&input) {
        tracing::info!(%message, "order rejected");
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(OrderRejected { message }),
        ));
    }
    let order = StoredOrder {
        id: Uuid::new_v4(),
        full_name: input.full_name,
        size: input.size,
        toppings: input.toppings,
    };
    let message = confirmation(&order);
    tracing::info!(order_id = %order.id, size = %order.size, "order accepted");
    db.write().await.insert(order.id, order.clone());
    Ok((
        StatusCode::CREATED,
        Json(OrderAccepted {
            order_id: order.id,
            message,
        }),
    ))
}
