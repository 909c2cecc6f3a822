//! In-process fake of the storefront backend.
//!
//! Mirrors the wire behaviour the client depends on: camelCase JSON,
//! bearer tokens, `{"detail"}` error bodies, status/role updates as query
//! parameters, and cart and order lines stored as `{productId, quantity,
//! price}` only.
//! Posting a product already in the cart changes its quantity and keeps the
//! stored price.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use cemention_client::{ApiClient, ClientConfig};

pub const ADMIN_TOKEN: &str = "tok-admin";
pub const RETAILER_TOKEN: &str = "tok-retailer";
pub const CUSTOMER_TOKEN: &str = "tok-customer";
pub const PASSWORD: &str = "secret";

pub const ULTRATECH: &str = "p-ultratech";
pub const ACC: &str = "p-acc";

type Reply = (StatusCode, Json<Value>);
pub type Shared = Arc<Mutex<Backend>>;

/// Everything the fake backend stores.
#[derive(Debug, Default)]
pub struct Backend {
    pub users: Vec<Value>,
    pub tokens: HashMap<String, String>,
    pub products: Vec<Value>,
    pub carts: HashMap<String, Vec<Value>>,
    pub orders: Vec<Value>,
    pub request_orders: Vec<Value>,
}

impl Backend {
    fn seeded() -> Self {
        let mut backend = Backend::default();

        backend.add_user(ADMIN_TOKEN, json!({
            "id": "u-admin", "name": "Store Admin", "email": "admin@cemention.com",
            "phone": "9823064024", "role": "admin"
        }));
        backend.add_user(RETAILER_TOKEN, json!({
            "id": "u-retailer", "name": "Patil Hardware", "email": "patil@example.com",
            "phone": "9876500001", "role": "retailer", "isGstRegistered": true,
            "businessName": "Patil Hardware", "gstNumber": "27AAAPP1234F1Z5"
        }));
        backend.add_user(CUSTOMER_TOKEN, json!({
            "id": "u-customer", "name": "Asha Kulkarni", "email": "asha@example.com",
            "phone": "9876500002", "role": "customer"
        }));

        backend.products = vec![
            json!({
                "id": ULTRATECH, "brand": "UltraTech", "grade": "OPC", "basePrice": 300.0,
                "image": "https://img.example/ultratech.png", "minQuantity": 100, "stock": 5000,
                "createdAt": "2025-01-05T10:00:00.000000+00:00"
            }),
            json!({
                "id": ACC, "brand": "ACC", "grade": "PPC", "basePrice": 280.0,
                "image": "https://img.example/acc.png", "minQuantity": 100, "stock": 3000,
                "createdAt": "2025-01-05T10:00:00.000000+00:00"
            }),
        ];

        backend
    }

    fn add_user(&mut self, token: &str, mut user: Value) {
        user["password"] = json!(PASSWORD);
        user["addresses"] = json!([]);
        user["createdAt"] = json!("2025-01-01T09:00:00+00:00");
        let id = user["id"].as_str().unwrap_or_default().to_string();
        self.tokens.insert(token.to_string(), id);
        self.users.push(user);
    }

    fn current_user(&self, headers: &HeaderMap) -> Result<Value, Reply> {
        let token = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| detail(StatusCode::FORBIDDEN, "Not authenticated"))?;

        let user_id = self
            .tokens
            .get(token)
            .ok_or_else(|| detail(StatusCode::UNAUTHORIZED, "Invalid authentication credentials"))?;

        self.users
            .iter()
            .find(|u| u["id"] == *user_id)
            .cloned()
            .ok_or_else(|| detail(StatusCode::UNAUTHORIZED, "User not found"))
    }

    fn current_admin(&self, headers: &HeaderMap) -> Result<Value, Reply> {
        let user = self.current_user(headers)?;
        if user["role"] != "admin" {
            return Err(detail(StatusCode::FORBIDDEN, "Not authorized"));
        }
        Ok(user)
    }

    pub fn cart_of(&self, user_id: &str) -> Vec<Value> {
        self.carts.get(user_id).cloned().unwrap_or_default()
    }
}

fn detail(status: StatusCode, message: &str) -> Reply {
    (status, Json(json!({ "detail": message })))
}

fn ok(body: Value) -> Reply {
    (StatusCode::OK, Json(body))
}

fn message(text: &str) -> Reply {
    ok(json!({ "message": text }))
}

fn public(user: &Value) -> Value {
    let mut user = user.clone();
    if let Some(obj) = user.as_object_mut() {
        obj.remove("password");
    }
    user
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn now() -> Value {
    json!(chrono::Utc::now().to_rfc3339())
}

// =============================================================================
// Handlers
// =============================================================================

async fn register(State(st): State<Shared>, Json(body): Json<Value>) -> Result<Reply, Reply> {
    let mut st = st.lock().unwrap();
    if st.users.iter().any(|u| u["email"] == body["email"]) {
        return Err(detail(StatusCode::BAD_REQUEST, "Email already registered"));
    }

    let mut user = body.clone();
    user["id"] = json!(new_id());
    user["addresses"] = json!([]);
    user["createdAt"] = now();
    let token = format!("tok-{}", new_id());
    let user_id = user["id"].as_str().unwrap_or_default().to_string();

    st.tokens.insert(token.clone(), user_id);
    st.users.push(user.clone());
    Ok(ok(json!({ "token": token, "user": public(&user) })))
}

async fn login(State(st): State<Shared>, Json(body): Json<Value>) -> Result<Reply, Reply> {
    let st = st.lock().unwrap();
    let user = st
        .users
        .iter()
        .find(|u| u["email"] == body["email"] && u["password"] == body["password"])
        .ok_or_else(|| detail(StatusCode::UNAUTHORIZED, "Invalid email or password"))?;

    let token = st
        .tokens
        .iter()
        .find(|(_, id)| **id == user["id"])
        .map(|(t, _)| t.clone())
        .unwrap_or_default();
    Ok(ok(json!({ "token": token, "user": public(user) })))
}

async fn me(State(st): State<Shared>, headers: HeaderMap) -> Result<Reply, Reply> {
    let st = st.lock().unwrap();
    Ok(ok(public(&st.current_user(&headers)?)))
}

async fn list_products(State(st): State<Shared>) -> Reply {
    ok(json!(st.lock().unwrap().products))
}

async fn create_product(
    State(st): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Reply, Reply> {
    let mut st = st.lock().unwrap();
    st.current_admin(&headers)?;

    let mut product = body;
    product["id"] = json!(new_id());
    product["createdAt"] = now();
    st.products.push(product.clone());
    Ok(ok(product))
}

async fn update_product(
    State(st): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Reply, Reply> {
    let mut st = st.lock().unwrap();
    st.current_admin(&headers)?;

    let product = st
        .products
        .iter_mut()
        .find(|p| p["id"] == id)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Product not found"))?;
    if let (Some(target), Some(fields)) = (product.as_object_mut(), body.as_object()) {
        for (k, v) in fields {
            target.insert(k.clone(), v.clone());
        }
    }
    Ok(ok(product.clone()))
}

async fn delete_product(
    State(st): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Reply, Reply> {
    let mut st = st.lock().unwrap();
    st.current_admin(&headers)?;

    let before = st.products.len();
    st.products.retain(|p| p["id"] != id);
    if st.products.len() == before {
        return Err(detail(StatusCode::NOT_FOUND, "Product not found"));
    }
    Ok(message("Product deleted successfully"))
}

async fn get_cart(State(st): State<Shared>, headers: HeaderMap) -> Result<Reply, Reply> {
    let st = st.lock().unwrap();
    let user = st.current_user(&headers)?;
    let user_id = user["id"].as_str().unwrap_or_default();
    Ok(ok(json!({
        "id": format!("cart-{}", user_id),
        "userId": user_id,
        "items": st.cart_of(user_id),
    })))
}

async fn upsert_cart(
    State(st): State<Shared>,
    headers: HeaderMap,
    Json(item): Json<Value>,
) -> Result<Reply, Reply> {
    let mut st = st.lock().unwrap();
    let user = st.current_user(&headers)?;
    let user_id = user["id"].as_str().unwrap_or_default().to_string();

    let items = st.carts.entry(user_id.clone()).or_default();
    match items.iter_mut().find(|l| l["productId"] == item["productId"]) {
        Some(existing) => existing["quantity"] = item["quantity"].clone(),
        None => items.push(json!({
            "productId": item["productId"],
            "quantity": item["quantity"],
            "price": item["price"],
        })),
    }

    let items = st.cart_of(&user_id);
    Ok(ok(json!({ "id": format!("cart-{}", user_id), "userId": user_id, "items": items })))
}

async fn remove_cart_line(
    State(st): State<Shared>,
    headers: HeaderMap,
    Path(product_id): Path<String>,
) -> Result<Reply, Reply> {
    let mut st = st.lock().unwrap();
    let user = st.current_user(&headers)?;
    let user_id = user["id"].as_str().unwrap_or_default().to_string();

    let items = st
        .carts
        .get_mut(&user_id)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Cart not found"))?;
    items.retain(|l| l["productId"] != product_id);
    Ok(message("Item removed from cart"))
}

async fn clear_cart(State(st): State<Shared>, headers: HeaderMap) -> Result<Reply, Reply> {
    let mut st = st.lock().unwrap();
    let user = st.current_user(&headers)?;
    let user_id = user["id"].as_str().unwrap_or_default().to_string();
    st.carts.insert(user_id, vec![]);
    Ok(message("Cart cleared"))
}

async fn create_order(
    State(st): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Reply, Reply> {
    let mut st = st.lock().unwrap();
    let user = st.current_user(&headers)?;
    let user_id = user["id"].as_str().unwrap_or_default().to_string();

    let items: Vec<Value> = body["items"]
        .as_array()
        .map(|lines| {
            lines
                .iter()
                .map(|l| json!({
                    "productId": l["productId"],
                    "quantity": l["quantity"],
                    "price": l["price"],
                }))
                .collect()
        })
        .unwrap_or_default();

    let order = json!({
        "id": new_id(),
        "userId": user_id,
        "items": items,
        "totalAmount": body["totalAmount"],
        "paymentMethod": body["paymentMethod"],
        "status": "pending",
        "deliveryAddress": body["deliveryAddress"],
        "orderType": body.get("orderType").cloned().unwrap_or(json!("normal")),
        "createdAt": now(),
    });
    st.orders.push(order.clone());
    st.carts.insert(user_id, vec![]);
    Ok(ok(order))
}

async fn list_orders(State(st): State<Shared>, headers: HeaderMap) -> Result<Reply, Reply> {
    let st = st.lock().unwrap();
    let user = st.current_user(&headers)?;
    let orders: Vec<&Value> = st
        .orders
        .iter()
        .filter(|o| user["role"] == "admin" || o["userId"] == user["id"])
        .collect();
    Ok(ok(json!(orders)))
}

async fn update_order_status(
    State(st): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Reply, Reply> {
    let mut st = st.lock().unwrap();
    st.current_admin(&headers)?;
    let status = query
        .get("status")
        .ok_or_else(|| detail(StatusCode::UNPROCESSABLE_ENTITY, "status is required"))?;

    let order = st
        .orders
        .iter_mut()
        .find(|o| o["id"] == id)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Order not found"))?;
    order["status"] = json!(status);
    Ok(message("Order status updated"))
}

async fn create_request_order(
    State(st): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Reply, Reply> {
    let mut st = st.lock().unwrap();
    let user = st.current_user(&headers)?;

    let mut request = body;
    request["id"] = json!(new_id());
    request["userId"] = user["id"].clone();
    request["status"] = json!("pending");
    request["createdAt"] = now();
    st.request_orders.push(request.clone());
    Ok(ok(request))
}

async fn list_request_orders(State(st): State<Shared>, headers: HeaderMap) -> Result<Reply, Reply> {
    let st = st.lock().unwrap();
    let user = st.current_user(&headers)?;
    let requests: Vec<&Value> = st
        .request_orders
        .iter()
        .filter(|r| user["role"] == "admin" || r["userId"] == user["id"])
        .collect();
    Ok(ok(json!(requests)))
}

async fn update_request_status(
    State(st): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Reply, Reply> {
    let mut st = st.lock().unwrap();
    st.current_admin(&headers)?;
    let status = query
        .get("status")
        .ok_or_else(|| detail(StatusCode::UNPROCESSABLE_ENTITY, "status is required"))?;

    let request = st
        .request_orders
        .iter_mut()
        .find(|r| r["id"] == id)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Request order not found"))?;
    request["status"] = json!(status);
    Ok(message("Request order status updated"))
}

async fn list_users(State(st): State<Shared>, headers: HeaderMap) -> Result<Reply, Reply> {
    let st = st.lock().unwrap();
    st.current_admin(&headers)?;
    let users: Vec<Value> = st.users.iter().map(public).collect();
    Ok(ok(json!(users)))
}

async fn update_user_role(
    State(st): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Reply, Reply> {
    let mut st = st.lock().unwrap();
    st.current_admin(&headers)?;
    let role = query
        .get("role")
        .ok_or_else(|| detail(StatusCode::UNPROCESSABLE_ENTITY, "role is required"))?;

    let user = st
        .users
        .iter_mut()
        .find(|u| u["id"] == id)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "User not found"))?;
    user["role"] = json!(role);
    Ok(message("User role updated"))
}

// =============================================================================
// Server
// =============================================================================

fn router(state: Shared) -> Router {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/{id}", put(update_product).delete(delete_product))
        .route("/api/cart", get(get_cart).post(upsert_cart).delete(clear_cart))
        .route("/api/cart/{id}", delete(remove_cart_line))
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/api/orders/{id}", put(update_order_status))
        .route("/api/request-orders", get(list_request_orders).post(create_request_order))
        .route("/api/request-orders/{id}", put(update_request_status))
        .route("/api/admin/users", get(list_users))
        .route("/api/admin/users/{id}", put(update_user_role))
        .with_state(state)
}

/// A running fake backend.
pub struct FakeBackend {
    pub url: String,
    pub state: Shared,
}

impl FakeBackend {
    /// Starts a seeded backend on an ephemeral port.
    pub async fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(Backend::seeded()));
        let app = router(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeBackend {
            url: format!("http://{}", addr),
            state,
        }
    }

    pub fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.api.backend_url = self.url.clone();
        config.api.timeout_secs = 5;
        config
    }

    pub fn api(&self) -> ApiClient {
        ApiClient::new(&self.config()).unwrap()
    }

    pub fn with_state<T>(&self, f: impl FnOnce(&mut Backend) -> T) -> T {
        f(&mut self.state.lock().unwrap())
    }
}
