//! End-to-end tests for the HTTP surface
//!
//! The router is driven in-process with `oneshot`; the image chain is
//! configured empty so generate-images never leaves the machine.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use kebab_server::imaging::LocalSvgRenderer;
use kebab_server::{
    Catalog, Config, ImageOrchestrator, MemoryOrderStore, OrderService, ServerState, build_router,
};

fn app() -> Router {
    let mut config = Config::with_overrides(0, None);
    config.imaging.priority.clear();

    let catalog = Arc::new(Catalog::builtin());
    let orders = OrderService::new(Arc::new(MemoryOrderStore::new()));
    let images = ImageOrchestrator::new(
        Vec::new(),
        LocalSvgRenderer::new(catalog.clone()),
        Duration::from_secs(5),
    );
    build_router(ServerState::new(config, catalog, orders, images))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, body) = get(&app(), "/api/nothing-here").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);
}

#[tokio::test]
async fn test_list_ingredients_by_category() {
    let app = app();

    let (status, body) = get(&app, "/api/ingredients").await;
    assert_eq!(status, StatusCode::OK);
    let all = body["data"]["ingredients"].as_array().unwrap().len();
    assert!(all > 20);
    assert_eq!(body["data"]["basePrices"]["medium"]["price"], 7.0);

    let (status, body) = get(&app, "/api/ingredients?category=sauce").await;
    assert_eq!(status, StatusCode::OK);
    let sauces = body["data"]["ingredients"].as_array().unwrap();
    assert!(!sauces.is_empty() && sauces.len() < all);
    assert!(sauces.iter().all(|i| i["category"] == "sauce"));
}

#[tokio::test]
async fn test_list_ingredients_rejects_unknown_category() {
    let (status, body) = get(&app(), "/api/ingredients?category=dessert").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6003);
    assert_eq!(body["details"]["value"], "dessert");
}

#[tokio::test]
async fn test_get_ingredient() {
    let app = app();

    let (status, body) = get(&app, "/api/ingredients/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Grilled Chicken");

    let (status, body) = get(&app, "/api/ingredients/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);

    let (status, _) = get(&app, "/api/ingredients/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_builder_config_and_popular() {
    let app = app();

    let (status, body) = get(&app, "/api/kebab-builder/config").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["sizes"], json!(["small", "medium", "large", "family"]));

    let (status, body) = get(&app, "/api/kebab-builder/popular").await;
    assert_eq!(status, StatusCode::OK);
    let combos = body["data"].as_array().unwrap();
    assert_eq!(combos[0]["name"], "Classic Chicken Kebab");
    assert_eq!(combos[0]["estimatedPrice"], 13.95);
}

#[tokio::test]
async fn test_calculate() {
    let (status, body) = post(
        &app(),
        "/api/kebab-builder/calculate",
        json!({ "size": "medium", "selectedIngredients": [21, 1] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["totalPrice"], 12.0);
    assert_eq!(data["totalProtein"], 29.5);
    assert_eq!(data["totalWeight"], 175.0);
    assert_eq!(data["selectedIngredients"].as_array().unwrap().len(), 2);
    assert_eq!(data["breakdown"]["total"], "Total: $12.00");
}

#[tokio::test]
async fn test_calculate_rejects_bad_input() {
    let app = app();

    let (status, body) = post(
        &app,
        "/api/kebab-builder/calculate",
        json!({ "size": "gigantic", "selectedIngredients": [1] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6002);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/kebab-builder/calculate")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_order_lifecycle() {
    let app = app();

    let (status, body) = post(
        &app,
        "/api/kebab-builder/create",
        json!({
            "size": "medium",
            "selectedIngredients": [20, 1, 5, 1],
            "customerName": "Ada",
            "deliveryType": "pickup"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "Kebab order created successfully");
    let order = &body["data"];
    let number = order["orderNumber"].as_str().unwrap().to_string();
    assert!(number.starts_with("ORD-"));
    assert_eq!(order["status"], "pending");
    assert_eq!(order["summary"]["itemCount"], 4);
    let chicken = order["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["ingredientId"] == 1)
        .unwrap();
    assert_eq!(chicken["quantity"], 2);

    let (status, body) = get(&app, &format!("/api/orders/{number}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["customerInfo"]["name"], "Ada");

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/orders/{number}/status"),
        Some(json!({ "status": "delivered", "paymentStatus": "paid" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "delivered");
    assert_eq!(body["data"]["paymentStatus"], "paid");
    assert!(body["data"]["actualDeliveryTime"].is_string());

    let (status, body) = get(&app, "/api/orders?status=delivered").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = get(&app, "/api/orders?status=pending").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_requires_single_base() {
    let app = app();

    let (status, body) = post(
        &app,
        "/api/kebab-builder/create",
        json!({ "size": "small", "selectedIngredients": [1] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4003);

    let (status, body) = post(
        &app,
        "/api/kebab-builder/create",
        json!({ "size": "small", "selectedIngredients": [20, 21, 1] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4004);
    assert_eq!(body["details"]["ingredients"], json!([20, 21]));
}

#[tokio::test]
async fn test_delivery_requires_address() {
    let (status, body) = post(
        &app(),
        "/api/kebab-builder/create",
        json!({
            "size": "small",
            "selectedIngredients": [20, 1],
            "deliveryType": "delivery"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "deliveryAddress");
}

#[tokio::test]
async fn test_unknown_order_is_404() {
    let (status, body) = get(&app(), "/api/orders/ORD-20240101-000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn test_preview() {
    let app = app();

    let (status, body) = post(
        &app,
        "/api/ingredients/preview",
        json!({ "size": "large", "selectedIngredients": [21, 1, 11] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["size"]["dimensions"], "25cm x 6cm");
    assert_eq!(data["layers"][0]["type"], "base");
    assert!(data["visualization"]["svg"].as_str().unwrap().starts_with("<svg"));

    let (status, body) = post(&app, "/api/ingredients/preview", json!({ "size": "large" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Size and selected ingredients are required");
}

#[tokio::test]
async fn test_prompts_then_generate_images() {
    let app = app();

    let (status, body) = post(
        &app,
        "/api/kebab-builder/prompts",
        json!({ "size": "medium", "selectedIngredients": [20, 1, 5] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let prompts = body["data"].clone();
    assert_eq!(prompts["kebabData"]["size"], "medium");
    assert!(!prompts["openKebabPrompt"].as_str().unwrap().is_empty());

    let (status, body) = post(&app, "/api/kebab-builder/generate-images", prompts).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Images generated successfully");
    let metadata = &body["data"]["metadata"];
    assert_eq!(metadata["service"], "Local SVG (Free)");
    let attempts = metadata["attempts"].as_array().unwrap();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0]["service"], "svg");
    assert_eq!(attempts[0]["outcome"], "success");
    assert!(
        body["data"]["openKebabImage"]
            .as_str()
            .unwrap()
            .starts_with("data:image/svg+xml;base64,")
    );
}

#[tokio::test]
async fn test_generate_images_requires_prompts() {
    let (status, body) = post(
        &app(),
        "/api/kebab-builder/generate-images",
        json!({ "openKebabPrompt": "open" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required parameters for image generation");
}
