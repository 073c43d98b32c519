//! HTTP tests of the back office router

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
    response::Response,
};
use backoffice_core::LegacyContextConfig;
use backoffice_testing::{init_tracing, test_builder};
use backoffice_web::{AppState, router};
use serde_json::Value;
use tower::ServiceExt;

fn state() -> AppState {
    let config = LegacyContextConfig::new("/srv/shop")
        .with_admin_dir("/srv/shop/admin-dev")
        .with_locked_controllers(["AdminCartsController"])
        .with_cookie_key("cookie-key");

    AppState::new(test_builder(config))
        .with_legacy_route("/admin/carts", "AdminCartsController")
        .with_legacy_route("/admin/customer-threads", "AdminCustomerThreadsController")
}

async fn get(uri: &str) -> Response {
    init_tracing();
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router(&state()).oneshot(request).await.unwrap()
}

async fn json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json(response).await["status"], "ok");
}

#[tokio::test]
async fn test_migrated_route_context() {
    let response = get("/admin/carts").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json(response).await;
    assert_eq!(body["controller_name"], "AdminCartsController");
    assert_eq!(body["php_self"], "AdminCartsController");
    assert_eq!(body["class_name"], "Cart");
    assert_eq!(body["id"], 10);
    assert_eq!(body["multishop_context"], "ALL_SHOPS");
    assert_eq!(body["shop_link_type"], "shop");
    assert_eq!(body["override_folder"], "carts_controller/");
    assert_eq!(body["admin_webpath"], "admin-dev");
    assert_eq!(body["conf"]["4"], "Successful update");
    assert!(body["token"].as_str().is_some_and(|token| token.len() == 64));
}

#[tokio::test]
async fn test_dispatcher_uses_query_parameter() {
    let body = json(get("/admin/index.php?controller=AdminOrdersController").await).await;

    assert_eq!(body["controller_name"], "AdminOrdersController");
    assert_eq!(body["class_name"], "Order");
    assert_eq!(body["multishop_context"], "SHOP | SHOP_GROUP | ALL_SHOPS");
    assert_eq!(body["shop_link_type"], "");
}

#[tokio::test]
async fn test_dispatcher_default_controller() {
    let body = json(get("/admin/index.php").await).await;

    assert_eq!(body["controller_name"], "AdminController");
    assert_eq!(body["class_name"], Value::Null);
    assert_eq!(body["id"], -1);
}

#[tokio::test]
async fn test_unknown_path() {
    let response = get("/admin/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
