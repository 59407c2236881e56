mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use common::{MockPurchaseOrderService, send};
use inventory::{errors::PurchaseOrderError, handler::purchase_order_routes, model::PurchaseOrder};
use serde_json::json;
use std::sync::Arc;

const BODY: &str = r#"{
    "order_number": "PO-1",
    "order_date": "2024-02-01",
    "tracking_code": "TRK-1",
    "buyer_id": 1,
    "product_record_id": 2,
    "order_status_id": 1
}"#;

fn order(id: i32) -> PurchaseOrder {
    PurchaseOrder {
        id,
        order_number: format!("PO-{id}"),
        order_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        tracking_code: "TRK-1".into(),
        buyer_id: 1,
        product_record_id: 2,
        order_status_id: 1,
    }
}

#[tokio::test]
async fn create_returns_the_order() {
    let mock = Arc::new(MockPurchaseOrderService {
        save: Some(|value| {
            assert_eq!(value.order_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
            Ok(1)
        }),
        ..Default::default()
    });

    let res = send(
        purchase_order_routes(mock),
        "POST",
        "/api/v1/purchaseOrders",
        Some(BODY),
    )
    .await;

    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.json(), json!({ "data": order(1) }));
    assert_eq!(res.json()["data"]["order_date"], "2024-02-01");
}

#[tokio::test]
async fn malformed_order_date_is_a_bad_request() {
    let mock = Arc::new(MockPurchaseOrderService::default());
    let body = BODY.replace("2024-02-01", "01/02/2024");

    let res = send(
        purchase_order_routes(mock.clone()),
        "POST",
        "/api/v1/purchaseOrders",
        Some(&body),
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.json(),
        json!({ "error": "order_date must be in format YYYY-MM-DD" })
    );
    assert_eq!(mock.calls.count(), 0);
}

#[tokio::test]
async fn missing_fields_are_a_bad_request() {
    let mock = Arc::new(MockPurchaseOrderService::default());

    let res = send(
        purchase_order_routes(mock.clone()),
        "POST",
        "/api/v1/purchaseOrders",
        Some(r#"{"order_number": "PO-1", "tracking_code": "T"}"#),
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.json(),
        json!({ "error": "missing required fields: order_date, buyer_id, product_record_id, order_status_id" })
    );
}

#[tokio::test]
async fn unknown_references_are_conflicts() {
    let mock = Arc::new(MockPurchaseOrderService {
        save: Some(|_| Err(PurchaseOrderError::OrderStatusNotFound)),
        ..Default::default()
    });

    let res = send(
        purchase_order_routes(mock),
        "POST",
        "/api/v1/purchaseOrders",
        Some(BODY),
    )
    .await;

    assert_eq!(res.status, StatusCode::CONFLICT);
    assert_eq!(res.json(), json!({ "error": "order status not found" }));
}

#[tokio::test]
async fn put_merges_into_the_current_order() {
    let mock = Arc::new(MockPurchaseOrderService {
        find_by_id: Some(|id| Ok(order(id))),
        update: Some(|_| Ok(())),
        ..Default::default()
    });

    let res = send(
        purchase_order_routes(mock.clone()),
        "PUT",
        "/api/v1/purchaseOrders/3",
        Some(r#"{"tracking_code": "TRK-9"}"#),
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    let expected = PurchaseOrder {
        tracking_code: "TRK-9".into(),
        ..order(3)
    };
    assert_eq!(res.json(), json!({ "data": expected }));
}

#[tokio::test]
async fn get_unknown_order_is_404() {
    let mock = Arc::new(MockPurchaseOrderService {
        find_by_id: Some(|_| Err(PurchaseOrderError::NotFound)),
        ..Default::default()
    });

    let res = send(
        purchase_order_routes(mock),
        "GET",
        "/api/v1/purchaseOrders/3",
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json(), json!({ "error": "purchase order not found" }));
}

#[tokio::test]
async fn get_all_keeps_the_service_order() {
    let mock = Arc::new(MockPurchaseOrderService {
        find_all: Some(|| Ok(vec![order(2), order(1)])),
        ..Default::default()
    });

    let res = send(
        purchase_order_routes(mock.clone()),
        "GET",
        "/api/v1/purchaseOrders",
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!({ "data": [order(2), order(1)] }));
    assert_eq!(mock.calls.names(), vec!["find_all"]);
}

#[tokio::test]
async fn get_with_non_numeric_id_is_rejected() {
    let mock = Arc::new(MockPurchaseOrderService::default());

    let res = send(
        purchase_order_routes(mock.clone()),
        "GET",
        "/api/v1/purchaseOrders/abc",
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json(), json!({ "error": "invalid id" }));
    assert_eq!(mock.calls.count(), 0);
}
