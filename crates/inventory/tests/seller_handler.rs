mod common;

use axum::http::StatusCode;
use common::{MockSellerService, send};
use inventory::{errors::SellerError, handler::seller_routes, model::Seller};
use serde_json::json;
use std::sync::Arc;

const BODY: &str = r#"{
    "cid": 7,
    "company_name": "Acme",
    "address": "Main 1",
    "telephone": "555-0101",
    "locality_id": 3
}"#;

fn seller(id: i32) -> Seller {
    Seller {
        id,
        cid: 7,
        company_name: "Acme".into(),
        address: "Main 1".into(),
        telephone: "555-0101".into(),
        locality_id: 3,
    }
}

#[tokio::test]
async fn create_returns_seller() {
    let mock = Arc::new(MockSellerService {
        save: Some(|_| Ok(11)),
        ..Default::default()
    });

    let res = send(seller_routes(mock), "POST", "/api/v1/sellers", Some(BODY)).await;

    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.json(), json!({ "data": seller(11) }));
}

#[tokio::test]
async fn unknown_locality_is_a_coded_conflict() {
    let mock = Arc::new(MockSellerService {
        save: Some(|_| Err(SellerError::LocalityNotFound)),
        ..Default::default()
    });

    let res = send(seller_routes(mock), "POST", "/api/v1/sellers", Some(BODY)).await;

    assert_eq!(res.status, StatusCode::CONFLICT);
    assert_eq!(
        res.json(),
        json!({ "code": "conflict", "message": "locality not found" })
    );
}

#[tokio::test]
async fn zero_cid_is_unprocessable() {
    let mock = Arc::new(MockSellerService::default());
    let body = BODY.replace(r#""cid": 7"#, r#""cid": 0"#);

    let res = send(seller_routes(mock.clone()), "POST", "/api/v1/sellers", Some(&body)).await;

    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        res.json(),
        json!({ "code": "unprocessable_entity", "message": "cid must be greater than 0" })
    );
    assert_eq!(mock.calls.count(), 0);
}

#[tokio::test]
async fn missing_fields_are_listed() {
    let mock = Arc::new(MockSellerService::default());

    let res = send(
        seller_routes(mock.clone()),
        "POST",
        "/api/v1/sellers",
        Some(r#"{"cid": 7, "company_name": "Acme"}"#),
    )
    .await;

    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        res.json(),
        json!({
            "code": "unprocessable_entity",
            "message": "missing required fields: address, telephone, locality_id"
        })
    );
}

#[tokio::test]
async fn patch_changes_only_the_telephone() {
    let mock = Arc::new(MockSellerService {
        find_by_id: Some(|id| Ok(seller(id))),
        update: Some(|_| Ok(())),
        ..Default::default()
    });

    let res = send(
        seller_routes(mock.clone()),
        "PATCH",
        "/api/v1/sellers/4",
        Some(r#"{"telephone": "555-0199"}"#),
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    let expected = Seller {
        telephone: "555-0199".into(),
        ..seller(4)
    };
    assert_eq!(res.json(), json!({ "data": expected }));
}

#[tokio::test]
async fn delete_unknown_seller_is_404() {
    let mock = Arc::new(MockSellerService {
        delete: Some(|_| Err(SellerError::NotFound)),
        ..Default::default()
    });

    let res = send(seller_routes(mock), "DELETE", "/api/v1/sellers/4", None).await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(
        res.json(),
        json!({ "code": "not_found", "message": "seller not found" })
    );
}

#[tokio::test]
async fn listing_is_wrapped_in_data() {
    let mock = Arc::new(MockSellerService {
        find_all: Some(|| Ok(vec![seller(1)])),
        ..Default::default()
    });

    let res = send(seller_routes(mock), "GET", "/api/v1/sellers", None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!({ "data": [seller(1)] }));
}

#[tokio::test]
async fn get_all_keeps_the_service_order() {
    let mock = Arc::new(MockSellerService {
        find_all: Some(|| Ok(vec![seller(2), seller(1)])),
        ..Default::default()
    });

    let res = send(seller_routes(mock.clone()), "GET", "/api/v1/sellers", None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!({ "data": [seller(2), seller(1)] }));
    assert_eq!(mock.calls.names(), vec!["find_all"]);
}

#[tokio::test]
async fn get_with_non_numeric_id_is_rejected() {
    let mock = Arc::new(MockSellerService::default());

    let res = send(seller_routes(mock.clone()), "GET", "/api/v1/sellers/abc", None).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.json(),
        json!({ "code": "bad_request", "message": "invalid id" })
    );
    assert_eq!(mock.calls.count(), 0);
}

#[tokio::test]
async fn get_unknown_seller_is_404() {
    let mock = Arc::new(MockSellerService {
        find_by_id: Some(|_| Err(SellerError::NotFound)),
        ..Default::default()
    });

    let res = send(seller_routes(mock.clone()), "GET", "/api/v1/sellers/9", None).await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(
        res.json(),
        json!({ "code": "not_found", "message": "seller not found" })
    );
    assert_eq!(mock.calls.names(), vec!["find_by_id"]);
}
