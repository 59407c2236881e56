mod buyer;
mod carry;
mod common;
mod employee;
mod inbound_order;
mod locality;
mod product;
mod product_batch;
mod product_record;
mod purchase_order;
mod section;
mod seller;
mod warehouse;

use crate::{middleware::track_metrics, state::AppState};
use anyhow::Result;
use axum::{
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::buyer::buyer_routes;
pub use self::carry::carry_routes;
pub use self::common::INVALID_ID;
pub use self::employee::employee_routes;
pub use self::inbound_order::inbound_order_routes;
pub use self::locality::locality_routes;
pub use self::product::product_routes;
pub use self::product_batch::product_batch_routes;
pub use self::product_record::product_record_routes;
pub use self::purchase_order::purchase_order_routes;
pub use self::section::section_routes;
pub use self::seller::seller_routes;
pub use self::warehouse::warehouse_routes;

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,
        product::report_records,

        product_record::get_product_records,
        product_record::get_product_record,
        product_record::create_product_record,

        section::get_sections,
        section::get_section,
        section::create_section,
        section::update_section,
        section::delete_section,
        section::report_products,

        product_batch::get_product_batches,
        product_batch::get_product_batch,
        product_batch::create_product_batch,
        product_batch::update_product_batch,
        product_batch::delete_product_batch,

        buyer::get_buyers,
        buyer::get_buyer,
        buyer::create_buyer,
        buyer::update_buyer,
        buyer::delete_buyer,
        buyer::report_purchase_orders,

        seller::get_sellers,
        seller::get_seller,
        seller::create_seller,
        seller::update_seller,
        seller::delete_seller,

        employee::get_employees,
        employee::get_employee,
        employee::create_employee,
        employee::update_employee,
        employee::delete_employee,
        employee::report_inbound_orders,

        warehouse::get_warehouses,
        warehouse::get_warehouse,
        warehouse::create_warehouse,
        warehouse::update_warehouse,
        warehouse::delete_warehouse,

        locality::get_localities,
        locality::get_locality,
        locality::create_locality,
        locality::update_locality,
        locality::delete_locality,
        locality::report_sellers,

        carry::get_carries,
        carry::get_carry,
        carry::create_carry,
        carry::update_carry,
        carry::delete_carry,
        carry::report_carries,

        inbound_order::get_inbound_orders,
        inbound_order::get_inbound_order,
        inbound_order::create_inbound_order,
        inbound_order::update_inbound_order,
        inbound_order::delete_inbound_order,

        purchase_order::get_purchase_orders,
        purchase_order::get_purchase_order,
        purchase_order::create_purchase_order,
        purchase_order::update_purchase_order,
        purchase_order::delete_purchase_order,
    ),
    tags(
        (name = "Product", description = "Product endpoints"),
        (name = "ProductRecord", description = "Product price history endpoints"),
        (name = "Section", description = "Section endpoints"),
        (name = "ProductBatch", description = "Product batch endpoints"),
        (name = "Buyer", description = "Buyer endpoints"),
        (name = "Seller", description = "Seller endpoints"),
        (name = "Employee", description = "Employee endpoints"),
        (name = "Warehouse", description = "Warehouse endpoints"),
        (name = "Locality", description = "Locality endpoints"),
        (name = "Carry", description = "Carry endpoints"),
        (name = "InboundOrder", description = "Inbound order endpoints"),
        (name = "PurchaseOrder", description = "Purchase order endpoints"),
    )
)]
struct ApiDoc;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let mut buffer = String::new();

    if let Err(e) = encode(&mut buffer, &state.registry) {
        error!("❌ Failed to encode metrics: {e}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}

pub struct AppRouter;

impl AppRouter {
    /// Every entity router plus `/metrics`, without docs or transport layers.
    pub fn api(state: Arc<AppState>) -> OpenApiRouter {
        let services = &state.di_container;

        OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(state.clone())
            .merge(product_routes(services.product_service.clone()))
            .merge(product_record_routes(services.product_record_service.clone()))
            .merge(section_routes(services.section_service.clone()))
            .merge(product_batch_routes(services.product_batch_service.clone()))
            .merge(buyer_routes(services.buyer_service.clone()))
            .merge(seller_routes(services.seller_service.clone()))
            .merge(employee_routes(services.employee_service.clone()))
            .merge(warehouse_routes(services.warehouse_service.clone()))
            .merge(locality_routes(services.locality_service.clone()))
            .merge(carry_routes(services.carry_service.clone()))
            .merge(inbound_order_routes(services.inbound_order_service.clone()))
            .merge(purchase_order_routes(services.purchase_order_service.clone()))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);
        let metrics = shared_state.metrics.clone();

        let router_with_layers = Self::api(shared_state)
            .layer(middleware::from_fn_with_state(metrics, track_metrics))
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
