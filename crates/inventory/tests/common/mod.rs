#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use inventory::{
    abstract_trait::{
        buyer::BuyerServiceTrait, carry::CarryServiceTrait, employee::EmployeeServiceTrait,
        inbound_order::InboundOrderServiceTrait, locality::LocalityServiceTrait,
        product::ProductServiceTrait, product_batch::ProductBatchServiceTrait,
        product_record::ProductRecordServiceTrait, purchase_order::PurchaseOrderServiceTrait,
        section::SectionServiceTrait, seller::SellerServiceTrait, warehouse::WarehouseServiceTrait,
    },
    domain::response::report::{
        BuyerPurchaseOrdersReport, EmployeeInboundOrdersReport, LocalityCarriesReport,
        LocalitySellersReport, ProductRecordsReport, SectionProductsReport,
    },
    errors::{
        BuyerError, CarryError, EmployeeError, InboundOrderError, LocalityError, ProductBatchError,
        ProductError, ProductRecordError, PurchaseOrderError, SectionError, SellerError,
        WarehouseError,
    },
    model::{
        Buyer, Carry, Employee, InboundOrder, Locality, Product, ProductBatch, ProductRecord,
        PurchaseOrder, Section, Seller, Warehouse,
    },
};
use serde_json::Value;
use std::sync::Mutex;
use tower::ServiceExt;
use utoipa_axum::router::OpenApiRouter;

/// Names of the service methods a handler invoked, in call order.
#[derive(Default)]
pub struct Calls(Mutex<Vec<&'static str>>);

impl Calls {
    pub fn record(&self, name: &'static str) {
        self.0.lock().unwrap().push(name);
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is not UTF-8")
    }
}

pub async fn send(
    router: OpenApiRouter,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> TestResponse {
    let (router, _) = router.split_for_parts();

    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        body: body.to_vec(),
    }
}

#[derive(Default)]
pub struct MockProductService {
    pub calls: Calls,
    pub find_all: Option<fn() -> Result<Vec<Product>, ProductError>>,
    pub find_by_id: Option<fn(i32) -> Result<Product, ProductError>>,
    pub save: Option<fn(&Product) -> Result<i32, ProductError>>,
    pub update: Option<fn(&Product) -> Result<(), ProductError>>,
    pub delete: Option<fn(i32) -> Result<(), ProductError>>,
    pub report_records: Option<fn(Option<i32>) -> Result<Vec<ProductRecordsReport>, ProductError>>,
}

#[async_trait]
impl ProductServiceTrait for MockProductService {
    async fn find_all(&self) -> Result<Vec<Product>, ProductError> {
        self.calls.record("find_all");
        (self.find_all.expect("unexpected find_all"))()
    }

    async fn find_by_id(&self, id: i32) -> Result<Product, ProductError> {
        self.calls.record("find_by_id");
        (self.find_by_id.expect("unexpected find_by_id"))(id)
    }

    async fn save(&self, value: &Product) -> Result<i32, ProductError> {
        self.calls.record("save");
        (self.save.expect("unexpected save"))(value)
    }

    async fn update(&self, value: &Product) -> Result<(), ProductError> {
        self.calls.record("update");
        (self.update.expect("unexpected update"))(value)
    }

    async fn delete(&self, id: i32) -> Result<(), ProductError> {
        self.calls.record("delete");
        (self.delete.expect("unexpected delete"))(id)
    }

    async fn report_records(&self, id: Option<i32>) -> Result<Vec<ProductRecordsReport>, ProductError> {
        self.calls.record("report_records");
        (self.report_records.expect("unexpected report_records"))(id)
    }
}

#[derive(Default)]
pub struct MockProductRecordService {
    pub calls: Calls,
    pub find_all: Option<fn() -> Result<Vec<ProductRecord>, ProductRecordError>>,
    pub find_by_id: Option<fn(i32) -> Result<ProductRecord, ProductRecordError>>,
    pub save: Option<fn(&ProductRecord) -> Result<i32, ProductRecordError>>,
}

#[async_trait]
impl ProductRecordServiceTrait for MockProductRecordService {
    async fn find_all(&self) -> Result<Vec<ProductRecord>, ProductRecordError> {
        self.calls.record("find_all");
        (self.find_all.expect("unexpected find_all"))()
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductRecord, ProductRecordError> {
        self.calls.record("find_by_id");
        (self.find_by_id.expect("unexpected find_by_id"))(id)
    }

    async fn save(&self, value: &ProductRecord) -> Result<i32, ProductRecordError> {
        self.calls.record("save");
        (self.save.expect("unexpected save"))(value)
    }
}

#[derive(Default)]
pub struct MockSectionService {
    pub calls: Calls,
    pub find_all: Option<fn() -> Result<Vec<Section>, SectionError>>,
    pub find_by_id: Option<fn(i32) -> Result<Section, SectionError>>,
    pub save: Option<fn(&Section) -> Result<i32, SectionError>>,
    pub update: Option<fn(&Section) -> Result<(), SectionError>>,
    pub delete: Option<fn(i32) -> Result<(), SectionError>>,
    pub report_products: Option<fn(Option<i32>) -> Result<Vec<SectionProductsReport>, SectionError>>,
}

#[async_trait]
impl SectionServiceTrait for MockSectionService {
    async fn find_all(&self) -> Result<Vec<Section>, SectionError> {
        self.calls.record("find_all");
        (self.find_all.expect("unexpected find_all"))()
    }

    async fn find_by_id(&self, id: i32) -> Result<Section, SectionError> {
        self.calls.record("find_by_id");
        (self.find_by_id.expect("unexpected find_by_id"))(id)
    }

    async fn save(&self, value: &Section) -> Result<i32, SectionError> {
        self.calls.record("save");
        (self.save.expect("unexpected save"))(value)
    }

    async fn update(&self, value: &Section) -> Result<(), SectionError> {
        self.calls.record("update");
        (self.update.expect("unexpected update"))(value)
    }

    async fn delete(&self, id: i32) -> Result<(), SectionError> {
        self.calls.record("delete");
        (self.delete.expect("unexpected delete"))(id)
    }

    async fn report_products(&self, id: Option<i32>) -> Result<Vec<SectionProductsReport>, SectionError> {
        self.calls.record("report_products");
        (self.report_products.expect("unexpected report_products"))(id)
    }
}

#[derive(Default)]
pub struct MockProductBatchService {
    pub calls: Calls,
    pub find_all: Option<fn() -> Result<Vec<ProductBatch>, ProductBatchError>>,
    pub find_by_id: Option<fn(i32) -> Result<ProductBatch, ProductBatchError>>,
    pub save: Option<fn(&ProductBatch) -> Result<i32, ProductBatchError>>,
    pub update: Option<fn(&ProductBatch) -> Result<(), ProductBatchError>>,
    pub delete: Option<fn(i32) -> Result<(), ProductBatchError>>,
}

#[async_trait]
impl ProductBatchServiceTrait for MockProductBatchService {
    async fn find_all(&self) -> Result<Vec<ProductBatch>, ProductBatchError> {
        self.calls.record("find_all");
        (self.find_all.expect("unexpected find_all"))()
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductBatch, ProductBatchError> {
        self.calls.record("find_by_id");
        (self.find_by_id.expect("unexpected find_by_id"))(id)
    }

    async fn save(&self, value: &ProductBatch) -> Result<i32, ProductBatchError> {
        self.calls.record("save");
        (self.save.expect("unexpected save"))(value)
    }

    async fn update(&self, value: &ProductBatch) -> Result<(), ProductBatchError> {
        self.calls.record("update");
        (self.update.expect("unexpected update"))(value)
    }

    async fn delete(&self, id: i32) -> Result<(), ProductBatchError> {
        self.calls.record("delete");
        (self.delete.expect("unexpected delete"))(id)
    }
}

#[derive(Default)]
pub struct MockBuyerService {
    pub calls: Calls,
    pub find_all: Option<fn() -> Result<Vec<Buyer>, BuyerError>>,
    pub find_by_id: Option<fn(i32) -> Result<Buyer, BuyerError>>,
    pub save: Option<fn(&Buyer) -> Result<i32, BuyerError>>,
    pub update: Option<fn(&Buyer) -> Result<(), BuyerError>>,
    pub delete: Option<fn(i32) -> Result<(), BuyerError>>,
    pub report_purchase_orders: Option<fn(Option<i32>) -> Result<Vec<BuyerPurchaseOrdersReport>, BuyerError>>,
}

#[async_trait]
impl BuyerServiceTrait for MockBuyerService {
    async fn find_all(&self) -> Result<Vec<Buyer>, BuyerError> {
        self.calls.record("find_all");
        (self.find_all.expect("unexpected find_all"))()
    }

    async fn find_by_id(&self, id: i32) -> Result<Buyer, BuyerError> {
        self.calls.record("find_by_id");
        (self.find_by_id.expect("unexpected find_by_id"))(id)
    }

    async fn save(&self, value: &Buyer) -> Result<i32, BuyerError> {
        self.calls.record("save");
        (self.save.expect("unexpected save"))(value)
    }

    async fn update(&self, value: &Buyer) -> Result<(), BuyerError> {
        self.calls.record("update");
        (self.update.expect("unexpected update"))(value)
    }

    async fn delete(&self, id: i32) -> Result<(), BuyerError> {
        self.calls.record("delete");
        (self.delete.expect("unexpected delete"))(id)
    }

    async fn report_purchase_orders(&self, id: Option<i32>) -> Result<Vec<BuyerPurchaseOrdersReport>, BuyerError> {
        self.calls.record("report_purchase_orders");
        (self.report_purchase_orders.expect("unexpected report_purchase_orders"))(id)
    }
}

#[derive(Default)]
pub struct MockSellerService {
    pub calls: Calls,
    pub find_all: Option<fn() -> Result<Vec<Seller>, SellerError>>,
    pub find_by_id: Option<fn(i32) -> Result<Seller, SellerError>>,
    pub save: Option<fn(&Seller) -> Result<i32, SellerError>>,
    pub update: Option<fn(&Seller) -> Result<(), SellerError>>,
    pub delete: Option<fn(i32) -> Result<(), SellerError>>,
}

#[async_trait]
impl SellerServiceTrait for MockSellerService {
    async fn find_all(&self) -> Result<Vec<Seller>, SellerError> {
        self.calls.record("find_all");
        (self.find_all.expect("unexpected find_all"))()
    }

    async fn find_by_id(&self, id: i32) -> Result<Seller, SellerError> {
        self.calls.record("find_by_id");
        (self.find_by_id.expect("unexpected find_by_id"))(id)
    }

    async fn save(&self, value: &Seller) -> Result<i32, SellerError> {
        self.calls.record("save");
        (self.save.expect("unexpected save"))(value)
    }

    async fn update(&self, value: &Seller) -> Result<(), SellerError> {
        self.calls.record("update");
        (self.update.expect("unexpected update"))(value)
    }

    async fn delete(&self, id: i32) -> Result<(), SellerError> {
        self.calls.record("delete");
        (self.delete.expect("unexpected delete"))(id)
    }
}

#[derive(Default)]
pub struct MockEmployeeService {
    pub calls: Calls,
    pub find_all: Option<fn() -> Result<Vec<Employee>, EmployeeError>>,
    pub find_by_id: Option<fn(i32) -> Result<Employee, EmployeeError>>,
    pub save: Option<fn(&Employee) -> Result<i32, EmployeeError>>,
    pub update: Option<fn(&Employee) -> Result<(), EmployeeError>>,
    pub delete: Option<fn(i32) -> Result<(), EmployeeError>>,
    pub report_inbound_orders: Option<fn(Option<i32>) -> Result<Vec<EmployeeInboundOrdersReport>, EmployeeError>>,
}

#[async_trait]
impl EmployeeServiceTrait for MockEmployeeService {
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        self.calls.record("find_all");
        (self.find_all.expect("unexpected find_all"))()
    }

    async fn find_by_id(&self, id: i32) -> Result<Employee, EmployeeError> {
        self.calls.record("find_by_id");
        (self.find_by_id.expect("unexpected find_by_id"))(id)
    }

    async fn save(&self, value: &Employee) -> Result<i32, EmployeeError> {
        self.calls.record("save");
        (self.save.expect("unexpected save"))(value)
    }

    async fn update(&self, value: &Employee) -> Result<(), EmployeeError> {
        self.calls.record("update");
        (self.update.expect("unexpected update"))(value)
    }

    async fn delete(&self, id: i32) -> Result<(), EmployeeError> {
        self.calls.record("delete");
        (self.delete.expect("unexpected delete"))(id)
    }

    async fn report_inbound_orders(&self, id: Option<i32>) -> Result<Vec<EmployeeInboundOrdersReport>, EmployeeError> {
        self.calls.record("report_inbound_orders");
        (self.report_inbound_orders.expect("unexpected report_inbound_orders"))(id)
    }
}

#[derive(Default)]
pub struct MockWarehouseService {
    pub calls: Calls,
    pub find_all: Option<fn() -> Result<Vec<Warehouse>, WarehouseError>>,
    pub find_by_id: Option<fn(i32) -> Result<Warehouse, WarehouseError>>,
    pub save: Option<fn(&Warehouse) -> Result<i32, WarehouseError>>,
    pub update: Option<fn(&Warehouse) -> Result<(), WarehouseError>>,
    pub delete: Option<fn(i32) -> Result<(), WarehouseError>>,
}

#[async_trait]
impl WarehouseServiceTrait for MockWarehouseService {
    async fn find_all(&self) -> Result<Vec<Warehouse>, WarehouseError> {
        self.calls.record("find_all");
        (self.find_all.expect("unexpected find_all"))()
    }

    async fn find_by_id(&self, id: i32) -> Result<Warehouse, WarehouseError> {
        self.calls.record("find_by_id");
        (self.find_by_id.expect("unexpected find_by_id"))(id)
    }

    async fn save(&self, value: &Warehouse) -> Result<i32, WarehouseError> {
        self.calls.record("save");
        (self.save.expect("unexpected save"))(value)
    }

    async fn update(&self, value: &Warehouse) -> Result<(), WarehouseError> {
        self.calls.record("update");
        (self.update.expect("unexpected update"))(value)
    }

    async fn delete(&self, id: i32) -> Result<(), WarehouseError> {
        self.calls.record("delete");
        (self.delete.expect("unexpected delete"))(id)
    }
}

#[derive(Default)]
pub struct MockLocalityService {
    pub calls: Calls,
    pub find_all: Option<fn() -> Result<Vec<Locality>, LocalityError>>,
    pub find_by_id: Option<fn(i32) -> Result<Locality, LocalityError>>,
    pub save: Option<fn(&Locality) -> Result<i32, LocalityError>>,
    pub update: Option<fn(&Locality) -> Result<(), LocalityError>>,
    pub delete: Option<fn(i32) -> Result<(), LocalityError>>,
    pub report_sellers: Option<fn(Option<i32>) -> Result<Vec<LocalitySellersReport>, LocalityError>>,
}

#[async_trait]
impl LocalityServiceTrait for MockLocalityService {
    async fn find_all(&self) -> Result<Vec<Locality>, LocalityError> {
        self.calls.record("find_all");
        (self.find_all.expect("unexpected find_all"))()
    }

    async fn find_by_id(&self, id: i32) -> Result<Locality, LocalityError> {
        self.calls.record("find_by_id");
        (self.find_by_id.expect("unexpected find_by_id"))(id)
    }

    async fn save(&self, value: &Locality) -> Result<i32, LocalityError> {
        self.calls.record("save");
        (self.save.expect("unexpected save"))(value)
    }

    async fn update(&self, value: &Locality) -> Result<(), LocalityError> {
        self.calls.record("update");
        (self.update.expect("unexpected update"))(value)
    }

    async fn delete(&self, id: i32) -> Result<(), LocalityError> {
        self.calls.record("delete");
        (self.delete.expect("unexpected delete"))(id)
    }

    async fn report_sellers(&self, id: Option<i32>) -> Result<Vec<LocalitySellersReport>, LocalityError> {
        self.calls.record("report_sellers");
        (self.report_sellers.expect("unexpected report_sellers"))(id)
    }
}

#[derive(Default)]
pub struct MockCarryService {
    pub calls: Calls,
    pub find_all: Option<fn() -> Result<Vec<Carry>, CarryError>>,
    pub find_by_id: Option<fn(i32) -> Result<Carry, CarryError>>,
    pub save: Option<fn(&Carry) -> Result<i32, CarryError>>,
    pub update: Option<fn(&Carry) -> Result<(), CarryError>>,
    pub delete: Option<fn(i32) -> Result<(), CarryError>>,
    pub report_by_locality: Option<fn(Option<i32>) -> Result<Vec<LocalityCarriesReport>, CarryError>>,
}

#[async_trait]
impl CarryServiceTrait for MockCarryService {
    async fn find_all(&self) -> Result<Vec<Carry>, CarryError> {
        self.calls.record("find_all");
        (self.find_all.expect("unexpected find_all"))()
    }

    async fn find_by_id(&self, id: i32) -> Result<Carry, CarryError> {
        self.calls.record("find_by_id");
        (self.find_by_id.expect("unexpected find_by_id"))(id)
    }

    async fn save(&self, value: &Carry) -> Result<i32, CarryError> {
        self.calls.record("save");
        (self.save.expect("unexpected save"))(value)
    }

    async fn update(&self, value: &Carry) -> Result<(), CarryError> {
        self.calls.record("update");
        (self.update.expect("unexpected update"))(value)
    }

    async fn delete(&self, id: i32) -> Result<(), CarryError> {
        self.calls.record("delete");
        (self.delete.expect("unexpected delete"))(id)
    }

    async fn report_by_locality(&self, locality_id: Option<i32>) -> Result<Vec<LocalityCarriesReport>, CarryError> {
        self.calls.record("report_by_locality");
        (self.report_by_locality.expect("unexpected report_by_locality"))(locality_id)
    }
}

#[derive(Default)]
pub struct MockInboundOrderService {
    pub calls: Calls,
    pub find_all: Option<fn() -> Result<Vec<InboundOrder>, InboundOrderError>>,
    pub find_by_id: Option<fn(i32) -> Result<InboundOrder, InboundOrderError>>,
    pub save: Option<fn(&InboundOrder) -> Result<i32, InboundOrderError>>,
    pub update: Option<fn(&InboundOrder) -> Result<(), InboundOrderError>>,
    pub delete: Option<fn(i32) -> Result<(), InboundOrderError>>,
}

#[async_trait]
impl InboundOrderServiceTrait for MockInboundOrderService {
    async fn find_all(&self) -> Result<Vec<InboundOrder>, InboundOrderError> {
        self.calls.record("find_all");
        (self.find_all.expect("unexpected find_all"))()
    }

    async fn find_by_id(&self, id: i32) -> Result<InboundOrder, InboundOrderError> {
        self.calls.record("find_by_id");
        (self.find_by_id.expect("unexpected find_by_id"))(id)
    }

    async fn save(&self, value: &InboundOrder) -> Result<i32, InboundOrderError> {
        self.calls.record("save");
        (self.save.expect("unexpected save"))(value)
    }

    async fn update(&self, value: &InboundOrder) -> Result<(), InboundOrderError> {
        self.calls.record("update");
        (self.update.expect("unexpected update"))(value)
    }

    async fn delete(&self, id: i32) -> Result<(), InboundOrderError> {
        self.calls.record("delete");
        (self.delete.expect("unexpected delete"))(id)
    }
}

#[derive(Default)]
pub struct MockPurchaseOrderService {
    pub calls: Calls,
    pub find_all: Option<fn() -> Result<Vec<PurchaseOrder>, PurchaseOrderError>>,
    pub find_by_id: Option<fn(i32) -> Result<PurchaseOrder, PurchaseOrderError>>,
    pub save: Option<fn(&PurchaseOrder) -> Result<i32, PurchaseOrderError>>,
    pub update: Option<fn(&PurchaseOrder) -> Result<(), PurchaseOrderError>>,
    pub delete: Option<fn(i32) -> Result<(), PurchaseOrderError>>,
}

#[async_trait]
impl PurchaseOrderServiceTrait for MockPurchaseOrderService {
    async fn find_all(&self) -> Result<Vec<PurchaseOrder>, PurchaseOrderError> {
        self.calls.record("find_all");
        (self.find_all.expect("unexpected find_all"))()
    }

    async fn find_by_id(&self, id: i32) -> Result<PurchaseOrder, PurchaseOrderError> {
        self.calls.record("find_by_id");
        (self.find_by_id.expect("unexpected find_by_id"))(id)
    }

    async fn save(&self, value: &PurchaseOrder) -> Result<i32, PurchaseOrderError> {
        self.calls.record("save");
        (self.save.expect("unexpected save"))(value)
    }

    async fn update(&self, value: &PurchaseOrder) -> Result<(), PurchaseOrderError> {
        self.calls.record("update");
        (self.update.expect("unexpected update"))(value)
    }

    async fn delete(&self, id: i32) -> Result<(), PurchaseOrderError> {
        self.calls.record("delete");
        (self.delete.expect("unexpected delete"))(id)
    }
}
