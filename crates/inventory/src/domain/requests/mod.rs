mod buyer;
mod carry;
mod employee;
mod inbound_order;
mod locality;
mod product;
mod product_batch;
mod product_record;
mod purchase_order;
mod report;
mod section;
mod seller;
mod warehouse;

pub use self::buyer::{BUYER_FIELDS, BuyerRequest};
pub use self::carry::{CARRY_FIELDS, CarryRequest, INVALID_LOCALITY_ID};
pub use self::employee::{EMPLOYEE_FIELDS, EmployeeRequest};
pub use self::inbound_order::{INBOUND_ORDER_FIELDS, InboundOrderRequest};
pub use self::locality::{LOCALITY_FIELDS, LocalityRequest};
pub use self::product::{PRODUCT_FIELDS, ProductRequest};
pub use self::product_batch::{
    DUE_DATE_FORMAT, MANUFACTURING_DATE_FORMAT, PRODUCT_BATCH_FIELDS, ProductBatchRequest,
};
pub use self::product_record::{PRODUCT_RECORD_FIELDS, ProductRecordRequest};
pub use self::purchase_order::{ORDER_DATE_FORMAT, PURCHASE_ORDER_FIELDS, PurchaseOrderRequest};
pub use self::report::ReportQuery;
pub use self::section::{SECTION_FIELDS, SectionRequest};
pub use self::seller::{SELLER_FIELDS, SellerRequest};
pub use self::warehouse::{WAREHOUSE_FIELDS, WarehouseRequest};
