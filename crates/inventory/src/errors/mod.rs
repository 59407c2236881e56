mod buyer;
mod carry;
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

pub use self::buyer::BuyerError;
pub use self::carry::CarryError;
pub use self::employee::EmployeeError;
pub use self::inbound_order::InboundOrderError;
pub use self::locality::LocalityError;
pub use self::product::ProductError;
pub use self::product_batch::ProductBatchError;
pub use self::product_record::ProductRecordError;
pub use self::purchase_order::PurchaseOrderError;
pub use self::section::SectionError;
pub use self::seller::SellerError;
pub use self::warehouse::WarehouseError;
