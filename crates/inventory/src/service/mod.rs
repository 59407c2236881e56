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

#[cfg(test)]
mod testing;

pub use self::buyer::BuyerService;
pub use self::carry::CarryService;
pub use self::employee::EmployeeService;
pub use self::inbound_order::InboundOrderService;
pub use self::locality::LocalityService;
pub use self::product::ProductService;
pub use self::product_batch::ProductBatchService;
pub use self::product_record::ProductRecordService;
pub use self::purchase_order::PurchaseOrderService;
pub use self::section::SectionService;
pub use self::seller::SellerService;
pub use self::warehouse::WarehouseService;
