mod buyer;
mod carry;
mod employee;
mod inbound_order;
mod locality;
mod product;
mod product_batch;
mod product_record;
mod purchase_order;
mod reference;
mod section;
mod seller;
mod warehouse;

pub use self::buyer::BuyerRepository;
pub use self::carry::CarryRepository;
pub use self::employee::EmployeeRepository;
pub use self::inbound_order::InboundOrderRepository;
pub use self::locality::LocalityRepository;
pub use self::product::ProductRepository;
pub use self::product_batch::ProductBatchRepository;
pub use self::product_record::ProductRecordRepository;
pub use self::purchase_order::PurchaseOrderRepository;
pub use self::reference::ReferenceRepository;
pub use self::section::SectionRepository;
pub use self::seller::SellerRepository;
pub use self::warehouse::WarehouseRepository;
