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

pub use self::buyer::Buyer;
pub use self::carry::Carry;
pub use self::employee::Employee;
pub use self::inbound_order::InboundOrder;
pub use self::locality::Locality;
pub use self::product::Product;
pub use self::product_batch::ProductBatch;
pub use self::product_record::ProductRecord;
pub use self::purchase_order::PurchaseOrder;
pub use self::section::Section;
pub use self::seller::Seller;
pub use self::warehouse::Warehouse;
