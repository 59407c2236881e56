use crate::{
    abstract_trait::{
        buyer::DynBuyerService, carry::DynCarryService, employee::DynEmployeeService,
        inbound_order::DynInboundOrderService, locality::DynLocalityService,
        product::DynProductService, product_batch::DynProductBatchService,
        product_record::DynProductRecordService, purchase_order::DynPurchaseOrderService,
        reference::DynReferenceRepository, section::DynSectionService,
        seller::DynSellerService, warehouse::DynWarehouseService,
    },
    repository::{
        BuyerRepository, CarryRepository, EmployeeRepository, InboundOrderRepository,
        LocalityRepository, ProductBatchRepository, ProductRecordRepository, ProductRepository,
        PurchaseOrderRepository, ReferenceRepository, SectionRepository, SellerRepository,
        WarehouseRepository,
    },
    service::{
        BuyerService, CarryService, EmployeeService, InboundOrderService, LocalityService,
        ProductBatchService, ProductRecordService, ProductService, PurchaseOrderService,
        SectionService, SellerService, WarehouseService,
    },
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_service: DynProductService,
    pub product_record_service: DynProductRecordService,
    pub section_service: DynSectionService,
    pub product_batch_service: DynProductBatchService,
    pub buyer_service: DynBuyerService,
    pub seller_service: DynSellerService,
    pub employee_service: DynEmployeeService,
    pub warehouse_service: DynWarehouseService,
    pub locality_service: DynLocalityService,
    pub carry_service: DynCarryService,
    pub inbound_order_service: DynInboundOrderService,
    pub purchase_order_service: DynPurchaseOrderService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("services", &12)
            .finish_non_exhaustive()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let references: DynReferenceRepository = Arc::new(ReferenceRepository::new(pool.clone()));

        Self {
            product_service: Arc::new(ProductService::new(
                Arc::new(ProductRepository::new(pool.clone())),
                references.clone(),
            )),
            product_record_service: Arc::new(ProductRecordService::new(
                Arc::new(ProductRecordRepository::new(pool.clone())),
                references.clone(),
            )),
            section_service: Arc::new(SectionService::new(
                Arc::new(SectionRepository::new(pool.clone())),
                references.clone(),
            )),
            product_batch_service: Arc::new(ProductBatchService::new(
                Arc::new(ProductBatchRepository::new(pool.clone())),
                references.clone(),
            )),
            buyer_service: Arc::new(BuyerService::new(Arc::new(BuyerRepository::new(
                pool.clone(),
            )))),
            seller_service: Arc::new(SellerService::new(
                Arc::new(SellerRepository::new(pool.clone())),
                references.clone(),
            )),
            employee_service: Arc::new(EmployeeService::new(
                Arc::new(EmployeeRepository::new(pool.clone())),
                references.clone(),
            )),
            warehouse_service: Arc::new(WarehouseService::new(
                Arc::new(WarehouseRepository::new(pool.clone())),
                references.clone(),
            )),
            locality_service: Arc::new(LocalityService::new(Arc::new(LocalityRepository::new(
                pool.clone(),
            )))),
            carry_service: Arc::new(CarryService::new(
                Arc::new(CarryRepository::new(pool.clone())),
                references.clone(),
            )),
            inbound_order_service: Arc::new(InboundOrderService::new(
                Arc::new(InboundOrderRepository::new(pool.clone())),
                references.clone(),
            )),
            purchase_order_service: Arc::new(PurchaseOrderService::new(
                Arc::new(PurchaseOrderRepository::new(pool)),
                references,
            )),
        }
    }
}
