pub mod a101_transport_trip;
pub mod a102_stock_item;
pub mod a103_quality_test;
pub mod a104_purchase_book;
pub mod a105_warehouse_document;
pub mod common;
