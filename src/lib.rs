//! # WMS
//!
//! 倉儲看板的資料查詢層

pub mod logging;
pub mod warehouse;

pub use warehouse::Warehouse;
pub use wms_core;
pub use wms_query;
