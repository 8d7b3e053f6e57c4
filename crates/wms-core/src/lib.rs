//! # WMS Core
//!
//! 倉儲資料模型、配置與固定資料集

pub mod config;
pub mod fixture;
pub mod integration;
pub mod inventory;
pub mod location;
pub mod metrics;
pub mod order;

// Re-export 主要類型
pub use config::{DataSourcePolicy, GridLayout, WmsConfig};
pub use fixture::WarehouseData;
pub use integration::{ConnectionStatus, IntegrationSource};
pub use inventory::InventoryItem;
pub use location::{LocationData, SlotCoordinate};
pub use metrics::WarehouseMetrics;
pub use order::{Order, OrderItem, OrderPriority, OrderStatus};

/// WMS 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum WmsError {
    #[error("未知的訂單狀態: {0}")]
    UnknownStatus(String),

    #[error("未知的訂單優先級: {0}")]
    UnknownPriority(String),

    #[error("未知的排序欄位: {0}")]
    UnknownSortKey(String),

    #[error("未知的排序方向: {0}")]
    UnknownSortOrder(String),

    #[error("無效的儲位編碼: {0}")]
    InvalidSlotCode(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("資料刷新進行中")]
    RefreshInProgress,

    #[error("資料解析錯誤: {0}")]
    Deserialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WmsError>;
