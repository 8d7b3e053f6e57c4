//! # WMS Query Layer
//!
//! 倉儲資料查詢引擎：所有查詢皆為純函式，不修改輸入集合。

pub mod consistency;
pub mod integration;
pub mod inventory;
pub mod location;
pub mod metrics;
pub mod orders;
pub mod refresh;

// Re-export 主要類型
pub use consistency::ConsistencyChecker;
pub use integration::IntegrationOverview;
pub use inventory::{
    InventoryQuery, InventoryQueryEngine, InventorySummary, SortKey, SortOrder, StockStatus,
};
pub use location::{GridCell, HeatBand, LocationGridResolver, UtilizationTier, ZoneGrid};
pub use metrics::MetricsSnapshot;
pub use orders::{OrderProgress, OrderQueryEngine, StatusFilter, DASHBOARD_STATUSES};
pub use refresh::{DataRefresher, RefreshReport};

/// 一致性檢查結果
#[derive(Debug, Clone, Default)]
pub struct ConsistencyReport {
    /// 警告信息
    pub warnings: Vec<DataWarning>,
}

impl ConsistencyReport {
    /// 創建空的檢查結果
    pub fn empty() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: DataWarning) {
        self.warnings.push(warning);
    }

    /// 檢查是否沒有任何警告
    pub fn is_consistent(&self) -> bool {
        self.warnings.is_empty()
    }

    /// 篩選指定類型的警告
    pub fn of_kind(&self, kind: DataWarningKind) -> impl Iterator<Item = &DataWarning> {
        self.warnings.iter().filter(move |warning| warning.kind == kind)
    }
}

/// 資料警告
#[derive(Debug, Clone)]
pub struct DataWarning {
    /// 對象（料號、訂單編號或儲位編碼）
    pub subject: String,
    pub kind: DataWarningKind,
    pub message: String,
}

impl DataWarning {
    pub fn new(subject: String, kind: DataWarningKind, message: String) -> Self {
        Self {
            subject,
            kind,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataWarningKind {
    /// 儲存的訂單總額與明細加總不符
    OrderTotalMismatch,
    /// 已揀數量超過訂購數量
    PickedExceedsOrdered,
    /// 儲存的使用率與佔用/容量推導值相差超過容許誤差
    UtilizationDrift,
    /// 佔用超過容量
    OccupiedExceedsCapacity,
    /// 最低庫存高於最高庫存
    StockLimitsInverted,
}
