//! 指標快照

use wms_core::{WarehouseData, WarehouseMetrics};

/// 指標快照存取
pub struct MetricsSnapshot;

impl MetricsSnapshot {
    /// 取得固定的指標快照，不做任何計算
    pub fn get(data: &WarehouseData) -> &WarehouseMetrics {
        &data.metrics
    }
}
