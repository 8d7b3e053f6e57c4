//! 倉儲指標快照

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 倉儲指標快照
///
/// 純展示用的固定資料，與庫存、訂單、儲位集合之間沒有強制關聯。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseMetrics {
    /// 訂單總數
    pub total_orders: u32,

    /// 已處理訂單數
    pub orders_processed: u32,

    /// 已出貨訂單數
    pub orders_shipped: u32,

    /// 庫存總值
    pub inventory_value: Decimal,

    /// 低庫存品項數
    pub low_stock_items: u32,

    /// 倉容使用率（%）
    pub utilization_rate: Decimal,

    /// 揀貨效率（%）
    pub picking_efficiency: Decimal,

    /// 準時交貨率（%）
    pub on_time_delivery: Decimal,
}

impl WarehouseMetrics {
    /// 已處理訂單佔比（%）
    pub fn processed_ratio(&self) -> Decimal {
        ratio(self.orders_processed, self.total_orders)
    }

    /// 已出貨訂單佔比（%）
    pub fn shipped_ratio(&self) -> Decimal {
        ratio(self.orders_shipped, self.total_orders)
    }
}

fn ratio(part: u32, total: u32) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(total)
}
