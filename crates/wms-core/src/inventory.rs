//! 庫存品項模型

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 庫存品項
///
/// 載入後不可變；`min_stock <= max_stock` 不做強制檢查。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// 品項ID
    pub id: String,

    /// 料號
    pub sku: String,

    /// 品名
    pub name: String,

    /// 分類
    pub category: String,

    /// 現有庫存
    pub current_stock: u32,

    /// 最低庫存
    pub min_stock: u32,

    /// 最高庫存
    pub max_stock: u32,

    /// 儲位編碼（自由文字，如 `A-01-R1-S3`）
    pub location: String,

    /// 最後更新時間
    pub last_updated: NaiveDateTime,

    /// 單位成本
    pub unit_cost: Decimal,

    /// 供應商
    pub supplier: String,
}

impl InventoryItem {
    /// 創建新的庫存品項
    pub fn new(
        id: String,
        sku: String,
        name: String,
        category: String,
        current_stock: u32,
        unit_cost: Decimal,
        last_updated: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            sku,
            name,
            category,
            current_stock,
            min_stock: 0,
            max_stock: 0,
            location: String::new(),
            last_updated,
            unit_cost,
            supplier: String::new(),
        }
    }

    /// 建構器模式：設置庫存上下限
    pub fn with_stock_limits(mut self, min_stock: u32, max_stock: u32) -> Self {
        self.min_stock = min_stock;
        self.max_stock = max_stock;
        self
    }

    /// 建構器模式：設置儲位
    pub fn with_location(mut self, location: String) -> Self {
        self.location = location;
        self
    }

    /// 建構器模式：設置供應商
    pub fn with_supplier(mut self, supplier: String) -> Self {
        self.supplier = supplier;
        self
    }

    /// 庫存金額（現有庫存 × 單位成本，溢位時飽和）
    pub fn stock_value(&self) -> Decimal {
        Decimal::from(self.current_stock).saturating_mul(self.unit_cost)
    }

    /// 檢查是否處於低庫存（現有庫存 <= 最低庫存）
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.min_stock
    }
}
