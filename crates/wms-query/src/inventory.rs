//! 庫存查詢引擎
//!
//! 搜尋、排序、庫存分級與庫存金額彙總。

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use wms_core::{InventoryItem, WmsConfig, WmsError};

/// 排序欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// 品名
    #[default]
    Name,
    /// 料號
    Sku,
    /// 現有庫存
    CurrentStock,
    /// 單位成本
    UnitCost,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Sku => "sku",
            SortKey::CurrentStock => "currentStock",
            SortKey::UnitCost => "unitCost",
        }
    }

    /// 依欄位比較兩個品項（字串按字典序，數值按大小）
    pub fn compare(&self, a: &InventoryItem, b: &InventoryItem) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Sku => a.sku.cmp(&b.sku),
            SortKey::CurrentStock => a.current_stock.cmp(&b.current_stock),
            SortKey::UnitCost => a.unit_cost.cmp(&b.unit_cost),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = WmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "sku" => Ok(SortKey::Sku),
            "currentStock" => Ok(SortKey::CurrentStock),
            "unitCost" => Ok(SortKey::UnitCost),
            other => Err(WmsError::UnknownSortKey(other.to_string())),
        }
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// 切換排序方向
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// 套用方向到比較結果
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = WmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(WmsError::UnknownSortOrder(other.to_string())),
        }
    }
}

/// 庫存查詢參數
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryQuery {
    /// 搜尋字串（比對品名、料號、分類，不分大小寫）
    pub search_term: String,

    /// 排序欄位
    pub sort_key: SortKey,

    /// 排序方向
    pub sort_order: SortOrder,
}

impl InventoryQuery {
    /// 創建新的查詢參數
    pub fn new(search_term: impl Into<String>, sort_key: SortKey, sort_order: SortOrder) -> Self {
        Self {
            search_term: search_term.into(),
            sort_key,
            sort_order,
        }
    }
}

/// 庫存分級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    /// 低庫存
    Low,
    /// 高庫存
    High,
    /// 正常
    Normal,
}

/// 庫存摘要（看板上的三張摘要卡）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    /// 品項總數
    pub total_items: usize,

    /// 低庫存品項數
    pub low_stock_count: usize,

    /// 庫存總值
    pub total_value: Decimal,
}

/// 庫存查詢引擎
pub struct InventoryQueryEngine;

impl InventoryQueryEngine {
    /// 搜尋並排序
    ///
    /// 空字串符合全部品項；排序為穩定排序，相同鍵值保留原始順序。
    pub fn query<'a>(items: &'a [InventoryItem], query: &InventoryQuery) -> Vec<&'a InventoryItem> {
        let needle = query.search_term.to_lowercase();

        let mut results: Vec<&InventoryItem> = items
            .iter()
            .filter(|item| Self::matches(item, &needle))
            .collect();

        results.sort_by(|a, b| query.sort_order.apply(query.sort_key.compare(a, b)));

        tracing::debug!(
            "庫存查詢 {:?}：{} 筆中符合 {} 筆",
            query.search_term,
            items.len(),
            results.len()
        );

        results
    }

    /// 檢查品項是否符合搜尋字串（`needle` 需已轉小寫）
    fn matches(item: &InventoryItem, needle: &str) -> bool {
        needle.is_empty()
            || item.name.to_lowercase().contains(needle)
            || item.sku.to_lowercase().contains(needle)
            || item.category.to_lowercase().contains(needle)
    }

    /// 庫存分級（使用預設高庫存門檻 0.8）
    pub fn classify(item: &InventoryItem) -> StockStatus {
        Self::classify_with_ratio(item, WmsConfig::DEFAULT_HIGH_STOCK_RATIO)
    }

    /// 庫存分級
    ///
    /// 低庫存優先：即使同時達到高庫存門檻（最低庫存設得比門檻還高時），仍判定為低庫存。
    pub fn classify_with_ratio(item: &InventoryItem, high_stock_ratio: Decimal) -> StockStatus {
        if item.current_stock <= item.min_stock {
            StockStatus::Low
        } else if Decimal::from(item.current_stock)
            >= Decimal::from(item.max_stock) * high_stock_ratio
        {
            StockStatus::High
        } else {
            StockStatus::Normal
        }
    }

    /// 庫存總值（不受搜尋/排序影響，對全部品項加總）
    pub fn total_value(items: &[InventoryItem]) -> Decimal {
        items
            .iter()
            .map(InventoryItem::stock_value)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// 低庫存品項數
    pub fn low_stock_count(items: &[InventoryItem]) -> usize {
        items.iter().filter(|item| item.is_low_stock()).count()
    }

    /// 庫存摘要
    pub fn summary(items: &[InventoryItem]) -> InventorySummary {
        InventorySummary {
            total_items: items.len(),
            low_stock_count: Self::low_stock_count(items),
            total_value: Self::total_value(items),
        }
    }
}
