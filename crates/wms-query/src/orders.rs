//! 訂單查詢引擎

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use wms_core::{Order, OrderPriority, OrderStatus, WmsError};

/// 看板篩選列上的狀態按鈕（依顯示順序）
pub const DASHBOARD_STATUSES: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Processing,
    OrderStatus::Packed,
    OrderStatus::Shipped,
    OrderStatus::Urgent,
];

/// 狀態篩選條件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// 全部訂單
    #[default]
    All,
    /// 指定狀態
    Status(OrderStatus),
}

impl StatusFilter {
    /// 檢查訂單是否符合
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Status(status) => order.status == *status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Status(status) => fmt::Display::fmt(status, f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = WmsError;

    /// `all` 或狀態標記（大小寫敏感）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Status)
    }
}

/// 訂單查詢引擎
pub struct OrderQueryEngine;

impl OrderQueryEngine {
    /// 依狀態篩選，保留原始順序
    pub fn filter_by_status<'a>(orders: &'a [Order], filter: StatusFilter) -> Vec<&'a Order> {
        let results: Vec<&Order> = orders.iter().filter(|order| filter.matches(order)).collect();

        tracing::debug!(
            "訂單狀態篩選 {}：{} 筆中符合 {} 筆",
            filter,
            orders.len(),
            results.len()
        );

        results
    }

    /// 依優先級篩選（與狀態篩選各自獨立，`urgent` 不合併）
    pub fn filter_by_priority(orders: &[Order], priority: OrderPriority) -> Vec<&Order> {
        orders
            .iter()
            .filter(|order| order.priority == priority)
            .collect()
    }

    /// 揀貨進度（%）：已揀總數 / 訂購總數 × 100
    ///
    /// 訂購總數為 0（含無明細）時回傳 0，不產生除以零。
    pub fn progress(order: &Order) -> Decimal {
        let total = order.total_quantity();
        if total == 0 {
            tracing::debug!("訂單 {} 訂購總數為 0，進度以 0 計", order.order_number);
            return Decimal::ZERO;
        }

        Decimal::from(order.total_picked()) * Decimal::ONE_HUNDRED / Decimal::from(total)
    }

    /// 各狀態的訂單數
    pub fn status_counts(orders: &[Order]) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for order in orders {
            *counts.entry(order.status.to_string()).or_insert(0) += 1;
        }
        counts
    }
}

/// 單筆訂單的進度摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProgress {
    pub order_number: String,
    pub status: OrderStatus,
    pub priority: OrderPriority,
    pub picked: u64,
    pub ordered: u64,
    pub percent: Decimal,
}

impl OrderProgress {
    pub fn of(order: &Order) -> Self {
        Self {
            order_number: order.order_number.clone(),
            status: order.status,
            priority: order.priority,
            picked: order.total_picked(),
            ordered: order.total_quantity(),
            percent: OrderQueryEngine::progress(order),
        }
    }

    /// 檢查是否已全部揀齊
    pub fn is_complete(&self) -> bool {
        self.ordered > 0 && self.picked >= self.ordered
    }
}
