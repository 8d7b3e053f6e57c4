//! 訂單模型

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::WmsError;

/// 訂單狀態
///
/// `Urgent` 不屬於正規流程狀態，但看板會以 `urgent` 作為狀態值顯示與篩選，
/// 因此保留為獨立的狀態標記。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// 待處理
    Pending,
    /// 處理中
    Processing,
    /// 揀貨中
    Picking,
    /// 已包裝
    Packed,
    /// 已出貨
    Shipped,
    /// 已送達
    Delivered,
    /// 緊急（看板使用的偽狀態）
    Urgent,
}

impl OrderStatus {
    /// 所有狀態（依流程順序）
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Picking,
        OrderStatus::Packed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Urgent,
    ];

    /// 狀態標記字串
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Picking => "picking",
            OrderStatus::Packed => "packed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Urgent => "urgent",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = WmsError;

    /// 大小寫敏感，只接受小寫標記
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| WmsError::UnknownStatus(s.to_string()))
    }
}

/// 訂單優先級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl OrderPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderPriority::Low => "low",
            OrderPriority::Medium => "medium",
            OrderPriority::High => "high",
            OrderPriority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for OrderPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OrderPriority {
    type Err = WmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(OrderPriority::Low),
            "medium" => Ok(OrderPriority::Medium),
            "high" => Ok(OrderPriority::High),
            "urgent" => Ok(OrderPriority::Urgent),
            other => Err(WmsError::UnknownPriority(other.to_string())),
        }
    }
}

/// 訂單明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// 料號
    pub sku: String,

    /// 品名
    pub name: String,

    /// 訂購數量
    pub quantity: u32,

    /// 已揀數量（預期不超過訂購數量，但不強制）
    pub picked_quantity: u32,

    /// 單價
    pub unit_price: Decimal,
}

impl OrderItem {
    /// 創建新的訂單明細
    pub fn new(sku: String, name: String, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            sku,
            name,
            quantity,
            picked_quantity: 0,
            unit_price,
        }
    }

    /// 建構器模式：設置已揀數量
    pub fn with_picked_quantity(mut self, picked_quantity: u32) -> Self {
        self.picked_quantity = picked_quantity;
        self
    }

    /// 明細金額（訂購數量 × 單價，溢位時飽和）
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.unit_price)
    }

    /// 檢查是否已揀齊
    pub fn is_fully_picked(&self) -> bool {
        self.picked_quantity >= self.quantity
    }
}

/// 訂單
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// 訂單ID
    pub id: String,

    /// 訂單編號
    pub order_number: String,

    /// 客戶
    pub customer: String,

    /// 狀態
    pub status: OrderStatus,

    /// 優先級
    pub priority: OrderPriority,

    /// 下單時間
    pub order_date: NaiveDateTime,

    /// 明細
    pub items: Vec<OrderItem>,

    /// 訂單總額（獨立儲存，不由明細推導）
    pub total_value: Decimal,
}

impl Order {
    /// 創建新的訂單
    pub fn new(
        id: String,
        order_number: String,
        customer: String,
        status: OrderStatus,
        priority: OrderPriority,
        order_date: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            order_number,
            customer,
            status,
            priority,
            order_date,
            items: Vec::new(),
            total_value: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置明細
    pub fn with_items(mut self, items: Vec<OrderItem>) -> Self {
        self.items = items;
        self
    }

    /// 建構器模式：設置儲存的訂單總額
    pub fn with_total_value(mut self, total_value: Decimal) -> Self {
        self.total_value = total_value;
        self
    }

    /// 由明細推導的訂單總額
    pub fn derived_total(&self) -> Decimal {
        self.items
            .iter()
            .map(OrderItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// 訂購總數量
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// 已揀總數量
    pub fn total_picked(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.picked_quantity))
            .sum()
    }
}
