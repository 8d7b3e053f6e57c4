//! 儲位模型

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::WmsError;

/// 儲位座標（區 / 走道 / 貨架 / 層）
///
/// 走道、貨架、層皆為 1 起算的索引。編碼格式：
/// 走道為兩位補零數字，貨架為 `R<n>`，層為 `S<n>`，例如 `A-01-R1-S3`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotCoordinate {
    pub zone: char,
    pub aisle: u32,
    pub rack: u32,
    pub shelf: u32,
}

impl SlotCoordinate {
    /// 創建新的儲位座標
    pub fn new(zone: char, aisle: u32, rack: u32, shelf: u32) -> Self {
        Self {
            zone,
            aisle,
            rack,
            shelf,
        }
    }

    pub fn zone_code(&self) -> String {
        self.zone.to_string()
    }

    pub fn aisle_code(&self) -> String {
        format!("{:02}", self.aisle)
    }

    pub fn rack_code(&self) -> String {
        format!("R{}", self.rack)
    }

    pub fn shelf_code(&self) -> String {
        format!("S{}", self.shelf)
    }
}

impl fmt::Display for SlotCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}-R{}-S{}",
            self.zone, self.aisle, self.rack, self.shelf
        )
    }
}

impl FromStr for SlotCoordinate {
    type Err = WmsError;

    /// 只接受正規編碼（如 `A-01-R1-S3`），非正規寫法（`A-1-R1-S3`）視為無效
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WmsError::InvalidSlotCode(s.to_string());

        let parts: Vec<&str> = s.split('-').collect();
        let [zone, aisle, rack, shelf] = parts.as_slice() else {
            return Err(invalid());
        };

        let mut zone_chars = zone.chars();
        let zone = match (zone_chars.next(), zone_chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c,
            _ => return Err(invalid()),
        };

        let aisle = parse_index(aisle).ok_or_else(invalid)?;
        let rack = rack
            .strip_prefix('R')
            .and_then(parse_index)
            .ok_or_else(invalid)?;
        let shelf = shelf
            .strip_prefix('S')
            .and_then(parse_index)
            .ok_or_else(invalid)?;

        let coordinate = SlotCoordinate::new(zone, aisle, rack, shelf);
        if coordinate.to_string() != s {
            return Err(invalid());
        }

        Ok(coordinate)
    }
}

/// 解析 1 起算的索引
fn parse_index(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().filter(|&index| index >= 1)
}

/// 儲位佔用資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationData {
    /// 區（單一字母）
    pub zone: String,

    /// 走道（兩位補零）
    pub aisle: String,

    /// 貨架（`R<n>`）
    pub rack: String,

    /// 層（`S<n>`）
    pub shelf: String,

    /// 容量
    pub capacity: u32,

    /// 已佔用（預期不超過容量，但不強制）
    pub occupied: u32,

    /// 使用率（%），獨立儲存，不由佔用/容量推導
    pub utilization_rate: Decimal,
}

impl LocationData {
    /// 依座標創建儲位資料，使用率由佔用/容量推導
    pub fn new(coordinate: SlotCoordinate, capacity: u32, occupied: u32) -> Self {
        let mut location = Self {
            zone: coordinate.zone_code(),
            aisle: coordinate.aisle_code(),
            rack: coordinate.rack_code(),
            shelf: coordinate.shelf_code(),
            capacity,
            occupied,
            utilization_rate: Decimal::ZERO,
        };
        location.utilization_rate = location.derived_utilization();
        location
    }

    /// 建構器模式：覆寫儲存的使用率
    pub fn with_utilization_rate(mut self, utilization_rate: Decimal) -> Self {
        self.utilization_rate = utilization_rate;
        self
    }

    /// 檢查四個欄位是否與座標完全相符
    pub fn matches(&self, coordinate: &SlotCoordinate) -> bool {
        self.zone == coordinate.zone_code()
            && self.aisle == coordinate.aisle_code()
            && self.rack == coordinate.rack_code()
            && self.shelf == coordinate.shelf_code()
    }

    /// 儲位編碼（`區-走道-貨架-層`）
    pub fn slot_code(&self) -> String {
        format!("{}-{}-{}-{}", self.zone, self.aisle, self.rack, self.shelf)
    }

    /// 解析為座標
    pub fn coordinate(&self) -> crate::Result<SlotCoordinate> {
        self.slot_code().parse()
    }

    /// 由佔用/容量推導的使用率（%）；容量為 0 時回傳 0
    pub fn derived_utilization(&self) -> Decimal {
        if self.capacity == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.occupied) * Decimal::ONE_HUNDRED / Decimal::from(self.capacity)
    }

    /// 剩餘容量（超量佔用時為 0）
    pub fn free_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.occupied)
    }
}
