//! 查詢層配置

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{SlotCoordinate, WmsError};

/// 衍生值與儲存值的取用策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataSourcePolicy {
    /// 以儲存值為準（訂單總額、儲位使用率）
    #[default]
    TrustStored,
    /// 由組成部分推導（明細加總、佔用/容量）
    DeriveFromParts,
}

/// 倉庫儲位網格尺寸
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    /// 區代碼
    pub zones: Vec<char>,

    /// 每區走道數
    pub aisles: u32,

    /// 每走道貨架數
    pub racks: u32,

    /// 每貨架層數
    pub shelves: u32,
}

impl GridLayout {
    /// 全倉儲位數上限
    pub const MAX_CELLS: usize = 100_000;

    /// 創建新的網格尺寸
    pub fn new(zones: Vec<char>, aisles: u32, racks: u32, shelves: u32) -> Self {
        Self {
            zones,
            aisles,
            racks,
            shelves,
        }
    }

    /// 每區的儲位數（溢位時飽和）
    pub fn cells_per_zone(&self) -> usize {
        self.checked_cells_per_zone().unwrap_or(usize::MAX)
    }

    /// 全倉儲位數（溢位時飽和）
    pub fn total_cells(&self) -> usize {
        self.checked_total_cells().unwrap_or(usize::MAX)
    }

    fn checked_cells_per_zone(&self) -> Option<usize> {
        usize::try_from(self.aisles)
            .ok()?
            .checked_mul(usize::try_from(self.racks).ok()?)?
            .checked_mul(usize::try_from(self.shelves).ok()?)
    }

    /// 全倉儲位數；溢位時回傳 `None`
    pub fn checked_total_cells(&self) -> Option<usize> {
        self.zones.len().checked_mul(self.checked_cells_per_zone()?)
    }

    /// 依「走道 → 貨架 → 層」順序列出某區的所有座標
    pub fn zone_coordinates(&self, zone: char) -> Vec<SlotCoordinate> {
        let mut coordinates = Vec::with_capacity(self.cells_per_zone().min(Self::MAX_CELLS));
        for aisle in 1..=self.aisles {
            for rack in 1..=self.racks {
                for shelf in 1..=self.shelves {
                    coordinates.push(SlotCoordinate::new(zone, aisle, rack, shelf));
                }
            }
        }
        coordinates
    }

    /// 檢查座標是否落在網格範圍內
    pub fn contains(&self, coordinate: &SlotCoordinate) -> bool {
        self.zones.contains(&coordinate.zone)
            && (1..=self.aisles).contains(&coordinate.aisle)
            && (1..=self.racks).contains(&coordinate.rack)
            && (1..=self.shelves).contains(&coordinate.shelf)
    }
}

impl Default for GridLayout {
    /// 5 區 × 4 走道 × 3 貨架 × 4 層
    fn default() -> Self {
        Self::new(vec!['A', 'B', 'C', 'D', 'E'], 4, 3, 4)
    }
}

/// 查詢層配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WmsConfig {
    /// 高庫存門檻（相對於最高庫存的比例）
    pub high_stock_ratio: Decimal,

    /// 儲位使用率允許的誤差（百分點）
    pub utilization_tolerance: Decimal,

    /// 模擬刷新的延遲（毫秒）
    pub refresh_delay_ms: u64,

    /// 衍生值與儲存值的取用策略
    pub data_source_policy: DataSourcePolicy,

    /// 儲位網格尺寸
    pub grid_layout: GridLayout,
}

impl WmsConfig {
    /// 預設高庫存門檻
    pub const DEFAULT_HIGH_STOCK_RATIO: Decimal = Decimal::from_parts(8, 0, 0, false, 1);

    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            high_stock_ratio: Self::DEFAULT_HIGH_STOCK_RATIO,
            utilization_tolerance: Decimal::ONE,
            refresh_delay_ms: 2000,
            data_source_policy: DataSourcePolicy::TrustStored,
            grid_layout: GridLayout::default(),
        }
    }

    /// 從 JSON 載入配置（缺少的欄位使用預設值）
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置高庫存門檻
    pub fn with_high_stock_ratio(mut self, ratio: Decimal) -> Self {
        self.high_stock_ratio = ratio;
        self
    }

    /// 建構器模式：設置使用率誤差
    pub fn with_utilization_tolerance(mut self, tolerance: Decimal) -> Self {
        self.utilization_tolerance = tolerance;
        self
    }

    /// 建構器模式：設置刷新延遲
    pub fn with_refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// 建構器模式：設置取用策略
    pub fn with_data_source_policy(mut self, policy: DataSourcePolicy) -> Self {
        self.data_source_policy = policy;
        self
    }

    /// 建構器模式：設置網格尺寸
    pub fn with_grid_layout(mut self, layout: GridLayout) -> Self {
        self.grid_layout = layout;
        self
    }

    /// 刷新延遲
    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    /// 驗證配置
    pub fn validate(&self) -> crate::Result<()> {
        if self.high_stock_ratio <= Decimal::ZERO || self.high_stock_ratio > Decimal::ONE {
            return Err(WmsError::InvalidConfig(format!(
                "高庫存門檻必須介於 0 與 1 之間: {}",
                self.high_stock_ratio
            )));
        }

        if self.utilization_tolerance < Decimal::ZERO {
            return Err(WmsError::InvalidConfig(format!(
                "使用率誤差不可為負: {}",
                self.utilization_tolerance
            )));
        }

        let layout = &self.grid_layout;
        if layout.zones.is_empty() || layout.aisles == 0 || layout.racks == 0 || layout.shelves == 0
        {
            return Err(WmsError::InvalidConfig("儲位網格尺寸不可為 0".to_string()));
        }

        match layout.checked_total_cells() {
            Some(cells) if cells <= GridLayout::MAX_CELLS => {}
            _ => {
                return Err(WmsError::InvalidConfig(format!(
                    "儲位網格過大: {} 區 × {} 走道 × {} 貨架 × {} 層，上限 {} 格",
                    layout.zones.len(),
                    layout.aisles,
                    layout.racks,
                    layout.shelves,
                    GridLayout::MAX_CELLS
                )));
            }
        }

        if let Some(zone) = layout.zones.iter().find(|z| !z.is_ascii_alphabetic()) {
            return Err(WmsError::InvalidConfig(format!("無效的區代碼: {}", zone)));
        }

        Ok(())
    }
}

impl Default for WmsConfig {
    fn default() -> Self {
        Self::new()
    }
}
