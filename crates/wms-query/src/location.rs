//! 儲位網格解析
//!
//! 座標對應到儲位資料，以及使用率的兩種分級：
//! 明細表使用的四級嚴重度，與熱圖使用的五級色階。兩者門檻不同，各自獨立。

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use wms_core::{DataSourcePolicy, GridLayout, InventoryItem, LocationData, SlotCoordinate};

use crate::ConsistencyChecker;

/// 使用率嚴重度（明細表）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationTier {
    /// < 50
    Optimal,
    /// 50 ~ 75
    Moderate,
    /// 75 ~ 90
    High,
    /// >= 90
    Critical,
}

/// 熱圖色階（五級）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatBand {
    /// < 25
    Sparse,
    /// 25 ~ 50
    Light,
    /// 50 ~ 75
    Medium,
    /// 75 ~ 90
    Dense,
    /// >= 90
    Saturated,
}

/// 網格中的單一儲位
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell<'a> {
    pub coordinate: SlotCoordinate,
    /// `None` 表示未配置的空儲位
    pub location: Option<&'a LocationData>,
    /// 依取用策略得到的使用率
    pub utilization_rate: Option<Decimal>,
}

impl GridCell<'_> {
    pub fn is_empty(&self) -> bool {
        self.location.is_none()
    }

    /// 熱圖色階；空儲位沒有色階
    pub fn heat_band(&self) -> Option<HeatBand> {
        self.utilization_rate.map(LocationGridResolver::heat_band)
    }
}

/// 單一區的網格
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneGrid<'a> {
    pub zone: char,
    /// 依「走道 → 貨架 → 層」順序排列
    pub cells: Vec<GridCell<'a>>,
}

impl ZoneGrid<'_> {
    /// 已配置的儲位數
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

/// 儲位網格解析器
pub struct LocationGridResolver;

impl LocationGridResolver {
    /// 依 1 起算的索引查找儲位，四個欄位必須完全相符
    pub fn resolve(
        locations: &[LocationData],
        zone: char,
        aisle: u32,
        rack: u32,
        shelf: u32,
    ) -> Option<&LocationData> {
        Self::resolve_coordinate(locations, &SlotCoordinate::new(zone, aisle, rack, shelf))
    }

    /// 依座標查找儲位
    pub fn resolve_coordinate<'a>(
        locations: &'a [LocationData],
        coordinate: &SlotCoordinate,
    ) -> Option<&'a LocationData> {
        locations.iter().find(|location| location.matches(coordinate))
    }

    /// 查找品項所在的儲位；儲位編碼無效或未配置時回傳 `None`
    pub fn locate_item<'a>(
        locations: &'a [LocationData],
        item: &InventoryItem,
    ) -> Option<&'a LocationData> {
        match item.location.parse::<SlotCoordinate>() {
            Ok(coordinate) => Self::resolve_coordinate(locations, &coordinate),
            Err(err) => {
                tracing::debug!("品項 {} 的儲位無法解析: {}", item.sku, err);
                None
            }
        }
    }

    /// 使用率嚴重度
    pub fn tier(rate: Decimal) -> UtilizationTier {
        if rate >= dec!(90) {
            UtilizationTier::Critical
        } else if rate >= dec!(75) {
            UtilizationTier::High
        } else if rate >= dec!(50) {
            UtilizationTier::Moderate
        } else {
            UtilizationTier::Optimal
        }
    }

    /// 熱圖色階
    pub fn heat_band(rate: Decimal) -> HeatBand {
        if rate >= dec!(90) {
            HeatBand::Saturated
        } else if rate >= dec!(75) {
            HeatBand::Dense
        } else if rate >= dec!(50) {
            HeatBand::Medium
        } else if rate >= dec!(25) {
            HeatBand::Light
        } else {
            HeatBand::Sparse
        }
    }

    /// 走訪整個網格（區 → 走道 → 貨架 → 層），使用率依 `policy` 取值
    pub fn grid<'a>(
        locations: &'a [LocationData],
        layout: &GridLayout,
        policy: DataSourcePolicy,
    ) -> Vec<ZoneGrid<'a>> {
        let grids: Vec<ZoneGrid<'a>> = layout
            .zones
            .iter()
            .map(|&zone| ZoneGrid {
                zone,
                cells: layout
                    .zone_coordinates(zone)
                    .into_iter()
                    .map(|coordinate| {
                        let location = Self::resolve_coordinate(locations, &coordinate);
                        GridCell {
                            coordinate,
                            location,
                            utilization_rate: location.map(|location| {
                                ConsistencyChecker::effective_utilization(location, policy)
                            }),
                        }
                    })
                    .collect(),
            })
            .collect();

        let occupied: usize = grids.iter().map(ZoneGrid::occupied_cells).sum();
        tracing::debug!(
            "儲位網格：{} 格中已配置 {} 格",
            layout.total_cells(),
            occupied
        );

        let outside = locations
            .iter()
            .filter(|location| {
                location
                    .coordinate()
                    .map_or(true, |coordinate| !layout.contains(&coordinate))
            })
            .count();
        if outside > 0 {
            tracing::warn!("{} 筆儲位資料落在網格範圍之外", outside);
        }

        grids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use wms_core::WarehouseData;

    #[test]
    fn test_resolve_existing() {
        let data = WarehouseData::fixture();

        let location = LocationGridResolver::resolve(&data.locations, 'B', 3, 2, 1).unwrap();
        assert_eq!(location.capacity, 120);
        assert_eq!(location.occupied, 45);
        assert!(std::ptr::eq(location, &data.locations[4]));

        let location = LocationGridResolver::resolve(&data.locations, 'E', 4, 1, 4).unwrap();
        assert_eq!(location.utilization_rate, dec!(26));
    }

    #[test]
    fn test_resolve_missing() {
        let data = WarehouseData::fixture();

        assert!(LocationGridResolver::resolve(&data.locations, 'A', 2, 2, 3).is_none());
        assert!(LocationGridResolver::resolve(&data.locations, 'A', 1, 1, 4).is_none());
        assert!(LocationGridResolver::resolve(&data.locations, 'F', 1, 1, 1).is_none());
        assert!(LocationGridResolver::resolve(&[], 'A', 1, 1, 1).is_none());
    }

    #[rstest]
    #[case(dec!(100), UtilizationTier::Critical)]
    #[case(dec!(90), UtilizationTier::Critical)]
    #[case(dec!(89.999), UtilizationTier::High)]
    #[case(dec!(75), UtilizationTier::High)]
    #[case(dec!(74.999), UtilizationTier::Moderate)]
    #[case(dec!(50), UtilizationTier::Moderate)]
    #[case(dec!(49.999), UtilizationTier::Optimal)]
    #[case(dec!(0), UtilizationTier::Optimal)]
    fn test_tier(#[case] rate: Decimal, #[case] expected: UtilizationTier) {
        assert_eq!(LocationGridResolver::tier(rate), expected);
    }

    #[rstest]
    #[case(dec!(90), HeatBand::Saturated)]
    #[case(dec!(89.9), HeatBand::Dense)]
    #[case(dec!(75), HeatBand::Dense)]
    #[case(dec!(74.999), HeatBand::Medium)]
    #[case(dec!(50), HeatBand::Medium)]
    #[case(dec!(49.999), HeatBand::Light)]
    #[case(dec!(25), HeatBand::Light)]
    #[case(dec!(24.9), HeatBand::Sparse)]
    #[case(dec!(0), HeatBand::Sparse)]
    fn test_heat_band(#[case] rate: Decimal, #[case] expected: HeatBand) {
        assert_eq!(LocationGridResolver::heat_band(rate), expected);
    }

    #[test]
    fn test_tier_and_band_diverge_below_fifty() {
        // 嚴重度在 50 以下只有一級，熱圖則再分兩級
        assert_eq!(LocationGridResolver::tier(dec!(30)), UtilizationTier::Optimal);
        assert_eq!(LocationGridResolver::tier(dec!(10)), UtilizationTier::Optimal);
        assert_eq!(LocationGridResolver::heat_band(dec!(30)), HeatBand::Light);
        assert_eq!(LocationGridResolver::heat_band(dec!(10)), HeatBand::Sparse);
    }

    #[test]
    fn test_locate_item() {
        let data = WarehouseData::fixture();

        // WDG-001 位於 A-01-R1-S3
        let location =
            LocationGridResolver::locate_item(&data.locations, &data.inventory[0]).unwrap();
        assert_eq!(location.slot_code(), "A-01-R1-S3");

        let mut item = data.inventory[0].clone();
        item.location = "Dock 4".to_string();
        assert!(LocationGridResolver::locate_item(&data.locations, &item).is_none());
    }

    #[test]
    fn test_full_grid() {
        let data = WarehouseData::fixture();
        let grids = LocationGridResolver::grid(
            &data.locations,
            &GridLayout::default(),
            DataSourcePolicy::TrustStored,
        );

        assert_eq!(grids.len(), 5);
        assert!(grids.iter().all(|grid| grid.cells.len() == 48));

        let total: usize = grids.iter().map(|grid| grid.cells.len()).sum();
        assert_eq!(total, 240);

        let occupied: Vec<usize> = grids.iter().map(ZoneGrid::occupied_cells).collect();
        assert_eq!(occupied, vec![3, 2, 1, 1, 1]);

        // A 區第一格為 A-01-R1-S1（85%）
        let first = grids[0].cells[0];
        assert_eq!(first.coordinate.to_string(), "A-01-R1-S1");
        assert_eq!(first.heat_band(), Some(HeatBand::Dense));

        let empty = grids[0].cells[47];
        assert!(empty.is_empty());
        assert_eq!(empty.heat_band(), None);
    }

    #[test]
    fn test_grid_applies_policy() {
        let mut data = WarehouseData::fixture();
        data.locations[0].occupied = 90;

        let stored = LocationGridResolver::grid(
            &data.locations,
            &GridLayout::default(),
            DataSourcePolicy::TrustStored,
        );
        assert_eq!(stored[0].cells[0].utilization_rate, Some(dec!(85)));
        assert_eq!(stored[0].cells[0].heat_band(), Some(HeatBand::Dense));

        let derived = LocationGridResolver::grid(
            &data.locations,
            &GridLayout::default(),
            DataSourcePolicy::DeriveFromParts,
        );
        assert_eq!(derived[0].cells[0].utilization_rate, Some(dec!(90)));
        assert_eq!(derived[0].cells[0].heat_band(), Some(HeatBand::Saturated));
    }
}
