//! 儲存值與衍生值的一致性
//!
//! 訂單總額與儲位使用率都是獨立儲存的欄位。看板以儲存值為準；
//! 這裡提供依策略取值，以及列出兩者不一致之處的檢查。

use rust_decimal::Decimal;
use wms_core::{DataSourcePolicy, LocationData, Order, WarehouseData, WmsConfig};

use crate::{ConsistencyReport, DataWarning, DataWarningKind};

/// 一致性檢查器
pub struct ConsistencyChecker;

impl ConsistencyChecker {
    /// 依策略取得訂單總額
    pub fn effective_order_total(order: &Order, policy: DataSourcePolicy) -> Decimal {
        match policy {
            DataSourcePolicy::TrustStored => order.total_value,
            DataSourcePolicy::DeriveFromParts => order.derived_total(),
        }
    }

    /// 依策略取得儲位使用率
    pub fn effective_utilization(location: &LocationData, policy: DataSourcePolicy) -> Decimal {
        match policy {
            DataSourcePolicy::TrustStored => location.utilization_rate,
            DataSourcePolicy::DeriveFromParts => location.derived_utilization(),
        }
    }

    /// 檢查整份資料集
    pub fn check(data: &WarehouseData, config: &WmsConfig) -> ConsistencyReport {
        tracing::info!(
            "開始一致性檢查：品項 {} 筆，訂單 {} 筆，儲位 {} 筆",
            data.inventory.len(),
            data.orders.len(),
            data.locations.len()
        );

        let mut report = ConsistencyReport::empty();

        for item in &data.inventory {
            if item.min_stock > item.max_stock {
                report.add_warning(DataWarning::new(
                    item.sku.clone(),
                    DataWarningKind::StockLimitsInverted,
                    format!("最低庫存 {} 高於最高庫存 {}", item.min_stock, item.max_stock),
                ));
            }
        }

        for order in &data.orders {
            Self::check_order(order, &mut report);
        }

        for location in &data.locations {
            Self::check_location(location, config.utilization_tolerance, &mut report);
        }

        for warning in &report.warnings {
            tracing::warn!("{}: {}", warning.subject, warning.message);
        }
        tracing::info!("一致性檢查完成，警告 {} 筆", report.warnings.len());

        report
    }

    fn check_order(order: &Order, report: &mut ConsistencyReport) {
        let derived = order.derived_total();
        if derived != order.total_value {
            report.add_warning(DataWarning::new(
                order.order_number.clone(),
                DataWarningKind::OrderTotalMismatch,
                format!("儲存總額 {} 與明細加總 {} 不符", order.total_value, derived),
            ));
        }

        for item in &order.items {
            if item.picked_quantity > item.quantity {
                report.add_warning(DataWarning::new(
                    format!("{}/{}", order.order_number, item.sku),
                    DataWarningKind::PickedExceedsOrdered,
                    format!("已揀 {} 超過訂購 {}", item.picked_quantity, item.quantity),
                ));
            }
        }
    }

    fn check_location(location: &LocationData, tolerance: Decimal, report: &mut ConsistencyReport) {
        let slot = location.slot_code();

        if location.occupied > location.capacity {
            report.add_warning(DataWarning::new(
                slot.clone(),
                DataWarningKind::OccupiedExceedsCapacity,
                format!("佔用 {} 超過容量 {}", location.occupied, location.capacity),
            ));
        }

        let derived = location.derived_utilization();
        let drift = location.utilization_rate.saturating_sub(derived).abs();
        if drift > tolerance {
            report.add_warning(DataWarning::new(
                slot,
                DataWarningKind::UtilizationDrift,
                format!(
                    "儲存使用率 {}% 與推導值 {}% 相差 {} 個百分點",
                    location.utilization_rate,
                    derived.round_dp(2),
                    drift.round_dp(2)
                ),
            ));
        }
    }
}
