//! 固定資料集
//!
//! 程式啟動時建立，之後不再變動。

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{
    ConnectionStatus, IntegrationSource, InventoryItem, LocationData, Order, OrderItem,
    OrderPriority, OrderStatus, SlotCoordinate, WarehouseMetrics,
};

/// 倉儲資料集
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseData {
    /// 庫存品項
    pub inventory: Vec<InventoryItem>,

    /// 訂單
    pub orders: Vec<Order>,

    /// 儲位
    pub locations: Vec<LocationData>,

    /// 指標快照
    pub metrics: WarehouseMetrics,

    /// 整合來源
    #[serde(default)]
    pub integration_sources: Vec<IntegrationSource>,
}

impl WarehouseData {
    /// 從 JSON 載入替代資料集（結構與固定資料集相同）
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 內建的固定資料集
    pub fn fixture() -> Self {
        Self {
            inventory: fixture_inventory(),
            orders: fixture_orders(),
            locations: fixture_locations(),
            metrics: fixture_metrics(),
            integration_sources: fixture_integration_sources(),
        }
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("固定資料日期無效")
}

fn fixture_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new(
            "1".to_string(),
            "WDG-001".to_string(),
            "Premium Widget A".to_string(),
            "Widgets".to_string(),
            450,
            dec!(12.50),
            at(2025, 1, 15, 10, 30),
        )
        .with_stock_limits(100, 1000)
        .with_location("A-01-R1-S3".to_string())
        .with_supplier("TechCorp Industries".to_string()),
        InventoryItem::new(
            "2".to_string(),
            "GDG-002".to_string(),
            "Standard Gadget B".to_string(),
            "Gadgets".to_string(),
            85,
            dec!(8.75),
            at(2025, 1, 15, 9, 15),
        )
        .with_stock_limits(150, 800)
        .with_location("B-03-R2-S1".to_string())
        .with_supplier("Global Supplies".to_string()),
        InventoryItem::new(
            "3".to_string(),
            "TOL-003".to_string(),
            "Professional Tool C".to_string(),
            "Tools".to_string(),
            230,
            dec!(25.00),
            at(2025, 1, 15, 11, 45),
        )
        .with_stock_limits(50, 500)
        .with_location("C-02-R1-S2".to_string())
        .with_supplier("ProTech Solutions".to_string()),
        InventoryItem::new(
            "4".to_string(),
            "ELC-004".to_string(),
            "Electronic Component D".to_string(),
            "Electronics".to_string(),
            1250,
            dec!(5.25),
            at(2025, 1, 15, 8, 20),
        )
        .with_stock_limits(200, 2000)
        .with_location("D-01-R3-S1".to_string())
        .with_supplier("ElectroMax".to_string()),
        InventoryItem::new(
            "5".to_string(),
            "MAT-005".to_string(),
            "Raw Material E".to_string(),
            "Materials".to_string(),
            45,
            dec!(15.80),
            at(2025, 1, 15, 7, 30),
        )
        .with_stock_limits(100, 600)
        .with_location("E-04-R1-S4".to_string())
        .with_supplier("MaterialCorp".to_string()),
    ]
}

fn fixture_orders() -> Vec<Order> {
    let line = |sku: &str, name: &str, quantity: u32, picked: u32, price| {
        OrderItem::new(sku.to_string(), name.to_string(), quantity, price)
            .with_picked_quantity(picked)
    };

    vec![
        Order::new(
            "1".to_string(),
            "ORD-2025-001".to_string(),
            "Alpha Manufacturing".to_string(),
            OrderStatus::Processing,
            OrderPriority::High,
            at(2025, 1, 15, 9, 0),
        )
        .with_items(vec![
            line("WDG-001", "Premium Widget A", 50, 35, dec!(15.00)),
            line("TOL-003", "Professional Tool C", 20, 20, dec!(30.00)),
        ])
        .with_total_value(dec!(1350.00)),
        Order::new(
            "2".to_string(),
            "ORD-2025-002".to_string(),
            "Beta Solutions".to_string(),
            OrderStatus::Packed,
            OrderPriority::Medium,
            at(2025, 1, 15, 10, 30),
        )
        .with_items(vec![line("ELC-004", "Electronic Component D", 100, 100, dec!(6.50))])
        .with_total_value(dec!(650.00)),
        Order::new(
            "3".to_string(),
            "ORD-2025-003".to_string(),
            "Gamma Industries".to_string(),
            OrderStatus::Urgent,
            OrderPriority::Urgent,
            at(2025, 1, 15, 11, 15),
        )
        .with_items(vec![
            line("GDG-002", "Standard Gadget B", 75, 0, dec!(10.00)),
            line("MAT-005", "Raw Material E", 30, 0, dec!(18.00)),
        ])
        .with_total_value(dec!(1290.00)),
    ]
}

fn fixture_metrics() -> WarehouseMetrics {
    WarehouseMetrics {
        total_orders: 847,
        orders_processed: 623,
        orders_shipped: 598,
        inventory_value: dec!(2845600),
        low_stock_items: 23,
        utilization_rate: dec!(78.5),
        picking_efficiency: dec!(94.2),
        on_time_delivery: dec!(96.8),
    }
}

fn fixture_locations() -> Vec<LocationData> {
    // (區, 走道, 貨架, 層, 容量, 佔用, 儲存的使用率)
    let rows = [
        ('A', 1, 1, 1, 100, 85, dec!(85)),
        ('A', 1, 1, 2, 100, 92, dec!(92)),
        ('A', 1, 1, 3, 100, 78, dec!(78)),
        ('B', 2, 1, 1, 150, 134, dec!(89)),
        ('B', 3, 2, 1, 120, 45, dec!(38)),
        ('C', 2, 1, 2, 80, 67, dec!(84)),
        ('D', 1, 3, 1, 200, 175, dec!(88)),
        ('E', 4, 1, 4, 90, 23, dec!(26)),
    ];

    rows.into_iter()
        .map(|(zone, aisle, rack, shelf, capacity, occupied, rate)| {
            LocationData::new(SlotCoordinate::new(zone, aisle, rack, shelf), capacity, occupied)
                .with_utilization_rate(rate)
        })
        .collect()
}

fn tables(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn fixture_integration_sources() -> Vec<IntegrationSource> {
    vec![
        IntegrationSource::new(
            "MS SQL Database".to_string(),
            "Primary Database".to_string(),
            ConnectionStatus::Connected,
            at(2025, 1, 15, 11, 45),
        )
        .with_tables(tables(&["inventory", "orders", "locations", "users"]))
        .with_record_count(15847),
        IntegrationSource::new(
            "C WMS Application".to_string(),
            "Legacy System".to_string(),
            ConnectionStatus::Connected,
            at(2025, 1, 15, 11, 30),
        )
        .with_tables(tables(&["transactions", "receipts", "shipments"]))
        .with_record_count(8963),
        IntegrationSource::new(
            "Flask API Service".to_string(),
            "Data Processor".to_string(),
            ConnectionStatus::Running,
            at(2025, 1, 15, 11, 45),
        )
        .with_tables(tables(&["processed_data", "analytics"]))
        .with_record_count(2341),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_sizes() {
        let data = WarehouseData::fixture();

        assert_eq!(data.inventory.len(), 5);
        assert_eq!(data.orders.len(), 3);
        assert_eq!(data.locations.len(), 8);
        assert_eq!(data.integration_sources.len(), 3);
        assert_eq!(data.metrics.total_orders, 847);
    }

    #[test]
    fn test_fixture_location_codes() {
        let data = WarehouseData::fixture();
        let codes: Vec<String> = data.locations.iter().map(LocationData::slot_code).collect();

        assert_eq!(codes[0], "A-01-R1-S1");
        assert_eq!(codes[3], "B-02-R1-S1");
        assert_eq!(codes[7], "E-04-R1-S4");

        // 庫存儲位編碼都是正規編碼
        for item in &data.inventory {
            assert!(item.location.parse::<SlotCoordinate>().is_ok(), "{}", item.location);
        }
    }

    #[test]
    fn test_fixture_json_round_trip() {
        let data = WarehouseData::fixture();
        let json = serde_json::to_string(&data).unwrap();
        let loaded = WarehouseData::from_json_str(&json).unwrap();

        assert_eq!(loaded, data);
    }

    #[test]
    fn test_from_json_without_integration_sources() {
        let json = r#"{
            "inventory": [],
            "orders": [],
            "locations": [],
            "metrics": {
                "totalOrders": 0,
                "ordersProcessed": 0,
                "ordersShipped": 0,
                "inventoryValue": "0",
                "lowStockItems": 0,
                "utilizationRate": "0",
                "pickingEfficiency": "0",
                "onTimeDelivery": "0"
            }
        }"#;

        let data = WarehouseData::from_json_str(json).unwrap();
        assert!(data.inventory.is_empty());
        assert!(data.integration_sources.is_empty());
    }

    #[test]
    fn test_from_json_rejects_unknown_status() {
        let json = r#"{
            "inventory": [],
            "orders": [{
                "id": "1",
                "orderNumber": "ORD-1",
                "customer": "X",
                "status": "lost",
                "priority": "low",
                "orderDate": "2025-01-15T09:00:00",
                "items": [],
                "totalValue": "0"
            }],
            "locations": [],
            "metrics": {
                "totalOrders": 0, "ordersProcessed": 0, "ordersShipped": 0,
                "inventoryValue": "0", "lowStockItems": 0, "utilizationRate": "0",
                "pickingEfficiency": "0", "onTimeDelivery": "0"
            }
        }"#;

        assert!(matches!(
            WarehouseData::from_json_str(json),
            Err(crate::WmsError::Deserialize(_))
        ));
    }
}
