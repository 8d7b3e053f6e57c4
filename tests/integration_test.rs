//! 集成測試

use std::time::Duration;

use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use wms::wms_core::*;
use wms::wms_query::*;
use wms::Warehouse;

#[test]
fn test_inventory_view_over_fixture() {
    // 場景：搜尋 "a"、依單位成本降冪，摘要卡不受搜尋影響
    let data = WarehouseData::fixture();

    let query = InventoryQuery::new("A", SortKey::UnitCost, SortOrder::Desc);
    let result = InventoryQueryEngine::query(&data.inventory, &query);

    let skus: Vec<&str> = result.iter().map(|item| item.sku.as_str()).collect();
    assert_eq!(skus, vec!["TOL-003", "MAT-005", "WDG-001", "GDG-002"]);

    for pair in result.windows(2) {
        assert!(pair[0].unit_cost >= pair[1].unit_cost);
    }

    let summary = InventoryQueryEngine::summary(&data.inventory);
    assert_eq!(summary.total_items, 5);
    assert_eq!(summary.low_stock_count, 2);
    assert_eq!(summary.total_value, dec!(19392.25));
}

#[test]
fn test_queries_are_idempotent() {
    let data = WarehouseData::fixture();
    let query = InventoryQuery::new("e", SortKey::Name, SortOrder::Desc);

    let first = InventoryQueryEngine::query(&data.inventory, &query);
    let second = InventoryQueryEngine::query(&data.inventory, &query);
    assert_eq!(first, second);

    let first = OrderQueryEngine::filter_by_status(&data.orders, StatusFilter::All);
    let second = OrderQueryEngine::filter_by_status(&data.orders, StatusFilter::All);
    assert_eq!(first, second);

    let first: Vec<Decimal> = data.orders.iter().map(OrderQueryEngine::progress).collect();
    let second: Vec<Decimal> = data.orders.iter().map(OrderQueryEngine::progress).collect();
    assert_eq!(first, second);

    assert_eq!(data, WarehouseData::fixture());
}

#[rstest]
#[case("all", 3)]
#[case("pending", 0)]
#[case("processing", 1)]
#[case("packed", 1)]
#[case("shipped", 0)]
#[case("urgent", 1)]
fn test_order_filter_bar(#[case] token: &str, #[case] expected: usize) {
    let data = WarehouseData::fixture();
    let filter: StatusFilter = token.parse().unwrap();

    let result = OrderQueryEngine::filter_by_status(&data.orders, filter);
    assert_eq!(result.len(), expected);
    assert!(result.iter().all(|order| filter.matches(order)));
}

#[test]
fn test_order_progress_cards() {
    let data = WarehouseData::fixture();

    let progress: Vec<Decimal> = data
        .orders
        .iter()
        .map(|order| OrderQueryEngine::progress(order).round_dp(0))
        .collect();

    assert_eq!(progress, vec![dec!(79), dec!(100), dec!(0)]);
}

#[test]
fn test_location_heatmap() {
    let data = WarehouseData::fixture();
    let grids = LocationGridResolver::grid(
        &data.locations,
        &GridLayout::default(),
        DataSourcePolicy::TrustStored,
    );

    // 8 筆儲位資料全部落在 240 格中
    let resolved: Vec<&LocationData> = grids
        .iter()
        .flat_map(|grid| grid.cells.iter())
        .filter_map(|cell| cell.location)
        .collect();
    assert_eq!(resolved.len(), 8);

    let tiers: Vec<UtilizationTier> = data
        .locations
        .iter()
        .map(|location| LocationGridResolver::tier(location.utilization_rate))
        .collect();
    assert_eq!(
        tiers,
        vec![
            UtilizationTier::High,
            UtilizationTier::Critical,
            UtilizationTier::High,
            UtilizationTier::High,
            UtilizationTier::Optimal,
            UtilizationTier::High,
            UtilizationTier::High,
            UtilizationTier::Optimal,
        ]
    );

    let bands: Vec<HeatBand> = data
        .locations
        .iter()
        .map(|location| LocationGridResolver::heat_band(location.utilization_rate))
        .collect();
    assert_eq!(bands[4], HeatBand::Light);
    assert_eq!(bands[7], HeatBand::Light);
}

#[test]
fn test_every_inventory_item_has_a_slot() {
    let data = WarehouseData::fixture();

    let located: Vec<String> = data
        .inventory
        .iter()
        .filter_map(|item| LocationGridResolver::locate_item(&data.locations, item))
        .map(LocationData::slot_code)
        .collect();

    // WDG-001 (A-01-R1-S3), GDG-002 (B-03-R2-S1), TOL-003 (C-02-R1-S2),
    // ELC-004 (D-01-R3-S1), MAT-005 (E-04-R1-S4)
    assert_eq!(
        located,
        vec!["A-01-R1-S3", "B-03-R2-S1", "C-02-R1-S2", "D-01-R3-S1", "E-04-R1-S4"]
    );
}

#[test]
fn test_alternative_fixture_from_json() {
    let json = r#"{
        "inventory": [{
            "id": "1",
            "sku": "BOX-001",
            "name": "Shipping Box",
            "category": "Packaging",
            "currentStock": 40,
            "minStock": 50,
            "maxStock": 100,
            "location": "A-02-R2-S3",
            "lastUpdated": "2025-02-01T08:00:00",
            "unitCost": "0.75",
            "supplier": "BoxCo"
        }],
        "orders": [{
            "id": "1",
            "orderNumber": "ORD-9",
            "customer": "Delta",
            "status": "picking",
            "priority": "urgent",
            "orderDate": "2025-02-01T09:00:00",
            "items": [
                { "sku": "BOX-001", "name": "Shipping Box", "quantity": 0, "pickedQuantity": 0, "unitPrice": "1.00" }
            ],
            "totalValue": "0"
        }],
        "locations": [
            { "zone": "A", "aisle": "02", "rack": "R2", "shelf": "S3", "capacity": 10, "occupied": 9, "utilizationRate": "90" }
        ],
        "metrics": {
            "totalOrders": 1, "ordersProcessed": 0, "ordersShipped": 0,
            "inventoryValue": "30", "lowStockItems": 1, "utilizationRate": "90",
            "pickingEfficiency": "0", "onTimeDelivery": "0"
        }
    }"#;

    let data = WarehouseData::from_json_str(json).unwrap();
    let warehouse = Warehouse::new(data, WmsConfig::default()).unwrap();

    assert_eq!(
        InventoryQueryEngine::classify(&warehouse.data().inventory[0]),
        StockStatus::Low
    );
    assert_eq!(warehouse.inventory_summary().total_value, dec!(30.00));

    // 訂購總數為 0 時進度以 0 計
    let order = warehouse.orders(StatusFilter::Status(OrderStatus::Picking))[0];
    assert_eq!(OrderQueryEngine::progress(order), Decimal::ZERO);
    assert_eq!(warehouse.orders_by_priority(OrderPriority::Urgent).len(), 1);
    assert!(warehouse
        .orders(StatusFilter::Status(OrderStatus::Urgent))
        .is_empty());

    let location = warehouse.location('A', 2, 2, 3).unwrap();
    assert_eq!(warehouse.location_tier(location), UtilizationTier::Critical);
    assert!(warehouse.consistency().is_consistent());
}

#[test]
fn test_derive_policy_via_config() {
    let mut data = WarehouseData::fixture();
    data.orders[1].total_value = dec!(700.00);
    data.locations[0].occupied = 90;

    let config = WmsConfig::from_json_str(r#"{ "dataSourcePolicy": "deriveFromParts" }"#).unwrap();
    let warehouse = Warehouse::new(data.clone(), config).unwrap();

    assert_eq!(warehouse.order_total(&warehouse.data().orders[1]), dec!(650.00));
    assert_eq!(
        warehouse.location_tier(&warehouse.data().locations[0]),
        UtilizationTier::Critical
    );
    assert_eq!(
        warehouse.heatmap()[0].cells[0].heat_band(),
        Some(HeatBand::Saturated)
    );

    let report = warehouse.consistency();
    assert_eq!(report.of_kind(DataWarningKind::OrderTotalMismatch).count(), 1);
    assert_eq!(report.of_kind(DataWarningKind::UtilizationDrift).count(), 1);

    // 預設策略仍以儲存值為準
    let warehouse = Warehouse::new(data, WmsConfig::default()).unwrap();
    assert_eq!(warehouse.order_total(&warehouse.data().orders[1]), dec!(700.00));
    assert_eq!(
        warehouse.heatmap()[0].cells[0].heat_band(),
        Some(HeatBand::Dense)
    );
}

#[tokio::test(start_paused = true)]
async fn test_refresh_has_no_data_effect() {
    let config = WmsConfig::new().with_refresh_delay(Duration::from_millis(300));
    let warehouse = Warehouse::new(WarehouseData::fixture(), config).unwrap();

    let start = tokio::time::Instant::now();
    warehouse.refresh().await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(300));
    assert!(!warehouse.is_refreshing());
    assert_eq!(warehouse.data(), &WarehouseData::fixture());
}
