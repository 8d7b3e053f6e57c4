//! 倉儲資料門面
//!
//! 持有載入時固定的資料集與配置，將查詢參數轉交給各查詢引擎。

use rust_decimal::Decimal;
use wms_core::{
    InventoryItem, LocationData, Order, OrderPriority, WarehouseData, WarehouseMetrics, WmsConfig,
};
use wms_query::{
    ConsistencyChecker, ConsistencyReport, DataRefresher, IntegrationOverview, InventoryQuery,
    InventoryQueryEngine, InventorySummary, LocationGridResolver, MetricsSnapshot,
    OrderQueryEngine, RefreshReport, StatusFilter, StockStatus, UtilizationTier, ZoneGrid,
};

/// 倉儲資料門面
pub struct Warehouse {
    data: WarehouseData,
    config: WmsConfig,
    refresher: DataRefresher,
}

impl Warehouse {
    /// 創建新的門面（配置需先通過驗證）
    pub fn new(data: WarehouseData, config: WmsConfig) -> wms_core::Result<Self> {
        config.validate()?;

        tracing::info!(
            "載入倉儲資料：品項 {} 筆，訂單 {} 筆，儲位 {} 筆",
            data.inventory.len(),
            data.orders.len(),
            data.locations.len()
        );

        let refresher = DataRefresher::from_config(&config);
        Ok(Self {
            data,
            config,
            refresher,
        })
    }

    /// 使用內建固定資料集與預設配置
    pub fn with_fixture() -> Self {
        Self {
            data: WarehouseData::fixture(),
            config: WmsConfig::default(),
            refresher: DataRefresher::default(),
        }
    }

    pub fn data(&self) -> &WarehouseData {
        &self.data
    }

    pub fn config(&self) -> &WmsConfig {
        &self.config
    }

    /// 庫存表
    pub fn inventory(&self, query: &InventoryQuery) -> Vec<&InventoryItem> {
        InventoryQueryEngine::query(&self.data.inventory, query)
    }

    /// 庫存分級（使用配置的高庫存門檻）
    pub fn stock_status(&self, item: &InventoryItem) -> StockStatus {
        InventoryQueryEngine::classify_with_ratio(item, self.config.high_stock_ratio)
    }

    /// 庫存摘要卡
    pub fn inventory_summary(&self) -> InventorySummary {
        InventoryQueryEngine::summary(&self.data.inventory)
    }

    /// 訂單卡片
    pub fn orders(&self, filter: StatusFilter) -> Vec<&Order> {
        OrderQueryEngine::filter_by_status(&self.data.orders, filter)
    }

    pub fn orders_by_priority(&self, priority: OrderPriority) -> Vec<&Order> {
        OrderQueryEngine::filter_by_priority(&self.data.orders, priority)
    }

    /// 訂單總額（依配置的取用策略）
    pub fn order_total(&self, order: &Order) -> Decimal {
        ConsistencyChecker::effective_order_total(order, self.config.data_source_policy)
    }

    /// 查找單一儲位
    pub fn location(&self, zone: char, aisle: u32, rack: u32, shelf: u32) -> Option<&LocationData> {
        LocationGridResolver::resolve(&self.data.locations, zone, aisle, rack, shelf)
    }

    /// 儲位使用率（依配置的取用策略）
    pub fn utilization(&self, location: &LocationData) -> Decimal {
        ConsistencyChecker::effective_utilization(location, self.config.data_source_policy)
    }

    /// 儲位嚴重度
    pub fn location_tier(&self, location: &LocationData) -> UtilizationTier {
        LocationGridResolver::tier(self.utilization(location))
    }

    /// 儲位熱圖
    pub fn heatmap(&self) -> Vec<ZoneGrid<'_>> {
        LocationGridResolver::grid(
            &self.data.locations,
            &self.config.grid_layout,
            self.config.data_source_policy,
        )
    }

    /// 指標快照
    pub fn metrics(&self) -> &WarehouseMetrics {
        MetricsSnapshot::get(&self.data)
    }

    /// 整合面板
    pub fn integration_overview(&self) -> IntegrationOverview {
        IntegrationOverview::of(&self.data.integration_sources)
    }

    /// 儲存值與衍生值的一致性
    pub fn consistency(&self) -> ConsistencyReport {
        ConsistencyChecker::check(&self.data, &self.config)
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresher.is_refreshing()
    }

    /// 模擬刷新（不改變資料）
    pub async fn refresh(&self) -> wms_core::Result<RefreshReport> {
        self.refresher.refresh().await
    }
}

impl Default for Warehouse {
    fn default() -> Self {
        Self::with_fixture()
    }
}
