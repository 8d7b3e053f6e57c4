//! 倉儲看板示例：以固定資料集輸出各個檢視

use wms::wms_core::SlotCoordinate;
use wms::wms_query::{
    InventoryQuery, OrderProgress, SortKey, SortOrder, StatusFilter,
    DASHBOARD_STATUSES,
};
use wms::Warehouse;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    wms::logging::init();

    let warehouse = Warehouse::with_fixture();

    println!("=== 倉儲指標 ===\n");
    let metrics = warehouse.metrics();
    println!("  訂單總數: {}", metrics.total_orders);
    println!(
        "  已處理: {} ({}%)",
        metrics.orders_processed,
        metrics.processed_ratio().round_dp(1)
    );
    println!(
        "  已出貨: {} ({}%)",
        metrics.orders_shipped,
        metrics.shipped_ratio().round_dp(1)
    );
    println!("  倉容使用率: {}%", metrics.utilization_rate);

    println!("\n=== 庫存（依庫存量降冪）===\n");
    let query: InventoryQuery = InventoryQuery::new(
        "",
        "currentStock".parse::<SortKey>()?,
        "desc".parse::<SortOrder>()?,
    );
    for item in warehouse.inventory(&query) {
        println!(
            "  {:<8} {:<24} {:>5}  {:?}",
            item.sku,
            item.name,
            item.current_stock,
            warehouse.stock_status(item)
        );
    }
    let summary = warehouse.inventory_summary();
    println!(
        "  共 {} 項，低庫存 {} 項，庫存總值 {}",
        summary.total_items, summary.low_stock_count, summary.total_value
    );

    println!("\n=== 訂單 ===\n");
    for status in std::iter::once(StatusFilter::All)
        .chain(DASHBOARD_STATUSES.into_iter().map(StatusFilter::Status))
    {
        println!("  [{}] {} 筆", status, warehouse.orders(status).len());
    }
    for order in warehouse.orders(StatusFilter::All) {
        let progress = OrderProgress::of(order);
        println!(
            "  {} {:<20} {:<10} {:<7} {}/{} ({}%)",
            progress.order_number,
            order.customer,
            progress.status,
            progress.priority,
            progress.picked,
            progress.ordered,
            progress.percent.round_dp(0)
        );
    }

    println!("\n=== 儲位熱圖 ===\n");
    for zone in warehouse.heatmap() {
        let row: String = zone
            .cells
            .iter()
            .map(|cell| match cell.heat_band() {
                Some(band) => format!("{:?}", band).chars().next().unwrap_or('?'),
                None => '.',
            })
            .collect();
        println!("  {} 區 [{}] 已配置 {} 格", zone.zone, row, zone.occupied_cells());
    }
    for location in &warehouse.data().locations {
        println!(
            "  {}  {}/{}  {}%  {:?}",
            location.slot_code(),
            location.occupied,
            location.capacity,
            location.utilization_rate,
            warehouse.location_tier(location)
        );
    }
    let slot: SlotCoordinate = "A-02-R2-S3".parse()?;
    println!(
        "  {} {}",
        slot,
        if warehouse.location(slot.zone, slot.aisle, slot.rack, slot.shelf).is_some() {
            "已配置"
        } else {
            "空儲位"
        }
    );

    println!("\n=== 資料整合 ===\n");
    let overview = warehouse.integration_overview();
    println!(
        "  來源 {} 個（可用 {} 個），記錄 {} 筆",
        overview.total_sources, overview.healthy_sources, overview.total_records
    );
    let report = warehouse.consistency();
    println!("  一致性警告 {} 筆", report.warnings.len());

    warehouse.refresh().await?;
    println!("  刷新完成（資料未變動）");

    Ok(())
}
