//! 日誌初始化

use tracing_subscriber::EnvFilter;

/// 初始化 tracing 輸出
///
/// 日誌等級由 `RUST_LOG` 控制，預設 `info`；重複呼叫不會有作用。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
