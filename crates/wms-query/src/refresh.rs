//! 模擬資料刷新
//!
//! 沒有真正的資料來源：刷新只會等待固定時間，不改變任何資料。

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use wms_core::{WmsConfig, WmsError};

/// 刷新結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// 模擬刷新器
pub struct DataRefresher {
    delay: Duration,
    refreshing: AtomicBool,
}

/// 離開作用域時清除刷新中旗標（包含 future 被取消的情況）
struct RefreshingGuard<'a>(&'a AtomicBool);

impl Drop for RefreshingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl DataRefresher {
    /// 創建新的刷新器
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            refreshing: AtomicBool::new(false),
        }
    }

    /// 依配置創建刷新器
    pub fn from_config(config: &WmsConfig) -> Self {
        Self::new(config.refresh_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 檢查是否正在刷新
    pub fn is_refreshing(&self) -> bool {
        self.refreshing.load(Ordering::Acquire)
    }

    /// 執行刷新：等待固定時間後返回
    ///
    /// 同一時間只允許一個刷新，重複呼叫回傳 [`WmsError::RefreshInProgress`]。
    pub async fn refresh(&self) -> wms_core::Result<RefreshReport> {
        if self
            .refreshing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("刷新進行中，忽略重複請求");
            return Err(WmsError::RefreshInProgress);
        }
        let _guard = RefreshingGuard(&self.refreshing);

        let started_at = Utc::now();
        tracing::info!("開始刷新資料，延遲 {:?}", self.delay);

        tokio::time::sleep(self.delay).await;

        let finished_at = Utc::now();
        tracing::info!("資料刷新完成");

        Ok(RefreshReport {
            started_at,
            finished_at,
        })
    }
}

impl Default for DataRefresher {
    fn default() -> Self {
        Self::from_config(&WmsConfig::default())
    }
}
