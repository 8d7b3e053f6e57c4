//! 資料整合面板彙總

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use wms_core::IntegrationSource;

/// 整合來源彙總
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationOverview {
    /// 來源總數
    pub total_sources: usize,

    /// 可用來源數（已連線或執行中）
    pub healthy_sources: usize,

    /// 記錄總數
    pub total_records: u64,

    /// 最近一次同步時間
    pub latest_sync: Option<NaiveDateTime>,
}

impl IntegrationOverview {
    /// 彙總所有整合來源
    pub fn of(sources: &[IntegrationSource]) -> Self {
        Self {
            total_sources: sources.len(),
            healthy_sources: sources
                .iter()
                .filter(|source| source.status.is_healthy())
                .count(),
            total_records: sources.iter().map(|source| source.record_count).sum(),
            latest_sync: sources.iter().map(|source| source.last_sync).max(),
        }
    }

    /// 檢查是否所有來源都可用
    pub fn all_healthy(&self) -> bool {
        self.healthy_sources == self.total_sources
    }
}
