//! 資料整合來源模型

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 連線狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// 已連線
    Connected,
    /// 執行中
    Running,
    /// 錯誤
    Error,
    /// 其他（等待中）
    Pending,
}

impl ConnectionStatus {
    /// 檢查是否可用（已連線或執行中）
    pub fn is_healthy(&self) -> bool {
        matches!(self, ConnectionStatus::Connected | ConnectionStatus::Running)
    }
}

/// 整合來源（資料庫、舊系統、處理服務）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationSource {
    /// 名稱
    pub name: String,

    /// 類型說明
    #[serde(rename = "type")]
    pub source_type: String,

    /// 連線狀態
    pub status: ConnectionStatus,

    /// 最後同步時間
    pub last_sync: NaiveDateTime,

    /// 同步的資料表
    pub tables: Vec<String>,

    /// 記錄數
    pub record_count: u64,
}

impl IntegrationSource {
    /// 創建新的整合來源
    pub fn new(
        name: String,
        source_type: String,
        status: ConnectionStatus,
        last_sync: NaiveDateTime,
    ) -> Self {
        Self {
            name,
            source_type,
            status,
            last_sync,
            tables: Vec::new(),
            record_count: 0,
        }
    }

    /// 建構器模式：設置資料表
    pub fn with_tables(mut self, tables: Vec<String>) -> Self {
        self.tables = tables;
        self
    }

    /// 建構器模式：設置記錄數
    pub fn with_record_count(mut self, record_count: u64) -> Self {
        self.record_count = record_count;
        self
    }
}
