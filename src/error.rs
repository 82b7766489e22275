use thiserror::Error;

/// 讀取拓樸描述時可能發生的錯誤
#[derive(Debug, Error)]
pub enum TopoError {
    #[error("無法讀取拓樸檔: {0}")]
    Io(#[from] std::io::Error),
    #[error("無法解析拓樸: {0}")]
    Json(#[from] serde_json::Error),
    #[error("邊 {src} -> {dst} 的權重不合法: {weight}")]
    InvalidWeight { src: usize, dst: usize, weight: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("無法讀取設定檔: {0}")]
    Io(#[from] std::io::Error),
    #[error("無法解析設定檔: {0}")]
    Json(#[from] serde_json::Error),
    #[error("設定不合法: {0}")]
    Invalid(String),
}
