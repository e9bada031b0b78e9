use std::path::PathBuf;
use thiserror::Error;

/// 配置获取阶段的错误，任何一种都会在生成开始前终止构建
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 颜色或长度格式错误也走这里（反序列化时校验）
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("layout.cols must be at least 1, got {0}")]
    InvalidColumns(u32),
}
