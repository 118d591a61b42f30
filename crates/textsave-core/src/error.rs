//! 错误类型（模块）
use std::path::PathBuf;
use thiserror::Error;

/// 保存过程中无法就地恢复的错误，直接抛给调用方
///
/// 旧文件缺失或内容损坏不属于错误，见 [`crate::Prior`]。
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("create result directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write result file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialize result file")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
