//! 结果存储：读取 → 合并 → 整体写回
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::types::{DiscardReason, Prior, ResultFile};

/// 单次保存的结果（便于 CLI 打印）
#[derive(Debug, Clone)]
pub struct SaveReport {
    /// 实际写入的路径
    pub path: PathBuf,
    /// 合并前磁盘上的状态
    pub prior: Prior,
}

/// 绑定到某个 result.json 的存储
///
/// 每次保存都是一次完整的读改写，不加锁；并发写入同一文件时以最后一次为准。
#[derive(Debug, Clone)]
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 保存一条作业结果
    /// - 父目录不存在时逐级创建
    /// - 旧文件缺失或损坏时从空对象开始（见 [`ResultFile::from_json_str`]）
    /// - 更新 `data[job_id]` 以及顶层 `jobId` / `text`，整体覆盖写回
    pub fn save(&self, job_id: &str, text: &str) -> Result<SaveReport> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|source| StoreError::CreateDir { path: parent.to_path_buf(), source })?;
        }

        let (mut file, prior) = self.read_existing();
        if let Prior::Discarded(reason) = prior {
            info!(path = %self.path.display(), ?reason, "discarding unusable result file content");
        }

        file.upsert(job_id, text);
        let body = file.to_pretty_json()?;
        std::fs::write(&self.path, body)
            .map_err(|source| StoreError::Write { path: self.path.clone(), source })?;

        debug!(path = %self.path.display(), job_id, entries = file.len(), ?prior, "result saved");
        Ok(SaveReport { path: self.path.clone(), prior })
    }

    /// 只读加载，与 `save` 使用同样的宽松解析
    pub fn load(&self) -> ResultFile {
        self.read_existing().0
    }

    fn read_existing(&self) -> (ResultFile, Prior) {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => ResultFile::from_json_str(&raw),
            Err(e) if e.kind() == ErrorKind::NotFound => (ResultFile::new(), Prior::Missing),
            // 存在但读不了（非 UTF-8、是目录等）：同样按空内容处理，写回时再暴露真正的问题
            Err(_) => (ResultFile::new(), Prior::Discarded(DiscardReason::Unreadable)),
        }
    }
}
