//! 结果文件的数据模型（对外暴露）
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 顶层保留字段：最近一次保存的作业 ID
pub const RESERVED_JOB_ID: &str = "jobId";
/// 顶层保留字段：最近一次保存的文本
pub const RESERVED_TEXT: &str = "text";

/// 最近一次保存的作业（对应 result.json 顶层的 `jobId` / `text`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestResult {
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub text: String,
}

/// 旧内容被丢弃的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// 文件存在但读取失败（权限、非 UTF-8 等）
    Unreadable,
    /// 不是合法 JSON
    InvalidJson,
    /// 合法 JSON，但顶层不是对象（数组、标量）
    NotAnObject,
}

/// 合并前磁盘上的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prior {
    Missing,
    Loaded { entries: usize },
    Discarded(DiscardReason),
}

/// result.json 的内存表示：作业 ID → 文本，外加两个保留字段
///
/// 键顺序与文件中一致；覆盖已有键不会改变其位置。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultFile {
    data: Map<String, Value>,
}

impl ResultFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// 宽松解析旧内容
    ///
    /// 恢复策略：任何不是 JSON 对象的内容都视为空结果文件，从头开始，
    /// 不向调用方报错。返回值中的 [`Prior`] 记录实际走了哪条分支。
    pub fn from_json_str(raw: &str) -> (Self, Prior) {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(data)) => {
                let entries = data.len();
                (Self { data }, Prior::Loaded { entries })
            }
            Ok(_) => (Self::new(), Prior::Discarded(DiscardReason::NotAnObject)),
            Err(_) => (Self::new(), Prior::Discarded(DiscardReason::InvalidJson)),
        }
    }

    /// 写入一条作业结果，并把它镜像到顶层保留字段
    ///
    /// 作业 ID 恰好是 `jobId` 或 `text` 时会与保留字段互相覆盖，这里不做处理。
    pub fn upsert(&mut self, job_id: &str, text: &str) {
        self.data.insert(job_id.to_string(), Value::String(text.to_string()));
        self.data.insert(RESERVED_JOB_ID.to_string(), Value::String(job_id.to_string()));
        self.data.insert(RESERVED_TEXT.to_string(), Value::String(text.to_string()));
    }

    /// 按作业 ID 查找文本；值不是字符串时返回 None
    pub fn get(&self, job_id: &str) -> Option<&str> {
        self.data.get(job_id).and_then(Value::as_str)
    }

    /// 读取顶层保留字段；任一缺失或类型不对则返回 None
    pub fn latest(&self) -> Option<LatestResult> {
        let job_id = self.data.get(RESERVED_JOB_ID)?.as_str()?;
        let text = self.data.get(RESERVED_TEXT)?.as_str()?;
        Some(LatestResult { job_id: job_id.to_string(), text: text.to_string() })
    }

    /// 作业条目的键（排除保留字段），按文件顺序
    pub fn job_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.data
            .keys()
            .map(String::as_str)
            .filter(|k| *k != RESERVED_JOB_ID && *k != RESERVED_TEXT)
    }

    /// 顶层键总数（含保留字段）
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 两空格缩进；非 ASCII 字符原样输出，不转义
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.data)
    }
}
