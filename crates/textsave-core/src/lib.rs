//! 作业文本结果存储库
//!
//! 设计要点：
//! - result.json 是一个 JSON 对象：作业 ID → 文本结果；顶层 `jobId` / `text` 始终镜像最近一次保存，供轮询方判断完成。
//! - 每次保存是一次完整的读改写，不加锁，最后写入者生效。
//! - 旧文件缺失、损坏或不是对象时按空对象处理，不报错；只有建目录和写回失败会抛出。
//! - 默认路径由入口计算后注入，核心逻辑只接受显式路径。

mod error;
mod location;
mod store;
mod types;

pub use error::{Result, StoreError};
pub use location::{default_result_path, default_result_path_from_exe, RESULT_REL_PATH, ROOT_ASCENT};
pub use store::{ResultStore, SaveReport};
pub use types::{DiscardReason, LatestResult, Prior, ResultFile, RESERVED_JOB_ID, RESERVED_TEXT};
