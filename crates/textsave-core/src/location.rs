//! 结果文件默认位置
//!
//! 默认路径只由入口计算一次，再显式传给 [`crate::ResultStore`]；
//! 存储本身从不自行推断路径。
use std::path::{Path, PathBuf};

/// 从锚点（可执行文件）向上回溯的层数，
/// 对应安装位置 `<root>/.agent/skills/text-json-save/scripts/<exe>`
pub const ROOT_ASCENT: usize = 5;

/// 仓库根目录下的结果文件相对路径
pub const RESULT_REL_PATH: &str = "texts/result.json";

/// 由锚点路径计算默认结果文件路径
/// - 锚点向上 [`ROOT_ASCENT`] 层视为仓库根
/// - 层数不够（浅安装）时退回 `cwd`，不报错
pub fn default_result_path(anchor: &Path, cwd: &Path) -> PathBuf {
    // ancestors() 第 0 项是锚点自身
    let root = anchor.ancestors().nth(ROOT_ASCENT).unwrap_or(cwd);
    root.join(RESULT_REL_PATH)
}

/// 以当前可执行文件为锚点计算默认路径
pub fn default_result_path_from_exe() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match std::env::current_exe() {
        Ok(exe) => {
            // 尽量解析符号链接；失败时沿用原路径
            let exe = exe.canonicalize().unwrap_or(exe);
            default_result_path(&exe, &cwd)
        }
        Err(_) => cwd.join(RESULT_REL_PATH),
    }
}
