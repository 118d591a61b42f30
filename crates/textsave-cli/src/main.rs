use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use textsave_core::{default_result_path_from_exe, ResultStore};
use tracing::{info, warn};

const USAGE: &str = "usage: save_result_json <jobId> [result.json]\n       save_result_json <result.json> <jobId>";

/// 命令行入口（基于 clap）：文本从标准输入读取
#[derive(Parser, Debug)]
#[command(name = "save_result_json", version, about = "把作业文本结果写入 result.json")]
struct Cli {
    /// `<jobId> [result.json]` 或 `<result.json> <jobId>`
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    args: Vec<String>,
}

/// 解析后的调用参数
#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    job_id: String,
    /// None 表示使用默认路径
    result_path: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let Some(invocation) = resolve_invocation(&cli.args) else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(1));
    };
    if cli.args.len() > 2 {
        warn!(ignored = ?&cli.args[2..], "extra arguments ignored");
    }

    // 默认路径只在入口计算一次，再交给存储
    let result_path = invocation.result_path.unwrap_or_else(default_result_path_from_exe);
    info!(job_id = %invocation.job_id, path = %result_path.display(), "saving result");

    // 先完整读取标准输入，再写文件
    let text = read_stdin_text().context("read text from stdin")?;

    let store = ResultStore::new(result_path);
    let report = store
        .save(&invocation.job_id, &text)
        .with_context(|| format!("save result for job {}", invocation.job_id))?;

    info!(prior = ?report.prior, bytes = text.len(), "result saved");
    eprintln!("Saved result to: {}", report.path.display());
    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志走 stderr；默认只输出 warn 及以上，可用 RUST_LOG=info 等打开
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 判定位置参数的角色
/// - 0 个：None（打印用法）
/// - 1 个：作业 ID，路径用默认值
/// - 2 个及以上：前两个中，第一个以 `.json` 结尾（不区分大小写）则它是路径，否则第二个是路径
fn resolve_invocation(args: &[String]) -> Option<Invocation> {
    match args {
        [] => None,
        [job_id] => Some(Invocation { job_id: job_id.clone(), result_path: None }),
        [first, second, ..] => {
            let (path, job_id) = if has_json_extension(first) { (first, second) } else { (second, first) };
            Some(Invocation { job_id: job_id.clone(), result_path: Some(PathBuf::from(path)) })
        }
    }
}

/// 只看扩展名，不检查文件是否存在
fn has_json_extension(arg: &str) -> bool {
    Path::new(arg)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn read_stdin_text() -> Result<String> {
    let mut buf = Vec::new();
    std::io::stdin().lock().read_to_end(&mut buf)?;
    String::from_utf8(buf).context("stdin is not valid UTF-8")
}
