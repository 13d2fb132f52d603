//! 日志初始化
//!
//! 日志统一输出到 stderr，避免和控制台答题界面（stdout）混在一起

use tracing_subscriber::EnvFilter;

/// 初始化全局日志
///
/// 设置了 `RUST_LOG` 时以它为准，否则默认 `info`，详细模式下为 `debug`。
/// 重复调用不会报错（测试里会多次调用）。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
