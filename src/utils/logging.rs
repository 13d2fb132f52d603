/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use crate::config::Config;
use crate::session::FinalScore;
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 答题程序启动");
    info!("📁 题库: {}", config.question_bank);
    info!(
        "⚙️ 出题顺序: {:?} | 比对方式: {:?}",
        config.order, config.match_mode
    );
    info!("{}", "=".repeat(60));
}

/// 记录题库加载信息
///
/// # 参数
/// - `path`: 题库文件路径
/// - `total`: 题目总数
pub fn log_bank_loaded(path: &str, total: usize) {
    info!("✓ 题库 {} 已加载，共 {} 道题", path, total);
}

/// 打印最终得分
pub fn log_final_score(final_score: &FinalScore) {
    info!("\n{}", "=".repeat(60));
    info!("📊 答题完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 得分: {}/{}", final_score.score, final_score.total);
    info!("📝 作答次数: {}", final_score.answered);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
