use anyhow::Result;
use quiz_app::{logger, App, Config};

fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logger::init(config.verbose_logging);

    // 运行答题界面
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    App::new(config).run(stdin.lock(), stdout.lock())?;

    Ok(())
}
