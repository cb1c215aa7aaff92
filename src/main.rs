// ==========================================
// 酒店连锁运营管理 - 命令行主入口
// ==========================================
// 退出码:
// - 0: 正常退出
// - 1: 配置错误 / 数据库连接失败
// - 2: 启动参数格式错误 (clap)
// ==========================================

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use hotel_ops::app::{AppState, Session};
use hotel_ops::config::{AppConfig, Cli};
use hotel_ops::i18n::{self, t, t_with_args};

fn main() -> ExitCode {
    // 参数错误时 clap 直接打印用法并以 2 退出
    let cli = Cli::parse();

    // 初始化日志系统
    hotel_ops::logging::init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::resolve(cli.config.as_deref(), cli.overrides())?;
    i18n::set_locale(&config.locale);

    tracing::info!("==================================================");
    tracing::info!("{} v{}", hotel_ops::APP_NAME, hotel_ops::VERSION);
    tracing::info!("==================================================");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "\n{}\n", t("app.title"))?;
    writeln!(out, "{}", t_with_args("app.connecting", &[("path", &config.db_path)]))?;

    // 连接失败是致命错误
    let state = AppState::open(&config)?;
    writeln!(out, "{}", t("app.connected"))?;
    drop(out);

    let stdin = io::stdin();
    let session_result = Session::new(&state, stdin.lock(), io::stdout()).run();

    // 无论会话如何结束都要关闭连接
    println!("{}", t("app.disconnecting"));
    state.shutdown();
    println!("{}", t("app.bye"));

    session_result?;
    Ok(())
}
