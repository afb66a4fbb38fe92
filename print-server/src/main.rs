use print_server::utils::browser;
use print_server::{Config, Server, init_logger, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    dotenv::dotenv().ok();
    init_logger();

    // 2. 加载配置
    let config = Config::from_env();

    // 打印横幅
    print_banner(config.http_port);

    tracing::info!("🖨️ Print server starting...");

    // 自动打开测试页面 (可选)
    if config.open_browser {
        browser::open_test_page(config.http_port);
    }

    // 3. 启动 HTTP 服务器
    let server = Server::new(config);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
