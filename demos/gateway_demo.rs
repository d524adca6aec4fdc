use std::sync::Arc;

use skin_scan_client::{
    AnalysisService, create_analysis_service,
    dto::request::UploadFile,
    token::TokenVault,
    types::{GatewayConfig, ProgressCallback, UploadProgress},
};

// 走一遍完整流程: 登录、上传、查询状态和历史
async fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    // 设置日志
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // SKIN_API_MOCK=false SKIN_API_BASE=http://host:port 切换到真实后端
    let config = GatewayConfig::from_env()?;
    let tokens = Arc::new(TokenVault::session_only());
    let service = create_analysis_service(config, tokens.clone())?;
    println!("运行模式: {}", service.mode());

    let login = service.login("demo", "demo").await?;
    tokens.save(&login.data.token, false)?;
    println!("已登录, 令牌: {}", login.data.token);

    let file = match std::env::args().nth(1) {
        Some(path) => UploadFile::from_path(path).await?,
        None => UploadFile::new("demo.jpg", "image/jpeg", vec![0u8; 1024]),
    };

    let on_progress: ProgressCallback = Arc::new(|event: UploadProgress| {
        println!("上传进度: {}/{}", event.loaded, event.total);
    });
    let upload = service.upload(file, Some(on_progress)).await?;
    let analysis = upload.data.analysis()?;
    println!(
        "分析完成 ({}), 总分: {}",
        upload.data.timestamp, analysis["overall_score"]
    );

    println!("AI 状态: {}", service.status().await?.data.ai_status);

    for entry in service.history().await?.data {
        println!("历史记录 {} @ {}", entry.id, entry.date);
    }

    service.logout().await?;
    println!("已退出登录");
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run_demo().await {
        eprintln!("演示失败: {}", e);
    }
}
