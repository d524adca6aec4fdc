pub mod dto;
pub mod error;
pub mod http;
pub mod mock;
pub mod token;
pub mod types;
pub mod utils;

use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::dto::request::*;
use crate::dto::response::*;
use crate::token::TokenVault;
use crate::types::*;

use crate::error::Result;
use crate::http::HttpAnalysisService;
use crate::mock::MockAnalysisService;

/// 皮肤分析服务特性 - 调用方无需关心响应来自真实后端还是内置数据
#[async_trait]
pub trait AnalysisService: Sync + Send {
    /// 注册新用户
    ///
    /// # 参数
    /// * `username` - 用户名
    /// * `password` - 密码
    ///
    /// # 返回
    /// * `Result<ApiResponse<AuthResponse>>` - 包含令牌的响应或错误
    async fn register(&self, username: &str, password: &str) -> Result<ApiResponse<AuthResponse>>;

    /// 用户登录
    ///
    /// # 参数
    /// * `username` - 用户名
    /// * `password` - 密码
    ///
    /// # 返回
    /// * `Result<ApiResponse<AuthResponse>>` - 包含令牌的响应或错误
    async fn login(&self, username: &str, password: &str) -> Result<ApiResponse<AuthResponse>>;

    /// 上传图片进行分析
    ///
    /// # 参数
    /// * `file` - 图片文件
    /// * `on_progress` - 可选的上传进度回调
    ///
    /// # 返回
    /// * `Result<ApiResponse<UploadResponse>>` - 分析结果或错误
    async fn upload(
        &self,
        file: UploadFile,
        on_progress: Option<ProgressCallback>,
    ) -> Result<ApiResponse<UploadResponse>>;

    /// 查询 AI 服务状态
    async fn status(&self) -> Result<ApiResponse<AiStatus>>;

    /// 获取历史分析记录
    async fn history(&self) -> Result<ApiResponse<Vec<HistoryEntry>>>;

    /// 退出登录, 从两个存储中清除令牌
    async fn logout(&self) -> Result<()> {
        self.tokens().clear()
    }

    /// 当前运行模式
    fn mode(&self) -> GatewayMode;

    /// 令牌管理
    fn tokens(&self) -> &Arc<TokenVault>;
}

/// 创建分析服务实例
///
/// # 参数
/// * `config` - 网关配置, 其中的模式决定使用哪种实现
/// * `tokens` - 令牌管理, 与调用方共享
///
/// # 返回
/// * `Result<Arc<dyn AnalysisService>>` - 分析服务实例或错误
pub fn create_analysis_service(
    config: GatewayConfig,
    tokens: Arc<TokenVault>,
) -> Result<Arc<dyn AnalysisService>> {
    config.validate()?;
    info!("创建分析服务, 模式: {}", config.mode);

    match config.mode {
        GatewayMode::Mock => Ok(MockAnalysisService::create(config.mock, tokens)),
        GatewayMode::Live => Ok(HttpAnalysisService::create(&config, tokens)?),
    }
}
