pub mod fixtures;
pub mod progress;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::Arc;

use crate::AnalysisService;
use crate::dto::request::*;
use crate::dto::response::*;
use crate::error::Result;
use crate::token::TokenVault;
use crate::types::*;

/// 模拟分析服务 - 不访问网络, 永远成功
pub struct MockAnalysisService {
    /// 模拟上传的时间参数
    timings: MockTimings,
    /// 令牌管理
    tokens: Arc<TokenVault>,
}

impl MockAnalysisService {
    pub fn new(timings: MockTimings, tokens: Arc<TokenVault>) -> Self {
        Self { timings, tokens }
    }

    /// 创建实例并包装在 Arc 中
    pub fn create(timings: MockTimings, tokens: Arc<TokenVault>) -> Arc<Self> {
        Arc::new(Self::new(timings, tokens))
    }
}

#[async_trait]
impl AnalysisService for MockAnalysisService {
    async fn register(&self, username: &str, _password: &str) -> Result<ApiResponse<AuthResponse>> {
        debug!("[mock] 注册用户: {}", username);
        Ok(ApiResponse::new(fixtures::register_response()))
    }

    async fn login(&self, username: &str, _password: &str) -> Result<ApiResponse<AuthResponse>> {
        debug!("[mock] 用户登录: {}", username);
        Ok(ApiResponse::new(fixtures::login_response()))
    }

    async fn upload(
        &self,
        file: UploadFile,
        on_progress: Option<ProgressCallback>,
    ) -> Result<ApiResponse<UploadResponse>> {
        debug!("[mock] 上传文件: {} ({} 字节)", file.file_name, file.len());
        progress::simulate_upload(&self.timings, on_progress).await;
        Ok(ApiResponse::new(fixtures::upload_response(Utc::now())))
    }

    async fn status(&self) -> Result<ApiResponse<AiStatus>> {
        Ok(ApiResponse::new(fixtures::status_response()))
    }

    async fn history(&self) -> Result<ApiResponse<Vec<HistoryEntry>>> {
        Ok(ApiResponse::new(fixtures::history_entries(Utc::now())))
    }

    fn mode(&self) -> GatewayMode {
        GatewayMode::Mock
    }

    fn tokens(&self) -> &Arc<TokenVault> {
        &self.tokens
    }
}
