pub mod client;
#[cfg(test)]
pub(crate) mod test_backend;

use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use crate::AnalysisService;
use crate::error::Result;

use crate::dto::request::*;
use crate::dto::response::*;
use crate::token::TokenVault;
use crate::types::*;

use self::client::HttpClient;

/// HTTP 分析服务实现 - 所有操作都转发给后端
pub struct HttpAnalysisService {
    /// HTTP 客户端
    client: HttpClient,
}

impl HttpAnalysisService {
    /// 创建新的 HTTP 分析服务
    pub fn new(config: &GatewayConfig, tokens: Arc<TokenVault>) -> Result<Self> {
        let client = HttpClient::new(&config.base_url, config.timeout, tokens)?;
        info!(
            "HTTP 分析服务已创建: {} (超时 {:?})",
            client.base_url(),
            config.timeout
        );
        Ok(Self { client })
    }

    /// 创建一个新的 HTTP 分析服务实例并包装在 Arc 中
    pub fn create(config: &GatewayConfig, tokens: Arc<TokenVault>) -> Result<Arc<Self>> {
        Ok(Arc::new(Self::new(config, tokens)?))
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn register(&self, username: &str, password: &str) -> Result<ApiResponse<AuthResponse>> {
        debug!("注册用户: {}", username);
        self.client
            .register(&Credentials::new(username, password))
            .await
    }

    async fn login(&self, username: &str, password: &str) -> Result<ApiResponse<AuthResponse>> {
        debug!("用户登录: {}", username);
        self.client.login(&Credentials::new(username, password)).await
    }

    async fn upload(
        &self,
        file: UploadFile,
        on_progress: Option<ProgressCallback>,
    ) -> Result<ApiResponse<UploadResponse>> {
        debug!("上传文件: {} ({} 字节)", file.file_name, file.len());
        self.client.upload_image(file, on_progress).await
    }

    async fn status(&self) -> Result<ApiResponse<AiStatus>> {
        self.client.get_status().await
    }

    async fn history(&self) -> Result<ApiResponse<Vec<HistoryEntry>>> {
        self.client.get_history().await
    }

    fn mode(&self) -> GatewayMode {
        GatewayMode::Live
    }

    fn tokens(&self) -> &Arc<TokenVault> {
        self.client.tokens()
    }
}
