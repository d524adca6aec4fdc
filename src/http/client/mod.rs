mod auth_client;
mod status_client;
mod upload_client;

use log::{debug, error};
use reqwest::{Client, ClientBuilder, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use crate::dto::response::ApiResponse;
use crate::error::{GatewayError, Result};
use crate::token::TokenVault;

/// HTTP 客户端 - 用于与分析后端通信
pub struct HttpClient {
    client: Client,
    /// 后端基础地址（不含末尾的 /）
    base_url: String,
    /// 令牌管理, 每次请求时读取
    tokens: Arc<TokenVault>,
}

impl HttpClient {
    /// 创建新的 HTTP 客户端
    pub fn new(base_url: &str, timeout: Duration, tokens: Arc<TokenVault>) -> Result<Self> {
        Url::parse(base_url)
            .map_err(|e| GatewayError::ConfigError(format!("无效的基础地址 '{}': {}", base_url, e)))?;

        let client = ClientBuilder::new().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn tokens(&self) -> &Arc<TokenVault> {
        &self.tokens
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 请求阶段: 存在令牌时附加 Bearer 认证头
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.read() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// 发送请求并解析响应体
    ///
    /// 所有请求都经过这里。失败时记录一次错误日志, 然后把同一个错误原样返回给调用方。
    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>> {
        self.execute(self.authorize(request))
            .await
            .inspect_err(|e| error!("API Error: {}", e.detail()))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>> {
        let response = request.send().await?;
        let status = response.status();
        debug!("{} -> {}", response.url(), status);

        if !status.is_success() {
            let body = response.bytes().await.ok().filter(|body| !body.is_empty());
            return Err(GatewayError::HttpStatus { status, body });
        }

        let data = response.json::<T>().await?;
        Ok(ApiResponse::new(data))
    }
}
