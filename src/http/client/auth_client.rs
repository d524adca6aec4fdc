use crate::dto::request::Credentials;
use crate::dto::response::{ApiResponse, AuthResponse};
use crate::error::Result;
use crate::http::client::HttpClient;

impl HttpClient {
    /// 注册新用户
    pub async fn register(&self, credentials: &Credentials) -> Result<ApiResponse<AuthResponse>> {
        let request = self.client.post(self.url("/auth/register")).json(credentials);
        self.dispatch(request).await
    }

    /// 用户登录
    pub async fn login(&self, credentials: &Credentials) -> Result<ApiResponse<AuthResponse>> {
        let request = self.client.post(self.url("/auth/login")).json(credentials);
        self.dispatch(request).await
    }
}
