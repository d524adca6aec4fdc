use crate::dto::response::{AiStatus, ApiResponse, HistoryEntry};
use crate::error::Result;
use crate::http::client::HttpClient;

impl HttpClient {
    /// 查询 AI 服务状态
    pub async fn get_status(&self) -> Result<ApiResponse<AiStatus>> {
        self.dispatch(self.client.get(self.url("/api/status"))).await
    }

    /// 获取历史分析记录
    pub async fn get_history(&self) -> Result<ApiResponse<Vec<HistoryEntry>>> {
        self.dispatch(self.client.get(self.url("/api/history"))).await
    }
}
