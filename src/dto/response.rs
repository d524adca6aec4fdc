use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// 所有操作统一的响应信封
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

/// 注册/登录响应
/// 注册 - POST /auth/register 的响应
/// 登录 - POST /auth/login 的响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// 可选消息（注册时返回）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 凭证令牌
    pub token: String,
}

/// 图片上传分析响应
/// 上传 - POST /api/upload 的响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// 处理状态
    pub status: String,
    /// 序列化后的分析结果, 网关不解释其内容
    pub result: String,
    /// ISO-8601 时间戳
    pub timestamp: String,
}

impl UploadResponse {
    /// 将分析结果解析为 JSON
    pub fn analysis(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.result)?)
    }
}

/// AI 服务状态
/// 状态检查 - GET /api/status 的响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiStatus {
    pub ai_status: String,
}

/// 历史记录中的单条分析
/// 历史 - GET /api/history 的响应元素
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 记录ID
    pub id: String,
    /// 序列化后的分析结果
    pub result: String,
    /// ISO-8601 时间戳
    pub date: String,
}

impl HistoryEntry {
    /// 将分析结果解析为 JSON
    pub fn analysis(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.result)?)
    }
}
