use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// 注册/登录请求体
/// 注册 - POST /auth/register
/// 登录 - POST /auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// 用户名（不做校验）
    pub username: String,
    /// 密码（不做校验）
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

/// 待分析的图片文件
/// 上传 - POST /api/upload (multipart, 字段名 file)
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// 文件名
    pub file_name: String,
    /// MIME类型
    pub mime_type: String,
    /// 文件内容
    pub bytes: Bytes,
}

impl UploadFile {
    pub fn new(file_name: &str, mime_type: &str, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            bytes: bytes.into(),
        }
    }

    /// 文件大小（字节）
    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
