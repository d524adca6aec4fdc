use log::{debug, info};
use mime_guess::from_path;
use std::path::Path;

use crate::dto::request::UploadFile;
use crate::error::{GatewayError, Result};

/// 从磁盘读取待上传的图片
///
/// # 参数
/// * `path` - 文件路径
///
/// # 返回
/// * `Result<UploadFile>` - 文件名、MIME类型和内容, 或错误
pub async fn load_upload_file<P: AsRef<Path>>(path: P) -> Result<UploadFile> {
    let path = path.as_ref();

    // 检查路径是否存在
    if !path.exists() {
        return Err(GatewayError::InvalidPath(format!(
            "路径不存在: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(GatewayError::InvalidPath(format!(
            "路径不是文件: {}",
            path.display()
        )));
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| GatewayError::InvalidPath(format!("无法获取文件名: {}", path.display())))?
        .to_string_lossy()
        .to_string();

    let mime_type = from_path(path).first_or_octet_stream().to_string();
    let bytes = tokio::fs::read(path).await?;

    debug!(
        "读取上传文件: {} (大小: {} 字节, 类型: {})",
        file_name,
        bytes.len(),
        mime_type
    );
    info!("已加载待分析图片: {}", path.display());

    Ok(UploadFile::new(&file_name, &mime_type, bytes))
}

impl UploadFile {
    /// 从磁盘读取文件, 见 [`load_upload_file`]
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_upload_file(path).await
    }
}
