use bytes::Bytes;
use futures::StreamExt;
use futures::stream;
use mime_guess::mime::{self, Mime};
use reqwest::Body;
use reqwest::multipart::{Form, Part};

use crate::dto::request::UploadFile;
use crate::dto::response::{ApiResponse, UploadResponse};
use crate::error::Result;
use crate::http::client::HttpClient;
use crate::types::{ProgressCallback, UploadProgress};

/// 上传时每个分片的大小
const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// 把文件内容切成分片流, 每个分片被发送时回调一次已发送的字节数
fn progress_body(bytes: Bytes, on_progress: Option<ProgressCallback>) -> Body {
    let total = bytes.len() as u64;
    let chunks: Vec<Bytes> = (0..bytes.len())
        .step_by(UPLOAD_CHUNK_SIZE)
        .map(|start| bytes.slice(start..(start + UPLOAD_CHUNK_SIZE).min(bytes.len())))
        .collect();

    let mut loaded = 0u64;
    let stream = stream::iter(chunks).map(move |chunk| {
        loaded += chunk.len() as u64;
        if let Some(callback) = &on_progress {
            callback(UploadProgress { loaded, total });
        }
        Ok::<Bytes, std::io::Error>(chunk)
    });

    Body::wrap_stream(stream)
}

impl HttpClient {
    /// 上传图片 - multipart, 单个字段 file
    pub async fn upload_image(
        &self,
        file: UploadFile,
        on_progress: Option<ProgressCallback>,
    ) -> Result<ApiResponse<UploadResponse>> {
        let total = file.len();
        let mime_type = file
            .mime_type
            .parse::<Mime>()
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);

        let part = Part::stream_with_length(progress_body(file.bytes, on_progress), total)
            .file_name(file.file_name)
            .mime_str(mime_type.as_ref())?;
        let form = Form::new().part("file", part);

        self.dispatch(self.client.post(self.url("/api/upload")).multipart(form))
            .await
    }
}
