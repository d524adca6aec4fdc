// file_path: src/error.rs
use bytes::Bytes;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("HTTP status error: {status}")]
    HttpStatus {
        status: StatusCode,
        /// 服务端返回的原始错误体（原样字节, 未做解码）
        body: Option<Bytes>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl GatewayError {
    /// 用于日志的错误详情: 优先使用响应携带的错误体, 否则使用通用错误信息
    ///
    /// 错误体只在这里做有损解码, 返回给调用方的字节保持不变。
    pub fn detail(&self) -> String {
        match self {
            Self::HttpStatus {
                body: Some(body), ..
            } if !body.is_empty() => String::from_utf8_lossy(body).into_owned(),
            other => other.to_string(),
        }
    }

    /// 响应状态码（仅 HTTP 状态错误时存在）
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::NetworkError(e) => e.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_prefers_response_body() {
        let err = GatewayError::HttpStatus {
            status: StatusCode::UNAUTHORIZED,
            body: Some(Bytes::from_static(br#"{"error":"bad credentials"}"#)),
        };
        assert_eq!(err.detail(), r#"{"error":"bad credentials"}"#);
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_detail_falls_back_to_message() {
        let err = GatewayError::HttpStatus {
            status: StatusCode::BAD_GATEWAY,
            body: None,
        };
        assert_eq!(err.detail(), "HTTP status error: 502 Bad Gateway");

        let err = GatewayError::InvalidPath("missing.png".to_string());
        assert_eq!(err.detail(), "Invalid path: missing.png");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_detail_decodes_invalid_utf8_lossily() {
        let err = GatewayError::HttpStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: Some(Bytes::from_static(&[0xff, b'{', b'}'])),
        };
        assert_eq!(err.detail(), "\u{fffd}{}");
    }
}
