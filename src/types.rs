use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, Result};

/// 网关运行模式 - 在构造时注入, 服务生命周期内不变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatewayMode {
    /// 返回内置的固定数据, 不访问网络
    Mock,
    /// 通过 HTTP 访问后端
    Live,
}

impl std::fmt::Display for GatewayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayMode::Mock => write!(f, "Mock"),
            GatewayMode::Live => write!(f, "Live"),
        }
    }
}

/// 上传进度事件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadProgress {
    /// 已上传量
    pub loaded: u64,
    /// 总量（模拟模式下固定为 100, 真实模式下为字节数）
    pub total: u64,
}

/// 上传进度回调
pub type ProgressCallback = Arc<dyn Fn(UploadProgress) + Send + Sync>;

/// 模拟上传的时间参数
#[derive(Debug, Clone)]
pub struct MockTimings {
    /// 进度定时器的触发间隔
    pub progress_interval: Duration,
    /// 每次触发增加的进度
    pub progress_step: u64,
    /// 上传完成前的固定延迟（与进度定时器相互独立）
    pub completion_delay: Duration,
}

impl Default for MockTimings {
    fn default() -> Self {
        Self {
            progress_interval: Duration::from_millis(100),
            progress_step: 10,
            completion_delay: Duration::from_millis(1200),
        }
    }
}

/// 网关配置
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// 运行模式
    pub mode: GatewayMode,
    /// 后端基础地址
    pub base_url: String,
    /// 请求超时时间
    pub timeout: Duration,
    /// 模拟模式的时间参数
    pub mock: MockTimings,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            mode: GatewayMode::Mock,
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(10),
            mock: MockTimings::default(),
        }
    }
}

impl GatewayConfig {
    /// 从环境变量读取配置, 未设置的项使用默认值
    ///
    /// * `SKIN_API_BASE` - 后端基础地址
    /// * `SKIN_API_MOCK` - `true`/`false`/`1`/`0`
    /// * `SKIN_API_TIMEOUT_SECS` - 超时秒数
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("SKIN_API_BASE") {
            config.base_url = base_url;
        }

        if let Ok(mock) = std::env::var("SKIN_API_MOCK") {
            config.mode = match mock.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => GatewayMode::Mock,
                "false" | "0" => GatewayMode::Live,
                other => {
                    return Err(GatewayError::ConfigError(format!(
                        "SKIN_API_MOCK 取值无效: {}",
                        other
                    )));
                }
            };
        }

        if let Ok(timeout) = std::env::var("SKIN_API_TIMEOUT_SECS") {
            let secs = timeout.trim().parse::<u64>().map_err(|e| {
                GatewayError::ConfigError(format!("SKIN_API_TIMEOUT_SECS 取值无效: {}", e))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// 检查配置是否可用
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(GatewayError::ConfigError("基础地址不能为空".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(GatewayError::ConfigError("请求超时时间不能为 0".to_string()));
        }
        if self.mock.progress_interval.is_zero() {
            return Err(GatewayError::ConfigError(
                "进度定时器间隔不能为 0".to_string(),
            ));
        }
        if self.mock.progress_step == 0 {
            return Err(GatewayError::ConfigError("进度步长不能为 0".to_string()));
        }
        Ok(())
    }
}
