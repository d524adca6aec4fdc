use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use dashmap::DashMap;
use log::{debug, warn};

use super::TokenStore;
use crate::error::{GatewayError, Result};

/// 持久化存储 - 每个键对应目录下的一个文件, 跨进程保留
///
/// 读写使用同步的 `std::fs`, 并且直接在调用线程上执行。真实客户端每次请求都会读取令牌,
/// 因此令牌目录应位于本地磁盘; 慢速或网络文件系统会阻塞异步执行器。
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// 使用系统本地数据目录
    pub fn default_location() -> Result<Self> {
        let base = dirs::data_local_dir().ok_or_else(|| {
            GatewayError::ConfigError("无法确定本地数据目录".to_string())
        })?;
        Ok(Self::new(base.join(env!("CARGO_PKG_NAME"))))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.entry_path(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!("读取持久化令牌失败: {}", e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if !self.dir.exists() {
            debug!("创建令牌存储目录: {}", self.dir.display());
            fs::create_dir_all(&self.dir)?;
        }
        fs::write(self.entry_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// 会话存储 - 仅在当前进程内有效
#[derive(Debug, Default)]
pub struct SessionTokenStore {
    entries: DashMap<String, String>,
}

impl SessionTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for SessionTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
