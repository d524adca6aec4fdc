mod store;

pub use store::{FileTokenStore, SessionTokenStore};

use log::debug;
use std::path::Path;

use crate::error::Result;

/// 令牌在存储中的固定键
pub const TOKEN_KEY: &str = "token";

/// 键值存储策略
pub trait TokenStore: Send + Sync {
    /// 读取键对应的值
    fn get(&self, key: &str) -> Option<String>;

    /// 写入键值
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// 删除键, 键不存在时不报错
    fn remove(&self, key: &str) -> Result<()>;
}

/// 凭证令牌管理 - 持久化存储与会话存储
///
/// 读取时总是先查持久化存储, 再查会话存储。若会话中写入了新令牌而持久化存储里
/// 还留有旧令牌, 读到的是旧令牌。
pub struct TokenVault {
    durable: Box<dyn TokenStore>,
    session: Box<dyn TokenStore>,
}

impl TokenVault {
    pub fn new(durable: Box<dyn TokenStore>, session: Box<dyn TokenStore>) -> Self {
        Self { durable, session }
    }

    /// 以指定目录作为持久化存储
    pub fn with_directory<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(
            Box::new(FileTokenStore::new(dir)),
            Box::new(SessionTokenStore::new()),
        )
    }

    /// 使用系统本地数据目录作为持久化存储
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(
            Box::new(FileTokenStore::default_location()?),
            Box::new(SessionTokenStore::new()),
        ))
    }

    /// 两个存储都只保存在内存中
    pub fn session_only() -> Self {
        Self::new(
            Box::new(SessionTokenStore::new()),
            Box::new(SessionTokenStore::new()),
        )
    }

    fn store_for(&self, remember: bool) -> &dyn TokenStore {
        if remember {
            self.durable.as_ref()
        } else {
            self.session.as_ref()
        }
    }

    /// 保存令牌, `remember` 为真时写入持久化存储, 否则写入会话存储
    pub fn save(&self, token: &str, remember: bool) -> Result<()> {
        debug!("保存令牌 (remember={})", remember);
        self.store_for(remember).set(TOKEN_KEY, token)
    }

    /// 读取当前令牌, 空字符串视为不存在
    pub fn read(&self) -> Option<String> {
        self.durable
            .get(TOKEN_KEY)
            .filter(|token| !token.is_empty())
            .or_else(|| self.session.get(TOKEN_KEY).filter(|token| !token.is_empty()))
    }

    /// 从两个存储中清除令牌
    pub fn clear(&self) -> Result<()> {
        debug!("清除令牌");
        let durable = self.durable.remove(TOKEN_KEY);
        let session = self.session.remove(TOKEN_KEY);
        durable.and(session)
    }
}

impl Default for TokenVault {
    fn default() -> Self {
        Self::session_only()
    }
}
