//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 提供简洁的本地存储接口，
//! 并附带 serde_json 的类型化读写（用于持久化登录身份）。

use serde::Serialize;
use serde::de::DeserializeOwned;

/// 本地存储操作封装
///
/// 提供静态方法访问浏览器 LocalStorage API。
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 获取存储的字符串值
    ///
    /// # 返回
    /// - `Some(String)` 如果键存在且有值
    /// - `None` 如果键不存在或发生错误
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 设置存储值
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除存储的键值对
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }

    /// 读取并反序列化 JSON 值；键不存在或解析失败时返回 `None`
    pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
        let raw = Self::get(key)?;
        serde_json::from_str(&raw).ok()
    }

    /// 序列化并写入 JSON 值
    pub fn set_json<T: Serialize>(key: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(raw) => Self::set(key, &raw),
            Err(_) => false,
        }
    }
}
