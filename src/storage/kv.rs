//! 文件后端的 key-value 存储
//!
//! 每个 key 对应一个 `{key}.json` 文件，值为原始字符串。
//! 读写失败以错误形式返回，由调用方决定如何处理。

use std::path::PathBuf;

use crate::error::Result;

use super::tick_dir;

/// 以目录为根的 key-value 存储
#[derive(Debug, Clone)]
pub struct KvStore {
    root: PathBuf,
}

impl KvStore {
    /// 以指定目录为根创建存储（测试时传入临时目录）
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 默认存储根目录: ~/.tick/
    pub fn open_default() -> Self {
        Self::new(tick_dir())
    }

    /// key 对应的文件路径
    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    /// 读取 key 对应的值，key 不存在返回 None
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    /// 写入 key 对应的值（整体覆盖）
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_key_returns_none() {
        let dir = TempDir::new().unwrap();
        let kv = KvStore::new(dir.path());
        assert!(kv.get("tasks").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let kv = KvStore::new(dir.path());
        kv.set("tasks", "[]").unwrap();
        assert_eq!(kv.get("tasks").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let dir = TempDir::new().unwrap();
        let kv = KvStore::new(dir.path());
        kv.set("tasks", "old").unwrap();
        kv.set("tasks", "new").unwrap();
        assert_eq!(kv.get("tasks").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_set_creates_root_dir() {
        let dir = TempDir::new().unwrap();
        let kv = KvStore::new(dir.path().join("nested"));
        kv.set("tasks", "[]").unwrap();
        assert_eq!(kv.get("tasks").unwrap().as_deref(), Some("[]"));
    }
}
