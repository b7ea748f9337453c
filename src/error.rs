//! Tick 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// Tick 错误类型
#[derive(Debug, Error)]
pub enum TickError {
    /// I/O 错误（文件读写、目录操作等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON 解析/序列化错误
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Tick Result 类型别名
pub type Result<T> = std::result::Result<T, TickError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let tick_err: TickError = io_err.into();
        assert!(matches!(tick_err, TickError::Io(_)));
        assert_eq!(tick_err.to_string(), "I/O error: file not found");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let tick_err: TickError = json_err.into();
        assert!(matches!(tick_err, TickError::Json(_)));
    }
}
