pub mod config;
pub mod kv;
pub mod tasks;

use std::io;
use std::path::PathBuf;

/// 获取 ~/.tick/ 目录路径
pub fn tick_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Cannot find home directory")
        .join(".tick")
}

/// 确保 ~/.tick/ 目录存在
pub fn ensure_tick_dir() -> io::Result<PathBuf> {
    let path = tick_dir();
    std::fs::create_dir_all(&path)?;
    Ok(path)
}
