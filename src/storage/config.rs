//! 应用配置持久化

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::{ensure_tick_dir, tick_dir};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        // 原版默认深色
        Self {
            name: "Dark".to_string(),
        }
    }
}

/// 获取配置文件路径
fn config_path() -> PathBuf {
    tick_dir().join("config.toml")
}

/// 加载配置（不存在或损坏则返回默认值）
pub fn load_config() -> Config {
    let path = config_path();
    if !path.exists() {
        return Config::default();
    }
    try_load_config(&path).unwrap_or_default()
}

fn try_load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    ensure_tick_dir()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(config_path(), content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_toml_round_trip() {
        let config = Config {
            theme: ThemeConfig {
                name: "Light".to_string(),
            },
        };
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed.theme.name, "Light");
    }

    #[test]
    fn test_config_defaults_to_dark_theme() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme.name, "Dark");
    }
}
