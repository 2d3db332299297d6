//! 应用配置管理
//!
//! 从可执行文件旁的 config.json 加载配置，再用环境变量覆盖，进程内只读取一次。

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::warn;

use crate::error::AppError;
use crate::llm::GenerationOptions;

/// 获取配置文件路径
fn get_config_path() -> PathBuf {
    // 配置文件位于可执行文件同级目录
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.json")
}

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gemini API 密钥
    #[serde(default)]
    pub api_key: String,

    /// Gemini API 基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 模型名称
    #[serde(default = "default_model")]
    pub model: String,

    /// 温度参数 (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// 最大输出 token 数
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8765
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl AppConfig {
    /// 生成参数
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            temperature: Some(self.temperature),
            max_output_tokens: Some(self.max_tokens),
        }
    }

    /// 监听地址
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port).parse().map_err(|e| {
            AppError::Config(format!("无效的监听地址 {}:{}: {}", self.host, self.port, e))
        })
    }

    /// 用环境变量覆盖配置
    ///
    /// 空字符串视为未设置
    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(api_key) = get("GEMINI_API_KEY") {
            self.api_key = api_key;
        }
        if let Some(model) = get("GEMINI_MODEL") {
            self.model = model;
        }
        if let Some(base_url) = get("GEMINI_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(host) = get("QUICKEATS_HOST") {
            self.host = host;
        }
        if let Some(port) = get("QUICKEATS_PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => warn!("Ignoring invalid QUICKEATS_PORT: {}", port),
            }
        }
    }
}

/// 全局配置单例
static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

/// 从文件加载配置
fn load_config_from_file() -> Option<AppConfig> {
    let path = get_config_path();
    if path.exists() {
        let content = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    } else {
        None
    }
}

/// 加载配置：文件优先，环境变量覆盖
fn load_config() -> AppConfig {
    let mut config = load_config_from_file().unwrap_or_default();
    config.apply_env(|key| std::env::var(key).ok());
    config
}

/// 获取当前配置（克隆）
pub fn get_config() -> AppConfig {
    CONFIG.clone()
}
