//! 配置加载
//!
//! 先读取 TOML 配置文件（`CONFIG_PATH`，默认 `config.toml`，不存在时使用默认值），
//! 再用环境变量覆盖。`GROUP_NAME` 必须提供。

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// webhook 注册到 cert-manager 的 API 组名
    pub group_name: String,
    pub server: ServerConfig,
    pub bunny: BunnyConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 0 表示使用 CPU 核数
    pub workers: usize,
    pub tls_cert_file: Option<String>,
    pub tls_key_file: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 443,
            workers: 0,
            tls_cert_file: None,
            tls_key_file: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BunnyConfig {
    pub api_base: String,
    pub request_timeout_secs: u64,
}

impl Default for BunnyConfig {
    fn default() -> Self {
        Self {
            api_base: bunny_solver_core::BUNNY_API_BASE.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl BunnyConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl AppConfig {
    /// 加载配置
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        let mut config = Self::from_file(Path::new(&path))?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("解析配置文件失败: {}", path.display()))
    }

    /// 环境变量覆盖
    fn apply_env<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("GROUP_NAME") {
            self.group_name = v;
        }
        if let Some(v) = lookup("SERVER_HOST") {
            self.server.host = v;
        }
        if let Some(v) = lookup("SERVER_PORT") {
            self.server.port = v.parse().context("SERVER_PORT 必须是端口号")?;
        }
        if let Some(v) = lookup("SERVER_WORKERS") {
            self.server.workers = v.parse().context("SERVER_WORKERS 必须是整数")?;
        }
        if let Some(v) = lookup("TLS_CERT_FILE") {
            self.server.tls_cert_file = Some(v);
        }
        if let Some(v) = lookup("TLS_KEY_FILE") {
            self.server.tls_key_file = Some(v);
        }
        if let Some(v) = lookup("BUNNY_API_BASE") {
            self.bunny.api_base = v;
        }
        if let Some(v) = lookup("BUNNY_REQUEST_TIMEOUT_SECS") {
            self.bunny.request_timeout_secs =
                v.parse().context("BUNNY_REQUEST_TIMEOUT_SECS 必须是整数")?;
        }
        Ok(())
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.group_name.trim().is_empty() {
            bail!("GROUP_NAME must be specified");
        }
        if self.server.tls_cert_file.is_some() != self.server.tls_key_file.is_some() {
            bail!("TLS_CERT_FILE 和 TLS_KEY_FILE 必须同时配置");
        }
        Ok(())
    }
}
