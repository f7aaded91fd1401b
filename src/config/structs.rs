use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::client::SDK_VERSION;

/// Default settings file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "durablelinks.toml";

/// 静态配置（从 TOML 加载）
///
/// - allowed_hosts: durable-link domains accepted by the validator
/// - domain_prefix: default prefix for links built by the CLI
/// - sdk_version: version string forwarded to the backend
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub allowed_hosts: Vec<String>,
    #[serde(default)]
    pub domain_prefix: Option<String>,
    #[serde(default = "default_sdk_version")]
    pub sdk_version: String,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Load from [`DEFAULT_CONFIG_PATH`] and the environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 文件 > 默认值
    /// ENV 前缀：DL，分隔符：__，列表用逗号分隔
    /// 示例：DL__ALLOWED_HOSTS=acme.wayp.link,preview.acme.wayp.link
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        use config::{Config, Environment, File};

        Config::builder()
            // 1. 从文件加载（可选）
            .add_source(File::from(path.as_ref()).required(false))
            // 2. 从环境变量覆盖
            .add_source(
                Environment::with_prefix("DL")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("allowed_hosts"),
            )
            .build()?
            .try_deserialize()
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample = Self {
            allowed_hosts: vec![
                "acme.wayp.link".to_string(),
                "acme-preview.wayp.link".to_string(),
            ],
            domain_prefix: Some("https://acme.wayp.link".to_string()),
            ..Self::default()
        };
        toml::to_string_pretty(&sample)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allowed_hosts: Vec::new(),
            domain_prefix: None,
            sdk_version: default_sdk_version(),
            logging: LoggingConfig::default(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "text" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

fn default_sdk_version() -> String {
    SDK_VERSION.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}
