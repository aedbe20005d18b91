use anyhow::Context;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub app: AppSection,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub lists: ListsConfig,
    #[serde(default)]
    pub customers: CustomersConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Неизвестное значение уровня трактуется как `Debug`
    pub fn log_level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListsConfig {
    pub page_size: usize,
    pub recent_count: usize,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            recent_count: 5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CustomersConfig {
    pub active_window_days: u64,
}

impl Default for CustomersConfig {
    fn default() -> Self {
        Self {
            active_window_days: 90,
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[app]
title = "TailorPro"
subtitle = "Measurement Management"

[logging]
level = "debug"

[lists]
page_size = 10
recent_count = 5

[customers]
active_window_days = 90
"#;

/// Id of the `<script type="application/toml">` block that overrides the defaults
pub const CONFIG_ELEMENT_ID: &str = "app-config";

static EMBEDDED: Lazy<AppConfig> = Lazy::new(|| {
    toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|_| AppConfig {
        app: AppSection {
            title: "TailorPro".to_string(),
            subtitle: String::new(),
        },
        logging: LoggingConfig::default(),
        lists: ListsConfig::default(),
        customers: CustomersConfig::default(),
    })
});

pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).context("invalid app config")?;
    Ok(config)
}

pub fn default_config() -> AppConfig {
    EMBEDDED.clone()
}

/// Откуда взята конфигурация; логируется после инициализации логгера
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    Page,
    Embedded,
    /// Блок в странице есть, но не разобрался
    InvalidPage(String),
}

/// Load configuration
///
/// Search order:
/// 1. `<script type="application/toml" id="app-config">` in the host page
/// 2. Falls back to embedded default config
pub fn load_config() -> (AppConfig, ConfigSource) {
    match page_config_text() {
        Some(text) => match parse_config(&text) {
            Ok(config) => (config, ConfigSource::Page),
            Err(e) => (default_config(), ConfigSource::InvalidPage(format!("{:#}", e))),
        },
        None => (default_config(), ConfigSource::Embedded),
    }
}

pub fn log_config_source(source: &ConfigSource) {
    match source {
        ConfigSource::Page => log::info!("Loading config from #{}", CONFIG_ELEMENT_ID),
        ConfigSource::Embedded => log::info!("Using default embedded configuration"),
        ConfigSource::InvalidPage(e) => {
            log::warn!("{}; using default embedded configuration", e)
        }
    }
}

fn page_config_text() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.app.title, "TailorPro");
        assert_eq!(config.lists.page_size, 10);
        assert_eq!(config.customers.active_window_days, 90);
        assert_eq!(config.logging.log_level(), log::Level::Debug);
        assert_eq!(default_config(), config);
    }

    #[test]
    fn test_partial_config_uses_section_defaults() {
        let config = parse_config("[app]\ntitle = \"Atelier\"\n").unwrap();
        assert_eq!(config.app.title, "Atelier");
        assert_eq!(config.app.subtitle, "");
        assert_eq!(config.lists, ListsConfig::default());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(parse_config("[lists]\npage_size = \"many\"").is_err());
        assert!(parse_config("").is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        let logging = LoggingConfig {
            level: "warn".to_string(),
        };
        assert_eq!(logging.log_level(), log::Level::Warn);
        let logging = LoggingConfig {
            level: "loud".to_string(),
        };
        assert_eq!(logging.log_level(), log::Level::Debug);
    }
}
