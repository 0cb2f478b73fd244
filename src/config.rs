use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailJsConfig {
    #[serde(default = "default_emailjs_endpoint")]
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    /// Public key of the EmailJS account, sent as `user_id`
    pub public_key: String,
    /// Private key, required when the account enforces strict mode for
    /// non-browser calls
    #[serde(default)]
    pub private_key: Option<String>,
}

fn default_emailjs_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// WhatsApp number (country code + area code + number, digits only)
    #[serde(default = "default_whatsapp")]
    pub whatsapp: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp: default_whatsapp(),
        }
    }
}

fn default_whatsapp() -> String {
    "5511999999999".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PANTHEO__EMAILJS__SERVICE_ID, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("emailjs.service_id", "service_lf5pj8z")?
            .set_default("emailjs.template_id", "contact_form")?
            .set_default("emailjs.public_key", "")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PANTHEO")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(public_key) = env::var("EMAILJS_PUBLIC_KEY") {
            builder = builder.set_override("emailjs.public_key", public_key)?;
        }
        if let Ok(private_key) = env::var("EMAILJS_PRIVATE_KEY") {
            builder = builder.set_override("emailjs.private_key", private_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.emailjs.service_id.is_empty() || self.emailjs.template_id.is_empty() {
            return Err("EmailJS service_id and template_id are required".to_string());
        }
        if self.emailjs.public_key.is_empty() {
            return Err("EmailJS public_key is required".to_string());
        }
        if self.contact.whatsapp.is_empty()
            || !self.contact.whatsapp.chars().all(|c| c.is_ascii_digit())
        {
            return Err("WhatsApp number must contain digits only".to_string());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown log format '{}', expected 'pretty' or 'json'",
                self.logging.format
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            emailjs: EmailJsConfig {
                endpoint: default_emailjs_endpoint(),
                service_id: "service_test".to_string(),
                template_id: "contact_form".to_string(),
                public_key: "public_test".to_string(),
                private_key: None,
            },
            contact: ContactConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_missing_public_key() {
        let mut config = config();
        config.emailjs.public_key = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_whatsapp_with_symbols() {
        let mut config = config();
        config.contact.whatsapp = "+55 (11) 99999-9999".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unknown_log_format() {
        let mut config = config();
        config.logging.format = "xml".to_string();

        assert!(config.validate().is_err());
    }
}
