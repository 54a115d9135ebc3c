use std::{env, fs, path::Path};

use log::{debug, info};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::secret::Secret;

/// The configuration record consumed by the doorbell firmware.
///
/// Built once at startup from a private TOML file (copied from
/// `cfg.example.toml`) plus environment variable overrides, then passed by
/// reference to every subsystem that needs it. Never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Wi-Fi SSID to connect to
    pub wifi_ssid: String,

    // Wi-Fi pre-shared key (password)
    pub wifi_password: Secret,

    // MQTT broker hostname or IP address
    pub mqtt_broker: String,

    // MQTT port (usually 1883 or 8883 for TLS)
    pub mqtt_port: u16,

    // MQTT username for authentication (empty for anonymous brokers)
    #[serde(default)]
    pub mqtt_username: String,

    // MQTT password for authentication
    #[serde(default)]
    pub mqtt_password: Secret,

    // MQTT topic doorbell detection events are published to
    pub mqtt_topic: String,

    // Client ID identifying this device on the broker
    pub mqtt_client_id: String,

    // Telegram bot token used by the notification dispatcher
    pub bot_token: Secret,

    // Telegram chat ID notifications are sent to
    pub chat_id: String,

    // DFPlayer Mini serial pins
    pub dfplayer_rx: u8,
    pub dfplayer_tx: u8,

    // DFPlayer Mini volume (0-30)
    pub dfplayer_volume: u8,

    // Enable debug output over serial
    pub debug: bool,
}

impl Config {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let toml_str = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&toml_str)
    }

    /// Read the config file and overlay environment variables on top.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path.as_ref())?;
        config.apply_env()?;
        info!(
            "Loaded config for broker {}:{} (client id {})",
            config.mqtt_broker, config.mqtt_port, config.mqtt_client_id
        );
        Ok(config)
    }

    /// Overlay environment variables onto the record. Every field can be
    /// overridden; in deployments where secrets must stay out of files
    /// entirely, the file carries placeholders and the environment carries
    /// the credentials.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        override_string("WIFI_SSID", &mut self.wifi_ssid);
        override_secret("WIFI_PASSWORD", &mut self.wifi_password);
        override_string("MQTT_BROKER", &mut self.mqtt_broker);
        override_parsed("MQTT_PORT", &mut self.mqtt_port)?;
        override_string("MQTT_USERNAME", &mut self.mqtt_username);
        override_secret("MQTT_PASSWORD", &mut self.mqtt_password);
        override_string("MQTT_TOPIC", &mut self.mqtt_topic);
        override_string("MQTT_CLIENT_ID", &mut self.mqtt_client_id);
        override_secret("BOT_TOKEN", &mut self.bot_token);
        override_string("CHAT_ID", &mut self.chat_id);
        override_parsed("DFPLAYER_RX", &mut self.dfplayer_rx)?;
        override_parsed("DFPLAYER_TX", &mut self.dfplayer_tx)?;
        override_parsed("DFPLAYER_VOLUME", &mut self.dfplayer_volume)?;
        override_bool("DEBUG", &mut self.debug)?;
        Ok(())
    }
}

fn override_string(key: &'static str, target: &mut String) {
    if let Ok(value) = env::var(key) {
        debug!("Overriding {key} from environment");
        *target = value;
    }
}

fn override_secret(key: &'static str, target: &mut Secret) {
    if let Ok(value) = env::var(key) {
        debug!("Overriding {key} from environment");
        *target = Secret::new(value);
    }
}

fn override_parsed<T: std::str::FromStr>(
    key: &'static str,
    target: &mut T,
) -> Result<(), ConfigError> {
    if let Ok(value) = env::var(key) {
        debug!("Overriding {key} from environment");
        *target = value.parse().map_err(|_| ConfigError::Env { key, value })?;
    }
    Ok(())
}

fn override_bool(key: &'static str, target: &mut bool) -> Result<(), ConfigError> {
    if let Ok(value) = env::var(key) {
        debug!("Overriding {key} from environment");
        *target = match value.as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            _ => return Err(ConfigError::Env { key, value }),
        };
    }
    Ok(())
}
