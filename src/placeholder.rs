//! Deployment readiness: telling an operator-filled config apart from the
//! checked-in template.
//!
//! The example template ships with well-known placeholder literals
//! ("your_wifi_ssid" and friends). A device booted with any of them still in
//! place would fail in confusing ways deep inside a consumer, so loading
//! refuses to proceed once [`Config::ensure_deployed`] is asked.

use log::warn;

use crate::config::Config;
use crate::error::ConfigError;

// Placeholder literals from cfg.example.toml, per field.
const PLACEHOLDER_WIFI_SSID: &str = "your_wifi_ssid";
const PLACEHOLDER_WIFI_PASSWORD: &str = "your_wifi_password";
const PLACEHOLDER_MQTT_BROKER: &str = "mqtt.example.com";
const PLACEHOLDER_MQTT_USERNAME: &str = "your_username";
const PLACEHOLDER_MQTT_PASSWORD: &str = "your_password";
const PLACEHOLDER_BOT_TOKEN: &str = "your_bot_token";
const PLACEHOLDER_CHAT_ID: &str = "your_chat_id";

impl Config {
    /// Names of the fields still carrying a template placeholder, in field
    /// declaration order. Required credentials left empty count as unfilled
    /// too. Empty result means the record is operator-filled.
    pub fn unfilled_fields(&self) -> Vec<&'static str> {
        let mut unfilled = Vec::new();

        let checks: [(&'static str, bool); 7] = [
            (
                "wifi_ssid",
                self.wifi_ssid == PLACEHOLDER_WIFI_SSID || self.wifi_ssid.is_empty(),
            ),
            (
                "wifi_password",
                self.wifi_password.expose() == PLACEHOLDER_WIFI_PASSWORD
                    || self.wifi_password.is_empty(),
            ),
            ("mqtt_broker", self.mqtt_broker == PLACEHOLDER_MQTT_BROKER),
            (
                "mqtt_username",
                self.mqtt_username == PLACEHOLDER_MQTT_USERNAME,
            ),
            (
                "mqtt_password",
                self.mqtt_password.expose() == PLACEHOLDER_MQTT_PASSWORD,
            ),
            (
                "bot_token",
                self.bot_token.expose() == PLACEHOLDER_BOT_TOKEN || self.bot_token.is_empty(),
            ),
            (
                "chat_id",
                self.chat_id == PLACEHOLDER_CHAT_ID || self.chat_id.is_empty(),
            ),
        ];

        for (field, is_placeholder) in checks {
            if is_placeholder {
                unfilled.push(field);
            }
        }
        unfilled
    }

    pub fn is_deployment_ready(&self) -> bool {
        self.unfilled_fields().is_empty()
    }

    /// Fail fast if any placeholder survived into this record.
    pub fn ensure_deployed(&self) -> Result<(), ConfigError> {
        let unfilled = self.unfilled_fields();
        if unfilled.is_empty() {
            return Ok(());
        }
        for field in &unfilled {
            warn!("Config field {field} still holds its template placeholder");
        }
        Err(ConfigError::Unfilled(unfilled))
    }
}
