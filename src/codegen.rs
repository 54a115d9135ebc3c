//! Firmware-side constants generation.
//!
//! The firmware build script loads the operator's `cfg.toml`, validates it,
//! and writes the result to `OUT_DIR/config.rs`, which the firmware pulls in
//! with `include!`. Values are baked in at compile time; nothing is parsed on
//! the device.

use std::{fs, path::Path};

use crate::config::Config;
use crate::error::ConfigError;

/// Render the record as a Rust constants module.
pub fn emit(config: &Config) -> String {
    format!(
        r#"// Generated from the doorbell configuration file. Do not edit.
pub const WIFI_SSID: &str = {ssid:?};
pub const WIFI_PASSWORD: &str = {psk:?};
pub const MQTT_BROKER: &str = {broker:?};
pub const MQTT_PORT: u16 = {port};
pub const MQTT_USERNAME: &str = {user:?};
pub const MQTT_PASSWORD: &str = {pass:?};
pub const MQTT_TOPIC: &str = {topic:?};
pub const MQTT_CLIENT_ID: &str = {client_id:?};
pub const BOT_TOKEN: &str = {bot_token:?};
pub const CHAT_ID: &str = {chat_id:?};
pub const DFPLAYER_RX: u8 = {rx};
pub const DFPLAYER_TX: u8 = {tx};
pub const DFPLAYER_VOLUME: u8 = {volume};
pub const DEBUG: bool = {debug};
"#,
        ssid = config.wifi_ssid,
        psk = config.wifi_password.expose(),
        broker = config.mqtt_broker,
        port = config.mqtt_port,
        user = config.mqtt_username,
        pass = config.mqtt_password.expose(),
        topic = config.mqtt_topic,
        client_id = config.mqtt_client_id,
        bot_token = config.bot_token.expose(),
        chat_id = config.chat_id,
        rx = config.dfplayer_rx,
        tx = config.dfplayer_tx,
        volume = config.dfplayer_volume,
        debug = config.debug,
    )
}

/// Write the generated module to `out_dir/config.rs` for a firmware build
/// script. Emits the rerun line so Cargo notices edits to the source file.
pub fn write(config: &Config, out_dir: impl AsRef<Path>, source: &str) -> Result<(), ConfigError> {
    println!("cargo:rerun-if-changed={source}");
    let dest_path = out_dir.as_ref().join("config.rs");
    fs::write(dest_path, emit(config))?;
    Ok(())
}
