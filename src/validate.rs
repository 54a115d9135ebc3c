//! Range and hardware checks on a parsed record. The record itself performs
//! none of these on construction; consumers decide when to ask.

use crate::board::Board;
use crate::config::Config;
use crate::error::ConfigError;

// 802.11 caps SSIDs at 32 octets.
const MAX_SSID_LEN: usize = 32;

// DFPlayer Mini accepts volume levels 0 through 30.
const MAX_VOLUME: u8 = 30;

impl Config {
    /// Check every field constraint against the target board.
    ///
    /// Returns the first violation found, in field declaration order, so an
    /// operator fixes problems top to bottom.
    pub fn validate(&self, board: Board) -> Result<(), ConfigError> {
        if self.wifi_ssid.is_empty() {
            return Err(ConfigError::EmptyField("wifi_ssid"));
        }
        if self.wifi_ssid.len() > MAX_SSID_LEN {
            return Err(ConfigError::OutOfRange {
                field: "wifi_ssid length",
                value: self.wifi_ssid.len() as i64,
                min: 1,
                max: MAX_SSID_LEN as i64,
            });
        }
        if self.mqtt_broker.is_empty() {
            return Err(ConfigError::EmptyField("mqtt_broker"));
        }
        if self.mqtt_port == 0 {
            return Err(ConfigError::OutOfRange {
                field: "mqtt_port",
                value: 0,
                min: 1,
                max: u16::MAX as i64,
            });
        }
        validate_topic(&self.mqtt_topic)?;
        if self.mqtt_client_id.is_empty() {
            return Err(ConfigError::EmptyField("mqtt_client_id"));
        }
        if self.chat_id.is_empty() {
            return Err(ConfigError::EmptyField("chat_id"));
        }
        validate_pin("dfplayer_rx", self.dfplayer_rx, board)?;
        validate_pin("dfplayer_tx", self.dfplayer_tx, board)?;
        if self.dfplayer_rx == self.dfplayer_tx {
            return Err(ConfigError::PinConflict(self.dfplayer_rx));
        }
        if !board.is_output_capable(self.dfplayer_tx) {
            return Err(ConfigError::InvalidPin {
                field: "dfplayer_tx",
                pin: self.dfplayer_tx,
                board: board.name(),
            });
        }
        if self.dfplayer_volume > MAX_VOLUME {
            return Err(ConfigError::OutOfRange {
                field: "dfplayer_volume",
                value: self.dfplayer_volume as i64,
                min: 0,
                max: MAX_VOLUME as i64,
            });
        }
        Ok(())
    }
}

fn validate_pin(field: &'static str, pin: u8, board: Board) -> Result<(), ConfigError> {
    if board.is_valid_gpio(pin) {
        Ok(())
    } else {
        Err(ConfigError::InvalidPin {
            field,
            pin,
            board: board.name(),
        })
    }
}

// Publish topics must be non-empty, free of subscription wildcards and NUL.
fn validate_topic(topic: &str) -> Result<(), ConfigError> {
    let reason = if topic.is_empty() {
        "must not be empty"
    } else if topic.contains(['+', '#']) {
        "wildcards are not allowed in a publish topic"
    } else if topic.contains('\0') {
        "must not contain NUL"
    } else {
        return Ok(());
    };
    Err(ConfigError::InvalidTopic {
        topic: topic.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::FILLED;

    fn filled() -> Config {
        Config::from_toml_str(FILLED).unwrap()
    }

    #[test]
    fn filled_config_passes_on_esp8266() {
        filled().validate(Board::Esp8266).unwrap();
    }

    #[test]
    fn template_values_satisfy_the_range_checks() {
        let template = Config::from_toml_str(include_str!("../cfg.example.toml")).unwrap();
        assert!(template.mqtt_port >= 1);
        assert!(template.dfplayer_volume <= 30);
        assert_ne!(template.dfplayer_rx, template.dfplayer_tx);
        template.validate(Board::Esp8266).unwrap();
    }

    #[test]
    fn rejects_port_zero() {
        let mut config = filled();
        config.mqtt_port = 0;
        assert!(matches!(
            config.validate(Board::Esp8266),
            Err(ConfigError::OutOfRange {
                field: "mqtt_port",
                ..
            })
        ));
    }

    #[test]
    fn rejects_volume_above_thirty() {
        let mut config = filled();
        config.dfplayer_volume = 31;
        assert!(matches!(
            config.validate(Board::Esp8266),
            Err(ConfigError::OutOfRange {
                field: "dfplayer_volume",
                ..
            })
        ));
    }

    #[test]
    fn rejects_aliased_serial_pins() {
        let mut config = filled();
        config.dfplayer_tx = config.dfplayer_rx;
        assert!(matches!(
            config.validate(Board::Esp8266),
            Err(ConfigError::PinConflict(5))
        ));
    }

    #[test]
    fn rejects_flash_pins_on_esp8266() {
        let mut config = filled();
        config.dfplayer_rx = 9;
        assert!(matches!(
            config.validate(Board::Esp8266),
            Err(ConfigError::InvalidPin {
                field: "dfplayer_rx",
                pin: 9,
                ..
            })
        ));
    }

    #[test]
    fn rejects_input_only_tx_pin_on_esp32() {
        let mut config = filled();
        config.dfplayer_tx = 35;
        assert!(matches!(
            config.validate(Board::Esp32),
            Err(ConfigError::InvalidPin {
                field: "dfplayer_tx",
                pin: 35,
                ..
            })
        ));
    }

    #[test]
    fn rejects_wildcard_publish_topic() {
        let mut config = filled();
        config.mqtt_topic = "alarma/#".to_string();
        assert!(matches!(
            config.validate(Board::Esp8266),
            Err(ConfigError::InvalidTopic { .. })
        ));
    }

    #[test]
    fn rejects_empty_client_id() {
        let mut config = filled();
        config.mqtt_client_id.clear();
        assert!(matches!(
            config.validate(Board::Esp8266),
            Err(ConfigError::EmptyField("mqtt_client_id"))
        ));
    }
}
