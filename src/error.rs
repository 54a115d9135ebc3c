use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value in environment variable {key}: {value:?}")]
    Env { key: &'static str, value: String },

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("{field} is {value}, expected {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{field} pin {pin} is not a usable GPIO on {board}")]
    InvalidPin {
        field: &'static str,
        pin: u8,
        board: &'static str,
    },

    #[error("dfplayer_rx and dfplayer_tx both assigned to pin {0}")]
    PinConflict(u8),

    #[error("invalid mqtt_topic {topic:?}: {reason}")]
    InvalidTopic { topic: String, reason: &'static str },

    #[error("placeholder values still present in: {}", .0.join(", "))]
    Unfilled(Vec<&'static str>),
}
