//! Configuration surface for the doorbell detection system.
//!
//! The firmware watching for the doorbell, the MQTT publisher and the chat
//! notifier all consume a single immutable [`Config`] record. This crate owns
//! that record's whole lifecycle on the host side:
//!
//! - parse the operator's private `cfg.toml` (copied from the checked-in
//!   `cfg.example.toml` template),
//! - overlay environment variables so secrets can stay out of files,
//! - validate ranges, topic syntax and pin assignments against the target
//!   board,
//! - refuse deployment while template placeholders are still present,
//! - emit the constants module the firmware bakes in at compile time.
//!
//! ```no_run
//! use doorbell_config::{Board, Config};
//!
//! # fn main() -> Result<(), doorbell_config::ConfigError> {
//! let config = Config::load("cfg.toml")?;
//! config.validate(Board::Esp8266)?;
//! config.ensure_deployed()?;
//! doorbell_config::codegen::write(&config, std::env::var("OUT_DIR").unwrap(), "cfg.toml")?;
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod codegen;
pub mod config;
pub mod error;
mod placeholder;
pub mod secret;
mod validate;

pub use board::Board;
pub use config::Config;
pub use error::ConfigError;
pub use secret::Secret;
