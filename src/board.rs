/// Target hardware the pin assignments are validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Board {
    /// ESP8266 (NodeMCU). GPIO 6-11 are wired to the flash chip and
    /// must not be reassigned.
    Esp8266,
    /// ESP32 devkit. GPIO 34-39 are input-only.
    Esp32,
}

// Usable GPIOs per target, flash/strapping pins excluded.
const ESP8266_GPIOS: &[u8] = &[0, 1, 2, 3, 4, 5, 12, 13, 14, 15, 16];
const ESP32_GPIOS: &[u8] = &[
    0, 1, 2, 3, 4, 5, 12, 13, 14, 15, 16, 17, 18, 19, 21, 22, 23, 25, 26, 27, 32, 33, 34, 35, 36,
    39,
];
const ESP32_INPUT_ONLY: &[u8] = &[34, 35, 36, 39];

impl Board {
    pub fn name(&self) -> &'static str {
        match self {
            Board::Esp8266 => "esp8266",
            Board::Esp32 => "esp32",
        }
    }

    /// Whether `pin` exists and is free for general use on this board.
    pub fn is_valid_gpio(&self, pin: u8) -> bool {
        match self {
            Board::Esp8266 => ESP8266_GPIOS.contains(&pin),
            Board::Esp32 => ESP32_GPIOS.contains(&pin),
        }
    }

    /// Whether `pin` can drive output. The DFPlayer TX line needs this.
    pub fn is_output_capable(&self, pin: u8) -> bool {
        match self {
            Board::Esp8266 => self.is_valid_gpio(pin),
            Board::Esp32 => self.is_valid_gpio(pin) && !ESP32_INPUT_ONLY.contains(&pin),
        }
    }
}
