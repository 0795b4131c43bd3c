use thiserror::Error;

/// Failures while assembling the bootstrap configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {setting}: expected {expected}, got '{actual}'")]
    InvalidFormat {
        setting: &'static str,
        expected: &'static str,
        actual: String,
    },

    #[error("Port {0} is outside the valid range 1-65535")]
    PortOutOfRange(String),
}
