use std::fmt;
use std::sync::Arc;

use crate::config::env_provider::EnvironmentProvider;
use crate::config::errors::ConfigError;

/// Infrastructure settings resolved once at startup.
///
/// Environment variables override the built-in defaults; there is no
/// persistent configuration source since nothing outlives the process.
pub struct BootstrapSettings {
    server_host: String,
    server_port: u16,
}

impl BootstrapSettings {
    /// Load bootstrap settings from the given environment provider
    pub fn from_env_provider(
        env: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ConfigError> {
        let server_host = env
            .get_var("HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let port_value = env.get_var("PORT").unwrap_or_else(|| "3000".to_string());
        let server_port: u16 = port_value.parse().map_err(|_| ConfigError::InvalidFormat {
            setting: "PORT",
            expected: "integer in 1-65535",
            actual: port_value.clone(),
        })?;
        if server_port == 0 {
            return Err(ConfigError::PortOutOfRange(port_value));
        }

        Ok(Self {
            server_host,
            server_port,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ConfigError> {
        use crate::config::env_provider::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env_provider::MockEnvironment;

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let settings =
            BootstrapSettings::from_env_provider(Arc::new(MockEnvironment::empty())).unwrap();

        assert_eq!(settings.server_host(), "0.0.0.0");
        assert_eq!(settings.server_port(), 3000);
        assert_eq!(settings.server_address(), "0.0.0.0:3000");
    }

    #[test]
    fn environment_overrides_defaults() {
        let env = MockEnvironment::empty()
            .with_var("HOST", "127.0.0.1")
            .with_var("PORT", "8080");

        let settings = BootstrapSettings::from_env_provider(Arc::new(env)).unwrap();

        assert_eq!(settings.server_address(), "127.0.0.1:8080");
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let env = MockEnvironment::empty().with_var("PORT", "not-a-port");

        let result = BootstrapSettings::from_env_provider(Arc::new(env));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidFormat { setting: "PORT", .. })
        ));
    }

    #[test]
    fn port_zero_is_rejected() {
        let env = MockEnvironment::empty().with_var("PORT", "0");

        let result = BootstrapSettings::from_env_provider(Arc::new(env));

        assert!(matches!(result, Err(ConfigError::PortOutOfRange(_))));
    }
}
