use std::fmt;

/// The deployment environment a process runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "DEV",
            Environment::Staging => "STAGING",
            Environment::Production => "PROD",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-wide configuration.
///
/// Built once by the caller (normally `main`) and passed down explicitly.
/// There is no mutation operation; any two configs built for the same
/// environment compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    environment: Environment,
}

impl Config {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn is_dev(&self) -> bool {
        self.environment == Environment::Dev
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Environment::Dev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs_compare_equal() {
        let a = Config::default();
        let b = Config::default();
        assert_eq!(a, b);
        assert_eq!(a.environment(), b.environment());
    }

    #[test]
    fn test_default_environment_label() {
        let config = Config::default();
        assert_eq!(config.environment().as_str(), "DEV");
        assert!(config.is_dev());
    }

    #[test]
    fn test_environment_labels() {
        assert_eq!(Environment::Staging.to_string(), "STAGING");
        assert_eq!(Environment::Production.to_string(), "PROD");
    }
}
