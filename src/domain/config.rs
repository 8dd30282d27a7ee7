use serde::{Deserialize, Serialize};

/// Introspect CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntrospectConfig {
    /// Global configuration
    #[serde(default)]
    pub global: GlobalConfig,
    /// Introspect ports of the queried nodes
    #[serde(default)]
    pub ports: PortConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// HTTP request timeout in milliseconds
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
    /// Hosts file used to override DNS resolution
    #[serde(default)]
    pub hosts_file: Option<String>,
}

/// Introspect ports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortConfig {
    /// vrouter agent introspect port
    #[serde(default = "default_agent_port")]
    pub agent: u16,
    /// Controller introspect port
    #[serde(default = "default_controller_port")]
    pub controller: u16,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    10_000
}

fn default_agent_port() -> u16 {
    8085
}

fn default_controller_port() -> u16 {
    8083
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            timeout_ms: default_timeout(),
            hosts_file: None,
        }
    }
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            agent: default_agent_port(),
            controller: default_controller_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = IntrospectConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: IntrospectConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.ports, config.ports);
    }

    #[test]
    fn test_partial_config() {
        let config: IntrospectConfig = toml::from_str(
            r#"
            [ports]
            agent = 18085
            "#,
        )
        .unwrap();

        assert_eq!(config.ports.agent, 18085);
        assert_eq!(config.ports.controller, 8083);
        assert_eq!(config.global.log_level, "info");
        assert_eq!(config.global.timeout_ms, 10_000);
    }

    #[test]
    fn test_hosts_file_setting() {
        let config: IntrospectConfig = toml::from_str(
            r#"
            [global]
            hosts_file = "/etc/introspect/hosts"
            "#,
        )
        .unwrap();

        assert_eq!(config.global.hosts_file.as_deref(), Some("/etc/introspect/hosts"));
    }
}
