//! Hosts file used to override DNS resolution of introspect nodes.

use crate::domain::error::{IntrospectError, IntrospectResult};
use std::collections::BTreeMap;
use std::fs;
use std::net::IpAddr;
use std::path::Path;
use tracing::debug;

/// Name to address map read from an `/etc/hosts`-style file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostMap {
    entries: BTreeMap<String, IpAddr>,
}

impl HostMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a hosts file
    pub fn load(path: &Path) -> IntrospectResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| IntrospectError::Config {
            message: format!("Failed to read hosts file {}: {}", path.display(), e),
        })?;
        let hosts = Self::parse(&content)?;
        debug!(path = %path.display(), names = hosts.len(), "hosts file loaded");
        Ok(hosts)
    }

    /// Parse hosts file content: `<ip> <name> [aliases...]` per line
    pub fn parse(content: &str) -> IntrospectResult<Self> {
        let mut hosts = Self::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            let address = fields.next().unwrap_or_default();
            let ip: IpAddr = address.parse().map_err(|_| IntrospectError::Hosts {
                line: index + 1,
                message: format!("invalid address '{}'", address),
            })?;

            let mut named = false;
            for name in fields {
                hosts.insert(name, ip);
                named = true;
            }
            if !named {
                return Err(IntrospectError::Hosts {
                    line: index + 1,
                    message: format!("no host name for {}", ip),
                });
            }
        }

        Ok(hosts)
    }

    pub fn insert(&mut self, name: &str, ip: IpAddr) {
        self.entries.insert(name.to_ascii_lowercase(), ip);
    }

    /// Address of `name`, if the file lists it
    pub fn resolve(&self, name: &str) -> Option<IpAddr> {
        self.entries.get(&name.to_ascii_lowercase()).copied()
    }

    /// Known names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, IpAddr)> {
        self.entries.iter().map(|(name, ip)| (name.as_str(), *ip))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HOSTS: &str = "\
# compute nodes
10.0.0.11   compute1.lab.net compute1
10.0.0.12   compute2.lab.net   # second node

fd00::21    ctrl1.lab.net
";

    #[test]
    fn test_parse_hosts() {
        let hosts = HostMap::parse(HOSTS).unwrap();

        assert_eq!(hosts.len(), 4);
        assert_eq!(hosts.resolve("compute1"), Some("10.0.0.11".parse().unwrap()));
        assert_eq!(hosts.resolve("COMPUTE2.lab.net"), Some("10.0.0.12".parse().unwrap()));
        assert_eq!(hosts.resolve("ctrl1.lab.net"), Some("fd00::21".parse().unwrap()));
        assert_eq!(hosts.resolve("unknown"), None);
    }

    #[test]
    fn test_names_sorted() {
        let hosts = HostMap::parse(HOSTS).unwrap();
        let names: Vec<_> = hosts.names().collect();
        assert_eq!(
            names,
            vec!["compute1", "compute1.lab.net", "compute2.lab.net", "ctrl1.lab.net"]
        );
    }

    #[test]
    fn test_invalid_address() {
        let err = HostMap::parse("10.0.0.1 ok\nnot-an-ip host\n").unwrap_err();
        assert!(matches!(err, IntrospectError::Hosts { line: 2, .. }));
    }

    #[test]
    fn test_missing_name() {
        let err = HostMap::parse("10.0.0.1\n").unwrap_err();
        assert!(matches!(err, IntrospectError::Hosts { line: 1, .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", HOSTS).unwrap();

        let hosts = HostMap::load(file.path()).unwrap();
        assert_eq!(hosts.len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let result = HostMap::load(Path::new("/nonexistent/hosts"));
        assert!(matches!(result, Err(IntrospectError::Config { .. })));
    }
}
