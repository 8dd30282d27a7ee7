use std::io::Write;
use std::process::{Command, Output};
use std::str;
use tempfile::{NamedTempFile, TempDir};

const BIN: &str = env!("CARGO_BIN_EXE_introspect-cli");

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Run the binary with an empty configuration, away from any project config
fn run(args: &[&str]) -> Output {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").expect("Failed to write config");

    Command::new(BIN)
        .current_dir(dir.path())
        .arg("-q")
        .arg("-c")
        .arg(&config)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> &str {
    str::from_utf8(&output.stdout).expect("Invalid UTF-8")
}

fn stderr(output: &Output) -> &str {
    str::from_utf8(&output.stderr).expect("Invalid UTF-8")
}

/// CLI interface tests
#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_cli_help() {
        let output = Command::new(BIN).arg("--help").output().expect("Failed to execute command");
        let help = stdout(&output);

        assert!(help.contains("Usage:"));
        assert!(help.contains("Commands:"));
        assert!(help.contains("agent-route"));
        assert!(help.contains("agent-itf"));
        assert!(help.contains("controller-route-summary"));
        assert!(help.contains("agent-multiple"));
        assert!(help.contains("--hosts"));
    }

    #[test]
    fn test_cli_subcommand_help() {
        let output = run(&["agent-itf", "--help"]);
        let help = stdout(&output);

        assert!(help.contains("Fuzzy search by name"));
        assert!(help.contains("--strict-search"));
        assert!(help.contains("--from-file"));
        assert!(help.contains("<vrouter-fqdn>"));
    }

    #[test]
    fn test_cli_version() {
        let output = run(&["version"]);
        assert!(output.status.success());
        assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_short_from_file() {
        let path = fixture("agent_itf.xml");
        let output = run(&["agent-itf", "--from-file", &path]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(stdout(&output), "eth0\ntap1234\ntap5678\n");
    }

    #[test]
    fn test_default_level_keeps_stderr_clean() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "").unwrap();
        let path = fixture("agent_itf.xml");

        let output = Command::new(BIN)
            .current_dir(dir.path())
            .env_remove("RUST_LOG")
            .arg("-c")
            .arg(&config)
            .args(["agent-itf", "--from-file", &path])
            .output()
            .expect("Failed to execute command");

        assert!(output.status.success());
        assert_eq!(stdout(&output), "eth0\ntap1234\ntap5678\n");
        assert_eq!(stderr(&output), "");
    }

    #[test]
    fn test_strict_search_long_from_file() {
        let path = fixture("agent_route.xml");
        let output = run(&["agent-route", "--from-file", &path, "-S", "10.1.1.5", "--long"]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        let out = stdout(&output);
        assert!(out.contains("Src 10.1.1.5"));
        assert!(!out.contains("Src 10.1.1.3"));
    }

    #[test]
    fn test_fuzzy_search_xml_from_file() {
        let path = fixture("agent_vrf.xml");
        let output = run(&["agent-vrf", "--from-file", &path, "-s", "admin", "--xml"]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        let out = stdout(&output);
        assert!(out.starts_with("<VrfSandeshData>"));
        assert!(out.contains("default-domain:admin:net:net"));
        assert!(!out.contains("ip-fabric"));
    }

    #[test]
    fn test_url_only() {
        let output = run(&["agent-itf", "compute1.lab.net", "--url"]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(
            stdout(&output),
            "http://compute1.lab.net:8085/Snh_PageReq?x=begin:-1,end:-1,table:db.interface.0,\n"
        );
    }

    #[test]
    fn test_missing_page_arguments() {
        let output = run(&["agent-route", "compute1"]);

        assert!(!output.status.success());
        assert!(stderr(&output).contains("vrouter-fqdn vrf-name"));
    }

    #[test]
    fn test_agent_multiple_count() {
        let path = fixture("agent_route.xml");
        let output = run(&["agent-multiple", "--from-file", &path, "--count"]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(stdout(&output), "1\n");
    }

    #[test]
    fn test_agent_multiple_list() {
        let path = fixture("agent_route.xml");
        let output = run(&["agent-multiple", "--from-file", &path]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(stdout(&output), "10.1.1.255\n");
    }

    #[test]
    fn test_hosts_listing() {
        let mut hosts = NamedTempFile::new().unwrap();
        writeln!(hosts, "10.0.0.11 compute1.lab.net compute1").unwrap();
        let hosts_path = hosts.path().to_str().unwrap().to_string();

        let output = run(&["--hosts", &hosts_path, "hosts"]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(stdout(&output), "compute1\ncompute1.lab.net\n");
    }

    #[test]
    fn test_missing_hosts_file() {
        let output = run(&["--hosts", "/nonexistent/hosts", "agent-vrf", "compute1", "--url"]);

        assert!(!output.status.success());
        assert!(stderr(&output).contains("Failed to read hosts file"));
    }

    #[test]
    fn test_config_show() {
        let output = run(&["config", "show"]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert!(stdout(&output).contains("controller = 8083"));
    }

    #[test]
    fn test_cli_invalid_command() {
        let output = run(&["invalid-command"]);
        assert!(!output.status.success());
    }
}
