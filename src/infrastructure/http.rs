// HTTP client used to fetch introspect pages
use crate::domain::error::IntrospectResult;
use crate::infrastructure::hosts::HostMap;
use reqwest::Client;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Build the HTTP client.
///
/// Names from `hosts` are resolved to their mapped address; the port of
/// the requested URL is still used. Introspect ports are reached directly,
/// proxy environment variables are ignored.
pub fn build_client(timeout: Duration, hosts: &HostMap) -> IntrospectResult<Client> {
    let mut builder = Client::builder()
        .no_proxy()
        .timeout(timeout)
        .user_agent(concat!("introspect-cli/", env!("CARGO_PKG_VERSION")));

    for (name, ip) in hosts.iter() {
        debug!(%name, %ip, "DNS override");
        builder = builder.resolve(name, SocketAddr::new(ip, 0));
    }

    Ok(builder.build()?)
}
