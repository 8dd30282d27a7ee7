use introspect_cli::core::catalog::agent;
use introspect_cli::core::source::{load, File, Remote, Webui};
use introspect_cli::infrastructure::hosts::HostMap;
use introspect_cli::infrastructure::http::build_client;
use introspect_cli::{Collection, IntrospectError, Sourcer};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VRF: &str = include_str!("fixtures/agent_vrf.xml");

fn client(hosts: &HostMap) -> reqwest::Client {
    build_client(Duration::from_secs(5), hosts).unwrap()
}

/// Page source tests
#[cfg(test)]
mod source_tests {
    use super::*;

    #[tokio::test]
    async fn test_remote_source() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Snh_PageReq"))
            .and(query_param("x", "begin:-1,end:-1,table:db.vrf.0,"))
            .respond_with(ResponseTemplate::new(200).set_body_string(VRF))
            .expect(1)
            .mount(&server)
            .await;

        let remote = Remote::new("127.0.0.1", server.address().port(), "db.vrf.0");
        let page = load(&remote, &client(&HostMap::new())).await.unwrap();
        let desc = agent::desc_vrf();
        let collection = Collection::load(&page, &desc).unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(page.url(), remote.location());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.query(), Some("x=begin:-1,end:-1,table:db.vrf.0,"));
    }

    #[tokio::test]
    async fn test_webui_source_with_hosts_override() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Snh_VrfListReq"))
            .respond_with(ResponseTemplate::new(200).set_body_string(VRF))
            .expect(1)
            .mount(&server)
            .await;

        let hosts = HostMap::parse("127.0.0.1 compute1.lab.test compute1\n").unwrap();
        let webui = Webui::new("compute1.lab.test", server.address().port(), "Snh_VrfListReq");

        let xml = webui.fetch(&client(&hosts)).await.unwrap();
        assert_eq!(xml, VRF);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.path(), "/Snh_VrfListReq");
        let host = requests[0].headers.get("host").unwrap().to_str().unwrap();
        assert!(host.starts_with("compute1.lab.test:"));
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let webui = Webui::new("127.0.0.1", server.address().port(), "Snh_VrfListReq");
        let result = load(&webui, &client(&HostMap::new())).await;
        assert!(matches!(result, Err(IntrospectError::Http(_))));
    }

    #[tokio::test]
    async fn test_file_source() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", VRF).unwrap();

        let source = File::new(file.path());
        let page = load(&source, &client(&HostMap::new())).await.unwrap();
        let desc = agent::desc_vrf();
        let collection = Collection::load(&page, &desc).unwrap();

        assert_eq!(page.url(), file.path().display().to_string());
        assert_eq!(collection.elements()[1].short().unwrap(), "default-domain:admin:net:net");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = File::new("/nonexistent/page.xml");
        let result = load(&source, &client(&HostMap::new())).await;
        assert!(matches!(result, Err(IntrospectError::Io(_))));
    }

    #[tokio::test]
    async fn test_invalid_xml() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "<VrfListResp><vrf_list>").unwrap();

        let result = load(&File::new(file.path()), &client(&HostMap::new())).await;
        assert!(matches!(result, Err(IntrospectError::Xml(_))));
    }
}
