//! Page sources: where the XML of an introspect page comes from.

use crate::domain::error::{IntrospectError, IntrospectResult};
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use sxd_document::{dom::Document, parser, Package};
use tracing::debug;

/// A place an introspect page can be loaded from
#[async_trait]
pub trait Sourcer: Send + Sync {
    /// URL or path the page is read from
    fn location(&self) -> String;

    /// Read the raw XML of the page
    async fn fetch(&self, client: &Client) -> IntrospectResult<String>;
}

/// Paged sandesh table request (`Snh_PageReq`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub host: String,
    pub port: u16,
    pub table: String,
}

impl Remote {
    pub fn new(host: impl Into<String>, port: u16, table: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            table: table.into(),
        }
    }
}

#[async_trait]
impl Sourcer for Remote {
    fn location(&self) -> String {
        format!(
            "http://{}:{}/Snh_PageReq?x=begin:-1,end:-1,table:{},",
            self.host, self.port, self.table
        )
    }

    async fn fetch(&self, client: &Client) -> IntrospectResult<String> {
        http_get(client, &self.location()).await
    }
}

/// Plain introspect request, as issued by the web UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Webui {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl Webui {
    pub fn new(host: impl Into<String>, port: u16, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            path: path.into(),
        }
    }
}

#[async_trait]
impl Sourcer for Webui {
    fn location(&self) -> String {
        format!("http://{}:{}/{}", self.host, self.port, self.path)
    }

    async fn fetch(&self, client: &Client) -> IntrospectResult<String> {
        http_get(client, &self.location()).await
    }
}

/// Page saved on disk, for debugging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub path: PathBuf,
}

impl File {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Sourcer for File {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self, _client: &Client) -> IntrospectResult<String> {
        debug!(path = %self.path.display(), "reading introspect page from file");
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

async fn http_get(client: &Client, url: &str) -> IntrospectResult<String> {
    debug!(%url, "fetching introspect page");
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    debug!(bytes = body.len(), "introspect page received");
    Ok(body)
}

/// A loaded and parsed introspect page
pub struct Page {
    url: String,
    package: Package,
}

impl Page {
    /// Parse raw XML read from `url`
    pub fn parse(url: impl Into<String>, xml: &str) -> IntrospectResult<Self> {
        let package =
            parser::parse(xml).map_err(|e| IntrospectError::Xml(format!("{:?}", e)))?;
        Ok(Self {
            url: url.into(),
            package,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn document(&self) -> Document<'_> {
        self.package.as_document()
    }
}

/// Fetch and parse the page behind `source`
pub async fn load(source: &dyn Sourcer, client: &Client) -> IntrospectResult<Page> {
    let location = source.location();
    debug!(%location, "loading introspect page");
    let xml = source.fetch(client).await?;
    Page::parse(location, &xml)
}
