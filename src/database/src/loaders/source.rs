use crate::loaders::http::http_get;
use crate::loaders::LoadError;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use url::{Host, Url};

const STATIC_ROSTER_JSON: &str = include_str!("../../data/roster.json");

/// Raw answer of a roster source, before any status check or parsing.
#[derive(Debug, Clone)]
pub struct SourceResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl SourceResponse {
    pub fn ok(body: Vec<u8>) -> Self {
        SourceResponse { status: 200, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Where the roster document comes from.
pub trait RosterSource {
    fn fetch(&self) -> impl Future<Output = Result<SourceResponse, LoadError>> + Send;
}

/// The roster bundled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl RosterSource for EmbeddedSource {
    async fn fetch(&self) -> Result<SourceResponse, LoadError> {
        Ok(SourceResponse::ok(STATIC_ROSTER_JSON.as_bytes().to_vec()))
    }
}

#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl RosterSource for FileSource {
    async fn fetch(&self) -> Result<SourceResponse, LoadError> {
        let body = tokio::fs::read(&self.path).await?;

        Ok(SourceResponse::ok(body))
    }
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    host: Host<String>,
    port: u16,
    path: String,
}

impl HttpSource {
    pub fn new(url: &Url) -> Result<Self, LoadError> {
        if url.scheme() != "http" {
            return Err(LoadError::UnsupportedSource(url.to_string()));
        }

        let host = url
            .host()
            .ok_or_else(|| LoadError::UnsupportedSource(url.to_string()))?;

        let path = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };

        Ok(HttpSource {
            host: host.to_owned(),
            port: url.port_or_known_default().unwrap_or(80),
            path,
        })
    }
}

impl RosterSource for HttpSource {
    async fn fetch(&self) -> Result<SourceResponse, LoadError> {
        http_get(&self.host, self.port, &self.path).await
    }
}

impl Display for HttpSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "http://{}:{}{}", self.host, self.port, self.path)
    }
}

/// Source selected by configuration: `embedded`, an `http://` url,
/// or a path to a JSON file.
#[derive(Debug, Clone)]
pub enum RosterSourceConfig {
    Embedded(EmbeddedSource),
    File(FileSource),
    Http(HttpSource),
}

impl Default for RosterSourceConfig {
    fn default() -> Self {
        RosterSourceConfig::Embedded(EmbeddedSource)
    }
}

impl FromStr for RosterSourceConfig {
    type Err = LoadError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() || value.eq_ignore_ascii_case("embedded") {
            return Ok(RosterSourceConfig::default());
        }

        if value.contains("://") {
            let url = Url::parse(value)
                .map_err(|e| LoadError::UnsupportedSource(format!("{}: {}", value, e)))?;

            return Ok(RosterSourceConfig::Http(HttpSource::new(&url)?));
        }

        Ok(RosterSourceConfig::File(FileSource::new(value)))
    }
}

impl RosterSource for RosterSourceConfig {
    async fn fetch(&self) -> Result<SourceResponse, LoadError> {
        match self {
            RosterSourceConfig::Embedded(source) => source.fetch().await,
            RosterSourceConfig::File(source) => source.fetch().await,
            RosterSourceConfig::Http(source) => source.fetch().await,
        }
    }
}

impl Display for RosterSourceConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterSourceConfig::Embedded(_) => write!(f, "embedded"),
            RosterSourceConfig::File(source) => write!(f, "{}", source.path.display()),
            RosterSourceConfig::Http(source) => write!(f, "{}", source),
        }
    }
}
