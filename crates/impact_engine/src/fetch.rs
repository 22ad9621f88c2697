use std::path::PathBuf;
use std::time::Duration;

use futures_util::StreamExt;
use impact_core::Impact;
use impact_logging::{impact_debug, impact_info};
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use url::Url;

use crate::{decode_impacts, FailureKind, FileSource, LoadError};

/// Location of the impact list below a site's base URL.
pub const DATA_PATH: &str = "data/impacts.json";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
            allowed_content_types: vec!["application/json".to_string(), "text/json".to_string()],
        }
    }
}

/// Somewhere the full impact list can be read from in one go.
#[async_trait::async_trait]
pub trait ImpactSource: Send + Sync {
    /// Human-readable location, for logs and error messages.
    fn describe(&self) -> String;

    async fn load(&self) -> Result<Vec<Impact>, LoadError>;
}

/// Resolve a user-supplied location into a source.
///
/// `http(s)://` locations ending in `.json` are fetched as-is; other URLs are
/// treated as a site base and get [`DATA_PATH`] appended. Anything else is a
/// local file path.
pub fn open_source(
    location: &str,
    settings: FetchSettings,
) -> Result<Box<dyn ImpactSource>, LoadError> {
    let location = location.trim();
    if location.starts_with("http://") || location.starts_with("https://") {
        let source = if location.ends_with(".json") {
            HttpSource::new(location, settings)?
        } else {
            HttpSource::from_base(location, settings)?
        };
        return Ok(Box::new(source));
    }
    Ok(Box::new(FileSource::new(
        PathBuf::from(location),
        settings.max_bytes,
    )))
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
    settings: FetchSettings,
}

impl HttpSource {
    pub fn new(url: &str, settings: FetchSettings) -> Result<Self, LoadError> {
        let url = Url::parse(url)
            .map_err(|err| LoadError::new(FailureKind::InvalidUrl, err.to_string()))?;
        Ok(Self { url, settings })
    }

    /// Source for `{base}/data/impacts.json`; `base` may carry a path prefix.
    pub fn from_base(base: &str, settings: FetchSettings) -> Result<Self, LoadError> {
        let mut base = base.trim_end_matches('/').to_string();
        base.push('/');
        let url = Url::parse(&base)
            .and_then(|base| base.join(DATA_PATH))
            .map_err(|err| LoadError::new(FailureKind::InvalidUrl, err.to_string()))?;
        Ok(Self { url, settings })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn build_client(&self) -> Result<reqwest::Client, LoadError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| LoadError::new(FailureKind::Network, err.to_string()))
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or_default().trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    fn too_large(&self, actual: u64) -> LoadError {
        LoadError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl ImpactSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn load(&self) -> Result<Vec<Impact>, LoadError> {
        let client = self.build_client()?;
        impact_debug!("GET {}", self.url);

        let response = client
            .get(self.url.clone())
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(LoadError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        let impacts = decode_impacts(&bytes)?;
        impact_info!(
            "Fetched {} impacts ({} bytes) from {}",
            impacts.len(),
            bytes.len(),
            self.url
        );
        Ok(impacts)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> LoadError {
    if err.is_timeout() {
        return LoadError::new(FailureKind::Timeout, err.to_string());
    }
    LoadError::new(FailureKind::Network, err.to_string())
}
