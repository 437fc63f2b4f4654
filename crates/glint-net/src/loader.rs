//! Resource Loader
//!
//! Default image fetcher: `file:` URLs through smol's async fs, `http(s):`
//! through a blocking reqwest client moved onto smol's blocking pool.

use crate::{ImageFetcher, LoadError, LoadFuture, LoadedImage};
use reqwest::blocking::Client;
use url::Url;

const USER_AGENT: &str = concat!("Glint/", env!("CARGO_PKG_VERSION"));

/// Load image resources from disk or network
#[derive(Debug, Clone)]
pub struct ResourceLoader {
    http: Client,
}

impl ResourceLoader {
    pub fn new() -> Result<Self, LoadError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LoadError::Network(e.to_string()))?;
        Ok(Self { http })
    }
}

impl ImageFetcher for ResourceLoader {
    fn fetch(&self, url: Url) -> LoadFuture {
        match url.scheme() {
            "file" => {
                let Ok(path) = url.to_file_path() else {
                    return LoadError::InvalidUrl(url.to_string()).into_load_future();
                };
                Box::pin(async move {
                    tracing::debug!("Reading {}", path.display());
                    let body = smol::fs::read(&path).await?;
                    LoadedImage::from_body(url, &body)
                })
            }
            "http" | "https" => {
                let client = self.http.clone();
                Box::pin(smol::unblock(move || fetch_http(&client, url)))
            }
            other => LoadError::UnsupportedScheme(other.to_string()).into_load_future(),
        }
    }
}

fn fetch_http(client: &Client, url: Url) -> Result<LoadedImage, LoadError> {
    tracing::info!("HTTP GET {}", url);

    let response = client
        .get(url.clone())
        .send()
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::HttpError { status: status.as_u16() });
    }

    let body = response.bytes().map_err(|e| LoadError::Network(e.to_string()))?;
    LoadedImage::from_body(url, &body)
}
