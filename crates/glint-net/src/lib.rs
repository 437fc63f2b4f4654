//! Glint Networking
//!
//! Fetching image resources and deciding whether a response is an image.

mod image;
mod loader;

pub use image::ImageFormat;
pub use loader::ResourceLoader;
pub use url::Url;

use std::future::Future;
use std::pin::Pin;

/// Completion signal for a single image load
pub type LoadFuture = Pin<Box<dyn Future<Output = Result<LoadedImage, LoadError>> + Send + 'static>>;

/// Something that can fetch an image resource.
///
/// Every call starts an independent load; implementations must not block
/// the caller, all work happens when the returned future is polled.
pub trait ImageFetcher {
    fn fetch(&self, url: Url) -> LoadFuture;
}

impl<F: ImageFetcher + ?Sized> ImageFetcher for &F {
    fn fetch(&self, url: Url) -> LoadFuture {
        (**self).fetch(url)
    }
}

/// A successfully loaded image resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub url: Url,
    pub format: ImageFormat,
    pub byte_len: usize,
}

impl LoadedImage {
    /// Validate a fetched body, rejecting anything that doesn't sniff as an image
    pub fn from_body(url: Url, body: &[u8]) -> Result<Self, LoadError> {
        match ImageFormat::from_bytes(body) {
            ImageFormat::Unknown => Err(LoadError::NotAnImage { url: url.to_string() }),
            format => Ok(Self { url, format, byte_len: body.len() }),
        }
    }
}

/// Image load error
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Response from {url} is not an image")]
    NotAnImage { url: String },
}

impl LoadError {
    /// An already-failed load, for sources that can't even be requested
    pub fn into_load_future(self) -> LoadFuture {
        Box::pin(std::future::ready(Err(self)))
    }
}
