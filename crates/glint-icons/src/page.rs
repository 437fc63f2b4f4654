//! Page - host entry point for hydration
//!
//! Replaces a global "DOMContentLoaded" listener: the host mounts the
//! markup, then calls [`Page::document_ready`] exactly when it considers the
//! view ready. The signal is one-shot.

use crate::config::{ConfigError, HydratorConfig};
use crate::hydrator::{Hydration, IconHydrator};
use crate::settle::LoadSummary;
use glint_dom::Document;
use glint_html::{HtmlParser, HtmlSerializer, ParseError};
use glint_net::ImageFetcher;

/// Document ready state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyState {
    /// Markup is still being parsed
    #[default]
    Loading,
    /// Parsed; hydration may run
    Interactive,
    /// Every icon load has settled
    Complete,
}

/// Page errors
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A mounted page
#[derive(Debug)]
pub struct Page {
    document: Document,
    hydrator: IconHydrator,
    ready_state: ReadyState,
    ready_fired: bool,
}

impl Page {
    /// Parse `html` (with `url` as its base) using the default config
    pub fn mount(html: &str, url: &str) -> Result<Self, PageError> {
        Self::mount_with_config(html, url, HydratorConfig::default())
    }

    /// Parse `html` (with `url` as its base)
    pub fn mount_with_config(html: &str, url: &str, config: HydratorConfig) -> Result<Self, PageError> {
        let hydrator = IconHydrator::new(config)?;
        let document = HtmlParser::new().parse_with_url(html, url)?;
        tracing::debug!("Mounted page {}", url);

        Ok(Self {
            document,
            hydrator,
            ready_state: ReadyState::Interactive,
            ready_fired: false,
        })
    }

    /// Fire the "document ready" signal.
    ///
    /// The first call runs the hydration pass and returns its pending loads;
    /// any later call returns `None` without touching the document.
    pub fn document_ready<F: ImageFetcher + ?Sized>(&mut self, fetcher: &F) -> Option<Hydration> {
        if self.ready_fired {
            return None;
        }
        self.ready_fired = true;
        Some(self.hydrator.hydrate(&mut self.document, fetcher))
    }

    /// Settle a hydration produced by this page's [`Page::document_ready`]
    pub async fn complete(&mut self, hydration: Hydration) -> LoadSummary {
        let summary = hydration.settle(&mut self.document).await;
        self.ready_state = ReadyState::Complete;
        summary
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    pub fn url(&self) -> &str {
        self.document.url()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Serialize the whole document
    pub fn to_html(&self) -> String {
        let tree = self.document.tree();
        HtmlSerializer::new().serialize_outer(tree, tree.root())
    }
}
