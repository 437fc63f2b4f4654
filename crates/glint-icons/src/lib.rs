//! Glint Icons
//!
//! Replaces icon placeholders (`<span class="icon" data-icon="/a.png">`)
//! with an `<img>` that stays transparent until its resource has loaded,
//! then fades in.
//!
//! # Example
//! ```rust,ignore
//! use glint_icons::Page;
//! use glint_net::ResourceLoader;
//!
//! let mut page = Page::mount(html, "file:///srv/site/index.html")?;
//! let loader = ResourceLoader::new()?;
//! if let Some(hydration) = page.document_ready(&loader) {
//!     let summary = smol::block_on(page.complete(hydration));
//!     println!("{} icons loaded", summary.loaded);
//! }
//! println!("{}", page.to_html());
//! ```

mod config;
mod hydrator;
mod settle;
mod page;

pub use config::{ConfigError, Easing, FadeTransition, HydratorConfig};
pub use hydrator::{fade_in, Hydration, IconHydrator, ImageLoad};
pub use settle::LoadSummary;
pub use page::{Page, PageError, ReadyState};

use glint_dom::Document;
use glint_net::ImageFetcher;

/// Hydrate a document with the default configuration
pub fn hydrate<F: ImageFetcher + ?Sized>(document: &mut Document, fetcher: &F) -> Hydration {
    IconHydrator::default().hydrate(document, fetcher)
}
