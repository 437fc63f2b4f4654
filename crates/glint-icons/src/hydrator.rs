//! Icon hydration pass
//!
//! One synchronous walk over the document. Every eligible placeholder gets
//! its children replaced by a transparent `<img>`, and the image's load is
//! started. Loads are returned to the caller as completion signals; nothing
//! here waits on them or keeps a reference to the document.

use crate::config::{ConfigError, HydratorConfig};
use glint_dom::{Document, NodeId};
use glint_net::{ImageFetcher, LoadError, LoadFuture};
use std::fmt;

/// A hydrated image whose resource is still loading
pub struct ImageLoad {
    /// The placeholder element that now owns the image
    pub placeholder: NodeId,
    /// The inserted `<img>`
    pub image: NodeId,
    /// Raw marker attribute value, as written into `src`
    pub src: String,
    /// Resolves once the resource has loaded (or failed to)
    pub completion: LoadFuture,
}

impl fmt::Debug for ImageLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageLoad")
            .field("placeholder", &self.placeholder)
            .field("image", &self.image)
            .field("src", &self.src)
            .finish_non_exhaustive()
    }
}

/// Outcome of one hydration pass
#[derive(Debug, Default)]
pub struct Hydration {
    /// One pending load per hydrated placeholder, in document order
    pub loads: Vec<ImageLoad>,
    /// Placeholders skipped because they already contain an image
    pub skipped_hydrated: usize,
    /// Placeholders skipped because the marker attribute was empty
    pub skipped_without_source: usize,
}

impl Hydration {
    /// Number of placeholders hydrated in this pass
    pub fn hydrated(&self) -> usize {
        self.loads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Inserted images, in document order
    pub fn images(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.loads.iter().map(|load| load.image)
    }
}

/// Finds icon placeholders and materializes their images
#[derive(Debug, Clone, Default)]
pub struct IconHydrator {
    config: HydratorConfig,
}

impl IconHydrator {
    pub fn new(config: HydratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HydratorConfig {
        &self.config
    }

    /// Run the hydration pass over `document`.
    ///
    /// Already-hydrated placeholders (any `<img>` descendant) and those with
    /// an empty source are left untouched, so running this twice is a no-op
    /// the second time.
    pub fn hydrate<F: ImageFetcher + ?Sized>(&self, document: &mut Document, fetcher: &F) -> Hydration {
        let candidates = self.config.selector().select_all(document.tree(), document.tree().root());
        let mut hydration = Hydration::default();

        for placeholder in candidates {
            if document.contains_element(placeholder, "img") {
                tracing::trace!(?placeholder, "icon already hydrated");
                hydration.skipped_hydrated += 1;
                continue;
            }

            let src = document.tree()
                .get_attribute(placeholder, &self.config.source_attribute)
                .filter(|src| !src.is_empty())
                .map(str::to_string);
            let Some(src) = src else {
                tracing::trace!(?placeholder, "icon has no source");
                hydration.skipped_without_source += 1;
                continue;
            };

            let image = self.create_image(document, &src);
            document.tree_mut().remove_children(placeholder);
            document.tree_mut().append_child(placeholder, image);

            let completion = match document.resolve_url(&src) {
                Ok(url) => fetcher.fetch(url),
                Err(e) => LoadError::InvalidUrl(format!("{src}: {e}")).into_load_future(),
            };

            hydration.loads.push(ImageLoad { placeholder, image, src, completion });
        }

        tracing::debug!(
            hydrated = hydration.hydrated(),
            skipped_hydrated = hydration.skipped_hydrated,
            skipped_without_source = hydration.skipped_without_source,
            "icon hydration pass finished"
        );
        hydration
    }

    /// Build a detached, fully transparent `<img>` for `src`
    fn create_image(&self, document: &mut Document, src: &str) -> NodeId {
        let tree = document.tree_mut();
        let image = tree.create_element("img");
        tree.set_attribute(image, "src", src);
        tree.set_attribute(image, "alt", "");

        document.set_style_property(image, "opacity", "0");
        document.set_style_property(image, "transition", &self.config.fade.to_string());
        image
    }
}

/// Completion continuation: make a hydrated image fully visible
pub fn fade_in(document: &mut Document, image: NodeId) {
    document.set_style_property(image, "opacity", "1");
}
