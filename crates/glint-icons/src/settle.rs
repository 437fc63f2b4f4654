//! Driving image loads to completion
//!
//! Each load runs as its own task, so a slow icon never holds back another
//! one's fade-in. Completions come back over a channel in the order they
//! finish and are applied to the document by the single settling task.

use crate::hydrator::{fade_in, Hydration, ImageLoad};
use glint_dom::Document;

/// Counts after every load has resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Images that loaded and were faded in
    pub loaded: usize,
    /// Images left transparent because their load failed
    pub failed: usize,
}

impl LoadSummary {
    pub fn total(&self) -> usize {
        self.loaded + self.failed
    }
}

impl Hydration {
    /// Wait for every pending load, fading in each image as its load succeeds.
    ///
    /// Failed loads are not retried; their images stay at opacity 0.
    pub async fn settle(self, document: &mut Document) -> LoadSummary {
        let (tx, rx) = smol::channel::unbounded();

        for load in self.loads {
            let ImageLoad { image, src, completion, .. } = load;
            let tx = tx.clone();
            smol::spawn(async move {
                let result = completion.await;
                // The receiver only goes away if settling was abandoned.
                let _ = tx.send((image, src, result)).await;
            })
            .detach();
        }
        drop(tx);

        let mut summary = LoadSummary::default();
        while let Ok((image, src, result)) = rx.recv().await {
            match result {
                Ok(loaded) => {
                    tracing::trace!(%src, format = loaded.format.mime_type(), "icon loaded");
                    fade_in(document, image);
                    summary.loaded += 1;
                }
                Err(e) => {
                    tracing::debug!(%src, error = %e, "icon failed to load");
                    summary.failed += 1;
                }
            }
        }

        tracing::debug!(loaded = summary.loaded, failed = summary.failed, "icon loads settled");
        summary
    }

    /// Blocking wrapper around [`Hydration::settle`]
    pub fn settle_blocking(self, document: &mut Document) -> LoadSummary {
        smol::block_on(self.settle(document))
    }
}
