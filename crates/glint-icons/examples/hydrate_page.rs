//! Example: hydrate the icons of an HTML file and print the result
//!
//! ```text
//! RUST_LOG=glint_icons=debug cargo run -p glint-icons --example hydrate_page -- page.html [config.json]
//! ```

use anyhow::{Context, bail};
use glint_icons::{HydratorConfig, Page};
use glint_net::{ResourceLoader, Url};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: hydrate_page <page.html> [config.json]");
    };

    let config = match args.next() {
        Some(config_path) => {
            let json = std::fs::read_to_string(&config_path)
                .with_context(|| format!("reading {config_path}"))?;
            HydratorConfig::from_json(&json)?
        }
        None => HydratorConfig::default(),
    };

    let path = std::fs::canonicalize(&path).with_context(|| format!("resolving {path}"))?;
    let html = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let base = Url::from_file_path(&path)
        .map_err(|()| anyhow::anyhow!("{} is not an absolute path", path.display()))?;

    let mut page = Page::mount_with_config(&html, base.as_str(), config)?;
    let loader = ResourceLoader::new()?;

    if let Some(hydration) = page.document_ready(&loader) {
        tracing::info!("Hydrated {} icons", hydration.hydrated());
        let summary = smol::block_on(page.complete(hydration));
        tracing::info!("{} loaded, {} failed", summary.loaded, summary.failed);
    }

    println!("{}", page.to_html());
    Ok(())
}
