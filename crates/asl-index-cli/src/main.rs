use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use asl_index_core::config::{CatalogConfig, DEFAULT_OUTPUT_PATH};
use asl_index_core::registry::fetch::HttpFetcher;
use asl_index_core::report::{model::ToolInfo, render};
use asl_index_core::{TOOL_NAME, build_catalog, fetch_registry};

mod args;

use args::OutputFormat;

fn write_output(path: &Path, output: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, output).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = output.len(), "output written");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = args::Args::parse();

    let config = CatalogConfig {
        registry_url: args.registry_url.clone(),
        timeout: Duration::from_secs(args.timeout_secs),
        ..Default::default()
    };

    let tool = ToolInfo {
        name: TOOL_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let fetcher = HttpFetcher::new(&config)?;

    let (registry_xml, registry_source) = match &args.registry_file {
        Some(path) => {
            let xml = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read registry: {}", path.display()))?;
            (xml, path.display().to_string())
        }
        None => (
            fetch_registry(&fetcher, &config.registry_url)?,
            config.registry_url.clone(),
        ),
    };

    let catalog = build_catalog(&registry_xml, &registry_source, &fetcher, tool)?;

    // Render fully before touching the output file.
    let output = match args.format {
        OutputFormat::Html => render::render_html(&catalog)?,
        OutputFormat::Json => render::render_json(&catalog)?,
        OutputFormat::Text => render::render_text(&catalog),
    };

    let out = match (args.out, args.format) {
        (Some(path), _) => Some(path),
        (None, OutputFormat::Html) => Some(PathBuf::from(DEFAULT_OUTPUT_PATH)),
        (None, _) => None,
    };

    match out {
        Some(path) => write_output(&path, &output)?,
        None => print!("{output}"),
    }

    Ok(())
}
