use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::form::PrechatPayload;

use super::DocumentFormat;

/// Where a submitted payload is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    pub fn file(path: impl AsRef<Path>) -> Self {
        OutputDestination::File(path.as_ref().to_path_buf())
    }
}

#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: DocumentFormat,
    pub pretty: bool,
    pub destinations: Vec<OutputDestination>,
}

impl OutputOptions {
    /// Pretty output to stdout.
    pub fn new(format: DocumentFormat) -> Self {
        Self {
            format,
            pretty: true,
            destinations: vec![OutputDestination::Stdout],
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_destinations(mut self, destinations: Vec<OutputDestination>) -> Self {
        self.destinations = destinations;
        self
    }
}

/// Render the `prechatsubmit` payload in the configured format.
pub fn render_payload(payload: &PrechatPayload, options: &OutputOptions) -> Result<String> {
    let rendered = match options.format {
        DocumentFormat::Json if options.pretty => serde_json::to_string_pretty(payload)?,
        DocumentFormat::Json => serde_json::to_string(payload)?,
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => serde_yaml::to_string(payload)?,
        #[cfg(feature = "toml")]
        DocumentFormat::Toml if options.pretty => toml::to_string_pretty(payload)?,
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::to_string(payload)?,
    };
    Ok(rendered)
}

/// Write the payload to every destination. An empty destination list writes
/// nothing.
pub fn emit(payload: &PrechatPayload, options: &OutputOptions) -> Result<()> {
    if options.destinations.is_empty() {
        return Ok(());
    }
    let rendered = render_payload(payload, options)
        .with_context(|| format!("failed to render payload as {}", options.format))?;
    let rendered = format!("{}\n", rendered.trim_end());
    for destination in &options.destinations {
        match destination {
            OutputDestination::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(rendered.as_bytes())
                    .and_then(|_| stdout.flush())
                    .context("failed to write payload to stdout")?;
            }
            OutputDestination::File(path) => fs::write(path, &rendered)
                .with_context(|| format!("failed to write payload to {}", path.display()))?,
        }
    }
    tracing::debug!(
        destinations = options.destinations.len(),
        fields = payload.len(),
        "payload written"
    );
    Ok(())
}
