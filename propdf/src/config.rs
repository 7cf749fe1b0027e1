//! Configuration module for propdf.
//!
//! Settings are never persisted and never read from the environment. Hosts
//! build a [`Config`] from their own flags and call [`Config::validate`]
//! before handing it to the application core. It covers:
//! - Thumbnail scale and optional PNG destination
//! - Default extension for save-as paths
//! - Merge output compression and overwrite behaviour
//! - Output verbosity and format

use anyhow::{Result, bail};

use crate::PropdfError;
use std::{path::PathBuf, str::FromStr};

/// Scale applied to page 1 when rendering a thumbnail.
pub const DEFAULT_THUMBNAIL_SCALE: f32 = 0.2;

/// Extension applied to save-as paths that have none.
pub const DEFAULT_EXTENSION: &str = "pdf";

/// Compression level for written PDFs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// No compression - preserves exact structure.
    None,
    /// Compress uncompressed streams.
    #[default]
    Standard,
    /// Compress streams and prune unreachable objects.
    Maximum,
}

impl FromStr for CompressionLevel {
    type Err = PropdfError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "standard" => Ok(Self::Standard),
            "maximum" => Ok(Self::Maximum),
            _ => Err(PropdfError::invalid_config(format!(
                "Invalid compression level: {s}. Must be one of: none, standard, maximum"
            ))),
        }
    }
}

/// How one-shot results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = PropdfError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(PropdfError::invalid_config(format!(
                "Invalid output format: {s}. Must be one of: text, json"
            ))),
        }
    }
}

/// Behavior when the output file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Prompt the user before overwriting (default).
    #[default]
    Prompt,
    /// Always overwrite without prompting.
    Force,
    /// Never overwrite, error if file exists.
    NoClobber,
}

/// Complete configuration for the application core.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fractional scale used to rasterize the page 1 thumbnail.
    pub thumbnail_scale: f32,

    /// Where the thumbnail is written as PNG, if anywhere.
    pub thumbnail_output: Option<PathBuf>,

    /// Extension appended to save-as paths without one.
    pub default_extension: String,

    /// Compression level for merged output.
    pub compression: CompressionLevel,

    /// File overwrite behavior for one-shot merges.
    pub overwrite_mode: OverwriteMode,

    /// Format for one-shot results.
    pub output_format: OutputFormat,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Verbose output mode.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thumbnail_scale: DEFAULT_THUMBNAIL_SCALE,
            thumbnail_output: None,
            default_extension: DEFAULT_EXTENSION.to_string(),
            compression: CompressionLevel::default(),
            overwrite_mode: OverwriteMode::default(),
            output_format: OutputFormat::default(),
            quiet: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The thumbnail scale is not in `(0, 4]`
    /// - The default extension is empty or not alphanumeric
    /// - Verbose and quiet modes are both enabled
    pub fn validate(&self) -> Result<()> {
        if !(self.thumbnail_scale > 0.0 && self.thumbnail_scale <= 4.0) {
            bail!(
                "Thumbnail scale must be greater than 0 and at most 4, got {}",
                self.thumbnail_scale
            );
        }

        let extension = self.default_extension.trim_start_matches('.');
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            bail!("Invalid default extension: '{}'", self.default_extension);
        }

        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        Ok(())
    }

    /// The default extension without a leading dot.
    pub fn extension(&self) -> &str {
        self.default_extension.trim_start_matches('.')
    }
}
