//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::{DEFAULT_ENDPOINT, DEFAULT_PER_PAGE};

/// Command line configuration for webmention-render.
#[derive(Debug, Clone, Parser)]
#[command(name = "webmention-render", version, about, long_about = None)]
pub struct Config {
    /// HTML page containing a `data-webmentions` element
    pub page: PathBuf,

    /// Output file (defaults to rewriting the page in place)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target URL (overrides the container's data-webmentions value)
    #[arg(long)]
    pub target: Option<String>,

    /// Base URL of the webmention.io compatible API
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Maximum number of mentions requested
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Generate initials avatars for authors without a photo
    #[arg(long)]
    pub placeholder_avatars: bool,

    /// Open the rendered page in the default browser
    #[arg(long)]
    pub open: bool,
}

/// Switches affecting how mentions are turned into markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub placeholder_avatars: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the page does not exist, the endpoint is not an
    /// http(s) URL, or the page size or timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.page.is_file() {
            bail!("Page does not exist: {}", self.page.display());
        }

        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            bail!("Endpoint must be an http(s) URL: {}", self.endpoint);
        }

        if self.per_page == 0 {
            bail!("--per-page must be at least 1");
        }

        if self.timeout == 0 {
            bail!("--timeout must be at least 1 second");
        }

        Ok(())
    }

    /// Returns the file the rendered page is written to.
    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.page)
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Returns rendering switches.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            placeholder_avatars: self.placeholder_avatars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(page: PathBuf) -> Config {
        Config {
            page,
            output: None,
            target: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            per_page: DEFAULT_PER_PAGE,
            timeout: 30,
            placeholder_avatars: false,
            open: false,
        }
    }

    #[test]
    fn test_parse_defaults() {
        // Arrange & Act
        let config = Config::try_parse_from(["webmention-render", "index.html"])
            .expect("Should parse minimal arguments");

        // Assert
        assert_eq!(config.page, PathBuf::from("index.html"));
        assert_eq!(config.endpoint, "https://webmention.io");
        assert_eq!(config.per_page, 999);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(!config.placeholder_avatars);
        assert_eq!(config.output_path(), Path::new("index.html"));
    }

    #[test]
    fn test_parse_all_flags() {
        let config = Config::try_parse_from([
            "webmention-render",
            "post.html",
            "-o",
            "out.html",
            "--target",
            "https://example.com/post",
            "--endpoint",
            "http://localhost:8080",
            "--per-page",
            "50",
            "--placeholder-avatars",
        ])
        .expect("Should parse all arguments");

        assert_eq!(config.output_path(), Path::new("out.html"));
        assert_eq!(config.target.as_deref(), Some("https://example.com/post"));
        assert_eq!(config.per_page, 50);
        assert!(config.render_options().placeholder_avatars);
    }

    #[test]
    fn test_validate_missing_page() {
        let config = config(PathBuf::from("/definitely/not/here.html"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_existing_page() -> Result<()> {
        // Arrange
        let file = tempfile::NamedTempFile::new()?;
        let config = config(file.path().to_path_buf());

        // Act & Assert
        config.validate()?;
        Ok(())
    }

    #[test]
    fn test_validate_rejects_bad_endpoint_and_zero_values() -> Result<()> {
        let file = tempfile::NamedTempFile::new()?;

        let mut bad_endpoint = config(file.path().to_path_buf());
        bad_endpoint.endpoint = "ftp://example.com".to_string();
        assert!(bad_endpoint.validate().is_err());

        let mut zero_page = config(file.path().to_path_buf());
        zero_page.per_page = 0;
        assert!(zero_page.validate().is_err());

        let mut zero_timeout = config(file.path().to_path_buf());
        zero_timeout.timeout = 0;
        assert!(zero_timeout.validate().is_err());

        Ok(())
    }
}
