use anyhow::{Context, Result};
use log::LevelFilter;
use std::env;
use webmention_render::{Config, Document, Outcome, WebmentionIo, enhance};

fn init_logger() -> Result<()> {
    if env::var_os("RUST_LOG").is_some() {
        pretty_env_logger::try_init()?;
    } else {
        pretty_env_logger::formatted_builder()
            .filter_level(LevelFilter::Info)
            .try_init()?;
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logger()?;

    let config = Config::parse();
    config.validate()?;

    let mut document = Document::read(&config.page)?;
    let original = document.clone();
    let source = WebmentionIo::new(&config.endpoint, config.per_page, config.timeout())
        .context("Failed to create HTTP client")?;

    // Webmentions are an enhancement: any failure leaves the page as it was.
    match enhance(
        &mut document,
        &source,
        config.target.as_deref(),
        &config.render_options(),
    ) {
        Ok(Outcome::NoContainer) => {
            log::info!("No data-webmentions element in {}", config.page.display());
        }
        Ok(Outcome::NoMentions) => {
            log::info!("No webmentions for {}", config.page.display());
        }
        Ok(Outcome::Rendered { count }) => {
            log::info!("Rendered {} webmentions", count);
        }
        Err(e) => {
            log::warn!("Skipping webmentions: {:#}", e);
        }
    }

    let output = config.output_path();
    if output != config.page.as_path() || document != original {
        document.write(output)?;
        println!("Generated: {}", output.display());
    }

    if config.open {
        open::that(output)
            .with_context(|| format!("Failed to open {}", output.display()))?;
    }

    Ok(())
}
