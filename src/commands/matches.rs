use anyhow::{Context, Result};

use crate::commands::windowed;
use crate::config::Config;
use crate::data_provider::StatHubDataProvider;
use crate::formatting::BoxChars;
use crate::view::render::render_matches;

pub async fn run(
    client: &dyn StatHubDataProvider,
    query: Option<String>,
    pages: usize,
    config: &Config,
) -> Result<()> {
    let matches = client.matches().await.context("Failed to fetch matches")?;

    let list = windowed(matches, config.matches_page_size, query.as_deref(), pages);
    let box_chars = BoxChars::from_use_unicode(config.use_unicode);
    print!("{}", render_matches(&list, &config.time_format, &box_chars));

    Ok(())
}
