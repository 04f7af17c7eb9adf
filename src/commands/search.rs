use anyhow::{bail, Context, Result};

use crate::config::Config;
use crate::data_provider::StatHubDataProvider;
use crate::formatting::{format_header, format_search_results, BoxChars};
use crate::view::filter::normalize_query;

/// One-shot player search; no debounce outside the interactive session
pub async fn run(client: &dyn StatHubDataProvider, query: &str, config: &Config) -> Result<()> {
    if normalize_query(query).is_none() {
        bail!("Search query must not be empty");
    }
    let query = query.trim();

    let response = client
        .search(query)
        .await
        .with_context(|| format!("Failed to search for '{}'", query))?;

    let box_chars = BoxChars::from_use_unicode(config.use_unicode);
    let mut output = format_header(&format!("Search: {}", query), false, &box_chars);
    if response.players.is_empty() {
        output.push_str("No players found\n");
    } else {
        output.push_str(&format_search_results(&response.players, &box_chars));
    }
    print!("{}", output);

    Ok(())
}
