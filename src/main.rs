use std::sync::Arc;

use clap::{Parser, Subcommand};
use stathub::client::Client;
use stathub::commands;
use stathub::config;
use stathub::data_provider::StatHubDataProvider;
use stathub::types::RankingCriterion;
use stathub::view::interactive;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "stathub")]
#[command(
    about = "StatHub rankings, matches and player search",
    long_about = "StatHub rankings, matches and player search\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Backend base URL (overrides config and STATHUB_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Use fixture data instead of the backend
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display a ranking
    Ranking {
        /// rating, goals, assists, combined, achievements, trophies or xp
        #[arg(short, long)]
        criterion: Option<RankingCriterion>,

        /// Only players whose name, username or position contains this text
        #[arg(short, long)]
        query: Option<String>,

        /// Number of pages to show
        #[arg(short, long, default_value_t = 1)]
        pages: usize,
    },
    /// Display match results
    Matches {
        /// Only matches involving a team containing this text
        #[arg(short, long)]
        query: Option<String>,

        /// Number of pages to show
        #[arg(short, long, default_value_t = 1)]
        pages: usize,
    },
    /// Display one match with both line-ups and player ratings
    Match {
        /// Match id as listed by `matches`
        id: i64,
    },
    /// Search players by name
    Search {
        query: String,
    },
    /// Display a player's stats, level, achievements and trophies
    Player {
        user_id: i64,

        /// Bypass cached profile data
        #[arg(short, long)]
        refresh: bool,

        /// Only list achievements of this tier (beginner, advanced, expert or all)
        #[arg(short, long)]
        tier: Option<String>,
    },
    /// Log in and print an access token
    Login {
        /// Username or email
        credential: String,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("api_url: {}", cfg.api_url);
    println!("token: {}", if cfg.token.is_some() { "(set)" } else { "(none)" });
    println!("page_size: {}", cfg.page_size);
    println!("matches_page_size: {}", cfg.matches_page_size);
    println!("ranking_limit: {}", cfg.ranking_limit);
    println!("search_debounce_ms: {}", cfg.search_debounce_ms);
    println!("request_timeout_secs: {}", cfg.request_timeout_secs);
    println!("default_criterion: {}", cfg.default_criterion());
    println!("time_format: {}", cfg.time_format);
    println!("use_unicode: {}", cfg.use_unicode);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

#[cfg(feature = "development")]
fn mock_provider(cli: &Cli) -> Option<Arc<dyn StatHubDataProvider>> {
    if cli.mock {
        Some(Arc::new(stathub::dev::mock_client::MockClient::new()))
    } else {
        None
    }
}

#[cfg(not(feature = "development"))]
fn mock_provider(_cli: &Cli) -> Option<Arc<dyn StatHubDataProvider>> {
    None
}

fn create_client(cli: &Cli, config: &config::Config) -> Arc<dyn StatHubDataProvider> {
    if let Some(mock) = mock_provider(cli) {
        return mock;
    }

    match Client::from_config(config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            let error_msg = format!("Failed to create StatHub client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    client: &dyn StatHubDataProvider,
    command: Commands,
    config: &config::Config,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Ranking {
            criterion,
            query,
            pages,
        } => {
            let criterion = criterion.unwrap_or_else(|| config.default_criterion());
            commands::ranking::run(client, criterion, query, pages, config).await
        }
        Commands::Matches { query, pages } => {
            commands::matches::run(client, query, pages, config).await
        }
        Commands::Match { id } => commands::match_details::run(client, id, config).await,
        Commands::Search { query } => commands::search::run(client, &query, config).await,
        Commands::Player {
            user_id,
            refresh,
            tier,
        } => commands::player::run(client, user_id, refresh, tier.as_deref(), config).await,
        Commands::Login { credential } => {
            let password = commands::login::resolve_password(
                |key| std::env::var(key).ok(),
                std::io::stdin().lock(),
            )?;
            commands::login::run(client, &credential, &password).await
        }
    }
}

#[tokio::main]
async fn main() {
    let mut config = config::read();
    let cli = Cli::parse();
    if let Some(url) = &cli.api_url {
        config.api_url = url.clone();
    }

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // Handle Config command separately (doesn't need the backend)
    if let Some(Commands::Config) = cli.command {
        handle_config_command(&config);
        return;
    }

    let client = create_client(&cli, &config);

    let Some(command) = cli.command else {
        if let Err(e) = interactive::run(client, config).await {
            eprintln!("Error: {:#}", e);
            tracing::error!("Interactive session failed: {:#}", e);
            std::process::exit(1);
        }
        return;
    };

    if let Err(e) = execute_command(client.as_ref(), command, &config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
