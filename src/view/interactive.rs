//! Line-oriented interactive session.
//!
//! Reads commands from stdin, feeds them to the runtime as actions and
//! prints the affected view whenever user input or a response changes it.

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use super::action::Action;
use super::effects::DataEffects;
use super::render::{render_matches, render_ranking, render_search, render_status};
use super::runtime::Runtime;
use super::state::AppState;
use crate::config::Config;
use crate::data_provider::StatHubDataProvider;
use crate::formatting::BoxChars;
use crate::types::RankingCriterion;

const HELP: &str = "\
Commands:
  c <criterion>   rank by rating, goals, assists, combined, achievements, trophies or xp
  / <text>        filter the current list (empty clears)
  m               load more rows
  r               refresh the current list
  v               switch between ranking and matches
  s <text>        search players
  h               show this help
  q               quit
";

/// Which list the list commands apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Ranking,
    Matches,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Criterion(RankingCriterion),
    Filter(String),
    LoadMore,
    Refresh,
    ToggleView,
    Search(String),
    Help,
    Quit,
}

/// Parse one input line
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim_start();
    let (verb, rest) = match line.find(char::is_whitespace) {
        Some(index) => (&line[..index], line[index..].trim()),
        None => (line.trim_end(), ""),
    };

    // "/ana" without a space filters too
    if let Some(query) = verb.strip_prefix('/') {
        let query = if query.is_empty() {
            rest.to_string()
        } else {
            format!("{} {}", query, rest).trim().to_string()
        };
        return Ok(Command::Filter(query));
    }

    match verb {
        "c" => rest.parse::<RankingCriterion>().map(Command::Criterion),
        "m" => Ok(Command::LoadMore),
        "r" => Ok(Command::Refresh),
        "v" => Ok(Command::ToggleView),
        "s" => Ok(Command::Search(rest.to_string())),
        "h" | "?" | "" => Ok(Command::Help),
        "q" => Ok(Command::Quit),
        other => Err(format!("unknown command '{}' (h for help)", other)),
    }
}

/// Map a command to the action it dispatches, given the focused list
pub fn command_action(command: &Command, focus: Focus) -> Option<Action> {
    match (command, focus) {
        (Command::Criterion(criterion), _) => Some(Action::SelectCriterion(*criterion)),
        (Command::Filter(query), Focus::Ranking) => Some(Action::SetRankingQuery(query.clone())),
        (Command::Filter(query), Focus::Matches) => Some(Action::SetMatchesQuery(query.clone())),
        (Command::LoadMore, Focus::Ranking) => Some(Action::LoadMoreRanking),
        (Command::LoadMore, Focus::Matches) => Some(Action::LoadMoreMatches),
        (Command::Refresh, Focus::Ranking) => Some(Action::RefreshRanking),
        (Command::Refresh, Focus::Matches) => Some(Action::RefreshMatches),
        (Command::Search(text), _) => Some(Action::SearchInput(text.clone())),
        (Command::Quit, _) => Some(Action::Quit),
        (Command::ToggleView, _) | (Command::Help, _) => None,
    }
}

struct InteractiveSession {
    runtime: Runtime,
    focus: Focus,
    box_chars: BoxChars,
    time_format: String,
}

impl InteractiveSession {
    fn print_focused(&self) {
        let state = self.runtime.state();
        match self.focus {
            Focus::Ranking => print!("{}", render_ranking(&state.ranking, &self.box_chars)),
            Focus::Matches => print!(
                "{}",
                render_matches(&state.matches, &self.time_format, &self.box_chars)
            ),
        }
    }

    fn print_status(&self) {
        if let Some(status) = render_status(&self.runtime.state().system) {
            println!("{}", status);
        }
    }

    /// Returns false on quit
    fn handle_line(&mut self, line: &str) -> bool {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                self.runtime.dispatch(Action::SetStatusMessage {
                    message: e,
                    is_error: true,
                });
                self.print_status();
                return true;
            }
        };
        debug!("INTERACTIVE: {:?}", command);

        match command {
            Command::Quit => {
                self.runtime.dispatch(Action::Quit);
                return false;
            }
            Command::Help => {
                print!("{}", HELP);
                return true;
            }
            Command::ToggleView => {
                self.focus = match self.focus {
                    Focus::Ranking => Focus::Matches,
                    Focus::Matches => Focus::Ranking,
                };
            }
            Command::Criterion(_) => self.focus = Focus::Ranking,
            _ => {}
        }

        if let Some(action) = command_action(&command, self.focus) {
            self.runtime.dispatch(action);
        }
        match &command {
            // Blank input clears at once; otherwise results print once debounced
            Command::Search(text) if text.trim().is_empty() => print!(
                "{}",
                render_search(&self.runtime.state().search, &self.box_chars)
            ),
            Command::Search(_) => {}
            _ => self.print_focused(),
        }
        true
    }

    fn handle_action(&self, action: &Action) {
        let state = self.runtime.state();
        match action {
            Action::RankingLoaded { generation, .. }
                if self.focus == Focus::Ranking && *generation == state.ranking.list.generation() =>
            {
                self.print_focused();
                self.print_status();
            }
            Action::MatchesLoaded { generation, .. }
                if self.focus == Focus::Matches && *generation == state.matches.generation() =>
            {
                self.print_focused();
                self.print_status();
            }
            Action::SearchDebounced { generation } if state.search.is_current(*generation) => {
                print!("{}", render_search(&state.search, &self.box_chars));
            }
            Action::SearchLoaded { generation, .. } if state.search.is_current(*generation) => {
                print!("{}", render_search(&state.search, &self.box_chars));
            }
            _ => {}
        }
    }
}

/// Run the interactive session until `q` or end of input
pub async fn run(client: Arc<dyn StatHubDataProvider>, config: Config) -> Result<()> {
    info!("Starting interactive session");
    let data_effects = Arc::new(DataEffects::new(client));
    let mut session = InteractiveSession {
        runtime: Runtime::new(AppState::new(&config), data_effects),
        focus: Focus::Ranking,
        box_chars: BoxChars::from_use_unicode(config.use_unicode),
        time_format: config.time_format.clone(),
    };

    print!("{}", HELP);
    session.runtime.dispatch(Action::RefreshAll);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if !session.handle_line(&line) {
                            break;
                        }
                    }
                    None => break,
                }
            }
            Some(action) = session.runtime.process_next() => {
                session.handle_action(&action);
            }
        }
    }

    info!("Interactive session finished");
    Ok(())
}
