//! Interactive session: one shell process is one user session.
//!
//! The session owns its filter criteria and its watchlist and passes them
//! explicitly to the command handlers. Nothing survives the process.

use clap::{Parser, Subcommand};
use std::{
    io::{BufRead, Write},
    path::PathBuf,
};
use tracing::{debug, warn};

use super::{
    common::today,
    player_detail::handle_player_detail,
    players::handle_players,
    sync::handle_sync,
    teams::handle_teams,
    watchlist::{add_players, handle_export, handle_watchlist},
};
use crate::{
    catalog::find_player,
    cli::{
        types::{LeagueFilter, PlayerId},
        CriteriaArgs,
    },
    query::PlayerCriteria,
    watchlist::WatchlistStore,
    Result,
};

const PROMPT: &str = "scout> ";

#[derive(Debug, Parser)]
#[clap(multicall = true)]
struct ShellLine {
    #[clap(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// List players using the session filters.
    Players {
        #[clap(long)]
        json: bool,
    },

    /// Replace the session filters and list the matching players.
    Filter {
        #[clap(flatten)]
        criteria: CriteriaArgs,
    },

    /// List teams.
    Teams {
        #[clap(long, short, default_value_t = LeagueFilter::All)]
        league: LeagueFilter,

        #[clap(long)]
        json: bool,
    },

    /// Show one player, scaled against the session filters.
    Show {
        id: PlayerId,

        #[clap(long)]
        json: bool,
    },

    /// Track a player.
    Add { id: PlayerId },

    /// Stop tracking a player.
    Remove { id: PlayerId },

    /// Track a player if untracked, otherwise stop tracking.
    Toggle { id: PlayerId },

    /// Show the watchlist.
    Watchlist {
        #[clap(long)]
        json: bool,
    },

    /// Export the watchlist to a dated CSV file.
    Export {
        /// Export directory for this file only.
        #[clap(long)]
        dir: Option<PathBuf>,
    },

    /// Refresh data from external providers.
    Sync,

    /// End the session.
    #[clap(alias = "exit")]
    Quit,
}

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// State owned by one interactive session.
#[derive(Debug)]
pub struct Session {
    criteria: PlayerCriteria,
    watchlist: WatchlistStore,
    export_dir: PathBuf,
}

impl Session {
    pub fn new(export_dir: PathBuf) -> Self {
        Self {
            criteria: PlayerCriteria::default(),
            watchlist: WatchlistStore::new(),
            export_dir,
        }
    }

    pub fn criteria(&self) -> &PlayerCriteria {
        &self.criteria
    }

    pub fn watchlist(&self) -> &WatchlistStore {
        &self.watchlist
    }

    /// Run one command line. Parse failures and `help` are written to `out`
    /// and leave the session unchanged.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let words = split_words(line);
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                if err.use_stderr() {
                    warn!(line, "could not parse shell command");
                }
                write!(out, "{}", err)?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "shell command");

        match command {
            ShellCommand::Players { json } => {
                handle_players(&self.criteria, &self.watchlist, json, out)?
            }
            ShellCommand::Filter { criteria } => {
                self.criteria = criteria.to_criteria()?;
                handle_players(&self.criteria, &self.watchlist, false, out)?
            }
            ShellCommand::Teams { league, json } => handle_teams(league, json, out)?,
            ShellCommand::Show { id, json } => {
                handle_player_detail(id, &self.criteria, &self.watchlist, json, out)?
            }
            ShellCommand::Add { id } => add_players(&mut self.watchlist, &[id], out)?,
            ShellCommand::Remove { id } => {
                if self.watchlist.remove(id) {
                    writeln!(out, "Removed {} from watchlist", display_name(id))?;
                } else {
                    writeln!(out, "{} was not on the watchlist", display_name(id))?;
                }
            }
            ShellCommand::Toggle { id } => match find_player(id) {
                Some(player) => {
                    if self.watchlist.toggle(id) {
                        writeln!(out, "Added {} to watchlist", player.name)?;
                    } else {
                        writeln!(out, "Removed {} from watchlist", player.name)?;
                    }
                }
                None => writeln!(out, "No player with ID {}; watchlist unchanged", id)?,
            },
            ShellCommand::Watchlist { json } => handle_watchlist(&self.watchlist, json, out)?,
            ShellCommand::Export { dir } => {
                let dir = dir.unwrap_or_else(|| self.export_dir.clone());
                handle_export(&self.watchlist, &dir, today(), out)?;
            }
            ShellCommand::Sync => handle_sync(out)?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

fn display_name(id: PlayerId) -> String {
    find_player(id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| format!("Player {}", id))
}

/// Split a command line on whitespace, keeping double-quoted text together:
/// `filter -q "red wolves"` yields three words.
fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }
    if has_word {
        words.push(current);
    }
    words
}

/// Read commands from `input` until `quit` or end of input.
///
/// Command errors are reported and the session continues; only a failure to
/// write to `out` ends it early.
pub fn run_shell(input: impl BufRead, out: &mut impl Write, export_dir: PathBuf) -> Result<()> {
    let mut session = Session::new(export_dir);
    writeln!(
        out,
        "Soccer scout session. Type `help` for commands, `quit` to leave."
    )?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };

        match session.execute(&line?, out) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
    }

    debug!(
        watchlisted = session.watchlist().len(),
        "session ended; watchlist discarded"
    );
    Ok(())
}
