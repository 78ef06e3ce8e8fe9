//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use soccer_scout::{
    cli::{Commands, Scout},
    commands::{
        common::{resolve_export_dir, today},
        player_detail::handle_player_detail,
        players::handle_players,
        shell::run_shell,
        sync::handle_sync,
        teams::handle_teams,
        watchlist::{add_players, handle_export, handle_watchlist},
    },
    watchlist::WatchlistStore,
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> Result<()> {
    let app = Scout::parse();

    let default_level = if app.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut out = std::io::stdout().lock();

    match app.command {
        Commands::Players { criteria, json } => {
            let criteria = criteria.to_criteria()?;
            handle_players(&criteria, &WatchlistStore::new(), json, &mut out)?
        }

        Commands::Teams { league, json } => handle_teams(league, json, &mut out)?,

        Commands::Player { id, criteria, json } => {
            let criteria = criteria.to_criteria()?;
            handle_player_detail(id, &criteria, &WatchlistStore::new(), json, &mut out)?
        }

        Commands::Watchlist {
            add,
            export,
            dir,
            json,
        } => {
            let mut store = WatchlistStore::new();
            // Progress lines would break the JSON document
            if json {
                add_players(&mut store, &add, &mut std::io::sink())?;
            } else {
                add_players(&mut store, &add, &mut out)?;
            }
            handle_watchlist(&store, json, &mut out)?;
            if export {
                handle_export(&store, &resolve_export_dir(dir), today(), &mut out)?;
            }
        }

        Commands::Sync => handle_sync(&mut out)?,

        Commands::Shell => {
            let input = std::io::stdin().lock();
            run_shell(input, &mut out, resolve_export_dir(None))?
        }
    }

    Ok(())
}
