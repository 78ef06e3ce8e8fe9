//! The player catalog: twelve fixed rows, built once per process.

use std::sync::OnceLock;

use tracing::debug;

use super::models::PlayerRecord;
use crate::cli::types::{League, PlayerId, Position};

static PLAYERS: OnceLock<Vec<PlayerRecord>> = OnceLock::new();

/// Every player in catalog order.
///
/// The list is materialized on first access and shared read-only for the
/// rest of the process, so callers in different sessions see the same rows.
pub fn all_players() -> &'static [PlayerRecord] {
    PLAYERS.get_or_init(|| {
        let players = build_players();
        debug!(count = players.len(), "materialized player catalog");
        players
    })
}

/// Look up a single player by identifier.
pub fn find_player(id: PlayerId) -> Option<&'static PlayerRecord> {
    all_players().iter().find(|p| p.id == id)
}

fn build_players() -> Vec<PlayerRecord> {
    vec![
        PlayerRecord {
            id: PlayerId::new(1),
            name: "Diego Rossi".to_string(),
            age: 26,
            position: Position::FW,
            club: "Columbus Crew".to_string(),
            league: League::Mls,
            nationality: "Uruguay".to_string(),
            market_value: 8_500_000,
            rating: 8.2,
            goals: 15,
            assists: 8,
            matches: 28,
            minutes_played: 2_340,
            pass_accuracy: 82,
            shots_per_game: 3.2,
            key_passes: 2.1,
            dribbles: 2.8,
            aerial_duels: 1.2,
            tackles: 0.8,
            interceptions: 0.4,
            clearances: 0.3,
            fbref: true,
            transfermarkt: true,
            asa: true,
            sofascore: true,
        },
        PlayerRecord {
            id: PlayerId::new(2),
            name: "Tyler Adams".to_string(),
            age: 25,
            position: Position::CDM,
            club: "AFC Bournemouth".to_string(),
            league: League::Mls,
            nationality: "USA".to_string(),
            market_value: 25_000_000,
            rating: 8.5,
            goals: 2,
            assists: 4,
            matches: 30,
            minutes_played: 2_567,
            pass_accuracy: 88,
            shots_per_game: 0.8,
            key_passes: 1.5,
            dribbles: 1.2,
            aerial_duels: 2.1,
            tackles: 3.2,
            interceptions: 2.8,
            clearances: 1.9,
            fbref: true,
            transfermarkt: true,
            asa: true,
            sofascore: true,
        },
        PlayerRecord {
            id: PlayerId::new(3),
            name: "Ricardo Pepi".to_string(),
            age: 21,
            position: Position::ST,
            club: "PSV Eindhoven".to_string(),
            league: League::Mls,
            nationality: "USA".to_string(),
            market_value: 15_000_000,
            rating: 7.8,
            goals: 12,
            assists: 3,
            matches: 25,
            minutes_played: 1_890,
            pass_accuracy: 76,
            shots_per_game: 3.8,
            key_passes: 1.2,
            dribbles: 1.8,
            aerial_duels: 2.5,
            tackles: 0.3,
            interceptions: 0.2,
            clearances: 0.4,
            fbref: true,
            transfermarkt: true,
            asa: false,
            sofascore: true,
        },
        PlayerRecord {
            id: PlayerId::new(4),
            name: "Emiliano Rigoni".to_string(),
            age: 31,
            position: Position::RW,
            club: "Austin FC".to_string(),
            league: League::Mls,
            nationality: "Argentina".to_string(),
            market_value: 3_500_000,
            rating: 7.5,
            goals: 8,
            assists: 11,
            matches: 32,
            minutes_played: 2_456,
            pass_accuracy: 84,
            shots_per_game: 2.4,
            key_passes: 2.8,
            dribbles: 3.1,
            aerial_duels: 0.8,
            tackles: 0.9,
            interceptions: 0.6,
            clearances: 0.2,
            fbref: true,
            transfermarkt: true,
            asa: true,
            sofascore: true,
        },
        PlayerRecord {
            id: PlayerId::new(5),
            name: "Tanner Tessmann".to_string(),
            age: 23,
            position: Position::CM,
            club: "Venezia FC".to_string(),
            league: League::UslChampionship,
            nationality: "USA".to_string(),
            market_value: 4_000_000,
            rating: 7.6,
            goals: 5,
            assists: 7,
            matches: 29,
            minutes_played: 2_234,
            pass_accuracy: 85,
            shots_per_game: 1.3,
            key_passes: 2.0,
            dribbles: 1.5,
            aerial_duels: 1.8,
            tackles: 2.4,
            interceptions: 1.9,
            clearances: 1.2,
            fbref: true,
            transfermarkt: true,
            asa: false,
            sofascore: true,
        },
        PlayerRecord {
            id: PlayerId::new(6),
            name: "Nick Lima".to_string(),
            age: 29,
            position: Position::RB,
            club: "New England Revolution".to_string(),
            league: League::Mls,
            nationality: "USA".to_string(),
            market_value: 2_500_000,
            rating: 7.2,
            goals: 1,
            assists: 6,
            matches: 28,
            minutes_played: 2_320,
            pass_accuracy: 81,
            shots_per_game: 0.6,
            key_passes: 1.4,
            dribbles: 1.9,
            aerial_duels: 1.5,
            tackles: 2.8,
            interceptions: 2.1,
            clearances: 2.5,
            fbref: true,
            transfermarkt: true,
            asa: true,
            sofascore: true,
        },
        PlayerRecord {
            id: PlayerId::new(7),
            name: "Jonathan Lewis".to_string(),
            age: 26,
            position: Position::LW,
            club: "Colorado Rapids".to_string(),
            league: League::Mls,
            nationality: "USA".to_string(),
            market_value: 3_000_000,
            rating: 7.3,
            goals: 9,
            assists: 5,
            matches: 26,
            minutes_played: 1_856,
            pass_accuracy: 79,
            shots_per_game: 2.6,
            key_passes: 1.7,
            dribbles: 3.4,
            aerial_duels: 0.6,
            tackles: 0.7,
            interceptions: 0.4,
            clearances: 0.1,
            fbref: true,
            transfermarkt: false,
            asa: true,
            sofascore: true,
        },
        PlayerRecord {
            id: PlayerId::new(8),
            name: "Hadji Barry".to_string(),
            age: 31,
            position: Position::ST,
            club: "Colorado Springs".to_string(),
            league: League::UslChampionship,
            nationality: "Guinea".to_string(),
            market_value: 800_000,
            rating: 7.0,
            goals: 18,
            assists: 4,
            matches: 30,
            minutes_played: 2_456,
            pass_accuracy: 72,
            shots_per_game: 3.9,
            key_passes: 1.0,
            dribbles: 1.3,
            aerial_duels: 3.2,
            tackles: 0.4,
            interceptions: 0.3,
            clearances: 0.5,
            fbref: true,
            transfermarkt: true,
            asa: false,
            sofascore: false,
        },
        PlayerRecord {
            id: PlayerId::new(9),
            name: "Milan Iloski".to_string(),
            age: 24,
            position: Position::CAM,
            club: "Charleston Battery".to_string(),
            league: League::UslChampionship,
            nationality: "North Macedonia".to_string(),
            market_value: 1_200_000,
            rating: 7.1,
            goals: 7,
            assists: 9,
            matches: 28,
            minutes_played: 2_134,
            pass_accuracy: 83,
            shots_per_game: 2.1,
            key_passes: 2.9,
            dribbles: 2.2,
            aerial_duels: 0.9,
            tackles: 1.1,
            interceptions: 0.8,
            clearances: 0.3,
            fbref: true,
            transfermarkt: false,
            asa: false,
            sofascore: true,
        },
        PlayerRecord {
            id: PlayerId::new(10),
            name: "Arturo Rodriguez".to_string(),
            age: 22,
            position: Position::CM,
            club: "FC Tulsa".to_string(),
            league: League::UslChampionship,
            nationality: "USA".to_string(),
            market_value: 900_000,
            rating: 6.9,
            goals: 3,
            assists: 6,
            matches: 31,
            minutes_played: 2_567,
            pass_accuracy: 86,
            shots_per_game: 1.0,
            key_passes: 1.8,
            dribbles: 1.4,
            aerial_duels: 1.6,
            tackles: 2.6,
            interceptions: 2.2,
            clearances: 1.4,
            fbref: true,
            transfermarkt: true,
            asa: false,
            sofascore: true,
        },
        PlayerRecord {
            id: PlayerId::new(11),
            name: "Dariusz Formella".to_string(),
            age: 28,
            position: Position::RW,
            club: "Union Omaha".to_string(),
            league: League::UslLeagueOne,
            nationality: "Poland".to_string(),
            market_value: 600_000,
            rating: 6.8,
            goals: 11,
            assists: 8,
            matches: 27,
            minutes_played: 2_234,
            pass_accuracy: 80,
            shots_per_game: 2.8,
            key_passes: 2.3,
            dribbles: 2.9,
            aerial_duels: 0.7,
            tackles: 0.8,
            interceptions: 0.5,
            clearances: 0.2,
            fbref: false,
            transfermarkt: true,
            asa: false,
            sofascore: false,
        },
        PlayerRecord {
            id: PlayerId::new(12),
            name: "Greg Hurst".to_string(),
            age: 27,
            position: Position::ST,
            club: "Chattanooga Red Wolves".to_string(),
            league: League::UslLeagueOne,
            nationality: "USA".to_string(),
            market_value: 450_000,
            rating: 6.7,
            goals: 14,
            assists: 3,
            matches: 29,
            minutes_played: 2_345,
            pass_accuracy: 74,
            shots_per_game: 3.4,
            key_passes: 0.9,
            dribbles: 1.1,
            aerial_duels: 2.8,
            tackles: 0.3,
            interceptions: 0.2,
            clearances: 0.4,
            fbref: false,
            transfermarkt: false,
            asa: false,
            sofascore: true,
        },
    ]
}
