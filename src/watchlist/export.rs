//! CSV export of watchlisted players.

use chrono::NaiveDate;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

use crate::{
    catalog::{PlayerRecord, PLAYER_FIELDS},
    error::Result,
};

/// Serialize `players` as UTF-8 CSV.
///
/// The header row is always written, so an empty selection produces a
/// header-only file. Columns follow [`PlayerRecord`] field order.
pub fn export_csv(players: &[&PlayerRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(PLAYER_FIELDS)?;
    for player in players {
        writer.serialize(player)?;
    }

    writer.into_inner().map_err(|e| e.into_error().into())
}

/// `soccer_scout_watchlist_<YYYYMMDD>.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("soccer_scout_watchlist_{}.csv", date.format("%Y%m%d"))
}

/// Write export bytes into `dir` under the dated file name, creating the
/// directory if needed. Returns the full path written.
pub fn write_export(dir: &Path, date: NaiveDate, contents: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(date));
    fs::write(&path, contents)?;
    info!(path = %path.display(), bytes = contents.len(), "wrote watchlist export");
    Ok(path)
}
