//! Data sync command.
//!
//! The catalogs are fixed in-memory data, so there is nothing to refresh.
//! The command reports which providers a real sync would use.

use std::io::Write;
use tracing::debug;

use crate::Result;

pub const SYNC_MESSAGE: &str =
    "Data sync functionality would connect to FBref, Transfermarkt, ASA, and Sofascore APIs";

pub fn handle_sync(out: &mut impl Write) -> Result<()> {
    debug!("sync requested; catalogs are static");
    writeln!(out, "{}", SYNC_MESSAGE)?;
    Ok(())
}
