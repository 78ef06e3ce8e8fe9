//! Query pipeline over the catalogs
//!
//! Every function here is pure: criteria and records in, a derived view out.
//! - `criteria`: player filter/sort parameters
//! - `players` / `teams`: filtered views
//! - `aggregate`: summary metrics
//! - `radar`: cohort-relative stat scaling

pub mod aggregate;
pub mod criteria;
pub mod players;
pub mod radar;
pub mod teams;

pub use aggregate::{
    source_coverage, summarize_cohort, summarize_watchlist, team_value_shares, CohortSummary,
    SourceCoverage, TeamValueShare, WatchlistSummary,
};
pub use criteria::{InclusiveRange, PlayerCriteria};
pub use players::query_players;
pub use radar::{radar_profile, RadarAxis, RadarCategory, RadarProfile};
pub use teams::query_teams;
