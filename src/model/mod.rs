//! Placement domain entities.
//!
//! - [`Analyst`]: a party seeking a seat on exactly one team
//! - [`Team`]: a capacity-limited destination with optional ratings
//! - [`Schema`]: the analysts and teams for one placement run
//! - [`SchemaSummary`]: a read-only, serializable snapshot for display
//!
//! Entities validate their attributes at construction and are never
//! mutated by a placement run. Run-scoped state (exhaustion counters,
//! derived rankings, rosters) lives in [`crate::placement`].

mod analyst;
mod schema;
mod team;

pub use analyst::Analyst;
pub use schema::{AnalystSummary, Schema, SchemaSummary, TeamSummary};
pub use team::Team;
