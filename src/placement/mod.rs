//! Iterative placement engine.
//!
//! Seats every analyst on exactly one team without exceeding any
//! team's headcount:
//!
//! 1. **Seeding**: every analyst joins the first team of their ranking
//!    (stated, or derived from team ratings under
//!    [`RankType::CapacityRating`](crate::precedence::RankType)).
//! 2. **Ranking**: every over-capacity team orders its occupants by
//!    precedence and keeps the first `headcount`.
//! 3. **Requeue**: each released analyst advances one step down their
//!    ranking and joins that team. Running off the end of the ranking is
//!    [`PlacementError::Infeasible`](crate::error::PlacementError).
//! 4. Steps 2 and 3 repeat until an iteration releases nobody.
//!
//! Every release advances one analyst's exhaustion counter by one, and
//! no counter exceeds the analyst's ranking length, so a run performs at
//! most `n_analysts * n_teams` releases and terminates. The result is
//! feasible under the chosen precedence, not globally optimal.
//!
//! # Key Types
//!
//! - [`PlacementConfig`]: rank type, seed, optional iteration cap
//! - [`PlacementRunner`]: executes the loop
//! - [`PlacementResult`] / [`PlacementFailure`]: converged roster or
//!   abort, both carrying the [`RunLog`] and tiebreak audit
//! - [`DerivedRanking`]: run-scoped team order per analyst

mod config;
mod log;
mod ranking;
mod runner;

pub use config::PlacementConfig;
pub use log::{IterationRecord, Placements, RunLog, TeamRoster};
pub use ranking::DerivedRanking;
pub use runner::{PlacementFailure, PlacementResult, PlacementRunner};
