//! Capacity-constrained team placement.
//!
//! Assigns a fixed population of analysts to capacity-limited teams
//! using ranked preferences, seniority, performance, and team ratings.
//! Overflow is resolved by a deterministic precedence rule with a
//! random, fully audited, last-resort tiebreak.
//!
//! - **Model**: [`model::Analyst`], [`model::Team`], [`model::Schema`]
//!   with construction-time validation and a serializable summary.
//! - **Precedence**: two built-in rules selected by
//!   [`precedence::RankType`], pluggable through
//!   [`precedence::PrecedenceRule`].
//! - **Tiebreak**: uniform random draw between fully tied analysts,
//!   recorded as a [`tiebreak::TiebreakRecord`].
//! - **Ranker**: orders a team's occupants from pairwise precedence
//!   ([`ranker::SelectionRanker`], [`ranker::MergeRanker`]).
//! - **Placement**: the seeding → ranking → requeue loop
//!   ([`placement::PlacementRunner`]) with a per-iteration trace.
//! - **Generate**: random well-formed schemas for tests and benchmarks.
//!
//! # Example
//!
//! ```
//! use u_placement::model::{Analyst, Schema, Team};
//! use u_placement::placement::{PlacementConfig, PlacementRunner};
//! use u_placement::precedence::RankType;
//!
//! let schema = Schema::new(
//!     vec![
//!         Analyst::from_ranking("Ada", 1, 3, ["Risk", "Ops"]).unwrap(),
//!         Analyst::from_ranking("Bo", 1, 3, ["Risk", "Ops"]).unwrap(),
//!     ],
//!     vec![Team::new("Risk", 1).unwrap(), Team::new("Ops", 1).unwrap()],
//! )
//! .unwrap();
//!
//! let config = PlacementConfig::default()
//!     .with_rank_type(RankType::PreferenceRank)
//!     .with_seed(42);
//! let result = PlacementRunner::run(&schema, &config).unwrap();
//!
//! // Ada and Bo tie on every key, so one random tiebreak decides Risk.
//! assert_eq!(result.tiebreak_count(), 1);
//! assert_eq!(result.iterations, 2);
//! ```
//!
//! # Architecture
//!
//! Entities are immutable once built. All run-scoped state (derived
//! rankings, exhaustion counters, rosters, trace, tiebreak audit) is
//! owned by a single run, so one [`model::Schema`] can back any number
//! of sequential or parallel runs.

pub mod error;
pub mod generate;
pub mod model;
pub mod placement;
pub mod precedence;
pub mod ranker;
pub mod tiebreak;

pub use error::PlacementError;
