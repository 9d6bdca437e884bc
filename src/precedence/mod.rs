//! Precedence between two analysts contesting one team.
//!
//! A [`PrecedenceRule`] compares two analysts on a team and either names
//! a winner or reports a full tie. The [`PrecedenceEvaluator`] pairs a
//! rule with a [`TiebreakRecorder`](crate::tiebreak::TiebreakRecorder)
//! so that every contest yields exactly one winner.
//!
//! # Rules
//!
//! | [`RankType`] | 1st key | 2nd key | 3rd key |
//! |---|---|---|---|
//! | `CapacityRating` | team rating, lower wins | stated rank, **higher** wins | performance, higher wins |
//! | `PreferenceRank` | stated rank, lower wins | class, lower wins | performance, higher wins |
//!
//! The opposite sense of the stated-rank key between the two rules is
//! preserved as observed in production rosters.

mod evaluator;
mod rules;
mod types;

pub use evaluator::PrecedenceEvaluator;
pub use rules::{rule_for, CapacityRatingRule, PreferenceRankRule};
pub use types::{PrecedenceRule, RankType};
