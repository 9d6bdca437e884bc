//! Random resolution of fully tied precedence contests.
//!
//! When every precedence key ties, the winner is drawn uniformly at
//! random from the two analysts and the draw is appended to an audit
//! trail. Randomness is supplied by the caller so that a seeded run
//! reproduces its tiebreak sequence exactly.

use crate::model::{Analyst, Team};
use crate::precedence::RankType;
use rand::Rng;
use tracing::debug;

/// One random tiebreak: who won, who lost, where, and under which rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TiebreakRecord {
    pub winner: String,
    pub loser: String,
    pub team: String,
    pub rank_type: RankType,
}

impl std::fmt::Display for TiebreakRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} over {} on {} ({})",
            self.winner, self.loser, self.team, self.rank_type
        )
    }
}

/// Append-only audit of tiebreaks drawn during one run.
#[derive(Debug, Clone, Default)]
pub struct TiebreakRecorder {
    records: Vec<TiebreakRecord>,
}

impl TiebreakRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks a winner between two fully tied analysts and records it.
    ///
    /// Returns `true` when `a` wins.
    pub fn resolve<R: Rng>(
        &mut self,
        a: &Analyst,
        b: &Analyst,
        team: &Team,
        rank_type: RankType,
        rng: &mut R,
    ) -> bool {
        let a_wins = rng.random_bool(0.5);
        let (winner, loser) = if a_wins { (a, b) } else { (b, a) };
        debug!(
            winner = winner.name(),
            loser = loser.name(),
            team = team.name(),
            "random tiebreak"
        );
        self.records.push(TiebreakRecord {
            winner: winner.name().to_string(),
            loser: loser.name().to_string(),
            team: team.name().to_string(),
            rank_type,
        });
        a_wins
    }

    /// Number of tiebreaks drawn so far.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[TiebreakRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TiebreakRecord> {
        self.records
    }
}
