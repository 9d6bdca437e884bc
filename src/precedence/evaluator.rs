//! Precedence evaluation with random tiebreak fallback.

use super::rules::rule_for;
use super::types::{PrecedenceRule, RankType};
use crate::error::PlacementError;
use crate::model::{Analyst, Team};
use crate::tiebreak::TiebreakRecorder;
use rand::Rng;
use std::cmp::Ordering;

/// Decides contested seats: applies a [`PrecedenceRule`] and falls back
/// to a recorded random draw on a full tie.
///
/// The evaluator borrows the run's tiebreak recorder and random source,
/// so every tiebreak it draws lands in the run's audit trail.
pub struct PrecedenceEvaluator<'a, R: Rng> {
    rule: Box<dyn PrecedenceRule>,
    rank_type: RankType,
    recorder: &'a mut TiebreakRecorder,
    rng: &'a mut R,
}

impl<'a, R: Rng> PrecedenceEvaluator<'a, R> {
    /// Creates an evaluator using the built-in rule for `rank_type`.
    pub fn new(rank_type: RankType, recorder: &'a mut TiebreakRecorder, rng: &'a mut R) -> Self {
        Self::with_rule(rule_for(rank_type), rank_type, recorder, rng)
    }

    /// Creates an evaluator with a custom rule. `rank_type` labels the
    /// tiebreaks it records.
    pub fn with_rule(
        rule: Box<dyn PrecedenceRule>,
        rank_type: RankType,
        recorder: &'a mut TiebreakRecorder,
        rng: &'a mut R,
    ) -> Self {
        Self {
            rule,
            rank_type,
            recorder,
            rng,
        }
    }

    pub fn rank_type(&self) -> RankType {
        self.rank_type
    }

    pub fn recorder(&self) -> &TiebreakRecorder {
        &*self.recorder
    }

    /// Returns `true` when `a` takes precedence over `b` on `team`.
    pub fn prefers(&mut self, a: &Analyst, b: &Analyst, team: &Team) -> Result<bool, PlacementError> {
        match self.rule.compare(a, b, team)? {
            Ordering::Less => Ok(true),
            Ordering::Greater => Ok(false),
            Ordering::Equal => Ok(self
                .recorder
                .resolve(a, b, team, self.rank_type, &mut *self.rng)),
        }
    }

    /// Returns whichever of `a` and `b` wins `team`.
    pub fn winner<'x>(
        &mut self,
        a: &'x Analyst,
        b: &'x Analyst,
        team: &Team,
    ) -> Result<&'x Analyst, PlacementError> {
        Ok(if self.prefers(a, b, team)? { a } else { b })
    }
}
