//! Built-in precedence rules.

use super::types::{PrecedenceRule, RankType};
use crate::error::PlacementError;
use crate::model::{Analyst, Team};
use std::cmp::Ordering;

/// Full-time rule: team rating (lower wins), then stated rank (higher
/// wins), then performance (higher wins).
#[derive(Debug, Clone, Copy, Default)]
pub struct CapacityRatingRule;

/// Rotation rule: stated rank (lower wins), then class (lower wins),
/// then performance (higher wins).
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferenceRankRule;

/// Returns the built-in rule for `rank_type`.
pub fn rule_for(rank_type: RankType) -> Box<dyn PrecedenceRule> {
    match rank_type {
        RankType::CapacityRating => Box::new(CapacityRatingRule),
        RankType::PreferenceRank => Box::new(PreferenceRankRule),
    }
}

fn stated_rank(analyst: &Analyst, team: &Team) -> Result<usize, PlacementError> {
    analyst
        .rank_of(team.name())
        .ok_or_else(|| PlacementError::MissingPreference {
            analyst: analyst.name().to_string(),
            team: team.name().to_string(),
        })
}

fn team_rating(team: &Team, analyst: &Analyst) -> Result<f64, PlacementError> {
    let ratings = team.ratings().ok_or_else(|| PlacementError::MissingRatings {
        team: team.name().to_string(),
    })?;
    ratings
        .get(analyst.name())
        .copied()
        .ok_or_else(|| PlacementError::MissingRating {
            team: team.name().to_string(),
            analyst: analyst.name().to_string(),
        })
}

impl PrecedenceRule for CapacityRatingRule {
    fn name(&self) -> &str {
        "CapacityRating"
    }

    fn compare(&self, a: &Analyst, b: &Analyst, team: &Team) -> Result<Ordering, PlacementError> {
        let (a_pref, b_pref) = (stated_rank(a, team)?, stated_rank(b, team)?);
        let (a_rating, b_rating) = (team_rating(team, a)?, team_rating(team, b)?);

        Ok(a_rating
            .partial_cmp(&b_rating)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b_pref.cmp(&a_pref))
            .then_with(|| b.performance().cmp(&a.performance())))
    }
}

impl PrecedenceRule for PreferenceRankRule {
    fn name(&self) -> &str {
        "PreferenceRank"
    }

    fn compare(&self, a: &Analyst, b: &Analyst, team: &Team) -> Result<Ordering, PlacementError> {
        let (a_pref, b_pref) = (stated_rank(a, team)?, stated_rank(b, team)?);

        Ok(a_pref
            .cmp(&b_pref)
            .then_with(|| a.class().cmp(&b.class()))
            .then_with(|| b.performance().cmp(&a.performance())))
    }
}
