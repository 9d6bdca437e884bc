//! Run-scoped team rankings.
//!
//! Each analyst walks a ranking of teams during a run. Under
//! [`RankType::PreferenceRank`] that is the analyst's stated ranking.
//! Under [`RankType::CapacityRating`] it is derived: teams that rated
//! the analyst best come first, ties broken by the analyst's stated
//! preference. The derivation never touches the analyst entity.

use crate::error::PlacementError;
use crate::model::Schema;
use crate::precedence::RankType;
use std::cmp::Ordering;

/// Per-analyst team order for one run, as indices into
/// [`Schema::teams`]. Analysts are indexed as in [`Schema::analysts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedRanking {
    choices: Vec<Vec<usize>>,
}

impl DerivedRanking {
    /// Builds the ranking `rank_type` walks.
    pub fn for_rank_type(schema: &Schema, rank_type: RankType) -> Result<Self, PlacementError> {
        match rank_type {
            RankType::PreferenceRank => Self::stated(schema),
            RankType::CapacityRating => Self::by_team_rating(schema),
        }
    }

    /// Each analyst's own stated ranking.
    pub fn stated(schema: &Schema) -> Result<Self, PlacementError> {
        let choices = schema
            .analysts()
            .iter()
            .map(|analyst| {
                analyst
                    .choices()
                    .iter()
                    .map(|team| {
                        schema
                            .team_index(team)
                            .ok_or_else(|| PlacementError::UnknownTeam {
                                analyst: analyst.name().to_string(),
                                team: team.clone(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { choices })
    }

    /// Rankings derived from team ratings.
    ///
    /// Every team must carry ratings, every analyst must be rated by at
    /// least one team, and every analyst must state a preference for
    /// each team that rates them. Only teams that rate an analyst appear
    /// in that analyst's derived ranking.
    pub fn by_team_rating(schema: &Schema) -> Result<Self, PlacementError> {
        for team in schema.teams() {
            if team.ratings().is_none() {
                return Err(PlacementError::MissingRatings {
                    team: team.name().to_string(),
                });
            }
        }

        let mut choices = Vec::with_capacity(schema.n_analysts());
        for analyst in schema.analysts() {
            // (team index, team's rating, analyst's stated rank)
            let mut rated: Vec<(usize, f64, usize)> = Vec::new();
            for (t, team) in schema.teams().iter().enumerate() {
                let Some(rating) = team.rating_of(analyst.name()) else {
                    continue;
                };
                let pref =
                    analyst
                        .rank_of(team.name())
                        .ok_or_else(|| PlacementError::MissingPreference {
                            analyst: analyst.name().to_string(),
                            team: team.name().to_string(),
                        })?;
                rated.push((t, rating, pref));
            }
            if rated.is_empty() {
                return Err(PlacementError::Unrated {
                    analyst: analyst.name().to_string(),
                });
            }
            rated.sort_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(Ordering::Equal)
                    .then(a.2.cmp(&b.2))
            });
            choices.push(rated.into_iter().map(|(t, _, _)| t).collect());
        }
        Ok(Self { choices })
    }

    /// Team index at `rank` for `analyst`, or `None` past the end.
    pub fn choice(&self, analyst: usize, rank: usize) -> Option<usize> {
        self.choices.get(analyst)?.get(rank).copied()
    }

    /// Number of teams in `analyst`'s ranking.
    pub fn len(&self, analyst: usize) -> usize {
        self.choices.get(analyst).map_or(0, Vec::len)
    }

    /// The full ranking of `analyst`.
    pub fn choices(&self, analyst: usize) -> &[usize] {
        self.choices.get(analyst).map(Vec::as_slice).unwrap_or(&[])
    }
}
