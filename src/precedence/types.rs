//! Rank types and the precedence rule trait.

use crate::error::PlacementError;
use crate::model::{Analyst, Team};
use std::cmp::Ordering;

/// Selects which precedence rule governs contested teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RankType {
    /// Full-time placement: teams' ratings of analysts decide first,
    /// and each analyst's ranking is re-derived from those ratings.
    CapacityRating,

    /// Rotation placement: analysts' own rankings decide first, then
    /// seniority.
    #[default]
    PreferenceRank,
}

impl RankType {
    pub fn label(&self) -> &'static str {
        match self {
            RankType::CapacityRating => "capacity-rating",
            RankType::PreferenceRank => "preference-rank",
        }
    }
}

impl std::fmt::Display for RankType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for RankType {
    type Err = String;

    /// Accepts the canonical labels and the `fulltime` / `rotation` aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "capacity-rating" | "fulltime" | "full-time" => Ok(RankType::CapacityRating),
            "preference-rank" | "rotation" => Ok(RankType::PreferenceRank),
            other => Err(format!("unknown rank type: {other}")),
        }
    }
}

/// A strict precedence order between two analysts on one team.
///
/// Returns [`Ordering::Less`] when `a` wins, [`Ordering::Greater`] when
/// `b` wins, and [`Ordering::Equal`] when every key ties. Implementations
/// must report a missing preference or rating as an error rather than
/// skipping the key.
///
/// # Examples
///
/// ```ignore
/// struct SeniorityOnly;
///
/// impl PrecedenceRule for SeniorityOnly {
///     fn name(&self) -> &str { "SeniorityOnly" }
///     fn compare(&self, a: &Analyst, b: &Analyst, _team: &Team)
///         -> Result<Ordering, PlacementError> {
///         Ok(a.class().cmp(&b.class()))
///     }
/// }
/// ```
pub trait PrecedenceRule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Compares `a` against `b` for a seat on `team`.
    fn compare(&self, a: &Analyst, b: &Analyst, team: &Team) -> Result<Ordering, PlacementError>;
}
