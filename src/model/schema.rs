//! Schema: the analysts and teams of one placement run.

use super::{Analyst, Team};
use crate::error::PlacementError;
use std::collections::{BTreeMap, HashMap, HashSet};

/// The full set of analysts and teams for one run, with aggregate totals.
///
/// Construction checks that names are unique and that every team an
/// analyst ranks exists. It does not check that total headcount covers
/// the analysts; a shortfall surfaces as
/// [`PlacementError::Infeasible`] during the run.
///
/// # Examples
///
/// ```
/// use u_placement::model::{Analyst, Schema, Team};
///
/// let schema = Schema::new(
///     vec![Analyst::from_ranking("Ada", 1, 3, ["Risk", "Ops"]).unwrap()],
///     vec![Team::new("Risk", 1).unwrap(), Team::new("Ops", 2).unwrap()],
/// )
/// .unwrap();
/// assert_eq!(schema.total_headcount(), 3);
/// assert_eq!(
///     schema.to_string(),
///     "Schema with 1 analysts, 2 teams, and 3 headcount"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Schema {
    analysts: Vec<Analyst>,
    teams: Vec<Team>,
    team_index: HashMap<String, usize>,
    total_headcount: usize,
}

impl Schema {
    pub fn new(analysts: Vec<Analyst>, teams: Vec<Team>) -> Result<Self, PlacementError> {
        let mut team_index = HashMap::with_capacity(teams.len());
        for (i, team) in teams.iter().enumerate() {
            if team_index.insert(team.name().to_string(), i).is_some() {
                return Err(PlacementError::DuplicateTeam(team.name().to_string()));
            }
        }

        let mut seen = HashSet::with_capacity(analysts.len());
        for analyst in &analysts {
            if !seen.insert(analyst.name()) {
                return Err(PlacementError::DuplicateAnalyst(analyst.name().to_string()));
            }
            if let Some(team) = analyst
                .choices()
                .iter()
                .find(|t| !team_index.contains_key(t.as_str()))
            {
                return Err(PlacementError::UnknownTeam {
                    analyst: analyst.name().to_string(),
                    team: team.clone(),
                });
            }
        }

        let total_headcount = teams.iter().map(Team::headcount).sum();
        Ok(Self {
            analysts,
            teams,
            team_index,
            total_headcount,
        })
    }

    pub fn analysts(&self) -> &[Analyst] {
        &self.analysts
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn n_analysts(&self) -> usize {
        self.analysts.len()
    }

    pub fn n_teams(&self) -> usize {
        self.teams.len()
    }

    /// Sum of all team headcounts.
    pub fn total_headcount(&self) -> usize {
        self.total_headcount
    }

    /// Position of the named team in [`teams`](Self::teams).
    pub fn team_index(&self, name: &str) -> Option<usize> {
        self.team_index.get(name).copied()
    }

    pub fn team(&self, name: &str) -> Option<&Team> {
        self.team_index(name).map(|i| &self.teams[i])
    }

    pub fn analyst(&self, name: &str) -> Option<&Analyst> {
        self.analysts.iter().find(|a| a.name() == name)
    }

    /// Read-only snapshot for display and export.
    pub fn summary(&self) -> SchemaSummary {
        SchemaSummary {
            analysts: self
                .analysts
                .iter()
                .map(|a| {
                    (
                        a.name().to_string(),
                        AnalystSummary {
                            class: a.class(),
                            performance: a.performance(),
                            preferences: a.preferences().clone(),
                        },
                    )
                })
                .collect(),
            teams: self
                .teams
                .iter()
                .map(|t| {
                    (
                        t.name().to_string(),
                        TeamSummary {
                            headcount: t.headcount(),
                            ratings: t.ratings().cloned(),
                        },
                    )
                })
                .collect(),
        }
    }
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Schema with {} analysts, {} teams, and {} headcount",
            self.n_analysts(),
            self.n_teams(),
            self.total_headcount
        )
    }
}

/// Serializable view of a [`Schema`].
///
/// Derived from the schema on demand; never the authoritative run state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SchemaSummary {
    #[cfg_attr(feature = "serde", serde(rename = "Analysts"))]
    pub analysts: BTreeMap<String, AnalystSummary>,
    #[cfg_attr(feature = "serde", serde(rename = "Teams"))]
    pub teams: BTreeMap<String, TeamSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct AnalystSummary {
    pub class: u32,
    pub performance: u32,
    pub preferences: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct TeamSummary {
    pub headcount: usize,
    pub ratings: Option<BTreeMap<String, f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyst(name: &str, ranking: &[&str]) -> Analyst {
        Analyst::from_ranking(name, 1, 2, ranking.iter().copied()).unwrap()
    }

    #[test]
    fn test_totals() {
        let schema = Schema::new(
            vec![analyst("a", &["X", "Y"]), analyst("b", &["Y", "X"])],
            vec![Team::new("X", 2).unwrap(), Team::new("Y", 3).unwrap()],
        )
        .unwrap();
        assert_eq!(schema.n_analysts(), 2);
        assert_eq!(schema.n_teams(), 2);
        assert_eq!(schema.total_headcount(), 5);
        assert_eq!(schema.team_index("Y"), Some(1));
        assert_eq!(schema.analyst("b").map(Analyst::class), Some(1));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let dup_team = Schema::new(
            vec![],
            vec![Team::new("X", 1).unwrap(), Team::new("X", 1).unwrap()],
        );
        assert_eq!(dup_team.unwrap_err(), PlacementError::DuplicateTeam("X".into()));

        let dup_analyst = Schema::new(
            vec![analyst("a", &["X"]), analyst("a", &["X"])],
            vec![Team::new("X", 2).unwrap()],
        );
        assert_eq!(
            dup_analyst.unwrap_err(),
            PlacementError::DuplicateAnalyst("a".into())
        );
    }

    #[test]
    fn test_unknown_team_rejected() {
        let err = Schema::new(vec![analyst("a", &["X", "Q"])], vec![Team::new("X", 1).unwrap()])
            .unwrap_err();
        assert_eq!(
            err,
            PlacementError::UnknownTeam {
                analyst: "a".into(),
                team: "Q".into()
            }
        );
    }

    #[test]
    fn test_summary_mirrors_entities() {
        let schema = Schema::new(
            vec![analyst("a", &["X"])],
            vec![Team::new("X", 1)
                .unwrap()
                .with_ratings([("a", 2.0)])
                .unwrap()],
        )
        .unwrap();
        let summary = schema.summary();
        assert_eq!(summary.analysts["a"].preferences["X"], 0);
        assert_eq!(summary.teams["X"].headcount, 1);
        assert_eq!(summary.teams["X"].ratings.as_ref().unwrap()["a"], 2.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_summary_json_shape() {
        let schema = Schema::new(vec![analyst("a", &["X"])], vec![Team::new("X", 1).unwrap()])
            .unwrap();
        let json = serde_json::to_value(schema.summary()).unwrap();
        assert_eq!(json["Analysts"]["a"]["Class"], 1);
        assert_eq!(json["Analysts"]["a"]["Performance"], 2);
        assert_eq!(json["Analysts"]["a"]["Preferences"]["X"], 0);
        assert_eq!(json["Teams"]["X"]["Headcount"], 1);
        assert!(json["Teams"]["X"]["Ratings"].is_null());
    }
}
