//! Team entity.

use crate::error::PlacementError;
use std::collections::BTreeMap;

/// A team with a fixed headcount and an optional rating of each analyst.
///
/// Ratings are only consulted under
/// [`RankType::CapacityRating`](crate::precedence::RankType::CapacityRating),
/// where a lower rating means the team wants the analyst more.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    name: String,
    headcount: usize,
    ratings: Option<BTreeMap<String, f64>>,
}

impl Team {
    /// Creates a team without ratings. `headcount` must be positive.
    pub fn new(name: impl Into<String>, headcount: usize) -> Result<Self, PlacementError> {
        let name = name.into();
        if headcount == 0 {
            return Err(PlacementError::InvalidHeadcount { team: name });
        }
        Ok(Self {
            name,
            headcount,
            ratings: None,
        })
    }

    /// Attaches analyst ratings. Every rating must be finite.
    pub fn with_ratings<I, K>(mut self, ratings: I) -> Result<Self, PlacementError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (analyst, rating) in ratings {
            let analyst = analyst.into();
            if !rating.is_finite() {
                return Err(PlacementError::InvalidRating {
                    team: self.name,
                    analyst,
                });
            }
            map.insert(analyst, rating);
        }
        self.ratings = Some(map);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headcount(&self) -> usize {
        self.headcount
    }

    pub fn ratings(&self) -> Option<&BTreeMap<String, f64>> {
        self.ratings.as_ref()
    }

    /// This team's rating of `analyst`, if any.
    pub fn rating_of(&self, analyst: &str) -> Option<f64> {
        self.ratings.as_ref()?.get(analyst).copied()
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_headcount_rejected() {
        assert_eq!(
            Team::new("Risk", 0).unwrap_err(),
            PlacementError::InvalidHeadcount {
                team: "Risk".into()
            }
        );
    }

    #[test]
    fn test_ratings_lookup() {
        let team = Team::new("Risk", 2)
            .unwrap()
            .with_ratings([("a", 1.0), ("b", 3.0)])
            .unwrap();
        assert_eq!(team.rating_of("b"), Some(3.0));
        assert_eq!(team.rating_of("c"), None);
        assert_eq!(Team::new("Ops", 1).unwrap().rating_of("a"), None);
    }

    #[test]
    fn test_non_finite_rating_rejected() {
        let err = Team::new("Risk", 1)
            .unwrap()
            .with_ratings([("a", f64::NAN)])
            .unwrap_err();
        assert!(err.is_construction());
    }
}
