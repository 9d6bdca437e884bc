//! Analyst entity.

use crate::error::PlacementError;
use std::collections::BTreeMap;

/// An analyst with a seniority class, a performance score, and a ranked
/// list of teams.
///
/// Preferences map team name to rank, `0` being the most preferred. The
/// ranks must form the contiguous range `0..k` with no repeats, so the
/// inverse lookup (rank to team) is total over `0..k`.
///
/// # Examples
///
/// ```
/// use u_placement::model::Analyst;
///
/// let analyst = Analyst::from_ranking("Ada", 1, 3, ["Risk", "Credit"]).unwrap();
/// assert_eq!(analyst.rank_of("Credit"), Some(1));
/// assert_eq!(analyst.choice(0), Some("Risk"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analyst {
    name: String,
    class: u32,
    performance: u32,
    preferences: BTreeMap<String, usize>,
    choices: Vec<String>,
}

impl Analyst {
    /// Creates an analyst from a team-to-rank mapping.
    ///
    /// `class` is the seniority class (lower is more senior) and
    /// `performance` the performance score (higher is better). Both must
    /// be positive.
    pub fn new<I, K>(
        name: impl Into<String>,
        class: u32,
        performance: u32,
        preferences: I,
    ) -> Result<Self, PlacementError>
    where
        I: IntoIterator<Item = (K, usize)>,
        K: Into<String>,
    {
        let name = name.into();
        if class == 0 {
            return Err(PlacementError::InvalidClass { analyst: name });
        }
        if performance == 0 {
            return Err(PlacementError::InvalidPerformance { analyst: name });
        }

        let mut entries = 0usize;
        let mut preferences_map = BTreeMap::new();
        for (team, rank) in preferences {
            entries += 1;
            preferences_map.insert(team.into(), rank);
        }

        let invalid = || PlacementError::InvalidPreferences {
            analyst: name.clone(),
            expected: entries,
        };
        // A repeated team key collapses in the map and leaves a rank gap.
        if entries == 0 || preferences_map.len() != entries {
            return Err(invalid());
        }
        let mut slots: Vec<Option<String>> = vec![None; entries];
        for (team, &rank) in &preferences_map {
            match slots.get_mut(rank) {
                Some(slot) if slot.is_none() => *slot = Some(team.clone()),
                _ => return Err(invalid()),
            }
        }
        let choices = slots.into_iter().collect::<Option<Vec<_>>>().ok_or_else(invalid)?;

        Ok(Self {
            name,
            class,
            performance,
            preferences: preferences_map,
            choices,
        })
    }

    /// Creates an analyst from teams listed most-preferred first.
    pub fn from_ranking<I, K>(
        name: impl Into<String>,
        class: u32,
        performance: u32,
        ranking: I,
    ) -> Result<Self, PlacementError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::new(
            name,
            class,
            performance,
            ranking.into_iter().enumerate().map(|(rank, team)| (team, rank)),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seniority class; lower is more senior.
    pub fn class(&self) -> u32 {
        self.class
    }

    /// Performance score; higher is better.
    pub fn performance(&self) -> u32 {
        self.performance
    }

    /// Team name to rank mapping as stated by the analyst.
    pub fn preferences(&self) -> &BTreeMap<String, usize> {
        &self.preferences
    }

    /// Stated rank of `team`, if the analyst ranked it.
    pub fn rank_of(&self, team: &str) -> Option<usize> {
        self.preferences.get(team).copied()
    }

    /// Team at `rank` in the stated ranking.
    pub fn choice(&self, rank: usize) -> Option<&str> {
        self.choices.get(rank).map(String::as_str)
    }

    /// Teams in stated order, most preferred first.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }
}

impl std::fmt::Display for Analyst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
