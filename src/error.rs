//! Error taxonomy for schema construction and placement runs.
//!
//! Every error is fatal for the run that raised it: there is no retry and
//! no partial commit. Errors fall into three families:
//!
//! - **Construction**: an [`Analyst`](crate::model::Analyst),
//!   [`Team`](crate::model::Team), or [`Schema`](crate::model::Schema)
//!   was built from invalid attributes.
//! - **Configuration**: a comparison or derivation needs a preference or
//!   rating entry that does not exist, or the run configuration is invalid.
//! - **Infeasible**: an analyst ran out of ranked teams, or an external
//!   iteration bound was exceeded.

use thiserror::Error;

/// Errors raised while building a schema or running a placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("analyst {analyst}: class must be a positive integer")]
    InvalidClass { analyst: String },

    #[error("analyst {analyst}: performance must be a positive integer")]
    InvalidPerformance { analyst: String },

    #[error("analyst {analyst}: preference ranks must cover 0..{expected} exactly once")]
    InvalidPreferences { analyst: String, expected: usize },

    #[error("team {team}: headcount must be a positive integer")]
    InvalidHeadcount { team: String },

    #[error("team {team}: rating for {analyst} is not a finite number")]
    InvalidRating { team: String, analyst: String },

    #[error("duplicate analyst name: {0}")]
    DuplicateAnalyst(String),

    #[error("duplicate team name: {0}")]
    DuplicateTeam(String),

    #[error("analyst {analyst} ranks unknown team {team}")]
    UnknownTeam { analyst: String, team: String },

    #[error("cannot find {analyst} preference for {team}")]
    MissingPreference { analyst: String, team: String },

    #[error("team {team} has no ratings")]
    MissingRatings { team: String },

    #[error("team {team} has no rating for {analyst}")]
    MissingRating { team: String, analyst: String },

    #[error("analyst {analyst} is not rated by any team")]
    Unrated { analyst: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unable to place {analyst} on a team after {exhausted} rejected choices")]
    Infeasible { analyst: String, exhausted: usize },

    #[error("no convergence within {limit} iterations")]
    IterationLimit { limit: usize },
}

impl PlacementError {
    /// Whether the error was raised while constructing entities.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Self::InvalidClass { .. }
                | Self::InvalidPerformance { .. }
                | Self::InvalidPreferences { .. }
                | Self::InvalidHeadcount { .. }
                | Self::InvalidRating { .. }
                | Self::DuplicateAnalyst(_)
                | Self::DuplicateTeam(_)
                | Self::UnknownTeam { .. }
        )
    }

    /// Whether the error comes from a missing preference or rating entry,
    /// or from an invalid run configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingPreference { .. }
                | Self::MissingRatings { .. }
                | Self::MissingRating { .. }
                | Self::Unrated { .. }
                | Self::InvalidConfig(_)
        )
    }

    /// Whether the run was structurally unable to converge.
    ///
    /// An exceeded iteration bound counts as infeasible.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Self::Infeasible { .. } | Self::IterationLimit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families_are_disjoint() {
        let errors = vec![
            PlacementError::InvalidClass {
                analyst: "a".into(),
            },
            PlacementError::DuplicateTeam("t".into()),
            PlacementError::MissingRating {
                team: "t".into(),
                analyst: "a".into(),
            },
            PlacementError::InvalidConfig("bad".into()),
            PlacementError::Infeasible {
                analyst: "a".into(),
                exhausted: 1,
            },
            PlacementError::IterationLimit { limit: 3 },
        ];
        for err in &errors {
            let families = [
                err.is_construction(),
                err.is_configuration(),
                err.is_infeasible(),
            ];
            assert_eq!(families.iter().filter(|&&f| f).count(), 1, "{err}");
        }
    }

    #[test]
    fn test_message_names_the_analyst() {
        let err = PlacementError::Infeasible {
            analyst: "Dana".into(),
            exhausted: 2,
        };
        assert!(err.to_string().contains("Dana"));
    }
}
