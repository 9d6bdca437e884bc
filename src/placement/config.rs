//! Placement run configuration.

use crate::precedence::RankType;

/// Configuration for a placement run.
///
/// # Examples
///
/// ```
/// use u_placement::placement::PlacementConfig;
/// use u_placement::precedence::RankType;
///
/// let config = PlacementConfig::default()
///     .with_rank_type(RankType::CapacityRating)
///     .with_seed(42)
///     .with_max_iterations(500);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementConfig {
    /// Which precedence rule decides contested teams.
    pub rank_type: RankType,

    /// Random seed for tiebreaks. `None` draws a fresh seed per run.
    pub seed: Option<u64>,

    /// Hard bound on iterations. 0 = no limit.
    ///
    /// A run always terminates on its own within
    /// `n_analysts * n_teams + 1` iterations; the bound is for callers
    /// that want a tighter cap.
    pub max_iterations: usize,

    /// Emit every trace line as a `tracing` info event while running.
    pub echo: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            rank_type: RankType::default(),
            seed: None,
            max_iterations: 0,
            echo: false,
        }
    }
}

impl PlacementConfig {
    /// Sets the precedence rule.
    pub fn with_rank_type(mut self, rank_type: RankType) -> Self {
        self.rank_type = rank_type;
        self
    }

    /// Sets the random seed for tiebreaks.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the iteration cap (0 = no limit).
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Enables or disables echoing the trace as `tracing` events.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }
}
