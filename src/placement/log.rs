//! Run trace: structured per-iteration records and a text rendering.

use crate::model::Schema;
use tracing::info;

/// Analysts seated on one team, in roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamRoster {
    pub team: String,
    pub analysts: Vec<String>,
}

/// Rosters of every team, in schema team order.
///
/// Within a team that was ranked, analysts appear in precedence order;
/// a team that never exceeded its headcount keeps arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placements {
    pub rosters: Vec<TeamRoster>,
}

impl Placements {
    /// Builds name-based rosters from index-based seating.
    pub(crate) fn from_indices(schema: &Schema, seating: &[Vec<usize>]) -> Self {
        let rosters = schema
            .teams()
            .iter()
            .zip(seating)
            .map(|(team, seats)| TeamRoster {
                team: team.name().to_string(),
                analysts: seats
                    .iter()
                    .map(|&a| schema.analysts()[a].name().to_string())
                    .collect(),
            })
            .collect();
        Self { rosters }
    }

    /// Analysts on `team`, or `None` for an unknown team.
    pub fn get(&self, team: &str) -> Option<&[String]> {
        self.rosters
            .iter()
            .find(|r| r.team == team)
            .map(|r| r.analysts.as_slice())
    }

    /// Team that seats `analyst`.
    pub fn team_of(&self, analyst: &str) -> Option<&str> {
        self.rosters
            .iter()
            .find(|r| r.analysts.iter().any(|a| a == analyst))
            .map(|r| r.team.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamRoster> {
        self.rosters.iter()
    }

    /// Total seated analysts across all teams.
    pub fn seated(&self) -> usize {
        self.rosters.iter().map(|r| r.analysts.len()).sum()
    }
}

impl std::fmt::Display for Placements {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, roster) in self.rosters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: [{}]", roster.team, roster.analysts.join(", "))?;
        }
        f.write_str("}")
    }
}

/// What happened in one iteration of the placement loop.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Rosters before any team was ranked.
    pub starting: Placements,
    /// Rosters after over-capacity teams released their overflow.
    pub sorted: Placements,
    /// Analysts released this iteration, in release order.
    pub unassigned: Vec<String>,
    pub converged: bool,
}

/// Append-only trace of a placement run.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunLog {
    iterations: Vec<IterationRecord>,
    text: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    echo: bool,
}

impl RunLog {
    /// Creates an empty log. With `echo`, every text line is also
    /// emitted as a `tracing` info event.
    pub fn new(echo: bool) -> Self {
        Self {
            iterations: Vec::new(),
            text: String::new(),
            echo,
        }
    }

    /// Appends one line to the text trace.
    pub fn record(&mut self, line: impl std::fmt::Display) {
        let line = line.to_string();
        if self.echo {
            info!(target: "u_placement::trace", "{line}");
        }
        self.text.push('\n');
        self.text.push_str(&line);
    }

    pub(crate) fn push_iteration(&mut self, record: IterationRecord) {
        self.iterations.push(record);
    }

    pub fn iterations(&self) -> &[IterationRecord] {
        &self.iterations
    }

    /// The full text trace; each line is preceded by a newline.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn last(&self) -> Option<&IterationRecord> {
        self.iterations.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Analyst, Team};

    fn schema() -> Schema {
        Schema::new(
            vec![
                Analyst::from_ranking("a", 1, 1, ["X", "Y"]).unwrap(),
                Analyst::from_ranking("b", 1, 1, ["Y", "X"]).unwrap(),
            ],
            vec![Team::new("X", 1).unwrap(), Team::new("Y", 1).unwrap()],
        )
        .unwrap()
    }

    #[test]
    fn test_placements_lookup() {
        let placements = Placements::from_indices(&schema(), &[vec![1], vec![0]]);
        assert_eq!(placements.get("X"), Some(&["b".to_string()][..]));
        assert_eq!(placements.team_of("a"), Some("Y"));
        assert_eq!(placements.team_of("z"), None);
        assert_eq!(placements.get("Q"), None);
        assert_eq!(placements.seated(), 2);
    }

    #[test]
    fn test_placements_display() {
        let placements = Placements::from_indices(&schema(), &[vec![0, 1], vec![]]);
        assert_eq!(placements.to_string(), "{X: [a, b], Y: []}");
    }

    #[test]
    fn test_record_appends_lines() {
        let mut log = RunLog::new(false);
        log.record("#### Iteration 1 ####");
        log.record(3);
        assert_eq!(log.text(), "\n#### Iteration 1 ####\n3");
        assert!(log.iterations().is_empty());
    }
}
