//! Placement loop execution.
//!
//! [`PlacementRunner`] drives a schema to a final roster:
//! seeding → ranking over-capacity teams → requeueing overflow → repeat,
//! until an iteration releases nobody.

use super::config::PlacementConfig;
use super::log::{IterationRecord, Placements, RunLog};
use super::ranking::DerivedRanking;
use crate::error::PlacementError;
use crate::model::Schema;
use crate::precedence::PrecedenceEvaluator;
use crate::ranker::{SelectionRanker, TeamRanker};
use crate::tiebreak::{TiebreakRecord, TiebreakRecorder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Result of a converged placement run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementResult {
    /// Final rosters.
    pub placements: Placements,

    /// Per-iteration records and the text trace.
    pub log: RunLog,

    /// Every random tiebreak drawn, in draw order.
    pub tiebreaks: Vec<TiebreakRecord>,

    /// Number of iterations executed, including the converging one.
    pub iterations: usize,

    /// How many ranked choices each analyst had rejected.
    pub choices_exhausted: BTreeMap<String, usize>,
}

impl PlacementResult {
    pub fn tiebreak_count(&self) -> usize {
        self.tiebreaks.len()
    }
}

/// A run that aborted, with the trace up to the failure.
#[derive(Debug, Clone, Error)]
#[error("placement aborted after {iterations} iterations")]
pub struct PlacementFailure {
    #[source]
    pub error: PlacementError,

    /// Trace up to and including the failing iteration.
    pub log: RunLog,

    pub tiebreaks: Vec<TiebreakRecord>,

    /// Iterations started before the abort.
    pub iterations: usize,
}

/// Mutable state of one run.
struct RunState {
    log: RunLog,
    recorder: TiebreakRecorder,
    exhausted: Vec<usize>,
    iterations: usize,
}

/// Executes the placement loop.
///
/// # Usage
///
/// ```
/// use u_placement::model::{Analyst, Schema, Team};
/// use u_placement::placement::{PlacementConfig, PlacementRunner};
///
/// let schema = Schema::new(
///     vec![
///         Analyst::from_ranking("Ada", 1, 3, ["Risk", "Ops"]).unwrap(),
///         Analyst::from_ranking("Bo", 2, 3, ["Risk", "Ops"]).unwrap(),
///     ],
///     vec![Team::new("Risk", 1).unwrap(), Team::new("Ops", 1).unwrap()],
/// )
/// .unwrap();
///
/// let result = PlacementRunner::run(&schema, &PlacementConfig::default()).unwrap();
/// assert_eq!(result.placements.team_of("Ada"), Some("Risk"));
/// assert_eq!(result.placements.team_of("Bo"), Some("Ops"));
/// ```
pub struct PlacementRunner;

impl PlacementRunner {
    /// Runs a placement with a random source seeded from the config.
    pub fn run(
        schema: &Schema,
        config: &PlacementConfig,
    ) -> Result<PlacementResult, PlacementFailure> {
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
        Self::run_with_rng(schema, config, &mut rng)
    }

    /// Runs a placement drawing tiebreaks from `rng`. `config.seed` is
    /// ignored.
    pub fn run_with_rng<R: Rng>(
        schema: &Schema,
        config: &PlacementConfig,
        rng: &mut R,
    ) -> Result<PlacementResult, PlacementFailure> {
        Self::run_with_ranker(schema, config, &SelectionRanker, rng)
    }

    /// Runs a placement with a custom team ranker.
    pub fn run_with_ranker<K: TeamRanker, R: Rng>(
        schema: &Schema,
        config: &PlacementConfig,
        ranker: &K,
        rng: &mut R,
    ) -> Result<PlacementResult, PlacementFailure> {
        let mut state = RunState {
            log: RunLog::new(config.echo),
            recorder: TiebreakRecorder::new(),
            exhausted: vec![0; schema.n_analysts()],
            iterations: 0,
        };

        let outcome = place(schema, config, ranker, rng, &mut state);
        let RunState {
            log,
            recorder,
            exhausted,
            iterations,
        } = state;

        match outcome {
            Ok(seating) => {
                info!(
                    iterations,
                    tiebreaks = recorder.count(),
                    rank_type = %config.rank_type,
                    "placement converged"
                );
                Ok(PlacementResult {
                    placements: Placements::from_indices(schema, &seating),
                    log,
                    tiebreaks: recorder.into_records(),
                    iterations,
                    choices_exhausted: schema
                        .analysts()
                        .iter()
                        .zip(exhausted)
                        .map(|(a, n)| (a.name().to_string(), n))
                        .collect(),
                })
            }
            Err(error) => {
                warn!(%error, iterations, "placement aborted");
                Err(PlacementFailure {
                    error,
                    log,
                    tiebreaks: recorder.into_records(),
                    iterations,
                })
            }
        }
    }

    /// Runs `trials` independent placements of the same schema.
    ///
    /// Trial `i` is seeded with `base + i`, where `base` is `config.seed`
    /// or a fresh random seed. Runs never mutate the schema, so trials
    /// share it. With the `parallel` feature, trials run on rayon.
    pub fn run_trials(
        schema: &Schema,
        config: &PlacementConfig,
        trials: usize,
    ) -> Vec<Result<PlacementResult, PlacementFailure>> {
        let base = config.seed.unwrap_or_else(rand::random);
        let run_trial = |i: usize| {
            let trial_config = config.clone().with_seed(base.wrapping_add(i as u64));
            Self::run(schema, &trial_config)
        };

        #[cfg(feature = "parallel")]
        let results: Vec<_> = {
            use rayon::prelude::*;
            (0..trials).into_par_iter().map(run_trial).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let results: Vec<_> = (0..trials).map(run_trial).collect();

        results
    }
}

/// The placement loop. Returns team seating as analyst indices.
fn place<K: TeamRanker, R: Rng>(
    schema: &Schema,
    config: &PlacementConfig,
    ranker: &K,
    rng: &mut R,
    state: &mut RunState,
) -> Result<Vec<Vec<usize>>, PlacementError> {
    let RunState {
        log,
        recorder,
        exhausted,
        iterations,
    } = state;
    let analysts = schema.analysts();

    let ranking = DerivedRanking::for_rank_type(schema, config.rank_type)?;
    let mut evaluator = PrecedenceEvaluator::new(config.rank_type, recorder, rng);

    // Seeding: everyone starts on their rank-0 team.
    let mut seating: Vec<Vec<usize>> = vec![Vec::new(); schema.n_teams()];
    for (a, analyst) in analysts.iter().enumerate() {
        let top = ranking
            .choice(a, 0)
            .ok_or_else(|| PlacementError::Infeasible {
                analyst: analyst.name().to_string(),
                exhausted: 0,
            })?;
        seating[top].push(a);
    }

    loop {
        let iteration = *iterations + 1;
        if config.max_iterations > 0 && iteration > config.max_iterations {
            return Err(PlacementError::IterationLimit {
                limit: config.max_iterations,
            });
        }
        *iterations = iteration;

        log.record(format!("#### Iteration {iteration} ####"));
        let starting = Placements::from_indices(schema, &seating);
        log.record("Starting Placements:");
        log.record(&starting);

        // Ranking: over-capacity teams keep their top `headcount`.
        let mut released = Vec::new();
        for (t, team) in schema.teams().iter().enumerate() {
            if seating[t].len() <= team.headcount() {
                continue;
            }
            let occupants = std::mem::take(&mut seating[t]);
            let mut ranked = ranker.rank(occupants, |a, b| {
                evaluator.prefers(&analysts[a], &analysts[b], team)
            })?;
            released.extend(ranked.split_off(team.headcount()));
            seating[t] = ranked;
        }

        let sorted = Placements::from_indices(schema, &seating);
        log.record("Sorted Placements:");
        log.record(&sorted);

        let unassigned: Vec<String> = released
            .iter()
            .map(|&a| analysts[a].name().to_string())
            .collect();

        // Requeue: each released analyst moves one step down their ranking.
        for &a in &released {
            exhausted[a] += 1;
            match ranking.choice(a, exhausted[a]) {
                Some(next) => {
                    debug!(
                        analyst = analysts[a].name(),
                        team = schema.teams()[next].name(),
                        rank = exhausted[a],
                        "requeued"
                    );
                    seating[next].push(a);
                }
                None => {
                    let error = PlacementError::Infeasible {
                        analyst: analysts[a].name().to_string(),
                        exhausted: exhausted[a],
                    };
                    log.record(&error);
                    log.push_iteration(IterationRecord {
                        iteration,
                        starting,
                        sorted,
                        unassigned,
                        converged: false,
                    });
                    return Err(error);
                }
            }
        }

        let converged = released.is_empty();
        if converged {
            log.record("At last! Convergence.");
            log.record(format!(
                "\nTiebreakers Used: {}",
                evaluator.recorder().count()
            ));
            for record in evaluator.recorder().records() {
                log.record(record);
            }
        } else {
            log.record(format!("{} still unassigned:", unassigned.len()));
            log.record(format!("[{}]", unassigned.join(", ")));
            log.record("");
        }
        debug!(iteration, released = unassigned.len(), "iteration complete");

        log.push_iteration(IterationRecord {
            iteration,
            starting,
            sorted,
            unassigned,
            converged,
        });
        if converged {
            return Ok(seating);
        }
    }
}
