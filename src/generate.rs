//! Synthetic schema generation.
//!
//! Builds random but well-formed schemas for testing, benchmarking, and
//! exploring placement behavior. Every generated schema has full
//! preference rankings, full team ratings, and at least as much total
//! headcount as analysts, so it converges under either rank type.

use crate::error::PlacementError;
use crate::model::{Analyst, Schema, Team};
use rand::seq::SliceRandom;
use rand::Rng;

/// Highest performance score drawn.
pub const MAX_PERFORMANCE: u32 = 5;

/// Highest (worst) team rating drawn.
pub const MAX_RATING: u32 = 5;

/// Seniority classes drawn from.
pub const CLASSES: [u32; 3] = [1, 2, 3];

/// Creates a random schema.
///
/// Each team starts at headcount 1; the remaining
/// `n_analysts + extra_spots - n_teams` seats (if any) are scattered
/// across teams uniformly at random.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_placement::generate::random_schema;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let schema = random_schema(12, 4, 2, &mut rng).unwrap();
/// assert_eq!(schema.n_analysts(), 12);
/// assert_eq!(schema.total_headcount(), 14);
/// ```
pub fn random_schema<R: Rng>(
    n_analysts: usize,
    n_teams: usize,
    extra_spots: usize,
    rng: &mut R,
) -> Result<Schema, PlacementError> {
    if n_teams == 0 {
        return Err(PlacementError::InvalidConfig(
            "n_teams must be positive".into(),
        ));
    }

    let analyst_names: Vec<String> = (1..=n_analysts).map(|i| format!("analyst-{i:03}")).collect();
    let team_names: Vec<String> = (1..=n_teams).map(|i| format!("team-{i:02}")).collect();

    let mut analysts = Vec::with_capacity(n_analysts);
    for name in &analyst_names {
        let mut order = team_names.clone();
        order.shuffle(rng);
        let class = CLASSES[rng.random_range(0..CLASSES.len())];
        let performance = rng.random_range(1..=MAX_PERFORMANCE);
        analysts.push(Analyst::from_ranking(name.as_str(), class, performance, order)?);
    }

    let mut headcounts = vec![1usize; n_teams];
    for _ in 0..(n_analysts + extra_spots).saturating_sub(n_teams) {
        headcounts[rng.random_range(0..n_teams)] += 1;
    }

    let mut teams = Vec::with_capacity(n_teams);
    for (name, headcount) in team_names.iter().zip(headcounts) {
        let ratings: Vec<(String, f64)> = analyst_names
            .iter()
            .map(|a| (a.clone(), f64::from(rng.random_range(1..=MAX_RATING))))
            .collect();
        teams.push(Team::new(name.as_str(), headcount)?.with_ratings(ratings)?);
    }

    Schema::new(analysts, teams)
}
