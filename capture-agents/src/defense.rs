use anyhow::{anyhow, Context, Result};
use capture_game_types::{
    Action, FacingGettableGame, FoodGettableGame, IntrusionDeterminableGame, LegalActionsGame,
    MazeDistanceGame, Position, PositionGettableGame, Seat, SeatGettableGame, SimulableGame,
    Team, TeamDeterminableGame,
};
use capture_minimax::{choose_reflex_action, Evaluate, FeatureVector, WeightTable};
use itertools::Itertools;

use crate::{resolved_successor, CaptureAgent};

/// Weights for the home-guarding role. Invaders dominate everything,
/// staying on the home half is rewarded, and dithering (stopping or
/// doubling back) costs a little.
pub const DEFENSE_WEIGHTS: &[(&str, f64)] = &[
    ("num_invaders", -1000.0),
    ("on_defense", 100.0),
    ("invader_distance", -10000.0),
    ("stop", -100.0),
    ("reverse", -2.0),
    ("endangered_pellet_distance", -10.0),
];

/// Offset added to every invader distance so that any visible invader
/// outweighs the pellet-guarding alternative.
const INVADER_DISTANCE_OFFSET: u32 = 100;

/// The home-guarding agent.
///
/// A pure reflex agent: every legal action is evaluated directly and
/// the best one plays, no lookahead.
#[derive(Debug, Clone)]
pub struct DefenseAgent {
    seat: Seat,
    weights: WeightTable,
}

impl DefenseAgent {
    /// A defense agent for `seat` with the standard weights.
    pub fn new(seat: Seat) -> Self {
        Self::with_weights(seat, WeightTable::new(DEFENSE_WEIGHTS))
    }

    /// A defense agent for `seat` with a custom weight table.
    pub fn with_weights(seat: Seat, weights: WeightTable) -> Self {
        Self { seat, weights }
    }

    /// The seat this agent plays.
    pub fn seat(&self) -> Seat {
        self.seat
    }
}

impl<G> Evaluate<G> for DefenseAgent
where
    G: SimulableGame
        + SeatGettableGame
        + TeamDeterminableGame
        + PositionGettableGame
        + IntrusionDeterminableGame
        + MazeDistanceGame
        + FoodGettableGame
        + FacingGettableGame,
{
    fn features(&self, state: &G, seat: Seat, action: Action) -> Result<FeatureVector> {
        let successor = resolved_successor(state, seat, action);
        let my_pos = successor
            .position(seat)
            .with_context(|| format!("seat {seat} has no observable position"))?;

        let mut features = vec![(
            "on_defense",
            if successor.is_intruding(seat) { 0.0 } else { 1.0 },
        )];

        let opponents = successor
            .seats()
            .filter(|&s| successor.team_of(s) == Team::Theirs)
            .collect_vec();
        let invaders = opponents
            .iter()
            .filter(|&&s| successor.is_intruding(s))
            .filter_map(|&s| successor.position(s))
            .collect_vec();

        features.push(("num_invaders", invaders.len() as f64));

        if let Some(closest) = invaders
            .iter()
            .map(|&invader| successor.maze_distance(my_pos, invader))
            .min()
        {
            features.push((
                "invader_distance",
                f64::from(closest + INVADER_DISTANCE_OFFSET),
            ));
        } else {
            // Nobody to chase: fall back to guarding whichever pellet
            // is currently the most exposed.
            let target = most_endangered_pellet(&successor, &opponents)?;
            features.push((
                "endangered_pellet_distance",
                f64::from(successor.maze_distance(my_pos, target)),
            ));
        }

        if action.is_stop() {
            features.push(("stop", 1.0));
        }
        if action == state.facing(seat).reverse() {
            features.push(("reverse", 1.0));
        }

        Ok(features)
    }

    fn weights(&self) -> &WeightTable {
        &self.weights
    }
}

/// The defended pellet judged most at risk.
///
/// A pellet's endangerment is the largest maze distance any visible
/// opponent has to it (zero when no opponent is visible); the pellet
/// with the smallest endangerment is the target, later pellets winning
/// ties. With no defended pellets left the role cannot evaluate at all.
fn most_endangered_pellet<G>(state: &G, opponents: &[Seat]) -> Result<Position>
where
    G: FoodGettableGame + PositionGettableGame + MazeDistanceGame,
{
    let mut target: Option<(u32, Position)> = None;

    for pellet in state.defended_food() {
        let endangerment = opponents
            .iter()
            .filter_map(|&s| state.position(s))
            .map(|opponent| state.maze_distance(opponent, pellet))
            .max()
            .unwrap_or(0);

        let better = match target {
            None => true,
            Some((best, _)) => endangerment <= best,
        };
        if better {
            target = Some((endangerment, pellet));
        }
    }

    target
        .map(|(_, pellet)| pellet)
        .ok_or_else(|| anyhow!("defense evaluation requires at least one defended pellet"))
}

impl<G> CaptureAgent<G> for DefenseAgent
where
    G: SimulableGame
        + SeatGettableGame
        + TeamDeterminableGame
        + LegalActionsGame
        + PositionGettableGame
        + IntrusionDeterminableGame
        + MazeDistanceGame
        + FoodGettableGame
        + FacingGettableGame,
{
    fn choose_action(&self, state: &G) -> Result<Action> {
        choose_reflex_action(self, state, self.seat)
    }
}
