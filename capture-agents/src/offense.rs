use anyhow::{Context, Result};
use capture_game_types::{
    Action, FoodGettableGame, LegalActionsGame, MazeDistanceGame, PositionGettableGame,
    ScoreGettableGame, Seat, SeatGettableGame, SimulableGame, TeamDeterminableGame,
    VictorDeterminableGame,
};
use capture_minimax::{Evaluate, FeatureVector, TeamMinimax, WeightTable};

use crate::{resolved_successor, CaptureAgent};

/// Weights for the food-seeking role. Score gains dwarf everything,
/// with a mild pull toward the nearest pellet.
pub const OFFENSE_WEIGHTS: &[(&str, f64)] = &[
    ("successor_score", 100.0),
    ("distance_to_food", -1.0),
];

/// The food-seeking agent.
///
/// Its linear features score the leaves of a [`TeamMinimax`] search;
/// the search picks the move.
#[derive(Debug, Clone)]
pub struct OffenseAgent {
    seat: Seat,
    weights: WeightTable,
}

impl OffenseAgent {
    /// An offense agent for `seat` with the standard weights.
    pub fn new(seat: Seat) -> Self {
        Self::with_weights(seat, WeightTable::new(OFFENSE_WEIGHTS))
    }

    /// An offense agent for `seat` with a custom weight table.
    pub fn with_weights(seat: Seat, weights: WeightTable) -> Self {
        Self { seat, weights }
    }

    /// The seat this agent plays.
    pub fn seat(&self) -> Seat {
        self.seat
    }
}

impl<G> Evaluate<G> for OffenseAgent
where
    G: SimulableGame
        + PositionGettableGame
        + MazeDistanceGame
        + ScoreGettableGame
        + FoodGettableGame,
{
    fn features(&self, state: &G, seat: Seat, action: Action) -> Result<FeatureVector> {
        let successor = resolved_successor(state, seat, action);

        let mut features = vec![("successor_score", successor.score_differential())];

        // An empty board is fine here: the distance feature is simply
        // absent once the last pellet is gone.
        let food = successor.remaining_food();
        if !food.is_empty() {
            let my_pos = successor
                .position(seat)
                .with_context(|| format!("seat {seat} has no observable position"))?;
            let closest = food
                .iter()
                .map(|&pellet| successor.maze_distance(my_pos, pellet))
                .min()
                .unwrap_or(0);
            features.push(("distance_to_food", f64::from(closest)));
        }

        Ok(features)
    }

    fn weights(&self) -> &WeightTable {
        &self.weights
    }
}

impl<G> CaptureAgent<G> for OffenseAgent
where
    G: SeatGettableGame
        + TeamDeterminableGame
        + LegalActionsGame
        + SimulableGame
        + VictorDeterminableGame
        + PositionGettableGame
        + MazeDistanceGame
        + ScoreGettableGame
        + FoodGettableGame,
{
    fn choose_action(&self, state: &G) -> Result<Action> {
        TeamMinimax::new(self, self.seat).choose_action(state)
    }
}
