use anyhow::{bail, Result};
use capture_game_types::{
    Action, LegalActionsGame, Seat, SeatGettableGame, SimulableGame, Team, TeamDeterminableGame,
    VictorDeterminableGame,
};

use crate::Evaluate;

/// Initial lower search bound, far below any reachable evaluation.
pub const WORST_SCORE: f64 = -1_000_000_000.0;

/// Initial upper search bound, far above any reachable evaluation.
pub const BEST_SCORE: f64 = 1_000_000_000.0;

/// The result of one search call: the backed-up score and the move that
/// produced it at that node.
///
/// `action` is `None` at terminal and horizon nodes, which have no move
/// of their own to report.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// The backed-up evaluation, from the deciding agent's perspective.
    pub score: f64,
    /// The move chosen at this node, when there is one.
    pub action: Option<Action>,
}

/// Alpha-beta minimax over N round-robin seats split into two sides.
///
/// The engine is built for one deciding seat and borrows that seat's
/// evaluation role for its horizon heuristic. Each decision is a fresh
/// recursive walk; nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct TeamMinimax<'a, E> {
    evaluator: &'a E,
    seat: Seat,
    depth_limit: usize,
}

impl<'a, E> TeamMinimax<'a, E> {
    /// Build an engine for `seat`.
    ///
    /// The horizon is seat dependent: seat n searches n + 1 full rounds.
    pub fn new(evaluator: &'a E, seat: Seat) -> Self {
        Self {
            evaluator,
            seat,
            depth_limit: 1 + seat,
        }
    }

    /// The deciding seat this engine searches for.
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// How many full rounds this engine looks ahead.
    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }

    /// The value of `state` with `seat` to move at logical `depth`.
    ///
    /// When the seat cursor has walked past the highest seat it wraps
    /// back to the deciding seat and the logical depth advances by one
    /// round. Terminal states are worth a flat 0 no matter whose turn it
    /// is or what the bounds are.
    pub fn value<G>(
        &self,
        state: &G,
        depth: usize,
        seat: Seat,
        alpha: f64,
        beta: f64,
    ) -> Result<SearchOutcome>
    where
        G: SeatGettableGame
            + TeamDeterminableGame
            + LegalActionsGame
            + SimulableGame
            + VictorDeterminableGame,
        E: Evaluate<G>,
    {
        let (seat, depth) = if seat == state.num_seats() {
            (self.seat, depth + 1)
        } else {
            (seat, depth)
        };

        if state.is_win() || state.is_lose() {
            return Ok(SearchOutcome {
                score: 0.0,
                action: None,
            });
        }

        if depth > self.depth_limit {
            return self.horizon_value(state, seat);
        }

        match state.team_of(seat) {
            Team::Ours => self.max_value(state, depth, seat, alpha, beta),
            Team::Theirs => self.min_value(state, depth, seat, alpha, beta),
        }
    }

    /// Heuristic cutoff at the search horizon.
    ///
    /// Every legal action of the current seat is scored by the deciding
    /// agent's evaluator, as if the deciding agent took it, and the
    /// largest score wins. This holds for opposing seats too: past the
    /// horizon every seat looks like a maximizer.
    fn horizon_value<G>(&self, state: &G, seat: Seat) -> Result<SearchOutcome>
    where
        G: LegalActionsGame,
        E: Evaluate<G>,
    {
        let legal = state.legal_actions(seat);
        if legal.is_empty() {
            bail!("seat {seat} has no legal actions at the search horizon");
        }

        let mut best = WORST_SCORE;
        for action in legal {
            let score = self.evaluator.evaluate(state, self.seat, action)?;
            if score > best {
                best = score;
            }
        }

        Ok(SearchOutcome {
            score: best,
            action: None,
        })
    }

    fn max_value<G>(
        &self,
        state: &G,
        depth: usize,
        seat: Seat,
        mut alpha: f64,
        beta: f64,
    ) -> Result<SearchOutcome>
    where
        G: SeatGettableGame
            + TeamDeterminableGame
            + LegalActionsGame
            + SimulableGame
            + VictorDeterminableGame,
        E: Evaluate<G>,
    {
        let mut best = SearchOutcome {
            score: WORST_SCORE,
            action: None,
        };

        for action in branching_actions(state, seat)? {
            let successor = state.successor(seat, action);
            let outcome = self.value(&successor, depth, seat + 1, alpha, beta)?;

            // The first action is always accepted, after that only
            // strict improvements.
            if best.action.is_none() || outcome.score > best.score {
                best = SearchOutcome {
                    score: outcome.score,
                    action: Some(action),
                };
            }

            if best.score >= beta {
                return Ok(best);
            }

            alpha = alpha.max(best.score);
        }

        Ok(best)
    }

    fn min_value<G>(
        &self,
        state: &G,
        depth: usize,
        seat: Seat,
        alpha: f64,
        mut beta: f64,
    ) -> Result<SearchOutcome>
    where
        G: SeatGettableGame
            + TeamDeterminableGame
            + LegalActionsGame
            + SimulableGame
            + VictorDeterminableGame,
        E: Evaluate<G>,
    {
        let mut best = SearchOutcome {
            score: BEST_SCORE,
            action: None,
        };

        for action in branching_actions(state, seat)? {
            let successor = state.successor(seat, action);
            let outcome = self.value(&successor, depth, seat + 1, alpha, beta)?;

            // Ties overwrite here, so among equally bad moves the
            // later one is reported.
            if best.action.is_none() || outcome.score <= best.score {
                best = SearchOutcome {
                    score: outcome.score,
                    action: Some(action),
                };
            }

            if best.score <= alpha {
                return Ok(best);
            }

            beta = beta.min(best.score);
        }

        Ok(best)
    }
}

/// The actions worth branching on: everything legal except `Stop`.
fn branching_actions<G: LegalActionsGame>(state: &G, seat: Seat) -> Result<Vec<Action>> {
    let mut legal = state.legal_actions(seat);
    legal.retain(|action| !action.is_stop());

    if legal.is_empty() {
        bail!("seat {seat} has no legal actions to search");
    }

    Ok(legal)
}
