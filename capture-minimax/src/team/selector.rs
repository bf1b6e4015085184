use std::time::Instant;

use anyhow::{anyhow, bail, Result};
use capture_game_types::{
    Action, LegalActionsGame, Seat, SeatGettableGame, SimulableGame, TeamDeterminableGame,
    VictorDeterminableGame,
};
use itertools::Itertools;
use rand::seq::SliceRandom;
use tracing::{info, info_span};

use super::engine::{TeamMinimax, BEST_SCORE, WORST_SCORE};
use crate::Evaluate;

impl<'a, E> TeamMinimax<'a, E> {
    /// Pick the action to play for the deciding seat.
    ///
    /// Every legal top-level action (`Stop` included at this level) is
    /// applied and handed to [`TeamMinimax::value`] starting at the next
    /// seat with fresh, fully open bounds. The resulting pairs are then
    /// walked in enumeration order and each strict improvement joins the
    /// candidate list; the played action is drawn uniformly from that
    /// list.
    pub fn choose_action<G>(&self, state: &G) -> Result<Action>
    where
        G: SeatGettableGame
            + TeamDeterminableGame
            + LegalActionsGame
            + SimulableGame
            + VictorDeterminableGame,
        E: Evaluate<G>,
    {
        info_span!(
            "choose_action",
            seat = self.seat() as u64,
            chosen_score = tracing::field::Empty,
            chosen_action = tracing::field::Empty,
        )
        .in_scope(|| {
            let start = Instant::now();
            let seat = self.seat();

            let actions = state.legal_actions(seat);
            if actions.is_empty() {
                bail!("seat {seat} has no legal actions to choose from");
            }

            let mut scored = Vec::with_capacity(actions.len());
            for action in actions {
                let successor = state.successor(seat, action);
                let outcome =
                    self.value(&successor, seat + 1, seat + 1, WORST_SCORE, BEST_SCORE)?;
                scored.push((outcome.score, action));
            }

            let candidates = improving_candidates(&scored);
            let &(score, action) = candidates
                .choose(&mut rand::thread_rng())
                .ok_or_else(|| anyhow!("no candidate actions were collected"))?;

            let current_span = tracing::Span::current();
            current_span.record("chosen_score", score);
            current_span.record("chosen_action", format!("{action}").as_str());
            info!(
                elapsed_us = start.elapsed().as_micros() as u64,
                "searched top-level actions"
            );

            Ok(action)
        })
    }
}

/// Walk scored actions in enumeration order and keep every pair whose
/// score strictly improves on the best score seen so far.
///
/// This is an improvement trace, not a filter to the final maximum: an
/// early low score stays a candidate once collected, and a later tie
/// with the running best is not collected. The first pair always
/// qualifies.
pub fn improving_candidates(scored: &[(f64, Action)]) -> Vec<(f64, Action)> {
    let mut best = f64::NEG_INFINITY;
    let mut candidates = Vec::new();

    for &(score, action) in scored {
        if score > best {
            best = score;
            candidates.push((score, action));
        }
    }

    candidates
}

/// Reflex selection: no search, just the evaluator applied to every
/// legal action, choosing uniformly among the actions that reach the
/// single best score.
pub fn choose_reflex_action<G, E>(evaluator: &E, state: &G, seat: Seat) -> Result<Action>
where
    G: LegalActionsGame,
    E: Evaluate<G>,
{
    info_span!(
        "choose_reflex_action",
        seat = seat as u64,
        chosen_score = tracing::field::Empty,
        chosen_action = tracing::field::Empty,
    )
    .in_scope(|| {
        let start = Instant::now();

        let actions = state.legal_actions(seat);
        if actions.is_empty() {
            bail!("seat {seat} has no legal actions to choose from");
        }

        let scored: Vec<(f64, Action)> = actions
            .into_iter()
            .map(|action| evaluator.evaluate(state, seat, action).map(|s| (s, action)))
            .collect::<Result<_>>()?;

        let best = scored
            .iter()
            .map(|&(score, _)| score)
            .fold(f64::NEG_INFINITY, f64::max);
        let ties = scored
            .iter()
            .filter(|&&(score, _)| score == best)
            .map(|&(_, action)| action)
            .collect_vec();

        let &action = ties
            .choose(&mut rand::thread_rng())
            .ok_or_else(|| anyhow!("no actions reached the best evaluation"))?;

        let current_span = tracing::Span::current();
        current_span.record("chosen_score", best);
        current_span.record("chosen_action", format!("{action}").as_str());
        info!(
            elapsed_us = start.elapsed().as_micros() as u64,
            "evaluated legal actions"
        );

        Ok(action)
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{FeatureVector, WeightTable};

    #[test]
    fn candidates_trace_improvements_only() {
        let scored = vec![
            (3.0, Action::North),
            (7.0, Action::South),
            (2.0, Action::East),
            (7.0, Action::West),
        ];

        let candidates = improving_candidates(&scored);

        // The walk keeps 3 and then the first 7; the later 7 does not
        // strictly improve and the 2 never qualifies.
        assert_eq!(
            candidates,
            vec![(3.0, Action::North), (7.0, Action::South)]
        );
    }

    #[test]
    fn monotone_scores_all_qualify() {
        let scored = vec![
            (1.0, Action::North),
            (2.0, Action::South),
            (3.0, Action::East),
        ];

        assert_eq!(improving_candidates(&scored), scored);
    }

    #[test]
    fn first_pair_always_qualifies() {
        let scored = vec![(WORST_SCORE, Action::Stop)];

        assert_eq!(improving_candidates(&scored), scored);
    }

    #[derive(Debug)]
    struct TableGame {
        legal: Vec<Action>,
    }

    impl LegalActionsGame for TableGame {
        fn legal_actions(&self, _seat: Seat) -> Vec<Action> {
            self.legal.clone()
        }
    }

    #[derive(Debug)]
    struct TableEvaluator {
        weights: WeightTable,
        scores: HashMap<Action, f64>,
    }

    impl TableEvaluator {
        fn new(scores: &[(Action, f64)]) -> Self {
            Self {
                weights: WeightTable::new(&[("scripted", 1.0)]),
                scores: scores.iter().copied().collect(),
            }
        }
    }

    impl Evaluate<TableGame> for TableEvaluator {
        fn features(
            &self,
            _state: &TableGame,
            _seat: Seat,
            action: Action,
        ) -> Result<FeatureVector> {
            Ok(vec![("scripted", self.scores[&action])])
        }

        fn weights(&self) -> &WeightTable {
            &self.weights
        }
    }

    #[test]
    fn reflex_picks_the_unique_best() {
        let state = TableGame {
            legal: vec![Action::North, Action::South, Action::Stop],
        };
        let evaluator = TableEvaluator::new(&[
            (Action::North, 1.0),
            (Action::South, 9.0),
            (Action::Stop, -1.0),
        ]);

        for _ in 0..20 {
            assert_eq!(
                choose_reflex_action(&evaluator, &state, 0).unwrap(),
                Action::South
            );
        }
    }

    #[test]
    fn reflex_breaks_ties_uniformly() {
        let state = TableGame {
            legal: vec![Action::North, Action::South, Action::East, Action::West],
        };
        let evaluator = TableEvaluator::new(&[
            (Action::North, 5.0),
            (Action::South, 5.0),
            (Action::East, 5.0),
            (Action::West, 1.0),
        ]);

        let mut counts: HashMap<Action, usize> = HashMap::new();
        for _ in 0..600 {
            let action = choose_reflex_action(&evaluator, &state, 0).unwrap();
            *counts.entry(action).or_default() += 1;
        }

        // Uniform over the three tied actions: each expects ~200 of
        // 600, and the loser must never appear.
        assert_eq!(counts.get(&Action::West), None);
        for action in [Action::North, Action::South, Action::East] {
            assert!(counts[&action] > 100, "{action} drawn {} times", counts[&action]);
        }
    }

    #[test]
    fn reflex_with_no_actions_is_an_error() {
        let state = TableGame { legal: vec![] };
        let evaluator = TableEvaluator::new(&[]);

        assert!(choose_reflex_action(&evaluator, &state, 0).is_err());
    }
}
