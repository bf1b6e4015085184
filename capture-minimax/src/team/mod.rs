//! There are multiple multiplayer variations of minimax, this module is
//! for the `team` variant used by the capture game.
//!
//! Seats are partitioned into two fixed sides. Every seat on the
//! deciding agent's side maximizes the deciding agent's score and every
//! opposing seat minimizes it, with the seat cursor cycling in index
//! order. Depth is logical: it advances once per full cycle back to the
//! deciding seat, not once per ply. The implementation uses alpha-beta
//! pruning to be efficient.

mod engine;
pub use engine::{SearchOutcome, TeamMinimax, BEST_SCORE, WORST_SCORE};

mod selector;
pub use selector::{choose_reflex_action, improving_candidates};
