#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Depth-limited alpha-beta search for the pellet capture game,
//! generalized from two players to N seats that move in a fixed
//! round-robin order.
//!
//! You provide an evaluation role through the [`Evaluate`] trait: a set
//! of named features plus a [`WeightTable`] that turns them into a
//! scalar. The engine uses that scalar once the search horizon is
//! reached, and backs values up the tree by maximizing on the deciding
//! side's seats and minimizing on the opposing side's.
//!
//! We lean on the `capture-game-types` crate for everything about the
//! game itself, in particular for the successor logic that generates the
//! next states.

mod evaluate;
pub use evaluate::{Evaluate, FeatureVector, WeightTable};

pub mod team;
pub use team::{
    choose_reflex_action, improving_candidates, SearchOutcome, TeamMinimax, BEST_SCORE,
    WORST_SCORE,
};
