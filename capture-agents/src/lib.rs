//! Capture team agents.
//!
//! Two evaluation roles share one decision contract: [`OffenseAgent`]
//! hunts pellets and backs its leaf evaluation with the team alpha-beta
//! search from `capture-minimax`, while [`DefenseAgent`] guards the home
//! half as a pure reflex agent, evaluating each legal action directly.
//!
//! Which seat gets which role is the caller's business; an agent is
//! constructed for a seat and is stateless between decisions.

use anyhow::Result;
use capture_game_types::{Action, Seat, SimulableGame};

pub mod defense;
pub mod offense;

pub use defense::DefenseAgent;
pub use offense::OffenseAgent;

/// The one outward decision surface: called once per turn by the
/// surrounding engine, keeps no state between calls.
pub trait CaptureAgent<G> {
    /// Pick the action this agent plays from `state`.
    fn choose_action(&self, state: &G) -> Result<Action>;
}

/// Apply `action` for `seat`, stepping a second time when the first
/// application lands between cell centers.
///
/// Feature measurement has to start from a full grid cell, so a
/// half-step successor is resolved by repeating the same action.
pub fn resolved_successor<G: SimulableGame>(state: &G, seat: Seat, action: Action) -> G {
    let successor = state.successor(seat, action);

    if successor.at_cell_center(seat) {
        successor
    } else {
        successor.successor(seat, action)
    }
}

#[cfg(test)]
mod fixture;
