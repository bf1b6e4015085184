//! Shared types and query traits for the pellet capture game.
//!
//! The surrounding engine owns the real board. Agents only ever see it
//! through the capability traits defined here: one trait per query
//! concern, so that consumers can bound their generics with exactly the
//! capabilities they use and tests can stub the rest away.

use std::fmt;
use std::ops::Range;

/// An agent slot in the game's fixed round-robin move order.
///
/// Seats move in increasing index order and wrap back to the lowest
/// index after the highest one has moved.
pub type Seat = usize;

/// Which side a seat plays for, from the deciding agent's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    /// The deciding agent's own side. These seats maximize in search.
    Ours,
    /// The opposing side. These seats minimize in search.
    Theirs,
}

/// A full grid cell.
///
/// Half-step positions (an agent caught between two cells) are not
/// representable here; the engine reports them through
/// [`SimulableGame::at_cell_center`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column, increasing eastward.
    pub x: i32,
    /// Row, increasing northward.
    pub y: i32,
}

/// One move in the game.
///
/// `Stop` is the reserved no-movement action. It is excluded from search
/// branching but stays a perfectly legal thing to evaluate or to play at
/// the top level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    North,
    South,
    East,
    West,
    /// Stay on the current cell.
    Stop,
}

impl Action {
    /// All five actions, movement directions first.
    pub fn all() -> [Action; 5] {
        [
            Action::North,
            Action::South,
            Action::East,
            Action::West,
            Action::Stop,
        ]
    }

    /// The opposite direction. `Stop` reverses to itself.
    pub fn reverse(self) -> Action {
        match self {
            Action::North => Action::South,
            Action::South => Action::North,
            Action::East => Action::West,
            Action::West => Action::East,
            Action::Stop => Action::Stop,
        }
    }

    /// Whether this is the reserved no-movement action.
    pub fn is_stop(self) -> bool {
        self == Action::Stop
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::North => "North",
            Action::South => "South",
            Action::East => "East",
            Action::West => "West",
            Action::Stop => "Stop",
        };
        write!(f, "{name}")
    }
}

/// Games that know how many seats are playing.
pub trait SeatGettableGame {
    /// The total number of seats in the game.
    fn num_seats(&self) -> usize;

    /// All seats, in move order.
    fn seats(&self) -> Range<Seat> {
        0..self.num_seats()
    }
}

/// Games that can partition their seats into the two competing sides.
pub trait TeamDeterminableGame {
    /// The side `seat` plays for.
    fn team_of(&self, seat: Seat) -> Team;
}

/// Games that can enumerate the legal actions of a seat.
pub trait LegalActionsGame {
    /// The actions `seat` may take from this state.
    fn legal_actions(&self, seat: Seat) -> Vec<Action>;
}

/// Games that can produce successor states.
///
/// States are immutable snapshots: applying an action never changes the
/// receiver, it returns a fresh state.
pub trait SimulableGame: Sized {
    /// The state after `seat` takes `action`.
    fn successor(&self, seat: Seat, action: Action) -> Self;

    /// Whether `seat` currently sits on an exact cell center.
    ///
    /// A single applied action can leave an agent on a half step between
    /// cells; callers that measure cell features resolve this by applying
    /// the same action once more.
    fn at_cell_center(&self, seat: Seat) -> bool;
}

/// Games that know whether the deciding side has won or lost.
pub trait VictorDeterminableGame {
    /// The deciding side has won.
    fn is_win(&self) -> bool;

    /// The deciding side has lost.
    fn is_lose(&self) -> bool;
}

/// Games that expose (possibly partial) seat positions.
pub trait PositionGettableGame {
    /// Where `seat` is, or `None` when the seat is not observable from
    /// the deciding agent's point of view.
    fn position(&self, seat: Seat) -> Option<Position>;
}

/// Games that know which seats are intruding on the opposing half.
pub trait IntrusionDeterminableGame {
    /// Whether `seat` is currently on the half of the board it attacks
    /// rather than the half it defends.
    fn is_intruding(&self, seat: Seat) -> bool;
}

/// Games that can answer shortest-path queries over the maze.
pub trait MazeDistanceGame {
    /// Length in steps of the shortest walkable path between two cells.
    fn maze_distance(&self, a: Position, b: Position) -> u32;
}

/// Games that track the running score differential.
pub trait ScoreGettableGame {
    /// Current score of the deciding side minus the opposing side.
    fn score_differential(&self) -> f64;
}

/// Games that expose the two pellet sets.
pub trait FoodGettableGame {
    /// Pellets the deciding side still wants to eat.
    fn remaining_food(&self) -> Vec<Position>;

    /// Pellets the deciding side is defending.
    fn defended_food(&self) -> Vec<Position>;
}

/// Games that track which way each seat last moved.
pub trait FacingGettableGame {
    /// The direction `seat` is facing.
    fn facing(&self, seat: Seat) -> Action;
}
