//! An open-board game for tests: no walls, so maze distance collapses
//! to manhattan distance, and every successor just shifts one cell.

use capture_game_types::{
    Action, FacingGettableGame, FoodGettableGame, IntrusionDeterminableGame, LegalActionsGame,
    MazeDistanceGame, Position, PositionGettableGame, ScoreGettableGame, Seat, SeatGettableGame,
    SimulableGame, Team, TeamDeterminableGame, VictorDeterminableGame,
};

#[derive(Debug, Clone)]
pub struct FixtureGame {
    pub positions: Vec<Option<Position>>,
    pub teams: Vec<Team>,
    pub intruding: Vec<bool>,
    pub facings: Vec<Action>,
    pub legal: Vec<Vec<Action>>,
    pub remaining_food: Vec<Position>,
    pub defended_food: Vec<Position>,
    pub score: f64,
    pub win: bool,
    pub lose: bool,
    /// When set, the next applied action lands between cell centers.
    pub half_step: bool,
    /// Whether this state itself sits between cell centers.
    pub mid_cell: bool,
}

impl FixtureGame {
    /// One seat per side, both observable at the origin.
    pub fn two_seats() -> Self {
        let all = Action::all().to_vec();
        Self {
            positions: vec![
                Some(Position { x: 0, y: 0 }),
                Some(Position { x: 5, y: 5 }),
            ],
            teams: vec![Team::Ours, Team::Theirs],
            intruding: vec![false, false],
            facings: vec![Action::Stop, Action::Stop],
            legal: vec![all.clone(), all],
            remaining_food: vec![],
            defended_food: vec![],
            score: 0.0,
            win: false,
            lose: false,
            half_step: false,
            mid_cell: false,
        }
    }
}

fn shifted(position: Position, action: Action) -> Position {
    let Position { x, y } = position;
    match action {
        Action::North => Position { x, y: y + 1 },
        Action::South => Position { x, y: y - 1 },
        Action::East => Position { x: x + 1, y },
        Action::West => Position { x: x - 1, y },
        Action::Stop => position,
    }
}

impl SeatGettableGame for FixtureGame {
    fn num_seats(&self) -> usize {
        self.positions.len()
    }
}

impl TeamDeterminableGame for FixtureGame {
    fn team_of(&self, seat: Seat) -> Team {
        self.teams[seat]
    }
}

impl LegalActionsGame for FixtureGame {
    fn legal_actions(&self, seat: Seat) -> Vec<Action> {
        self.legal[seat].clone()
    }
}

impl SimulableGame for FixtureGame {
    fn successor(&self, seat: Seat, action: Action) -> Self {
        let mut next = self.clone();
        next.positions[seat] = self.positions[seat].map(|p| shifted(p, action));
        next.facings[seat] = action;
        next.mid_cell = self.half_step;
        next.half_step = false;
        next
    }

    fn at_cell_center(&self, _seat: Seat) -> bool {
        !self.mid_cell
    }
}

impl VictorDeterminableGame for FixtureGame {
    fn is_win(&self) -> bool {
        self.win
    }

    fn is_lose(&self) -> bool {
        self.lose
    }
}

impl PositionGettableGame for FixtureGame {
    fn position(&self, seat: Seat) -> Option<Position> {
        self.positions[seat]
    }
}

impl IntrusionDeterminableGame for FixtureGame {
    fn is_intruding(&self, seat: Seat) -> bool {
        self.intruding[seat]
    }
}

impl MazeDistanceGame for FixtureGame {
    fn maze_distance(&self, a: Position, b: Position) -> u32 {
        a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
    }
}

impl ScoreGettableGame for FixtureGame {
    fn score_differential(&self) -> f64 {
        self.score
    }
}

impl FoodGettableGame for FixtureGame {
    fn remaining_food(&self) -> Vec<Position> {
        self.remaining_food.clone()
    }

    fn defended_food(&self) -> Vec<Position> {
        self.defended_food.clone()
    }
}

impl FacingGettableGame for FixtureGame {
    fn facing(&self, seat: Seat) -> Action {
        self.facings[seat]
    }
}
