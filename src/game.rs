use enum_map::{EnumMap, enum_map};
use itertools::Itertools;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::board_state::{BoardState, board_state};
use crate::coord::Coord;
use crate::error::{GridError, TurnError};
use crate::force::Force;
use crate::grid::Grid;
use crate::internal_error_message;
use crate::janitor::Janitor;
use crate::movement;
use crate::piece::{PieceId, PieceKind, PieceOnBoard, PieceRecord};
use crate::rules::ChessRules;
use crate::starter::{assign_piece_ids, generate_starting_grid};


#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PieceSummary {
    #[serde(rename = "type")]
    pub kind: PieceKind,
    #[serde(rename = "color")]
    pub force: Force,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TurnOutcome {
    pub moved_piece: PieceOnBoard,
    pub captured_piece: Option<PieceOnBoard>,
    // Both refer to the side that moves next.
    pub is_check: bool,
    pub is_checkmate: bool,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MoveResult {
    pub success: bool,
    pub message: String,
    pub error: Option<TurnError>,
    pub moved_piece: Option<PieceSummary>,
    pub captured_piece: Option<PieceSummary>,
    pub is_check: bool,
    pub is_checkmate: bool,
    // Serialized lowercase like every other color field; `message` carries "White"/"Black".
    pub winner: Option<Force>,
}

// Everything needed to take a tentative move back.
#[derive(Clone, Copy, Debug)]
struct TrialMove {
    mover: PieceId,
    from: Coord,
    to: Coord,
    captured: Option<PieceId>,
}

impl From<PieceOnBoard> for PieceSummary {
    fn from(piece: PieceOnBoard) -> Self { PieceSummary { kind: piece.kind, force: piece.force } }
}

impl TurnOutcome {
    pub fn winner(&self) -> Option<Force> {
        self.is_checkmate.then_some(self.moved_piece.force)
    }
}

impl MoveResult {
    fn committed(outcome: &TurnOutcome) -> Self {
        let winner = outcome.winner();
        let message = match winner {
            Some(force) => format!("Checkmate! {} wins!", force.capitalized_name()),
            None if outcome.is_check => "Check!".to_owned(),
            None => "Move successful".to_owned(),
        };
        MoveResult {
            success: true,
            message,
            error: None,
            moved_piece: Some(outcome.moved_piece.into()),
            captured_piece: outcome.captured_piece.map(PieceSummary::from),
            is_check: outcome.is_check,
            is_checkmate: outcome.is_checkmate,
            winner,
        }
    }

    fn rejected(error: TurnError, message: String) -> Self {
        MoveResult {
            success: false,
            message,
            error: Some(error),
            moved_piece: None,
            captured_piece: None,
            is_check: false,
            is_checkmate: false,
            winner: None,
        }
    }
}

fn find_king(grid: &Grid, force: Force) -> Option<Coord> {
    grid.pieces()
        .find(|(_, piece)| piece.kind == PieceKind::King && piece.force == force)
        .map(|(pos, _)| pos)
}


// A single game. Check and checkmate are not stored: they are recomputed from the grid.
//
// Methods taking `&mut self` to answer a question (`is_checkmate`, `legal_moves`) simulate
// moves internally. The game is guaranteed to be returned intact.
#[derive(Clone, Debug)]
pub struct Game {
    rules: ChessRules,
    grid: Grid,
    pieces: Vec<PieceRecord>,  // indexed by `PieceId`, captured pieces included
    active_force: Force,
}

impl Game {
    // Panics if `rules` do not pass `ChessRules::verify`.
    pub fn new(rules: ChessRules) -> Self {
        if let Err(err) = rules.verify() {
            panic!("Invalid rules: {err}");
        }
        let grid = generate_starting_grid(&rules);
        Self::new_from_grid(rules, grid, Force::White)
    }

    // Starts from an arbitrary position. Piece ids found in `grid` are replaced.
    //
    // Panics if the grid shape differs from `rules.board_shape` or fails
    // `ChessRules::verify_shape`. The starting setup requirements are not checked.
    pub fn new_from_grid(rules: ChessRules, mut grid: Grid, active_force: Force) -> Self {
        if let Err(err) = rules.verify_shape() {
            panic!("Invalid rules: {err}");
        }
        if rules.board_shape != grid.shape() {
            panic!(
                "Grid shape {:?} does not match rules board shape {:?}",
                grid.shape(),
                rules.board_shape
            );
        }
        let mut next_piece_id = PieceId::new();
        assign_piece_ids(&mut grid, &mut next_piece_id);
        let pieces = grid
            .pieces()
            .map(|(pos, piece)| {
                let mut record = PieceRecord::new(piece);
                record.set_position(Some(pos));
                record
            })
            .collect_vec();
        debug_assert!(pieces.iter().enumerate().all(|(idx, r)| r.piece.id.index() == idx));
        Game { rules, grid, pieces, active_force }
    }

    pub fn rules(&self) -> &ChessRules { &self.rules }
    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn active_force(&self) -> Force { self.active_force }
    pub fn pieces(&self) -> &[PieceRecord] { &self.pieces }
    pub fn piece(&self, id: PieceId) -> Option<&PieceRecord> { self.pieces.get(id.index()) }

    pub fn captured_pieces(&self) -> EnumMap<Force, Vec<PieceKind>> {
        let mut captured = enum_map! { _ => Vec::new() };
        for record in self.pieces.iter().filter(|r| !r.is_on_board()) {
            captured[record.piece.force].push(record.piece.kind);
        }
        captured
    }

    pub fn get_board_state(&self) -> BoardState { board_state(&self.grid) }

    // Never fails: rejections are reported in the result and leave the game unchanged.
    pub fn play_turn(&mut self, start: (i8, i8), end: (i8, i8)) -> MoveResult {
        let (start, end) = (Coord::from(start), Coord::from(end));
        match self.try_turn(start, end) {
            Ok(outcome) => MoveResult::committed(&outcome),
            Err(error) => MoveResult::rejected(error, self.rejection_message(error, start, end)),
        }
    }

    pub fn try_turn(&mut self, start: Coord, end: Coord) -> Result<TurnOutcome, TurnError> {
        let result = self.try_turn_impl(start, end);
        if let Err(error) = result {
            debug!("Rejected {} turn {} -> {}: {:?}", self.active_force, start, end, error);
        }
        result
    }

    fn try_turn_impl(&mut self, start: Coord, end: Coord) -> Result<TurnOutcome, TurnError> {
        let force = self.active_force;
        let piece = self.grid.piece_at(start).ok_or(TurnError::NoPieceAtSource)?;
        if piece.force != force {
            return Err(TurnError::WrongTurn);
        }
        if !movement::valid_moves(piece, start, &self.grid).contains(&end) {
            return Err(TurnError::IllegalDestination);
        }

        let captured_piece = self.grid.piece_at(end);
        let trial = self.trial_move(piece, start, end);
        if trial.is_check(force) {
            return Err(TurnError::SelfCheck);
        }
        trial.dismiss();

        self.active_force = force.opponent();
        let opponent = self.active_force;
        let is_check = self.is_check(opponent);
        let is_checkmate = is_check && self.is_checkmate(opponent);
        match captured_piece {
            Some(captured) => info!(
                "{} {} {} -> {} takes {}", force, piece.kind, start, end, captured.kind
            ),
            None => info!("{} {} {} -> {}", force, piece.kind, start, end),
        }
        if is_checkmate {
            info!("Checkmate: {} wins", force);
        } else if is_check {
            info!("{} is in check", opponent);
        }
        Ok(TurnOutcome { moved_piece: piece, captured_piece, is_check, is_checkmate })
    }

    // The king of `force` can be taken by some opponent piece. A side without a king is
    // never in check.
    pub fn is_check(&self, force: Force) -> bool {
        let Some(king_pos) = find_king(&self.grid, force) else {
            return false;
        };
        self.grid.pieces().any(|(pos, piece)| {
            piece.force != force && movement::valid_moves(piece, pos, &self.grid).contains(&king_pos)
        })
    }

    // In check and no move gets out of it. A side that is not in check is never mated, even
    // if it has no moves at all: stalemate is not detected.
    pub fn is_checkmate(&mut self, force: Force) -> bool {
        if !self.is_check(force) {
            return false;
        }
        let own_pieces = self.grid.pieces().filter(|(_, piece)| piece.force == force).collect_vec();
        for (from, piece) in own_pieces {
            for to in movement::valid_moves(piece, from, &self.grid) {
                if !self.trial_move(piece, from, to).is_check(force) {
                    return false;
                }
            }
        }
        true
    }

    // Destinations the active side may actually choose for the piece on `from`: valid moves
    // minus those exposing its own king.
    pub fn legal_moves(&mut self, from: Coord) -> Vec<Coord> {
        let Some(piece) = self.grid.piece_at(from) else {
            return Vec::new();
        };
        if piece.force != self.active_force {
            return Vec::new();
        }
        movement::valid_moves(piece, from, &self.grid)
            .into_iter()
            .filter(|&to| !self.trial_move(piece, from, to).is_check(piece.force))
            .collect()
    }

    // Applies the move and returns a guard that takes it back when dropped. Call `dismiss`
    // on the guard to keep the move.
    //
    // `to` must come from `movement::valid_moves` for this piece.
    fn trial_move(
        &mut self, piece: PieceOnBoard, from: Coord, to: Coord,
    ) -> Janitor<&mut Self, impl FnOnce(&mut Self)> {
        if !self.grid.is_valid(to) {
            panic!("{}", internal_error_message!("{:?}", GridError::InvalidPosition(to)));
        }
        let captured = self.grid.piece_at(to).map(|p| p.id);
        if let Some(captured_id) = captured {
            self.grid.remove(&mut self.pieces[captured_id.index()]);
        }
        if let Err(err) = self.grid.move_piece(&mut self.pieces[piece.id.index()], to) {
            panic!("{}", internal_error_message!("{:?}", err));
        }
        let trial = TrialMove { mover: piece.id, from, to, captured };
        Janitor::new(self, move |game: &mut Game| game.undo_trial(trial))
    }

    fn undo_trial(&mut self, trial: TrialMove) {
        trace!("Taking back {} -> {}", trial.from, trial.to);
        if let Err(err) = self.restore(trial) {
            panic!("{}", internal_error_message!("{:?}", err));
        }
    }

    fn restore(&mut self, trial: TrialMove) -> Result<(), GridError> {
        self.grid.place(&mut self.pieces[trial.mover.index()], trial.from)?;
        if let Some(captured_id) = trial.captured {
            self.grid.place(&mut self.pieces[captured_id.index()], trial.to)?;
        }
        Ok(())
    }

    fn rejection_message(&self, error: TurnError, start: Coord, end: Coord) -> String {
        let piece = self.grid.piece_at(start);
        match error {
            TurnError::NoPieceAtSource => "No piece at start position.".to_owned(),
            TurnError::WrongTurn => format!(
                "It's {}'s turn. You cannot move {} pieces.",
                self.active_force,
                piece.map_or(self.active_force.opponent(), |p| p.force)
            ),
            TurnError::IllegalDestination => format!(
                "Invalid move for {} at {} to {}.",
                piece.map_or_else(|| "piece".to_owned(), |p| p.kind.to_string()),
                start,
                end
            ),
            TurnError::SelfCheck => "Illegal move: You are in check!".to_owned(),
        }
    }
}
