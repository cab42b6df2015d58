use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::force::Force;
use crate::grid::Grid;
use crate::piece::{PieceId, PieceKind, PieceOnBoard};


#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CellState {
    #[serde(rename = "type")]
    pub kind: PieceKind,
    #[serde(rename = "color")]
    pub force: Force,
    pub id: PieceId,
}

// Rows go from the highest row to row 0, cells within a row from column 0 up. This is the
// order a display layer draws White's view in, so it needs no further logic.
pub type BoardState = Vec<Vec<Option<CellState>>>;

impl From<PieceOnBoard> for CellState {
    fn from(piece: PieceOnBoard) -> Self {
        CellState { kind: piece.kind, force: piece.force, id: piece.id }
    }
}

pub fn board_state(grid: &Grid) -> BoardState {
    let shape = grid.shape();
    shape
        .rows()
        .rev()
        .map(|row| {
            shape
                .cols()
                .map(|col| grid.piece_at(Coord::new(row, col)).map(CellState::from))
                .collect_vec()
        })
        .collect_vec()
}
