use std::{fmt, ops};

use ndarray::{Array, Array2};
use serde::{Deserialize, Serialize};

use crate::coord::{BoardShape, Coord};
use crate::error::GridError;
use crate::piece::{PieceOnBoard, PieceRecord};


// Occupancy only. The grid knows nothing about chess rules besides the board bounds.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    data: Array2<Option<PieceOnBoard>>,
}

impl Grid {
    pub fn new(board_shape: BoardShape) -> Self {
        Grid {
            data: Array::from_elem(
                (board_shape.num_rows as usize, board_shape.num_cols as usize),
                None,
            ),
        }
    }

    pub fn shape(&self) -> BoardShape {
        BoardShape {
            num_rows: self.data.shape()[0] as u8,
            num_cols: self.data.shape()[1] as u8,
        }
    }

    pub fn is_valid(&self, pos: Coord) -> bool { self.shape().contains_coord(pos) }

    // Out-of-bounds squares are reported as empty.
    pub fn piece_at(&self, pos: Coord) -> Option<PieceOnBoard> {
        coord_to_index(pos).and_then(|idx| self.data.get(idx).copied().flatten())
    }

    // Occupied squares in row-major order, starting from row 0.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, PieceOnBoard)> + '_ {
        self.shape().coords().filter_map(|pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    // Puts the piece on `pos`, vacating its previous square if it had one. Whatever stood
    // on `pos` is overwritten: capturing it is up to the caller.
    pub fn place(&mut self, record: &mut PieceRecord, pos: Coord) -> Result<(), GridError> {
        if !self.is_valid(pos) {
            return Err(GridError::InvalidPosition(pos));
        }
        self.vacate(record);
        self[pos] = Some(record.piece);
        record.set_position(Some(pos));
        Ok(())
    }

    pub fn move_piece(&mut self, record: &mut PieceRecord, new_pos: Coord) -> Result<(), GridError> {
        if !self.is_valid(new_pos) {
            return Err(GridError::InvalidPosition(new_pos));
        }
        self.place(record, new_pos)
    }

    pub fn remove(&mut self, record: &mut PieceRecord) {
        self.vacate(record);
        record.set_position(None);
    }

    // Clears the piece's square, but only if the square still holds this very piece.
    fn vacate(&mut self, record: &PieceRecord) {
        if let Some(old_pos) = record.position() {
            if self.piece_at(old_pos).is_some_and(|p| p.id == record.piece.id) {
                self[old_pos] = None;
            }
        }
    }
}

impl ops::Index<Coord> for Grid {
    type Output = Option<PieceOnBoard>;
    #[track_caller]
    fn index(&self, pos: Coord) -> &Self::Output {
        let shape = self.shape();
        coord_to_index(pos)
            .and_then(|idx| self.data.get(idx))
            .unwrap_or_else(|| panic!("{}", out_of_bound_message(pos, shape)))
    }
}

impl ops::IndexMut<Coord> for Grid {
    #[track_caller]
    fn index_mut(&mut self, pos: Coord) -> &mut Self::Output {
        let shape = self.shape();
        coord_to_index(pos)
            .and_then(|idx| self.data.get_mut(idx))
            .unwrap_or_else(|| panic!("{}", out_of_bound_message(pos, shape)))
    }
}

fn coord_to_index(pos: Coord) -> Option<[usize; 2]> {
    let row = usize::try_from(pos.row.to_zero_based()).ok()?;
    let col = usize::try_from(pos.col.to_zero_based()).ok()?;
    Some([row, col])
}

fn out_of_bound_message(pos: Coord, board_shape: BoardShape) -> String {
    format!(
        "Coord {} is out of bound for {}x{} board",
        pos, board_shape.num_cols, board_shape.num_rows
    )
}

fn debug_format_piece(piece: &PieceOnBoard) -> String {
    format!("[{}]-{:?}-{:?}", piece.id.0, piece.force, piece.kind)
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid ")?;
        f.debug_map()
            .entries(self.pieces().map(|(pos, piece)| (pos.to_string(), debug_format_piece(&piece))))
            .finish()
    }
}
