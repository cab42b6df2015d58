use derive_new::new;
use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::coord::Coord;
use crate::force::Force;
use crate::grid::Grid;
use crate::movement;


#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Enum, EnumIter, strum::Display, Serialize,
    Deserialize,
)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

// Which way a pawn advances. `Up` means towards higher rows.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Facing {
    Up,
    Down,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u32);

// What the grid stores: everything move generation needs to know about an occupant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, new, Serialize, Deserialize)]
pub struct PieceOnBoard {
    pub id: PieceId,
    pub kind: PieceKind,
    pub force: Force,
    pub facing: Facing,
}

// A piece for its whole lifetime. Position is `None` when the piece is not on the board,
// e.g. after it has been captured. Only `Grid` changes the position.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PieceRecord {
    pub piece: PieceOnBoard,
    position: Option<Coord>,
}

impl Facing {
    pub fn for_force(force: Force) -> Self {
        match force {
            Force::White => Facing::Up,
            Force::Black => Facing::Down,
        }
    }

    pub fn row_direction(self) -> i8 {
        match self {
            Facing::Up => 1,
            Facing::Down => -1,
        }
    }
}

impl PieceId {
    pub fn new() -> Self { PieceId(0) }
    // For pieces that are about to get a real id from `starter::assign_piece_ids`.
    pub fn tmp() -> Self { PieceId(u32::MAX) }
    pub fn inc(&mut self) -> Self {
        let id = *self;
        self.0 += 1;
        id
    }
    pub fn index(self) -> usize { self.0 as usize }
}

impl PieceRecord {
    pub fn new(piece: PieceOnBoard) -> Self { PieceRecord { piece, position: None } }

    pub fn position(&self) -> Option<Coord> { self.position }
    pub fn is_on_board(&self) -> bool { self.position.is_some() }
    pub(crate) fn set_position(&mut self, position: Option<Coord>) { self.position = position; }

    pub fn valid_moves(&self, grid: &Grid) -> Vec<Coord> {
        match self.position {
            Some(from) => movement::valid_moves(self.piece, from, grid),
            None => Vec::new(),
        }
    }
}

pub fn piece_to_ascii(kind: PieceKind, force: Force) -> char {
    let ch = match kind {
        PieceKind::Pawn => 'P',
        PieceKind::Knight => 'N',
        PieceKind::Bishop => 'B',
        PieceKind::Rook => 'R',
        PieceKind::Queen => 'Q',
        PieceKind::King => 'K',
    };
    match force {
        Force::White => ch,
        Force::Black => ch.to_ascii_lowercase(),
    }
}

pub fn piece_from_ascii(ch: char) -> Option<(PieceKind, Force)> {
    let force = if ch.is_ascii_uppercase() { Force::White } else { Force::Black };
    let kind = match ch.to_ascii_uppercase() {
        'P' => PieceKind::Pawn,
        'N' => PieceKind::Knight,
        'B' => PieceKind::Bishop,
        'R' => PieceKind::Rook,
        'Q' => PieceKind::Queen,
        'K' => PieceKind::King,
        _ => return None,
    };
    Some((kind, force))
}

pub fn piece_to_pictogram(kind: PieceKind, force: Force) -> char {
    use self::Force::*;
    use self::PieceKind::*;
    match (force, kind) {
        (White, Pawn) => '♙',
        (White, Knight) => '♘',
        (White, Bishop) => '♗',
        (White, Rook) => '♖',
        (White, Queen) => '♕',
        (White, King) => '♔',
        (Black, Pawn) => '♟',
        (Black, Knight) => '♞',
        (Black, Bishop) => '♝',
        (Black, Rook) => '♜',
        (Black, Queen) => '♛',
        (Black, King) => '♚',
    }
}
