// Destination generation for each piece kind. Every generator reads the grid only; king
// safety is the game's business.

use crate::coord::Coord;
use crate::force::Force;
use crate::grid::Grid;
use crate::piece::{Facing, PieceKind, PieceOnBoard};


// Offsets are `(d_row, d_col)`.
const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] =
    [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)];
const KING_OFFSETS: [(i8, i8); 8] =
    [(1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1)];

// Squares the piece standing on `from` may move to, captures included. The order is
// arbitrary. Never contains `from` or a square held by a piece of the same force.
pub fn valid_moves(piece: PieceOnBoard, from: Coord, grid: &Grid) -> Vec<Coord> {
    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, from, grid, &mut moves),
        PieceKind::Knight => jumps(piece.force, from, &KNIGHT_OFFSETS, grid, &mut moves),
        PieceKind::Bishop => rays(piece.force, from, &DIAGONAL_DIRECTIONS, grid, &mut moves),
        PieceKind::Rook => rays(piece.force, from, &ORTHOGONAL_DIRECTIONS, grid, &mut moves),
        PieceKind::Queen => {
            rays(piece.force, from, &ORTHOGONAL_DIRECTIONS, grid, &mut moves);
            rays(piece.force, from, &DIAGONAL_DIRECTIONS, grid, &mut moves);
        }
        PieceKind::King => jumps(piece.force, from, &KING_OFFSETS, grid, &mut moves),
    }
    moves
}

fn is_opponent_at(grid: &Grid, pos: Coord, force: Force) -> bool {
    grid.piece_at(pos).is_some_and(|p| p.force != force)
}

fn starting_row(facing: Facing, grid: &Grid) -> i8 {
    match facing {
        Facing::Up => 1,
        Facing::Down => grid.shape().num_rows as i8 - 2,
    }
}

fn pawn_moves(piece: PieceOnBoard, from: Coord, grid: &Grid, moves: &mut Vec<Coord>) {
    let dir = piece.facing.row_direction();

    let one_step = from + (dir, 0);
    if grid.is_valid(one_step) && grid.piece_at(one_step).is_none() {
        moves.push(one_step);
        let two_steps = from + (dir * 2, 0);
        if from.row.to_zero_based() == starting_row(piece.facing, grid)
            && grid.is_valid(two_steps)
            && grid.piece_at(two_steps).is_none()
        {
            moves.push(two_steps);
        }
    }

    for d_col in [-1, 1] {
        let target = from + (dir, d_col);
        if is_opponent_at(grid, target, piece.force) {
            moves.push(target);
        }
    }
}

// Single-square moves: knight and king.
fn jumps(force: Force, from: Coord, offsets: &[(i8, i8)], grid: &Grid, moves: &mut Vec<Coord>) {
    for &offset in offsets {
        let target = from + offset;
        if !grid.is_valid(target) {
            continue;
        }
        match grid.piece_at(target) {
            Some(occupant) if occupant.force == force => {}
            _ => moves.push(target),
        }
    }
}

// Sliding moves: each ray stops at the board edge or at the first occupied square, which is
// included iff it holds an opponent piece.
fn rays(
    force: Force, from: Coord, directions: &[(i8, i8)], grid: &Grid, moves: &mut Vec<Coord>,
) {
    for &direction in directions {
        let mut pos = from + direction;
        while grid.is_valid(pos) {
            match grid.piece_at(pos) {
                None => moves.push(pos),
                Some(occupant) => {
                    if occupant.force != force {
                        moves.push(pos);
                    }
                    break;
                }
            }
            pos = pos + direction;
        }
    }
}
