// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use grid_chess::coord::{BoardShape, Col, Coord, Row};
use grid_chess::game::{Game, MoveResult};
use grid_chess::grid::Grid;
use grid_chess::piece::{Facing, PieceId, PieceOnBoard, piece_from_ascii};
use grid_chess::util::as_single_char;
use itertools::Itertools;


#[derive(Clone, Copy, Debug)]
pub struct PieceMatcher {
    pub kind: grid_chess::piece::PieceKind,
    pub force: grid_chess::force::Force,
}

pub trait PieceIs {
    fn is(self, matcher: PieceMatcher) -> bool;
}

impl PieceIs for Option<PieceOnBoard> {
    fn is(self, matcher: PieceMatcher) -> bool {
        if let Some(piece) = self {
            piece.kind == matcher.kind && piece.force == matcher.force
        } else {
            false
        }
    }
}

#[macro_export]
macro_rules! piece {
    ($force:ident $kind:ident) => {
        common::PieceMatcher {
            force: grid_chess::force::Force::$force,
            kind: grid_chess::piece::PieceKind::$kind,
        }
    };
}

// Parses a diagram with the highest row on top. Upper case is White, lower case is Black,
// '.' is an empty square.
#[allow(dead_code)]
pub fn parse_board(board_str: &str) -> Result<Grid, String> {
    let rows = board_str
        .split('\n')
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.split_ascii_whitespace().collect_vec())
        .collect_vec();
    let num_rows = rows.len();
    let num_cols = rows.first().map_or(0, |row| row.len());
    if rows.iter().any(|row| row.len() != num_cols) {
        return Err("Rows have different lengths".to_owned());
    }
    let mut grid = Grid::new(BoardShape { num_rows: num_rows as u8, num_cols: num_cols as u8 });
    for (row_idx, row) in rows.iter().rev().enumerate() {
        for (col_idx, piece_str) in row.iter().enumerate() {
            let piece_char =
                as_single_char(piece_str).ok_or_else(|| format!("Invalid piece: {}", piece_str))?;
            if piece_char == '.' {
                continue;
            }
            let (kind, force) = piece_from_ascii(piece_char)
                .ok_or_else(|| format!("Invalid piece: {}", piece_char))?;
            let coord = Coord::new(Row::from_zero_based(row_idx as i8), Col::from_zero_based(col_idx as i8));
            grid[coord] = Some(PieceOnBoard::new(PieceId::tmp(), kind, force, Facing::for_force(force)));
        }
    }
    Ok(grid)
}

#[allow(dead_code)]
pub fn xy(x: i8, y: i8) -> Coord { Coord::from_xy(x, y) }

// Plays a sequence of moves that are all expected to succeed.
#[allow(dead_code)]
pub fn play_all(game: &mut Game, moves: &[((i8, i8), (i8, i8))]) -> Vec<MoveResult> {
    moves
        .iter()
        .map(|&(from, to)| {
            let result = game.play_turn(from, to);
            assert!(result.success, "{:?} -> {:?}: {}", from, to, result.message);
            result
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use grid_chess::rules::ChessRules;
    use grid_chess::starter::generate_starting_grid;
    use pretty_assertions::assert_eq;

    use super::*;

    fn strip_piece_ids(grid: &Grid) -> Vec<Option<(grid_chess::piece::PieceKind, grid_chess::force::Force)>> {
        grid.shape().coords().map(|c| grid.piece_at(c).map(|p| (p.kind, p.force))).collect()
    }

    #[test]
    fn parse_board_opening() {
        let board_str = "
            r n b q k b n r
            p p p p p p p p
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            P P P P P P P P
            R N B Q K B N R
        ";
        let grid = parse_board(board_str).unwrap();
        let expected = generate_starting_grid(&ChessRules::classic());
        assert_eq!(strip_piece_ids(&grid), strip_piece_ids(&expected));
    }
}
