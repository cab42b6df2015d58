use crate::coord::{Coord, Row};
use crate::force::Force;
use crate::grid::Grid;
use crate::piece::{Facing, PieceId, PieceKind, PieceOnBoard};
use crate::rules::{ChessRules, StartingPosition};


const CLASSIC_BACK_ROW: [PieceKind; 8] = {
    use PieceKind::*;
    [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook]
};

fn new_white(kind: PieceKind) -> PieceOnBoard {
    PieceOnBoard::new(PieceId::tmp(), kind, Force::White, Facing::Up)
}

fn setup_white_pieces(grid: &mut Grid) {
    for (col, &kind) in grid.shape().cols().zip(CLASSIC_BACK_ROW.iter()) {
        grid[Coord::new(Row::from_zero_based(0), col)] = Some(new_white(kind));
    }
    for col in grid.shape().cols() {
        grid[Coord::new(Row::from_zero_based(1), col)] = Some(new_white(PieceKind::Pawn));
    }
}

// Black gets the same arrangement on the opposite end of the board, facing White.
fn setup_black_pieces_mirrorlike(grid: &mut Grid) {
    let num_rows = grid.shape().num_rows as i8;
    for coord in grid.shape().coords() {
        if let Some(piece) = grid[coord] {
            if piece.force == Force::White {
                let mirror_row = Row::from_zero_based(num_rows - coord.row.to_zero_based() - 1);
                let mirror_coord = Coord::new(mirror_row, coord.col);
                assert!(grid[mirror_coord].is_none(), "{:?}", grid);
                grid[mirror_coord] = Some(PieceOnBoard {
                    force: Force::Black,
                    facing: Facing::for_force(Force::Black),
                    ..piece
                });
            }
        }
    }
}

// Ids go in row-major order, so the roster built from the grid can be indexed by id.
pub fn assign_piece_ids(grid: &mut Grid, piece_id: &mut PieceId) {
    for coord in grid.shape().coords() {
        if let Some(piece) = grid[coord] {
            grid[coord] = Some(PieceOnBoard { id: piece_id.inc(), ..piece });
        }
    }
}

// Expects rules that passed `ChessRules::verify`.
pub fn generate_starting_grid(rules: &ChessRules) -> Grid {
    let mut grid = Grid::new(rules.board_shape);
    match rules.starting_position {
        StartingPosition::Classic => {
            setup_white_pieces(&mut grid);
            setup_black_pieces_mirrorlike(&mut grid);
        }
        StartingPosition::Empty => {}
    }
    let mut next_piece_id = PieceId::new();
    assign_piece_ids(&mut grid, &mut next_piece_id);
    grid
}


#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::coord::BoardShape;

    #[test]
    fn classic_setup() {
        let grid = generate_starting_grid(&ChessRules::classic());
        let pieces = grid.pieces().collect_vec();
        assert_eq!(pieces.len(), 32);
        for force in Force::iter() {
            let own = pieces.iter().filter(|(_, p)| p.force == force).collect_vec();
            assert_eq!(own.len(), 16);
            let count = |kind| own.iter().filter(|(_, p)| p.kind == kind).count();
            assert_eq!(count(PieceKind::King), 1);
            assert_eq!(count(PieceKind::Queen), 1);
            assert_eq!(count(PieceKind::Rook), 2);
            assert_eq!(count(PieceKind::Knight), 2);
            assert_eq!(count(PieceKind::Bishop), 2);
            assert_eq!(count(PieceKind::Pawn), 8);
            assert!(own.iter().all(|(_, p)| p.facing == Facing::for_force(force)));
        }
        for (x, kind) in CLASSIC_BACK_ROW.into_iter().enumerate() {
            let x = x as i8;
            let white = grid.piece_at(Coord::from_xy(x, 0)).unwrap();
            let black = grid.piece_at(Coord::from_xy(x, 7)).unwrap();
            assert_eq!((white.kind, white.force), (kind, Force::White));
            assert_eq!((black.kind, black.force), (kind, Force::Black));
            assert_eq!(grid.piece_at(Coord::from_xy(x, 1)).unwrap().kind, PieceKind::Pawn);
            assert_eq!(grid.piece_at(Coord::from_xy(x, 6)).unwrap().kind, PieceKind::Pawn);
        }
    }

    #[test]
    fn ids_are_unique_and_dense() {
        let grid = generate_starting_grid(&ChessRules::classic());
        let ids = grid.pieces().map(|(_, p)| p.id.0).sorted().collect_vec();
        assert_eq!(ids, (0..32).collect_vec());
    }

    #[test]
    fn tall_board_puts_black_on_the_last_rows() {
        let rules = ChessRules {
            board_shape: BoardShape { num_rows: 10, num_cols: 8 },
            ..ChessRules::classic()
        };
        let grid = generate_starting_grid(&rules);
        assert_eq!(grid.piece_at(Coord::from_xy(4, 9)).unwrap().kind, PieceKind::King);
        assert_eq!(grid.piece_at(Coord::from_xy(0, 8)).unwrap().kind, PieceKind::Pawn);
        assert!(grid.piece_at(Coord::from_xy(0, 7)).is_none());
    }

    #[test]
    fn empty_setup() {
        let rules = ChessRules { starting_position: StartingPosition::Empty, ..ChessRules::classic() };
        assert_eq!(generate_starting_grid(&rules).pieces().count(), 0);
    }
}
