use console::Style;
use enum_map::EnumMap;
use itertools::Itertools;

use grid_chess::coord::Coord;
use grid_chess::force::Force;
use grid_chess::game::Game;
use grid_chess::grid::Grid;
use grid_chess::piece::{PieceKind, piece_to_pictogram};


fn format_square(label: impl std::fmt::Display) -> String { format!("{:^3}", label) }

fn render_captured(captured: &[PieceKind], force: Force, board_width: usize) -> String {
    let stacks = captured.iter().map(|&kind| piece_to_pictogram(kind, force)).join(" ");
    format!(
        "{1:^0$}\n",
        board_width,
        Style::new().color256(233).on_color256(194).apply_to(stacks)
    )
}

// White's view: the highest row on top, column 0 on the left. Labels are zero-based
// coordinates, the same numbers the input uses.
pub fn render_grid(grid: &Grid) -> String {
    let colors = [
        Style::new().color256(233).on_color256(230),
        Style::new().color256(233).on_color256(222),
    ];
    let shape = grid.shape();

    let mut col_names = format_square(' ');
    for col in shape.cols() {
        col_names.push_str(&format_square(col.to_zero_based()));
    }
    col_names.push_str(&format_square(' '));
    col_names.push('\n');

    let mut ret = col_names.clone();
    for row in shape.rows().rev() {
        ret.push_str(&format_square(row.to_zero_based()));
        for col in shape.cols() {
            let color_idx = (row.to_zero_based() + col.to_zero_based()).rem_euclid(2) as usize;
            let ch = match grid.piece_at(Coord::new(row, col)) {
                Some(piece) => piece_to_pictogram(piece.kind, piece.force),
                None => ' ',
            };
            ret.push_str(&colors[1 - color_idx].apply_to(format_square(ch)).to_string());
        }
        ret.push_str(&format_square(row.to_zero_based()));
        ret.push('\n');
    }
    ret.push_str(&col_names);
    ret
}

// Pieces a side has lost are shown next to the side that lost them.
pub fn render_game(game: &Game) -> String {
    let board_width = (game.grid().shape().num_cols as usize + 2) * 3;
    let captured: EnumMap<Force, Vec<PieceKind>> = game.captured_pieces();
    format!(
        "{}{}{}{} to move\n",
        render_captured(&captured[Force::Black], Force::Black, board_width),
        render_grid(game.grid()),
        render_captured(&captured[Force::White], Force::White, board_width),
        game.active_force().capitalized_name(),
    )
}


#[cfg(test)]
mod tests {
    use grid_chess::rules::ChessRules;

    use super::*;

    #[test]
    fn grid_has_labels_and_pieces() {
        console::set_colors_enabled(false);
        let game = Game::new(ChessRules::classic());
        let rendered = render_grid(game.grid());
        let lines = rendered.lines().collect_vec();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].contains(" 7 "));
        assert!(lines[1].starts_with(" 7 "));
        assert!(lines[1].contains('♚'));
        assert!(lines[8].starts_with(" 0 "));
        assert!(lines[8].contains('♔'));
        assert!(!lines[4].contains('♟'));
    }
}
