#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod board_state;
pub mod coord;
pub mod error;
pub mod force;
pub mod game;
pub mod grid;
pub mod janitor;
pub mod movement;
pub mod piece;
pub mod rules;
pub mod starter;
pub mod util;

pub use board_state::{BoardState, CellState};
pub use coord::{BoardShape, Col, Coord, Row};
pub use error::{GridError, TurnError};
pub use force::Force;
pub use game::{Game, MoveResult, PieceSummary, TurnOutcome};
pub use grid::Grid;
pub use piece::{Facing, PieceId, PieceKind, PieceOnBoard, PieceRecord};
pub use rules::{ChessRules, StartingPosition};
