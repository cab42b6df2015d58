use serde::{Deserialize, Serialize};

use crate::coord::Coord;


#[macro_export]
macro_rules! internal_error_message {
    () => {
        format!("Internal error at {}:{}.", file!(), line!())
    };
    ($($arg:tt)+) => {
        format!("Internal error at {}:{}: {}.", file!(), line!(), format!($($arg)*))
    };
}

// Raised by grid primitives. Game validates destinations before touching the grid, so
// seeing this outside of the grid means a bug in the caller.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GridError {
    InvalidPosition(Coord),
}

// Ordinary rejections of a proposed move. None of them change the game state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TurnError {
    NoPieceAtSource,
    WrongTurn,
    IllegalDestination,
    SelfCheck,
}
