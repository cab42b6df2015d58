use serde::{Deserialize, Serialize};

use crate::coord::BoardShape;


#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum StartingPosition {
    Classic,
    Empty,  // for hosts that set up the board themselves
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ChessRules {
    pub board_shape: BoardShape,
    pub starting_position: StartingPosition,
}

impl ChessRules {
    pub fn classic() -> Self {
        Self {
            board_shape: BoardShape::standard(),
            starting_position: StartingPosition::Classic,
        }
    }

    // The part of `verify` that any position needs, whatever the starting setup.
    pub fn verify_shape(&self) -> Result<(), String> {
        let BoardShape { num_rows, num_cols } = self.board_shape;
        if num_rows == 0 || num_cols == 0 {
            return Err("Board must not be empty".to_owned());
        }
        if num_rows > i8::MAX as u8 || num_cols > i8::MAX as u8 {
            return Err(format!("Board dimensions must not exceed {}", i8::MAX));
        }
        Ok(())
    }

    pub fn verify(&self) -> Result<(), String> {
        self.verify_shape()?;
        let BoardShape { num_rows, num_cols } = self.board_shape;
        match self.starting_position {
            StartingPosition::Classic => {
                if num_cols != 8 {
                    return Err(format!("Classic setup needs 8 columns, got {num_cols}"));
                }
                if num_rows < 4 {
                    return Err(format!("Classic setup needs at least 4 rows, got {num_rows}"));
                }
            }
            StartingPosition::Empty => {}
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_shapes() {
        assert_eq!(ChessRules::classic().verify(), Ok(()));
        let tall = ChessRules {
            board_shape: BoardShape { num_rows: 10, num_cols: 8 },
            ..ChessRules::classic()
        };
        assert_eq!(tall.verify(), Ok(()));
        let narrow = ChessRules {
            board_shape: BoardShape { num_rows: 8, num_cols: 6 },
            ..ChessRules::classic()
        };
        assert!(narrow.verify().is_err());
        let narrow_empty = ChessRules { starting_position: StartingPosition::Empty, ..narrow };
        assert_eq!(narrow_empty.verify(), Ok(()));
        let flat = ChessRules {
            board_shape: BoardShape { num_rows: 3, num_cols: 8 },
            ..ChessRules::classic()
        };
        assert!(flat.verify().is_err());
    }

    #[test]
    fn verify_shape_limits() {
        let shape_rules = |num_rows, num_cols| ChessRules {
            board_shape: BoardShape { num_rows, num_cols },
            starting_position: StartingPosition::Empty,
        };
        assert_eq!(shape_rules(3, 5).verify_shape(), Ok(()));
        assert_eq!(shape_rules(127, 127).verify_shape(), Ok(()));
        assert!(shape_rules(0, 8).verify_shape().is_err());
        assert!(shape_rules(8, 0).verify_shape().is_err());
        assert!(shape_rules(130, 8).verify_shape().is_err());
        assert!(shape_rules(8, 200).verify().is_err());
    }
}
