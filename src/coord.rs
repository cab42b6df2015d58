use std::fmt;
use std::ops;

use itertools::Itertools;
use serde::{Deserialize, Serialize};


pub const DEFAULT_NUM_ROWS: u8 = 8;
pub const DEFAULT_NUM_COLS: u8 = 8;


// Rows and columns are signed: offset arithmetic may step off the board, and the result
// must stay representable so that `BoardShape::contains_coord` can reject it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Row {
    idx: i8,  // 0-based
}

impl Row {
    pub const fn from_zero_based(idx: i8) -> Self { Self { idx } }
    pub const fn to_zero_based(self) -> i8 { self.idx }
}

impl ops::Add<i8> for Row {
    type Output = Self;
    fn add(self, other: i8) -> Self::Output {
        Self::from_zero_based(self.idx.saturating_add(other))
    }
}

impl ops::Sub for Row {
    type Output = i8;
    fn sub(self, other: Self) -> Self::Output { self.idx - other.idx }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Col {
    idx: i8,  // 0-based
}

impl Col {
    pub const fn from_zero_based(idx: i8) -> Self { Self { idx } }
    pub const fn to_zero_based(self) -> i8 { self.idx }
}

impl ops::Add<i8> for Col {
    type Output = Self;
    fn add(self, other: i8) -> Self::Output {
        Self::from_zero_based(self.idx.saturating_add(other))
    }
}

impl ops::Sub for Col {
    type Output = i8;
    fn sub(self, other: Self) -> Self::Output { self.idx - other.idx }
}


// A square, possibly outside of the board. The external interface speaks `(x, y)`
// pairs: `x` is the column and `y` is the row, with row 0 at White's side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }
    pub const fn from_xy(x: i8, y: i8) -> Self {
        Self::new(Row::from_zero_based(y), Col::from_zero_based(x))
    }
    pub const fn to_xy(self) -> (i8, i8) { (self.col.to_zero_based(), self.row.to_zero_based()) }
}

impl From<(i8, i8)> for Coord {
    fn from((x, y): (i8, i8)) -> Self { Coord::from_xy(x, y) }
}

// Offsets are `(d_row, d_col)`.
impl ops::Add<(i8, i8)> for Coord {
    type Output = Self;
    fn add(self, (d_row, d_col): (i8, i8)) -> Self::Output {
        Self { row: self.row + d_row, col: self.col + d_col }
    }
}

impl ops::Sub for Coord {
    type Output = (i8, i8);
    fn sub(self, other: Self) -> Self::Output { (self.row - other.row, self.col - other.col) }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.to_xy();
        write!(f, "Coord({x}, {y})")
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.to_xy();
        write!(f, "({x}, {y})")
    }
}


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct BoardShape {
    pub num_rows: u8,
    pub num_cols: u8,
}

impl BoardShape {
    pub const fn standard() -> Self {
        BoardShape { num_rows: DEFAULT_NUM_ROWS, num_cols: DEFAULT_NUM_COLS }
    }

    pub fn contains_row(&self, row: Row) -> bool {
        (0..self.num_rows as i16).contains(&(row.to_zero_based() as i16))
    }
    pub fn contains_col(&self, col: Col) -> bool {
        (0..self.num_cols as i16).contains(&(col.to_zero_based() as i16))
    }
    pub fn contains_coord(&self, coord: Coord) -> bool {
        self.contains_row(coord.row) && self.contains_col(coord.col)
    }

    pub fn rows(&self) -> impl DoubleEndedIterator<Item = Row> + Clone + use<> {
        (0..self.num_rows as i8).map(Row::from_zero_based)
    }
    pub fn cols(&self) -> impl DoubleEndedIterator<Item = Col> + Clone + use<> {
        (0..self.num_cols as i8).map(Col::from_zero_based)
    }
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        self.rows().cartesian_product(self.cols()).map(|(row, col)| Coord::new(row, col))
    }
}
