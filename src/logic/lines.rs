//! Every four-cell window that can hold a Teeko win.
//!
//! The terminal check, the heuristic and the drop-phase threat scan all read
//! this one table, in this order: rows, columns, down-left diagonals,
//! down-right diagonals, then 2×2 boxes. Windows never wrap around an edge.

use crate::core::{Position, BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Row,
    Column,
    /// Runs from upper-right to lower-left.
    DiagonalDownLeft,
    /// Runs from upper-left to lower-right.
    DiagonalDownRight,
    Box,
}

impl Family {
    /// Straight lines, as opposed to the 2×2 box.
    pub fn is_line(self) -> bool {
        self != Family::Box
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub family: Family,
    pub cells: [Position; 4],
}

/// 10 rows + 10 columns + 4 + 4 diagonals + 16 boxes.
pub const WINDOW_COUNT: usize = 44;

pub static WINDOWS: [Window; WINDOW_COUNT] = build_windows();

/// Straight-line windows only, in table order.
pub fn lines() -> impl Iterator<Item = &'static Window> {
    WINDOWS.iter().filter(|w| w.family.is_line())
}

const fn at(row: usize, col: usize) -> Position {
    Position { row, col }
}

const fn build_windows() -> [Window; WINDOW_COUNT] {
    let blank = Window {
        family: Family::Row,
        cells: [at(0, 0); 4],
    };
    let mut out = [blank; WINDOW_COUNT];
    let mut n = 0;
    let span = BOARD_SIZE - 3;

    let mut r = 0;
    while r < BOARD_SIZE {
        let mut c = 0;
        while c < span {
            out[n] = Window {
                family: Family::Row,
                cells: [at(r, c), at(r, c + 1), at(r, c + 2), at(r, c + 3)],
            };
            n += 1;
            c += 1;
        }
        r += 1;
    }

    let mut c = 0;
    while c < BOARD_SIZE {
        let mut r = 0;
        while r < span {
            out[n] = Window {
                family: Family::Column,
                cells: [at(r, c), at(r + 1, c), at(r + 2, c), at(r + 3, c)],
            };
            n += 1;
            r += 1;
        }
        c += 1;
    }

    let mut r = 0;
    while r < span {
        let mut c = 3;
        while c < BOARD_SIZE {
            out[n] = Window {
                family: Family::DiagonalDownLeft,
                cells: [at(r, c), at(r + 1, c - 1), at(r + 2, c - 2), at(r + 3, c - 3)],
            };
            n += 1;
            c += 1;
        }
        r += 1;
    }

    let mut r = 0;
    while r < span {
        let mut c = 0;
        while c < span {
            out[n] = Window {
                family: Family::DiagonalDownRight,
                cells: [at(r, c), at(r + 1, c + 1), at(r + 2, c + 2), at(r + 3, c + 3)],
            };
            n += 1;
            c += 1;
        }
        r += 1;
    }

    let mut r = 0;
    while r < BOARD_SIZE - 1 {
        let mut c = 0;
        while c < BOARD_SIZE - 1 {
            out[n] = Window {
                family: Family::Box,
                cells: [at(r, c), at(r, c + 1), at(r + 1, c), at(r + 1, c + 1)],
            };
            n += 1;
            c += 1;
        }
        r += 1;
    }

    assert!(n == WINDOW_COUNT);
    out
}
