use crate::core::{Board, Piece, Position, BOARD_SIZE};

/// 文字列配列から盤面を初期化する
///
/// Each row is five whitespace-separated cells: `b`, `r` or `.`.
/// Used by tests and for seeding positions by hand.
pub fn board_from_rows(rows: &[&str]) -> Board {
    debug_assert_eq!(rows.len(), BOARD_SIZE);
    let mut board = Board::new();

    for (row, line) in rows.iter().enumerate() {
        for (col, token) in line.split_whitespace().enumerate() {
            let piece = match token {
                "b" | "B" => Piece::Black,
                "r" | "R" => Piece::Red,
                _ => continue,
            };
            board.place_piece(Position::new(row, col), piece);
        }
    }

    board
}
