use crate::core::{Board, Move, Piece, Position, BOARD_SIZE};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::{stdout, Write};

#[derive(Default)]
pub struct DisplayState {
    pub status_msg: Option<String>,
    pub error_msg: Option<String>,
    pub last_move: Option<Move>,
    /// Cell picked as the source of a relocation, shown while choosing the target.
    pub selected: Option<Position>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

fn is_last_move(state: &DisplayState, pos: Position) -> bool {
    match state.last_move {
        Some(Move::Drop { to }) => to == pos,
        Some(Move::Relocate { from, to }) => from == pos || to == pos,
        None => false,
    }
}

/// Clears the screen and draws the board: rows 0-4 down the side, columns
/// A-E underneath, black pieces cyan, red pieces magenta.
pub fn render_board(board: &Board, state: &DisplayState) -> std::io::Result<()> {
    let mut out = stdout();

    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    write!(out, "=== Teeko ===\r\n")?;
    match &state.status_msg {
        Some(msg) => write!(out, "{}\r\n", msg.clone().bold().yellow())?,
        None => write!(out, "\r\n")?,
    }
    write!(out, "\r\n")?;

    for row in 0..BOARD_SIZE {
        write!(out, "{}:", row)?;
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let piece = board.get_piece(pos);
            let ch = piece.map(Piece::display_char).unwrap_or('.');
            let cell = format!(" {}", ch);

            if state.selected == Some(pos) {
                write!(out, "{}", cell.blue())?;
            } else if is_last_move(state, pos) {
                write!(out, "{}", cell.red().bold())?;
            } else {
                match piece {
                    Some(Piece::Black) => write!(out, "{}", cell.cyan())?,
                    Some(Piece::Red) => write!(out, "{}", cell.magenta())?,
                    None => write!(out, "{}", cell)?,
                }
            }
        }
        write!(out, "\r\n")?;
    }
    write!(out, "   A B C D E\r\n\r\n")?;

    if let Some(err) = &state.error_msg {
        write!(out, "{}\r\n", err.clone().red())?;
    }
    out.flush()
}
