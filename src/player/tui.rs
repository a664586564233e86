use crate::core::{Board, Move, Phase, Piece, Position};
use crate::display::{render_board, DisplayState};
use crate::logic::validate_move;
use crate::player::PlayerController;
use crate::ui::read_input_raw;
use log::warn;

/// Human player typing coordinates such as `B3` (column letter, row digit).
pub struct TuiController {
    piece: Piece,
    name: String,
}

enum Prompt {
    Answer(Position),
    Invalid(String),
    Resign,
}

impl TuiController {
    pub fn new(piece: Piece, name: &str) -> Self {
        Self {
            piece,
            name: name.to_string(),
        }
    }

    fn ask(&self, prompt: &str) -> anyhow::Result<Prompt> {
        let Some(line) = read_input_raw(prompt)? else {
            return Ok(Prompt::Resign);
        };
        Ok(match line.parse::<Position>() {
            Ok(pos) => Prompt::Answer(pos),
            Err(e) => Prompt::Invalid(e.to_string()),
        })
    }

    /// Prompts until a move passes validation. `Ok(None)` when the player quits.
    fn read_move(&self, board: &Board) -> anyhow::Result<Option<Move>> {
        let mut state = DisplayState::new();
        state.status_msg = Some(format!(
            "{}'s turn ({}) | [Esc]: Resign",
            self.name, self.piece
        ));

        loop {
            state.selected = None;
            render_board(board, &state)?;

            let mv = match board.phase() {
                Phase::Drop => match self.ask("Move (e.g. B3)")? {
                    Prompt::Answer(to) => Move::Drop { to },
                    Prompt::Invalid(msg) => {
                        state.error_msg = Some(msg);
                        continue;
                    }
                    Prompt::Resign => return Ok(None),
                },
                Phase::Move => {
                    let from = match self.ask("Move from (e.g. B3)")? {
                        Prompt::Answer(from) => from,
                        Prompt::Invalid(msg) => {
                            state.error_msg = Some(msg);
                            continue;
                        }
                        Prompt::Resign => return Ok(None),
                    };
                    state.selected = Some(from);
                    render_board(board, &state)?;
                    match self.ask("Move to (e.g. B3)")? {
                        Prompt::Answer(to) => Move::Relocate { from, to },
                        Prompt::Invalid(msg) => {
                            state.error_msg = Some(msg);
                            continue;
                        }
                        Prompt::Resign => return Ok(None),
                    }
                }
            };

            match validate_move(board, &mv, self.piece) {
                Ok(()) => return Ok(Some(mv)),
                Err(e) => state.error_msg = Some(e.to_string()),
            }
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, _legal_moves: &[Move]) -> Option<Move> {
        self.read_move(board).unwrap_or_else(|e| {
            warn!("terminal input failed: {:#}", e);
            None
        })
    }
}
