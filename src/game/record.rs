use super::Game;
use crate::core::{Board, Move, Piece};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// 棋譜: everything needed to replay a finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub black_name: String,
    pub red_name: String,
    pub moves: Vec<Move>,
    pub winner: Option<Piece>,
}

impl GameRecord {
    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let record = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(record)
    }

    /// Board after each move, starting from the empty board. Every move is
    /// validated, so a tampered record fails here.
    pub fn boards(&self) -> anyhow::Result<Vec<Board>> {
        let mut game = Game::new();
        let mut boards = vec![game.board];
        for (ply, mv) in self.moves.iter().enumerate() {
            game.apply(*mv)
                .with_context(|| format!("ply {}: {}", ply + 1, mv))?;
            boards.push(game.board);
        }
        Ok(boards)
    }

    pub fn final_board(&self) -> anyhow::Result<Board> {
        let boards = self.boards()?;
        Ok(*boards.last().unwrap_or(&Board::new()))
    }
}
