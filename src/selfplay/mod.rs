use crate::core::Piece;
use crate::game::{Game, GameOutcome};
use crate::logic::legal_moves;
use crate::player::ai::{AIConfig, TeekoAI};
use anyhow::Context;
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

pub const RECORD_DIR: &str = "selfplay_records";

#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub num_games: usize,
    /// Random plies played before the agents take over, so games differ.
    pub opening_plies: usize,
    pub seed: u64,
    pub max_plies: usize,
    pub save_records: bool,
    pub parallel: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            opening_plies: 2,
            seed: 0,
            max_plies: 200,
            save_records: false,
            parallel: true,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<Piece>,
    pub plies: usize,
    pub time_ms: u128,
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub black_wins: usize,
    pub red_wins: usize,
    pub draws: usize,
    pub avg_plies: f64,
    pub avg_time_ms: f64,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(Piece::Black) => self.black_wins += 1,
            Some(Piece::Red) => self.red_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_plies: usize = self.games.iter().map(|g| g.plies).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_plies = total_plies as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }

    pub fn summary(&self) -> String {
        let pct = |n: usize| {
            if self.total_games == 0 {
                0.0
            } else {
                n as f64 / self.total_games as f64 * 100.0
            }
        };
        format!(
            "Games: {}\r\nBlack wins: {} ({:.1}%)\r\nRed wins: {} ({:.1}%)\r\nDraws: {} ({:.1}%)\r\nAvg plies: {:.1}\r\nAvg time: {:.1}ms\r\n",
            self.total_games,
            self.black_wins,
            pct(self.black_wins),
            self.red_wins,
            pct(self.red_wins),
            self.draws,
            pct(self.draws),
            self.avg_plies,
            self.avg_time_ms
        )
    }
}

/// Plays `config.num_games` agent-vs-agent games. Results keep game order
/// whether or not they ran in parallel.
pub fn run_selfplay(config: &SelfPlayConfig, ai_config: &AIConfig) -> anyhow::Result<SelfPlayStats> {
    let run = |game_num: usize| play_one(config, ai_config, game_num);

    let results: Vec<anyhow::Result<GameResult>> = if config.parallel {
        (1..=config.num_games).into_par_iter().map(run).collect()
    } else {
        (1..=config.num_games).map(run).collect()
    };

    let mut stats = SelfPlayStats::new();
    for result in results {
        stats.add_result(result?);
    }
    Ok(stats)
}

fn play_one(config: &SelfPlayConfig, ai_config: &AIConfig, game_num: usize) -> anyhow::Result<GameResult> {
    let start_time = Instant::now();
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(game_num as u64));
    let mut game = Game::new();

    for _ in 0..config.opening_plies {
        let moves = legal_moves(&game.board, game.current);
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        game.apply(mv)?;
    }

    let black = TeekoAI::with_config(Piece::Black, "AI-Black", ai_config);
    let red = TeekoAI::with_config(Piece::Red, "AI-Red", ai_config);
    let outcome = game
        .play_silent(&black, &red, config.max_plies)
        .with_context(|| format!("self-play game {}", game_num))?;

    let elapsed = start_time.elapsed();
    info!(
        "game {}/{}: {:?} in {} plies ({:.1}s)",
        game_num,
        config.num_games,
        outcome,
        game.plies(),
        elapsed.as_secs_f64()
    );

    if config.save_records {
        save_record(&game, outcome, game_num, Path::new(RECORD_DIR))?;
    }

    Ok(GameResult {
        winner: outcome.winner(),
        plies: game.plies(),
        time_ms: elapsed.as_millis(),
    })
}

fn save_record(game: &Game, outcome: GameOutcome, game_num: usize, dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)?;

    let filename = dir.join(format!(
        "game_{:04}_{}.json",
        game_num,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));

    game.record("AI-Black", "AI-Red", outcome).save(filename)
}
