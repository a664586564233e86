use crossterm::{execute, terminal};
use env_logger::{Env, Target};
use std::fs::File;
use std::io::{self, Write};
use std::time::Duration;
use teeko_ai::display::{render_board, DisplayState};
use teeko_ai::game::{Game, GameOutcome};
use teeko_ai::player::ai::AIConfig;
use teeko_ai::player::{PlayerController, RandomAI, TeekoAI, TuiController};
use teeko_ai::selfplay::{run_selfplay, SelfPlayConfig};
use teeko_ai::ui::{read_input_raw, select_option};
use teeko_ai::Piece;

const LOG_PATH: &str = "teeko.log";

fn init_logging() -> anyhow::Result<()> {
    // The terminal belongs to the board display, so logs go to a file.
    let file = File::create(LOG_PATH)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    // ターミナル初期化
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run();

    // ターミナル復帰
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn run() -> anyhow::Result<()> {
    print!("=== Teeko ===\r\n");

    let Some(mode) = select_option(
        "Select mode ([q] to quit):",
        &[
            "Human vs Teeko AI",
            "Human vs Random AI",
            "Teeko AI vs Teeko AI (watch)",
            "Self-play batch",
        ],
    )?
    else {
        return Ok(());
    };

    if mode == 3 {
        return run_batch(AIConfig::get());
    }

    // The AI's colour is drawn at random; Black moves first.
    let ai_piece = if rand::random::<bool>() {
        Piece::Black
    } else {
        Piece::Red
    };
    let human_piece = ai_piece.opponent();

    let (ai, human): (Box<dyn PlayerController>, Box<dyn PlayerController>) = match mode {
        0 => (
            Box::new(TeekoAI::new(ai_piece, "Teeko AI")),
            Box::new(TuiController::new(human_piece, "Human")),
        ),
        1 => (
            Box::new(RandomAI::new(ai_piece, "Random AI")),
            Box::new(TuiController::new(human_piece, "Human")),
        ),
        _ => (
            Box::new(TeekoAI::new(ai_piece, "Teeko AI (1)")),
            Box::new(TeekoAI::new(human_piece, "Teeko AI (2)")),
        ),
    };

    let (black, red) = match ai_piece {
        Piece::Black => (ai, human),
        Piece::Red => (human, ai),
    };

    let mut game = Game::new();
    let max_plies = if mode == 2 {
        game.pace = Some(Duration::from_millis(600));
        Some(200)
    } else {
        None
    };

    let outcome = game.play(black.as_ref(), red.as_ref(), max_plies)?;

    let mut state = DisplayState::new();
    state.last_move = game.history.last().copied();
    state.status_msg = Some(match outcome.winner() {
        Some(p) => {
            let name = if p == Piece::Black { black.name() } else { red.name() };
            let how = if matches!(outcome, GameOutcome::Resigned(_)) {
                " by resignation"
            } else {
                ""
            };
            format!("{} ({}) wins{}! Game over. [any key]", name, p, how)
        }
        None => "No winner within the ply limit. [any key]".to_string(),
    });
    render_board(&game.board, &state)?;
    wait_for_key()?;
    Ok(())
}

fn run_batch(ai_config: &AIConfig) -> anyhow::Result<()> {
    let mut config = SelfPlayConfig::default();
    if let Some(answer) = read_input_raw(&format!("\r\nNumber of games (default {})", config.num_games))? {
        if let Ok(n) = answer.trim().parse() {
            config.num_games = n;
        }
    }
    config.save_records = matches!(
        read_input_raw("Save game records? [y/N]")?.as_deref().map(str::trim),
        Some("y") | Some("Y")
    );

    print!("Running {} games...\r\n", config.num_games);
    io::stdout().flush()?;

    let stats = run_selfplay(&config, ai_config)?;
    print!("\r\n=== Self-Play Results ===\r\n{}", stats.summary());
    print!("[any key]\r\n");
    io::stdout().flush()?;
    wait_for_key()
}

fn wait_for_key() -> anyhow::Result<()> {
    use crossterm::event::{self, Event, KeyEventKind};
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Release {
                return Ok(());
            }
        }
    }
}
