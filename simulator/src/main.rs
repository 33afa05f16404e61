mod autopilot;
mod config;

use clap::Parser;
use snake_engine::games::SessionRng;
use snake_engine::games::snake::{DeathReason, GameState, GameStatus};
use snake_engine::{log, logger};

use autopilot::Autopilot;
use config::{DEFAULT_CONFIG_FILE, get_config_manager};

const AUTOPILOT_SEED_SALT: u64 = 0x5eed_a070;

#[derive(Parser)]
#[command(name = "snake_sim", about = "Plays headless snake games with an autopilot")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Seed for food placement and the autopilot; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    games: Option<u32>,

    #[arg(long)]
    max_ticks: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

struct GameResult {
    score: usize,
    ticks: u64,
    death_reason: Option<DeathReason>,
}

fn play_game(state: &mut GameState, autopilot: &mut Autopilot, max_ticks: u64) -> GameResult {
    while state.status() == GameStatus::Playing && state.tick_count() < max_ticks {
        let direction = autopilot.choose(state);
        state.tick(direction);
    }
    GameResult {
        score: state.score(),
        ticks: state.tick_count(),
        death_reason: state.snake().death_reason(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Simulator".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(&args.config).get_or_create_config()?;
    let games = args.games.unwrap_or(config.games);
    let max_ticks = args.max_ticks.unwrap_or(config.max_ticks_per_game);

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let seed = rng.seed();
    let mut state = GameState::with_settings(config.game.clone(), rng)?;
    let mut autopilot =
        Autopilot::new(config.autopilot, SessionRng::new(seed ^ AUTOPILOT_SEED_SALT));

    log!(
        "Simulating {} game(s) on a {}x{} board with {:?} autopilot, seed {}",
        games,
        config.game.board_width,
        config.game.board_height,
        config.autopilot,
        seed
    );

    let mut results = Vec::with_capacity(games as usize);
    for game in 1..=games {
        if game > 1 {
            match state.status() {
                GameStatus::GameOver => state.try_restart()?,
                GameStatus::Playing => state.restart(),
            }
        }

        let result = play_game(&mut state, &mut autopilot, max_ticks);
        match result.death_reason {
            Some(reason) => log!(
                "Game {}: score {} after {} ticks ({:?})",
                game,
                result.score,
                result.ticks,
                reason
            ),
            None => log!(
                "Game {}: score {}, still alive at the {} tick limit",
                game,
                result.score,
                max_ticks
            ),
        }
        results.push(result);
    }

    let best = results.iter().map(|r| r.score).max().unwrap_or(0);
    let total: usize = results.iter().map(|r| r.score).sum();
    log!(
        "Best score {}, average {:.1} over {} game(s)",
        best,
        total as f64 / results.len().max(1) as f64,
        results.len()
    );

    Ok(())
}
