use std::time::Duration;

use board_trio::ai::Bot;
use board_trio::board::{Board, Outcome, Player};
use board_trio::games::gomoku::ai::{GomokuBot, GOMOKU_TIME_BUDGET};
use board_trio::games::gomoku::GomokuBoard;
use board_trio::games::othello::ai::{OthelloBot, OTHELLO_DEPTH};
use board_trio::games::othello::OthelloBoard;
use board_trio::games::xiangqi::ai::XiangqiBot;
use board_trio::games::xiangqi::XiangqiBoard;
use board_trio::stats::{GameKey, MemoryStatsStore, StatsStore};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Game {
    Othello,
    Gomoku,
    Xiangqi,
}

/// Let the AI play against itself and print the games.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(value_enum)]
    game: Game,

    /// Seed for the random tie-breaking and fallbacks.
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Number of games to play.
    #[arg(short = 'n', long, default_value_t = 1)]
    games: u32,

    /// Othello search depth below each candidate move.
    #[arg(long, default_value_t = OTHELLO_DEPTH)]
    depth: u32,

    /// Gomoku scoring budget per move in milliseconds.
    #[arg(long, default_value_t = GOMOKU_TIME_BUDGET.as_millis() as u64)]
    budget_ms: u64,

    /// Xiangqi games are stopped as a draw after this many moves.
    #[arg(long, default_value_t = 300)]
    max_moves: u32,

    /// Only print the final positions.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut stats = MemoryStatsStore::new();

    for game in 0..args.games {
        let seed = args.seed.wrapping_add(2 * game as u64);
        let rng_a = SmallRng::seed_from_u64(seed);
        let rng_b = SmallRng::seed_from_u64(seed + 1);

        let (key, outcome) = match args.game {
            Game::Othello => {
                let mut bots = [OthelloBot::new(args.depth, rng_a), OthelloBot::new(args.depth, rng_b)];
                (GameKey::Othello, play_game(OthelloBoard::default(), &mut bots, u32::MAX, args.quiet))
            }
            Game::Gomoku => {
                let budget = Duration::from_millis(args.budget_ms);
                let mut bots = [GomokuBot::new(budget, rng_a), GomokuBot::new(budget, rng_b)];
                (GameKey::Gomoku, play_game(GomokuBoard::default(), &mut bots, u32::MAX, args.quiet))
            }
            Game::Xiangqi => {
                let mut bots = [XiangqiBot::new(rng_a), XiangqiBot::new(rng_b)];
                (GameKey::Xiangqi, play_game(XiangqiBoard::default(), &mut bots, args.max_moves, args.quiet))
            }
        };

        let total = stats.record(key, outcome, Player::A);
        println!("{} game {}: {:?}, first player {}", key.name(), game, outcome, total);
    }
}

/// Play a full game with `bots[0]` moving first, returning the outcome.
/// Reaching `max_moves` counts as a draw.
fn play_game<B: Board>(mut board: B, bots: &mut [impl Bot<B>; 2], max_moves: u32, quiet: bool) -> Outcome {
    let mut moves = 0;

    loop {
        if !quiet {
            println!("{}", board);
        }
        if let Some(outcome) = board.outcome() {
            if quiet {
                println!("{}", board);
            }
            return outcome;
        }
        if moves >= max_moves {
            tracing::info!("stopping after {} moves", moves);
            return Outcome::Draw;
        }

        let bot = &mut bots[board.next_player().index() as usize];
        let mv = bot.select_move(&board).expect("the board is not done");
        if !quiet {
            println!("{:?} plays {}", board.next_player(), mv);
        }
        if let Err(e) = board.play(mv) {
            panic!("bot {:?} played unavailable move {}: {}", bot, mv, e);
        }
        moves += 1;
    }
}
