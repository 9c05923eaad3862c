//! Plays one game of War between two automated players and prints the
//! transcript.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use warsim::{Game, GameOptions};

/// Simulate a game of War between two players.
#[derive(Parser, Debug)]
#[command(name = "war", version, about, long_about = None)]
struct Cli {
    /// Seed for the shuffle; defaults to a random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Name of the first player
    #[arg(long, default_value = "Player 1")]
    player1: String,

    /// Name of the second player
    #[arg(long, default_value = "Player 2")]
    player2: String,

    /// Only print the final score
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Log engine events to stderr
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let seed = cli.seed.unwrap_or_else(default_seed);
    tracing::debug!(seed, "starting game");

    let options = GameOptions::default().with_player_names(cli.player1, cli.player2);
    let mut game = Game::new(options, seed);

    let result = game.play_game_with(|round| {
        if !cli.quiet {
            println!("{round}\n");
        }
    });

    println!("{result}");
}

/// Draws a fresh seed from the thread-local generator, which is seeded from
/// OS entropy, so separate runs play separate games.
fn default_seed() -> u64 {
    rand::random()
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .init();
}
