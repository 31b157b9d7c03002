use battleship_melee::{init_logging, Game, GameType, LeaderboardEntry};
use clap::{Parser, ValueEnum};
use log::info;
use serde_json::json;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Variant {
    Classic,
    BigBangTheory,
}

impl From<Variant> for GameType {
    fn from(v: Variant) -> Self {
        match v {
            Variant::Classic => GameType::Classic,
            Variant::BigBangTheory => GameType::BigBangTheory,
        }
    }
}

/// Play computer-vs-computer matches and print each leaderboard as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, value_enum, default_value_t = Variant::Classic)]
    game_type: Variant,
    #[arg(long, default_value_t = 1)]
    games: u32,
    /// Give up on a game after this many rounds.
    #[arg(long, default_value_t = 100)]
    rounds: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let game_type = GameType::from(cli.game_type);

    for n in 0..cli.games {
        let mut game = match cli.seed {
            Some(s) => Game::with_seed(game_type, s.wrapping_add(u64::from(n))),
            None => Game::new(game_type),
        };
        game.add_player("Computer 1", true);
        game.add_player("Computer 2", true);

        let mut rounds = 0;
        while !game.is_over() && rounds < cli.rounds {
            game.other_players_fire();
            rounds += 1;
        }
        info!("game {} finished after {} rounds", game.id(), rounds);

        let leaderboard: Vec<LeaderboardEntry> =
            game.leader_board().iter().map(LeaderboardEntry::from).collect();
        let result = json!({
            "gameId": game.id(),
            "gameType": game.game_type(),
            "rounds": rounds,
            "leaderboard": leaderboard,
        });
        println!("{}", serde_json::to_string(&result)?);
    }
    Ok(())
}
