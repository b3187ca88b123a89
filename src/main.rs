use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use std::io::{stdin, stdout, Write};
use std::time::Duration;

use minimax_connect4::*;

mod display;
use display::display;

// pause between moves when nobody at the keyboard is playing
const AI_MOVE_DELAY: Duration = Duration::from_millis(500);

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    HumanVsHuman,
    HumanVsMinimax,
    MinimaxVsMinimax,
    RandomVsRandom,
    MinimaxVsRandom,
}

/// Play Connect 4 against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "connect4", version)]
struct Args {
    /// Who controls each side
    #[arg(long, value_enum, default_value_t = Mode::HumanVsMinimax)]
    mode: Mode,

    #[arg(long, default_value_t = ROWS)]
    rows: usize,

    #[arg(long, default_value_t = COLUMNS)]
    columns: usize,

    /// Run length needed to win
    #[arg(long, default_value_t = IN_A_ROW)]
    in_a_row: usize,

    /// Search depth of the first minimax player
    #[arg(long, default_value_t = 4)]
    depth1: usize,

    /// Search depth of the second minimax player
    #[arg(long, default_value_t = 4)]
    depth2: usize,

    /// Wall-clock budget per minimax move, in milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Which player moves first
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    first: u8,

    /// Seed for the random players
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play, only for games without human players
    #[arg(long, default_value_t = 1)]
    games: usize,
}

impl Args {
    /// The configuration of game number `game`, each game getting its own seeds
    fn config(&self, game: usize) -> GameConfig {
        let time_limit = self.time_limit_ms.map(Duration::from_millis);
        let minimax = |depth| Controller::Minimax { depth, time_limit };
        let random = |offset: u64| Controller::Random {
            seed: self
                .seed
                .map(|seed| seed.wrapping_add(2 * game as u64 + offset)),
        };

        let (player_one, player_two) = match self.mode {
            Mode::HumanVsHuman => (Controller::Human, Controller::Human),
            Mode::HumanVsMinimax => (Controller::Human, minimax(self.depth1)),
            Mode::MinimaxVsMinimax => (minimax(self.depth1), minimax(self.depth2)),
            Mode::RandomVsRandom => (random(0), random(1)),
            Mode::MinimaxVsRandom => (minimax(self.depth1), random(1)),
        };
        let starting_player = if self.first == 2 { Player::Two } else { Player::One };

        GameConfig::new(player_one, player_two)
            .with_dimensions(Dimensions::new(self.rows, self.columns, self.in_a_row))
            .with_starting_player(starting_player)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.config(0);
    config.validate()?;

    if args.games > 1 {
        if !config.is_automatic() {
            return Err(anyhow!("--games needs a mode without human players"));
        }
        return play_batch(&args);
    }

    println!("Welcome to Connect 4\n");
    play_interactive(GameSession::new(config)?)
}

fn play_interactive(mut session: GameSession) -> Result<()> {
    let stdin = stdin();
    let automatic = session.config().is_automatic();

    // game loop
    loop {
        display(session.board())?;

        if let Some(outcome) = session.outcome() {
            match outcome {
                Outcome::Winner(player) => println!("{} wins!", player),
                Outcome::Draw => println!("Draw!"),
            }
            break;
        }

        let player = session.current_player();
        if session.is_human_turn() {
            print!("{} move input > ", player);
            stdout().flush()?;
            let mut input_str = String::new();
            if stdin.read_line(&mut input_str)? == 0 {
                // stdin closed
                break;
            }

            let column = match input_str.trim().parse::<usize>() {
                Ok(column @ 1..=MAX_DIMENSION) => column - 1,
                _ => {
                    println!("Invalid number: {}", input_str.trim());
                    continue;
                }
            };
            if let Err(err) = session.play_column(column) {
                println!("{}", err);
                // try the move again
                continue;
            }
        } else {
            println!("{} is thinking...", player);
            stdout().flush()?;

            // slow down play if both players are AI
            if automatic {
                std::thread::sleep(AI_MOVE_DELAY);
            }

            let played = session.play_ai_turn()?;
            println!("{} played column {}", player, played.column + 1);
        }
    }
    Ok(())
}

fn play_batch(args: &Args) -> Result<()> {
    let progress = ProgressBar::new(args.games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    // games are independent, each search still runs on a single thread
    let outcomes = (0..args.games)
        .into_par_iter()
        .map(|game| {
            let mut session = GameSession::new(args.config(game))?;
            let outcome = session.play_out();
            progress.inc(1);
            outcome
        })
        .collect::<Result<Vec<Outcome>, SessionError>>()?;
    progress.finish();

    let count = |wanted: Outcome| outcomes.iter().filter(|&&outcome| outcome == wanted).count();
    let (one, two, draws) = (
        count(Outcome::Winner(Player::One)),
        count(Outcome::Winner(Player::Two)),
        count(Outcome::Draw),
    );
    info!("Finished {} games", outcomes.len());
    println!(
        "Player 1 wins: {}, Player 2 wins: {}, Draws: {}",
        one, two, draws
    );
    Ok(())
}
