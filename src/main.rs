//! Kalah terminal front end
//!
//! `mancala play` pits a human against the engine on stdin/stdout,
//! `mancala duel` lets two engines play each other.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mancala::{
    EngineConfig, HeuristicKind, MancalaError, Match, MatchConfig, Outcome, PitId, Side,
    TurnPolicy, TurnReport,
};

/// Kalah (6 pits, 4 seeds) against a minimax engine
#[derive(Parser, Debug)]
#[command(name = "mancala")]
#[command(about = "Play Kalah against an alpha-beta engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Human against the computer
    Play {
        /// Side played by the human, who moves first
        #[arg(long, default_value = "b")]
        human: Side,

        #[command(flatten)]
        engine: EngineArgs,

        /// TOML match config; flags override it
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Computer against computer
    Duel {
        #[arg(long)]
        depth_a: Option<u8>,
        #[arg(long)]
        depth_b: Option<u8>,
        #[arg(long)]
        heuristic_a: Option<HeuristicKind>,
        #[arg(long)]
        heuristic_b: Option<HeuristicKind>,
        #[arg(long)]
        policy_a: Option<TurnPolicy>,
        #[arg(long)]
        policy_b: Option<TurnPolicy>,

        /// TOML match config; flags override it
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Overrides for a single engine
#[derive(Args, Debug)]
struct EngineArgs {
    /// Plies searched per move
    #[arg(long)]
    depth: Option<u8>,

    /// store-difference or positional
    #[arg(long)]
    heuristic: Option<HeuristicKind>,

    /// honor-bonus-turn or always-alternate
    #[arg(long)]
    policy: Option<TurnPolicy>,
}

fn override_engine(
    base: Option<EngineConfig>,
    depth: Option<u8>,
    heuristic: Option<HeuristicKind>,
    policy: Option<TurnPolicy>,
) -> EngineConfig {
    let mut engine = base.unwrap_or_default();
    if let Some(depth) = depth {
        engine.depth = depth;
    }
    if let Some(heuristic) = heuristic {
        engine.heuristic = heuristic;
    }
    if let Some(policy) = policy {
        engine.turn_policy = policy;
    }
    engine
}

fn load_config(path: Option<&PathBuf>) -> Result<MatchConfig> {
    match path {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(MatchConfig::default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            human,
            engine,
            config,
        } => {
            let file = load_config(config.as_ref())?;
            let computer = human.opponent();
            let engine = override_engine(
                file.get(computer).copied(),
                engine.depth,
                engine.heuristic,
                engine.policy,
            );
            run_play(human, MatchConfig::human_vs_computer(human, engine))
        }
        Command::Duel {
            depth_a,
            depth_b,
            heuristic_a,
            heuristic_b,
            policy_a,
            policy_b,
            config,
        } => {
            let file = load_config(config.as_ref())?;
            let a = override_engine(file.side_a, depth_a, heuristic_a, policy_a);
            let b = override_engine(file.side_b, depth_b, heuristic_b, policy_b);
            let mut config = MatchConfig::computer_vs_computer(a, b);
            config.first = file.first;
            run_duel(config)
        }
    }
}

fn run_play(human: Side, config: MatchConfig) -> Result<()> {
    info!(%human, ?config, "starting game");
    let mut game = Match::new(&config);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("You play side {human} (row {}).", row_label(human));

    while !game.is_over() {
        println!("\n{}\n", game.board());

        if game.is_computer_turn() {
            let report = game.play_computer()?;
            print_report("Computer", &report);
            continue;
        }

        let moves = game.legal_moves();
        print!("Your moves {}: ", format_moves(&moves));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.context("reading move")?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        let Ok(pit) = input.parse::<PitId>() else {
            println!("'{input}' is not a pit (A-L).");
            continue;
        };
        match game.play_human(pit) {
            Ok(report) => print_report("You", &report),
            Err(err @ MancalaError::InvalidMove { .. }) => println!("{err}"),
            Err(err) => return Err(err.into()),
        }
    }

    print_result(&game);
    Ok(())
}

fn run_duel(config: MatchConfig) -> Result<()> {
    info!(?config, "starting duel");
    let mut game = Match::new(&config);

    println!("{}\n", game.board());
    while !game.is_over() {
        let report = game.play_computer()?;
        print_report(&format!("Engine {}", report.side), &report);
    }
    println!("\n{}\n", game.board());
    print_result(&game);
    Ok(())
}

fn row_label(side: Side) -> String {
    let pits = side.pits();
    format!("{}-{}", pits[0], pits[pits.len() - 1])
}

fn format_moves(moves: &[PitId]) -> String {
    let names: Vec<String> = moves.iter().map(ToString::to_string).collect();
    format!("[{}]", names.join(" "))
}

fn print_report(who: &str, report: &TurnReport) {
    let mut line = format!("{who} plays {}", report.pit);
    if report.captured > 0 {
        line.push_str(&format!(", captures {}", report.captured));
    }
    if report.bonus_turn && report.next.is_some() {
        line.push_str(", plays again");
    }
    println!("{line}");
}

fn print_result(game: &Match) {
    let Some(score) = game.outcome() else {
        return;
    };
    println!(
        "Final score: A {} - B {}",
        score.of(Side::A),
        score.of(Side::B)
    );
    match score.outcome {
        Outcome::Winner(side) => println!("Winner: side {side}"),
        Outcome::Draw => println!("Draw"),
    }
}
