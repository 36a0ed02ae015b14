use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::debug;
use serde::Serialize;

use pilemerge::{
    GameConfig, GameEngine, MoveOutcome, RandomTiles, Rules, ScriptedTiles, Snapshot, Tile,
    TileSource,
};

#[derive(Debug, Parser)]
#[command(
    name = "play",
    about = "Play pile-merge solitaire from stdin: one pile index per line ('legal' lists moves, 'q' quits)"
)]
struct Args {
    /// TOML game config (seed and [rules] table)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed; overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Number of merge stacks
    #[arg(long)]
    stacks: Option<usize>,

    /// Tiles per stack
    #[arg(long)]
    capacity: Option<usize>,

    /// Discard pile size
    #[arg(long)]
    discards: Option<u32>,

    /// Visible upcoming tiles
    #[arg(long)]
    lookahead: Option<usize>,

    /// Magnitude that clears a stack
    #[arg(long)]
    terminal: Option<u32>,

    /// Fixed draw sequence instead of random tiles, e.g. "2,2,4,8" (repeats)
    #[arg(long, value_delimiter = ',')]
    tiles: Vec<u32>,

    /// Emit one JSON object per input line instead of the text board
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Report<'a> {
    Moved {
        outcome: MoveOutcome,
        state: &'a Snapshot,
    },
    Rejected {
        pile: usize,
        error: String,
    },
    Legal {
        legal: Vec<usize>,
    },
}

fn resolve_rules(args: &Args, base: Rules) -> Rules {
    Rules {
        stacks: args.stacks.unwrap_or(base.stacks),
        stack_capacity: args.capacity.unwrap_or(base.stack_capacity),
        max_discards: args.discards.unwrap_or(base.max_discards),
        lookahead: args.lookahead.unwrap_or(base.lookahead),
        terminal: args.terminal.unwrap_or(base.terminal),
    }
}

fn tile_source(args: &Args, seed: u64) -> Result<Box<dyn TileSource>, String> {
    if args.tiles.is_empty() {
        return Ok(Box::new(RandomTiles::seeded(seed)));
    }
    let tiles = args
        .tiles
        .iter()
        .map(|&m| {
            Tile::try_new(m).ok_or_else(|| format!("--tiles: {m} is not a power of two >= 2"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Box::new(ScriptedTiles::new(tiles)))
}

fn print_board(out: &mut impl Write, engine: &GameEngine<Box<dyn TileSource>>) -> io::Result<()> {
    let snap = engine.snapshot();
    let next: Vec<String> = snap.upcoming.iter().map(ToString::to_string).collect();
    writeln!(
        out,
        "Score: {}  Discards: {}/{}  Next: {}",
        snap.score,
        snap.discards,
        snap.max_discards,
        next.join(" ")
    )?;
    for (i, stack) in snap.stacks.iter().enumerate() {
        if stack.is_empty() {
            writeln!(out, "[{i}] .")?;
        } else {
            let tiles: Vec<String> = stack.iter().map(ToString::to_string).collect();
            writeln!(out, "[{i}] {}", tiles.join(" "))?;
        }
    }
    writeln!(out, "[{}] discard", engine.discard_index())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => GameConfig::from_toml(path)?,
        None => GameConfig::default(),
    };
    let rules = resolve_rules(&args, cfg.rules);
    let seed = args.seed.or(cfg.seed).unwrap_or(0x00C0_FFEE);
    debug!("rules {rules:?}, seed {seed}");

    let mut engine = GameEngine::new(rules, tile_source(&args, seed)?)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !args.json {
        print_board(&mut out, &engine)?;
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let cmd = line.trim();
        if cmd.is_empty() {
            continue;
        }
        if cmd.eq_ignore_ascii_case("q") || cmd.eq_ignore_ascii_case("quit") {
            break;
        }
        if cmd.eq_ignore_ascii_case("legal") {
            let legal = engine.legal_moves();
            if args.json {
                writeln!(out, "{}", serde_json::to_string(&Report::Legal { legal })?)?;
            } else {
                let idx: Vec<String> = legal.iter().map(ToString::to_string).collect();
                writeln!(out, "Legal: {}", idx.join(" "))?;
            }
            continue;
        }
        let pile: usize = match cmd.parse() {
            Ok(p) => p,
            Err(_) => {
                eprintln!("not a pile index: '{cmd}'");
                continue;
            }
        };

        match engine.apply_move(pile) {
            Ok(outcome) => {
                if args.json {
                    let state = engine.snapshot();
                    let report = Report::Moved { outcome, state: &state };
                    writeln!(out, "{}", serde_json::to_string(&report)?)?;
                } else {
                    if outcome.cleared {
                        writeln!(out, "Stack {pile} cleared!")?;
                    }
                    print_board(&mut out, &engine)?;
                }
            }
            Err(e) => {
                if args.json {
                    let report = Report::Rejected {
                        pile,
                        error: e.to_string(),
                    };
                    writeln!(out, "{}", serde_json::to_string(&report)?)?;
                } else {
                    eprintln!("rejected: {e}");
                }
            }
        }

        if engine.is_game_over() {
            break;
        }
    }

    if !args.json {
        if engine.is_game_over() {
            writeln!(out, "Game over. Final score: {}", engine.score())?;
        } else {
            writeln!(out, "Final score: {}", engine.score())?;
        }
    }
    out.flush()?;
    Ok(())
}
