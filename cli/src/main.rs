use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use sweeper_core::{CellCount, Coord, GameConfig, RandomPlacer, Session};

use command::Command;

mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width in cells
    #[arg(long, default_value_t = 16)]
    width: Coord,

    /// Board height in cells
    #[arg(long, default_value_t = 16)]
    height: Coord,

    /// Number of mines
    #[arg(short, long, default_value_t = 40)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the final game state as JSON on exit
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    TermLogger::init(
        args.verbose.log_level_filter(),
        log_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Error initializing logger")?;

    let config = GameConfig::new((args.width, args.height), args.mines)
        .context("Invalid board configuration")?;
    let placer = args
        .seed
        .map(RandomPlacer::new)
        .unwrap_or_else(RandomPlacer::from_entropy);
    log::debug!("seed: {}", placer.seed());

    let mut session = Session::with_placer(config, placer);
    let mut out = io::stdout().lock();
    write!(out, "{}", render::board(session.state()))?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read command")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Act(action)) => {
                if !session.dispatch(action)?.has_update() {
                    continue;
                }
            }
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        }

        write!(out, "{}", render::board(session.state()))?;
    }

    if args.json {
        serde_json::to_writer_pretty(&mut out, session.state())?;
        writeln!(out)?;
    }

    Ok(())
}
