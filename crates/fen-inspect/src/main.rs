//! fen-inspect - print the masks and game state of a FEN position.
//!
//! The board crates never write to the console; this binary is the
//! renderer that sits on top of their accessors.

mod report;

use anyhow::Context;
use chess_board::Position;
use chess_core::FenFields;
use clap::Parser;
use report::{MaskName, Snapshot};

/// Print the occupancy masks and game state of a FEN position.
#[derive(Parser, Debug)]
#[command(name = "fen-inspect")]
#[command(about = "Print the occupancy masks and game state of a FEN position")]
struct Args {
    /// FEN record to load (defaults to the starting position)
    #[arg(env = "FEN_INSPECT_FEN", default_value = FenFields::STARTPOS)]
    fen: String,

    /// Masks to draw as 8x8 grids
    #[arg(long = "mask", value_enum)]
    masks: Vec<MaskName>,

    /// Print a JSON snapshot instead of text
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "FEN_INSPECT_LOG", default_value = "warn")]
    log_level: tracing::Level,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(fen = %args.fen, "loading position");
    let position = Position::from_fen(&args.fen)
        .with_context(|| format!("could not load FEN {:?}", args.fen))?;

    if args.json {
        let snapshot = Snapshot::from(&position);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    print!("{}", report::Summary(&position));
    for mask in &args.masks {
        let bits = mask.select(&position);
        println!();
        println!("{}: {}", mask, report::square_list(bits));
        print!("{}", bits.render());
    }

    Ok(())
}
