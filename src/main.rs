use clap::Parser;
use lem_in::colony::parse_colony;
use lem_in::prelude::*;
use std::io::{self, BufWriter, Write};

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    log::debug!("{args:?}");

    if let Err(error) = run(&args) {
        log::error!("{error:?}");
        println!("{error}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    // Parse colony and route it
    let (colony, declared) = parse_colony(&args.map)?;
    let ants = args
        .ants
        .or(declared)
        .ok_or(LemInError::MissingAntCount)?;
    let path = find_path(&colony)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.echo {
        writeln!(out, "{}", colony.describe(ants))?;
    }

    // Run simulation
    let mut engine = SimulationEngine::new(&path, ants);
    let summary = engine.run_simulation(&mut out)?;

    // Print results
    if args.summary {
        engine.print_summary(&summary);
    }

    Ok(())
}
