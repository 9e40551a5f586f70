//! Terminal A* pathfinding demo.
//!
//! Run: cargo run --bin gridpath-demo -- --help

mod app;
mod config;
mod term;

use std::error::Error;
use std::fs::File;

use clap::Parser;
use env_logger::{Env, Target};

use app::{Demo, Flow};
use config::Args;
use term::Terminal;

/// Route log records to `--log-file`; the terminal is in raw mode.
fn init_logging(args: &Args) -> Result<(), Box<dyn Error>> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    init_logging(&args)?;
    let (cfg, generator) = args.generator()?;
    let mut demo = Demo::new(cfg, generator)?;
    log::info!("initial grid:\n{}", demo.grid());

    let mut term = Terminal::init()?;
    loop {
        term.draw(&demo)?;
        let Some(action) = term.next_action()? else {
            continue;
        };
        if demo.update(action)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
