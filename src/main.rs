//! Pokedex CLI - Browse the PokeAPI catalog from an interactive prompt
//!
//! Pages through location areas and pokemon, explores areas, and inspects
//! pokemon, caching raw responses in memory so repeated lookups stay local.

use std::io;
use std::process;

use clap::Parser;
use tokio::io::BufReader;

use pokedex::cache::{Cache, Reaper};
use pokedex::cli::{Cli, StartupConfig};
use pokedex::data::Client;
use pokedex::logging::init_logging;
use pokedex::repl::Session;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    init_logging(config.log_level);

    let cache = Cache::new();
    let reaper = Reaper::spawn(cache.clone(), config.cache_interval);
    let client = Client::new(config.client, cache)?;

    let mut session = Session::new(client);
    let result = session
        .run(BufReader::new(tokio::io::stdin()), &mut io::stdout())
        .await;

    reaper.shutdown().await;
    result?;

    Ok(())
}
