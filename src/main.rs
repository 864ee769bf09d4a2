use std::path::PathBuf;

use clap::Parser;
use rotom::interface::{
    handle_inline_query, handle_learnset, handle_navigation, handle_text_query, render_reply,
};
use rotom::{logging, Config, NameLookup, Pokedex};

#[derive(Parser)]
#[command(name = "rotom")]
#[command(about = "Look up Pokédex entries from the command line", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./rotom.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dataset file, overriding the configured one
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Print inline query results as JSON instead of the best match
    #[arg(long, conflicts_with_all = ["navigate", "learnset"])]
    inline: bool,

    /// Open a section by path, e.g. `pokemon/25/base_stats`
    #[arg(long, value_name = "PATH", conflicts_with = "learnset")]
    navigate: Option<String>,

    /// Print the level-up learnset of a pokemon id
    #[arg(long, value_name = "POKEMON_ID")]
    learnset: Option<u32>,

    /// Free-text query
    #[arg(required_unless_present_any = ["navigate", "learnset"])]
    query: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    logging::init(&config.logging);

    let store = Pokedex::load(&config.data_path)?;
    let query = cli.query.join(" ");

    if let Some(path) = cli.navigate {
        println!("{}", render_reply(&handle_navigation(&store, &path)));
    } else if let Some(pokemon_id) = cli.learnset {
        println!("{}", render_reply(&handle_learnset(&store, pokemon_id)));
    } else if cli.inline {
        let results = handle_inline_query(&store, &NameLookup, &query, config.max_query_length);
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        let reply = handle_text_query(&store, &NameLookup, &query, config.max_query_length);
        println!("{}", render_reply(&reply));
    }
    Ok(())
}
