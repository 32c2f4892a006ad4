mod config;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};

use config::CliConfig;
use teamdex_core::settings::{load_theme, save_theme, Theme};
use teamdex_core::species::{PokeApiClient, SpeciesCache};
use teamdex_core::storage::FileKvStore;
use teamdex_core::team::{validate_new_team, TeamStore};

#[derive(Parser, Debug)]
#[command(name = "teamdex", about = "Browse, preview, and manage Pokémon team rosters")]
struct Cli {
    /// Path to the config file
    #[arg(long, default_value = "teamdex.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all teams as cards with member sprites
    List {
        /// Case-insensitive team-name filter
        #[arg(long)]
        filter: Option<String>,
    },
    /// Show full details for one team
    Show { id: String },
    /// Add a new team from export text (from --file or stdin)
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        instructions: String,
        /// Read the export code from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Delete a user team by id
    Delete { id: String },
    /// Preview the roster names and sprites of pasted export text
    Preview {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Show or change the display theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

/// Export code comes from a file when given, otherwise from stdin (so the
/// site's paste-a-block flow becomes a pipe).
fn read_code(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read export code from {:?}", path)),
        None => {
            let mut code = String::new();
            std::io::stdin()
                .read_to_string(&mut code)
                .context("Failed to read export code from stdin")?;
            Ok(code)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config {:?}", cli.config))?;
    let _logging_guard =
        logging::init_logging(Path::new(&config.data_dir).join("logs"), &config.log_level);

    tracing::debug!("Using data directory {}", config.data_dir);

    let storage = FileKvStore::new(&config.data_dir);

    match cli.command {
        Command::List { filter } => {
            let store = TeamStore::new(storage);
            let cache = SpeciesCache::new(PokeApiClient::with_base_url(&config.api_base_url)?);
            print!("{}", render::render_team_list(&store, &cache, filter.as_deref()).await);
        }
        Command::Show { id } => {
            let store = TeamStore::new(storage);
            let cache = SpeciesCache::new(PokeApiClient::with_base_url(&config.api_base_url)?);
            print!("{}", render::render_team_details(&store, &cache, &id).await?);
        }
        Command::Add {
            name,
            instructions,
            file,
        } => {
            let code = read_code(file.as_deref())?;
            let code = code.trim();
            validate_new_team(&name, code)?;

            let mut store = TeamStore::new(storage);
            let team = store
                .add(name.trim(), code, instructions.trim())
                .context("Could not save the new team")?;
            println!("Added team '{}' with id {}", team.name, team.id);
        }
        Command::Delete { id } => {
            let mut store = TeamStore::new(storage);
            if store.delete(&id).context("Could not save after deleting")? {
                println!("Deleted team {}", id);
            } else {
                println!("No deletable team with id {}", id);
            }
        }
        Command::Preview { file } => {
            let code = read_code(file.as_deref())?;
            let cache = SpeciesCache::new(PokeApiClient::with_base_url(&config.api_base_url)?);
            print!("{}", render::render_preview(&cache, &code).await);
        }
        Command::Theme { action } => {
            let current = load_theme(&storage);
            match action {
                None => println!("{}", current.as_str()),
                Some(action) => {
                    let next = match action {
                        ThemeAction::Light => Theme::Light,
                        ThemeAction::Dark => Theme::Dark,
                        ThemeAction::Toggle => current.toggled(),
                    };
                    save_theme(&storage, next).context("Could not save theme preference")?;
                    println!("{}", next.as_str());
                }
            }
        }
    }

    Ok(())
}
