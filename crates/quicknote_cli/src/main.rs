//! Command-line front-end for QuickNote.
//!
//! # Responsibility
//! - Drive `ItemsScreen` from terminal commands against the SQLite store.
//! - Print the held list after each command.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use quicknote_core::config::{DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
use quicknote_core::db::open_db;
use quicknote_core::{
    init_logging, CoreConfig, ItemsScreen, KvItemRepository, ScreenOutcome, SqliteKvStore,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "quicknote", version, about = "Save and list short notes")]
struct Cli {
    /// SQLite database file holding the item list.
    #[arg(long, global = true, env = DB_PATH_ENV)]
    db: Option<PathBuf>,

    /// Directory for rolling log files; logging is off when unset.
    #[arg(long, global = true, env = LOG_DIR_ENV)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = LOG_LEVEL_ENV)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print all saved items.
    List {
        /// Print the stored JSON array instead of text rows.
        #[arg(long)]
        json: bool,
    },
    /// Save a new item and print the updated list.
    Add { title: String, description: String },
    /// Print core ping and version.
    Ping,
}

impl Cli {
    /// Layers command-line flags over environment defaults.
    fn resolve_config(&self) -> CoreConfig {
        let mut config = CoreConfig::from_env();
        if let Some(db) = &self.db {
            config.db_path = db.clone();
        }
        if let Some(log_dir) = &self.log_dir {
            config.log_dir = Some(log_dir.clone());
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config();

    if let Some(log_dir) = &config.log_dir {
        let log_dir = log_dir
            .to_str()
            .context("log directory must be valid UTF-8")?;
        init_logging(&config.log_level, log_dir)?;
    }

    match cli.command {
        Command::Ping => {
            println!("quicknote_core ping={}", quicknote_core::ping());
            println!("quicknote_core version={}", quicknote_core::core_version());
            Ok(())
        }
        Command::List { json } => with_screen(&config, |screen| {
            if screen.mount() == ScreenOutcome::Failed {
                bail!("failed to load items from {}", config.db_path.display());
            }
            if json {
                println!("{}", serde_json::to_string_pretty(screen.items())?);
            } else {
                print_rows(screen);
            }
            Ok(())
        }),
        Command::Add { title, description } => with_screen(&config, |screen| {
            screen.mount();
            screen.set_title(title);
            screen.set_description(description);
            if screen.press_save() == ScreenOutcome::Failed {
                bail!("failed to save item to {}", config.db_path.display());
            }
            print_rows(screen);
            Ok(())
        }),
    }
}

type CliScreen<'conn> = ItemsScreen<KvItemRepository<SqliteKvStore<'conn>>>;

fn with_screen(
    config: &CoreConfig,
    f: impl FnOnce(&mut CliScreen<'_>) -> Result<()>,
) -> Result<()> {
    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open {}", config.db_path.display()))?;
    let store = SqliteKvStore::try_new(&conn)?;
    let mut screen = ItemsScreen::new(KvItemRepository::new(store));
    f(&mut screen)
}

fn print_rows(screen: &CliScreen<'_>) {
    let rows = screen.rows();
    if rows.is_empty() {
        println!("(no items)");
        return;
    }
    for (index, row) in rows.iter().enumerate() {
        println!("{:>3}. {}  {}", index + 1, row.title, row.id);
        if !row.description.is_empty() {
            println!("     {}", row.description);
        }
    }
}
