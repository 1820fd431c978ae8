// ABOUTME: Savora CLI - recipe search, browsing, and favorites from the terminal
// ABOUTME: One-shot subcommands plus an interactive shell driving the action loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project
//!
//! Usage:
//! ```bash
//! # Search once and print the results
//! savora search "chicken"
//!
//! # Show the unfiltered random listing
//! savora popular
//!
//! # Filtered listing by cuisine/origin
//! savora cuisine Italian
//!
//! # Full detail for one recipe
//! savora show 52771
//!
//! # Manage favorites
//! savora favorites list
//! savora favorites toggle 52771
//!
//! # Interactive shell (also the default with no subcommand)
//! savora shell
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use savora::actions::{Action, FetchOutcome};
use savora::app::App;
use savora::config::Config;
use savora::favorites::FavoritesStore;
use savora::{logging, render};
use savora_core::models::{SortKey, ViewKind};
use savora_mealdb::{MealDbConfig, MealDbProvider};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[derive(Parser)]
#[command(
    name = "savora",
    about = "Recipe discovery from the terminal",
    long_about = "Search a public recipe API, browse and filter results, and keep a locally persisted favorites list."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Recipe API base URL override
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    /// Favorites file override
    #[arg(long, global = true)]
    favorites_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Search recipes by name and print the results
    Search {
        /// Search text
        query: String,

        /// Sort order: relevance, time, calories, rating
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show the unfiltered random listing
    Popular,

    /// Filtered listing by cuisine/origin
    Cuisine {
        /// Cuisine name, e.g. "Italian"
        name: String,
    },

    /// Show full detail for one recipe
    Show {
        /// Recipe identifier
        id: String,
    },

    /// Favorites management
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommand,
    },

    /// Interactive shell (default)
    Shell,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FavoritesCommand {
    /// List persisted favorites
    List,

    /// Add or remove a favorite by recipe id
    Toggle {
        /// Recipe identifier
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(base) = cli.api_base_url {
        config.api_base_url = base;
    }
    if let Some(path) = cli.favorites_path {
        config.favorites_path = Some(path);
    }

    logging::init(&config.log_level, cli.verbose)?;

    let provider = MealDbProvider::new(MealDbConfig {
        base_url: config.api_base_url.clone(),
        timeout_secs: config.http_timeout_secs,
        connect_timeout_secs: config.http_connect_timeout_secs,
    })
    .context("building the recipe API client")?;
    let store = match &config.favorites_path {
        Some(path) => FavoritesStore::new(path.clone()),
        None => FavoritesStore::at_default_path().context("no favorites location available")?,
    };
    let mut app = App::new(provider, store);

    match cli.command.unwrap_or(Command::Shell) {
        Command::Search { query, sort } => {
            app.handle(Action::SubmitSearch(query)).await?;
            if let Some(sort) = sort {
                let key = SortKey::parse(&sort)
                    .with_context(|| format!("unknown sort key {sort:?}"))?;
                app.handle(Action::SetSort(key)).await?;
            }
            print_view(&app);
        }
        Command::Popular => {
            app.start().await?;
            print_view(&app);
        }
        Command::Cuisine { name } => {
            app.handle(Action::ToggleCuisine(name)).await?;
            print_view(&app);
        }
        Command::Show { id } => {
            show_recipe(&mut app, &id).await?;
        }
        Command::Favorites { action } => match action {
            FavoritesCommand::List => {
                app.handle(Action::SwitchView(ViewKind::Favorites)).await?;
                print_view(&app);
            }
            FavoritesCommand::Toggle { id } => {
                toggle_favorite(&mut app, &id).await?;
                app.handle(Action::SwitchView(ViewKind::Favorites)).await?;
                print_view(&app);
            }
        },
        Command::Shell => shell(&mut app).await?,
    }

    Ok(())
}

fn print_view(app: &App<MealDbProvider>) {
    print!("{}", render::render(&app.view()));
}

/// Hydrate the detail overlay for an id that may not be in the current
/// results, then print it.
async fn show_recipe(app: &mut App<MealDbProvider>, id: &str) -> Result<()> {
    if app.state().is_favorite(id) {
        app.handle(Action::OpenDetail(id.to_owned())).await?;
    } else {
        let recipe = app
            .lookup(id)
            .await?
            .with_context(|| format!("no recipe with id {id}"))?;
        // Favoriting then un-favoriting would disturb the store; instead the
        // overlay opens from a one-off snapshot carried on the action.
        app.handle(Action::FetchCompleted {
            generation: app.state().generation,
            outcome: FetchOutcome::Loaded(vec![recipe]),
        })
        .await?;
        app.handle(Action::OpenDetail(id.to_owned())).await?;
    }
    print_view(app);
    Ok(())
}

/// Toggle a favorite, fetching a snapshot when the id is not already saved.
async fn toggle_favorite(app: &mut App<MealDbProvider>, id: &str) -> Result<()> {
    let snapshot = if app.state().is_favorite(id) {
        None
    } else {
        let recipe = app
            .lookup(id)
            .await?
            .with_context(|| format!("no recipe with id {id}"))?;
        Some(Box::new(recipe))
    };
    app.handle(Action::ToggleFavorite {
        id: id.to_owned(),
        snapshot,
    })
    .await
}

const SHELL_HELP: &str = "\
commands:
  search <text>                      search by name (enter submits)
  view search|favorites              switch views
  filter diet|cuisine <value>        toggle a chip (repeat to clear)
  filter time|meal|difficulty <v>    record an advanced filter
  clear                              clear all filters and reload
  sort relevance|time|calories|rating
  more                               reveal more results
  open <id> / close                  detail overlay
  fav <id>                           toggle a favorite
  retry                              retry the last failed request
  help / quit
";

/// Read-eval-render loop over stdin.
async fn shell(app: &mut App<MealDbProvider>) -> Result<()> {
    let mut out = tokio::io::stdout();
    app.start().await?;
    out.write_all(render::render(&app.view()).as_bytes())
        .await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        out.write_all(b"savora> ").await?;
        out.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_shell_line(line.trim()) {
            ShellInput::Empty => continue,
            ShellInput::Quit => break,
            ShellInput::Help => out.write_all(SHELL_HELP.as_bytes()).await?,
            ShellInput::Unknown(message) => {
                out.write_all(format!("{message}\n").as_bytes()).await?;
            }
            ShellInput::Act(action) => {
                app.handle(action).await?;
                out.write_all(render::render(&app.view()).as_bytes())
                    .await?;
                // Toasts are transient; showing one dismisses it.
                app.handle(Action::DismissToast).await?;
            }
        }
    }
    Ok(())
}

enum ShellInput {
    Empty,
    Quit,
    Help,
    Unknown(String),
    Act(Action),
}

fn parse_shell_line(line: &str) -> ShellInput {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => ShellInput::Empty,
        "quit" | "exit" => ShellInput::Quit,
        "help" => ShellInput::Help,
        "search" if !rest.is_empty() => ShellInput::Act(Action::SubmitSearch(rest.to_owned())),
        "view" => ShellInput::Act(Action::SwitchView(ViewKind::from_str_lossy(rest))),
        "filter" => parse_filter(rest),
        "clear" => ShellInput::Act(Action::ClearFilters),
        "sort" => match SortKey::parse(rest) {
            Some(key) => ShellInput::Act(Action::SetSort(key)),
            None => ShellInput::Unknown(format!("unknown sort key {rest:?} (try `help`)")),
        },
        "more" => ShellInput::Act(Action::LoadMore),
        "open" if !rest.is_empty() => ShellInput::Act(Action::OpenDetail(rest.to_owned())),
        "close" => ShellInput::Act(Action::CloseDetail),
        "fav" if !rest.is_empty() => ShellInput::Act(Action::ToggleFavorite {
            id: rest.to_owned(),
            snapshot: None,
        }),
        "retry" => ShellInput::Act(Action::Retry),
        _ => ShellInput::Unknown(format!("unknown command {line:?} (try `help`)")),
    }
}

fn parse_filter(rest: &str) -> ShellInput {
    let (group, value) = match rest.split_once(char::is_whitespace) {
        Some((group, value)) => (group, value.trim()),
        None => (rest, ""),
    };

    match group {
        "diet" if !value.is_empty() => ShellInput::Act(Action::ToggleDiet(value.to_owned())),
        "cuisine" if !value.is_empty() => ShellInput::Act(Action::ToggleCuisine(value.to_owned())),
        "time" => ShellInput::Act(Action::SetTimeFilter(optional(value))),
        "meal" => ShellInput::Act(Action::SetMealFilter(optional(value))),
        "difficulty" => ShellInput::Act(Action::SetDifficultyFilter(optional(value))),
        _ => ShellInput::Unknown(format!("unknown filter {rest:?} (try `help`)")),
    }
}

fn optional(value: &str) -> Option<String> {
    Some(value.to_owned()).filter(|v| !v.is_empty())
}
