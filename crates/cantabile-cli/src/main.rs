use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use cantabile_core::HistoryFilter;
use cantabile_enhance::Config;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "cantabile", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the prompt history file (default: ~/.local/share/cantabile/history.json)
    #[arg(long, global = true)]
    history: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Assemble a music-generation prompt from a selection
    ///
    /// Builds a prompt for one of four modes:
    ///
    /// - full: tags, tempo, key, instruments, vocals, mood, duration, structure
    /// - instrumental: the same, without vocals
    /// - lyrics: a short prompt followed by a lyric skeleton for --theme
    /// - custom: full, plus technical, production and arrangement sentences
    ///
    /// Genres, moods, instruments, sections and effects are checked against
    /// the built-in catalogs (see `cantabile catalog`) unless --allow-custom
    /// is given. Use --template to start from a quick template's preset.
    ///
    /// With --enhance the prompt is sent through the configured providers
    /// (Gemini, then OpenRouter), falling back to local optimization.
    Generate(commands::generate::GenerateArgs),

    /// Apply the local prompt optimizer only (no network)
    Optimize {
        /// The prompt to optimize
        prompt: String,

        #[command(flatten)]
        options: commands::enhance::OptionArgs,
    },

    /// Enhance a prompt through the provider chain
    Enhance {
        /// The prompt to enhance
        prompt: String,

        #[command(flatten)]
        options: commands::enhance::OptionArgs,
    },

    /// Render a lyric sheet with a ready-made generation prompt
    Lyrics(commands::lyrics::LyricsArgs),

    /// Generate a song style description
    Style(commands::style::StyleArgs),

    /// Browse and use prompt templates
    Templates {
        #[command(subcommand)]
        action: TemplatesAction,
    },

    /// Manage saved prompts
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// List catalog values
    Catalog {
        #[arg(value_enum)]
        kind: commands::catalog::CatalogKind,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum TemplatesAction {
    /// List quick and category templates
    List {
        /// Only show category templates in this category
        #[arg(long)]
        category: Option<String>,

        /// Template file to use instead of the built-in library
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Show one template
    Show {
        id: String,

        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print a category template's prompts in both languages
    Use {
        id: String,

        /// Enhance both prompts through the provider chain
        #[arg(long)]
        enhance: bool,

        /// Use the advanced optimization level
        #[arg(long)]
        advanced: bool,

        /// Save the English prompt to history
        #[arg(long)]
        save: bool,

        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, clap::Subcommand)]
enum HistoryAction {
    /// List saved prompts, most recent first
    List {
        /// Match prompt text or genre (case-insensitive)
        #[arg(long)]
        search: Option<String>,

        /// all, favorites, english or indonesian
        #[arg(long, default_value = "all")]
        filter: HistoryFilter,

        /// Print matching records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle the favorite flag of a saved prompt
    Favorite { id: String },
    /// Delete a saved prompt
    Delete { id: String },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show current effective configuration
    Show,
    /// Show config file path
    Path,
    /// Show example configuration
    Example,
    /// Initialize config file with defaults
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.history {
        Some(path) => Config::load_with_history_path(path)?,
        None => Config::load()?,
    };

    twyg::setup(config.logging.clone())
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {e}"))?;
    log::debug!("History file: {}", config.history_path.display());

    match cli.command {
        Commands::Generate(args) => {
            commands::generate::run_generate(&config, args).await?;
        }
        Commands::Optimize { prompt, options } => {
            commands::enhance::run_optimize(&prompt, &options);
        }
        Commands::Enhance { prompt, options } => {
            commands::enhance::run_enhance(&config, &prompt, &options).await?;
        }
        Commands::Lyrics(args) => {
            commands::lyrics::run_lyrics(&args);
        }
        Commands::Style(args) => {
            commands::style::run_style(args)?;
        }
        Commands::Templates { action } => match action {
            TemplatesAction::List { category, file } => {
                commands::templates::list_templates(category.as_deref(), file.as_deref())?;
            }
            TemplatesAction::Show { id, file } => {
                commands::templates::show_template(&id, file.as_deref())?;
            }
            TemplatesAction::Use {
                id,
                enhance,
                advanced,
                save,
                file,
            } => {
                let opts = commands::templates::UseOptions {
                    enhance,
                    advanced,
                    save,
                };
                commands::templates::use_template(&config, &id, opts, file.as_deref()).await?;
            }
        },
        Commands::History { action } => match action {
            HistoryAction::List {
                search,
                filter,
                json,
            } => {
                commands::history::list_history(&config, search.as_deref(), filter, json)?;
            }
            HistoryAction::Favorite { id } => {
                commands::history::toggle_favorite(&config, &id)?;
            }
            HistoryAction::Delete { id } => {
                commands::history::delete_entry(&config, &id)?;
            }
        },
        Commands::Catalog { kind } => {
            commands::catalog::show_catalog(kind);
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config),
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Example => commands::config::show_example(),
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
