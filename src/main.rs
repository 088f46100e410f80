//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::commands::blog::BlogOptions;
use folio::prefs::ViewMode;
use folio::query::SortOrder;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Services showcase and blog listing for a portfolio site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new markdown post
    New {
        /// Title of the new post
        title: String,

        /// Category of the post (repeatable; the first is the primary one)
        #[arg(short, long = "category")]
        categories: Vec<String>,

        /// Short summary shown in listings
        #[arg(short, long)]
        excerpt: Option<String>,
    },

    /// List blog posts with filters, search, sorting and pagination
    #[command(alias = "b")]
    Blog {
        /// Only show posts in this category (repeatable)
        #[arg(short, long = "category")]
        categories: Vec<String>,

        /// Ignore the saved category selection and show every category
        #[arg(long, conflicts_with = "categories")]
        clear_categories: bool,

        /// Case-insensitive text to find in titles and excerpts
        #[arg(short, long)]
        search: Option<String>,

        /// Date order: newest or oldest
        #[arg(long)]
        sort: Option<SortOrder>,

        /// Page to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Posts per page (defaults to per_page from _config.yml)
        #[arg(long)]
        per_page: Option<usize>,

        /// Require every selected category instead of any of them
        #[arg(long)]
        all_categories: bool,

        /// Layout: grid or list
        #[arg(long)]
        view: Option<ViewMode>,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,

        /// Save these filters as the new defaults
        #[arg(long)]
        remember: bool,
    },

    /// List categories by number of posts
    Categories {
        /// Show at most this many categories
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// List the services showcase
    Services {
        /// Print the catalogue as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete saved preferences
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            folio::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New {
            title,
            categories,
            excerpt,
        } => {
            let site = folio::Folio::new(&base_dir)?;
            let path =
                folio::commands::new::create_post(&site, &title, &categories, excerpt.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::Blog {
            categories,
            clear_categories,
            search,
            sort,
            page,
            per_page,
            all_categories,
            view,
            json,
            remember,
        } => {
            let site = folio::Folio::new(&base_dir)?;
            let options = BlogOptions {
                categories,
                clear_categories,
                search,
                sort,
                page,
                per_page,
                match_all: all_categories,
                view,
                json,
                remember,
            };
            folio::commands::blog::run(&site, &options)?;
        }

        Commands::Categories { limit } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::categories::run(&site, limit)?;
        }

        Commands::Services { json } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::services::run(&site, json)?;
        }

        Commands::Clean => {
            let site = folio::Folio::new(&base_dir)?;
            site.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
