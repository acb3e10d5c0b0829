//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Render themed blog pages from a flat directory of Markdown files", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the post with the given slug
    #[command(alias = "r")]
    Render {
        /// Slug from the post's front-matter
        #[arg(default_value = "")]
        slug: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a static page from the pages directory
    Page {
        /// Page slug (front-matter slug or file name)
        slug: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the post listing
    Index {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a new post or page
    New {
        /// Title of the new document
        title: String,

        /// Slug (defaults to the slugified title)
        #[arg(short, long)]
        slug: Option<String>,

        /// Create a page instead of a post
        #[arg(short, long)]
        page: bool,
    },

    /// List site content
    List {
        /// Type of content to list (post, page, menu)
        #[arg(default_value = "post")]
        r#type: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug { "folio=debug,info" } else { "folio=info" };

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
    let site = folio::Site::new(&base_dir)?;

    match cli.command {
        Commands::Render { slug, output } => {
            let html = commands::render::post(&site, &slug).await?;
            commands::render::write_output(&html, output.as_deref())?;
        }

        Commands::Page { slug, output } => {
            let html = commands::render::page(&site, &slug).await?;
            commands::render::write_output(&html, output.as_deref())?;
        }

        Commands::Index { output } => {
            let html = commands::render::index(&site).await?;
            commands::render::write_output(&html, output.as_deref())?;
        }

        Commands::New { title, slug, page } => {
            let path = commands::new::create(&site, &title, slug.as_deref(), page)?;
            println!("Created: {:?}", path);
        }

        Commands::List { r#type, json } => {
            commands::list::run(&site, &r#type, json)?;
        }
    }

    Ok(())
}
