//! CLI entry point for miniblog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "miniblog")]
#[command(version)]
#[command(about = "Slug generation and lazy-loading content rendering for blog posts", long_about = None)]
struct Cli {
    /// Set the blog directory (defaults to current directory)
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
    /// Print the slug for a title
    Slug {
        /// Title to convert
        title: String,

        /// Maximum slug length (defaults to the configured length)
        #[arg(short, long)]
        max_length: Option<usize>,
    },

    /// Render post content with lazy-loaded media
    Render {
        /// Post file to render (reads standard input when omitted)
        file: Option<PathBuf>,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },

    /// Show a post's links, visibility and rendered content
    Show {
        /// Post file
        file: PathBuf,

        /// Print the post as JSON
        #[arg(long)]
        json: bool,
    },

    /// List posts
    #[command(alias = "ls")]
    List {
        /// Include drafts and scheduled posts
        #[arg(short, long)]
        all: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "miniblog=debug,info"
    } else {
        "miniblog=info"
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
        Commands::Slug { title, max_length } => {
            let blog = miniblog::Miniblog::new(&base_dir)?;
            let max_length = max_length.unwrap_or(blog.config.slug_max_length);
            println!("{}", miniblog::create_slug(title.as_str(), max_length));
        }

        Commands::Render { file } => {
            miniblog::commands::render::run(file.as_deref())?;
        }

        Commands::New { title } => {
            let blog = miniblog::Miniblog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            miniblog::commands::new::run(&blog, &title)?;
        }

        Commands::Show { file, json } => {
            let blog = miniblog::Miniblog::new(&base_dir)?;
            let file = if file.is_absolute() {
                file
            } else {
                base_dir.join(file)
            };
            miniblog::commands::show::run(&blog, &file, json)?;
        }

        Commands::List { all } => {
            let blog = miniblog::Miniblog::new(&base_dir)?;
            miniblog::commands::list::run(&blog, all)?;
        }

        Commands::Version => {
            println!("miniblog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
